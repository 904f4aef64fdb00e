// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Entry point that runs the demonstration against the fixed default
//! location.
//!
//! The process consumes no command-line arguments. An I/O failure is
//! reported on stderr with the historical prefix and the process still
//! exits with code 0; from the operating system's point of view the run
//! always succeeds.

use random_access::{DemoConfig, run};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    if let Err(error) = run(&DemoConfig::new()) {
        eprintln!("Error de tipo IO: {error}");
    }
}
