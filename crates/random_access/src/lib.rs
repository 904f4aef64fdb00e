// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Random (non-sequential) file access in one linear pass.
//!
//! This crate demonstrates positioned I/O: it prepares a directory and a
//! file with known initial content, reopens the file for simultaneous
//! reading and writing, and performs a fixed sequence of seeks, reads, and
//! writes at the beginning, middle, and end of the file.
//!
//! # Quick start
//!
//! ```no_run
//! use random_access::{DemoConfig, run};
//!
//! fn main() -> std::io::Result<()> {
//!     // Uses the fixed relative location; point the config elsewhere to
//!     // run against a scratch directory.
//!     run(&DemoConfig::new())
//! }
//! ```
//!
//! # What one pass does
//!
//! With the file open read-write (never truncated), the pass captures the
//! leading 12 bytes, stamps `¡Estoy aquí!\n` over the start, then seeks to
//! one byte before the current end and writes the captured bytes followed
//! by the greeting again. Each pass grows the file by 26 bytes.
//!
//! Setup is existence-checked only, so the initial content is written at
//! most once. Repeated runs therefore compound: every pass captures
//! whatever currently leads the file (after the first pass, the start of
//! the greeting) and extends the evolving pattern near the end.

pub use crate::access::splice;
pub use crate::config::{DEFAULT_DIR, DEFAULT_FILE_NAME, DemoConfig, GREETING, INITIAL_CONTENT, LEAD_LEN};
pub use crate::setup::{ensure_directory, ensure_file};

mod access;
mod config;
mod setup;

/// Runs the whole demonstration: setup, then the positioned I/O pass.
///
/// Ensures the configured directory and file exist (creating the file with
/// [`INITIAL_CONTENT`] only when absent), then [`splice`]s the file. The
/// first failure at any step propagates to the caller; completed writes are
/// not rolled back.
///
/// # Errors
///
/// Returns an error if directory or file creation fails, if the file
/// cannot be opened read-write, or if any positioned operation fails.
pub fn run(config: &DemoConfig) -> std::io::Result<()> {
    ensure_directory(config.directory_path())?;
    let target = config.file_path();
    ensure_file(&target, INITIAL_CONTENT)?;
    splice(&target)
}
