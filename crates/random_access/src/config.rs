// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::{Path, PathBuf};

/// Directory the demo creates relative to the working directory.
pub const DEFAULT_DIR: &str = "carpetaAccesoAleatorio";

/// Name of the target file inside the demo directory.
pub const DEFAULT_FILE_NAME: &str = "archivoAccAleatorio.txt";

/// Content a freshly created target file starts with (pure ASCII, no
/// trailing newline).
pub const INITIAL_CONTENT: &str = "ARCHIVO INICIAL EN MAYUSCULAS A MODO DE EJEMPLO";

/// Text stamped over the start of the file and echoed near its end.
///
/// Contains a non-ASCII character, so its UTF-8 byte length (15) differs
/// from its character count (13). All offsets in this crate are byte-based.
pub const GREETING: &str = "¡Estoy aquí!\n";

/// Number of leading bytes captured before the prefix is overwritten.
pub const LEAD_LEN: usize = 12;

/// Where the demo reads and writes.
///
/// The defaults are the fixed relative location the demo has always used.
/// Passing an explicit configuration lets callers (and tests) point the
/// whole sequence at a scratch directory instead.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    directory: PathBuf,
    file_name: PathBuf,
}

impl DemoConfig {
    /// Creates a configuration using the default directory and file name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIR),
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }

    /// Sets the directory that will contain the target file.
    pub fn directory(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.directory = path.into();
        self
    }

    /// Sets the target file's name within the directory.
    pub fn file_name(&mut self, name: impl Into<PathBuf>) -> &mut Self {
        self.file_name = name.into();
        self
    }

    /// Returns the directory the target file lives in.
    #[must_use]
    pub fn directory_path(&self) -> &Path {
        &self.directory
    }

    /// Returns the full path of the target file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}
