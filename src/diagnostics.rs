// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Diagnostic log file
//!
//! All logging goes through the [`log`] facade and is a no-op unless a logger
//! is installed. [`DiagnosticLog`] is a minimal logger which appends one
//! plain-text line per record to a file. Failure to open or write the file is
//! ignored.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Appends log records to a file
#[derive(Debug)]
pub struct DiagnosticLog {
    path: PathBuf,
    level: LevelFilter,
    // Serializes appends from multiple threads
    lock: Mutex<()>,
}

impl DiagnosticLog {
    /// Construct for the file at `path`, recording up to `level`
    ///
    /// The file is opened (and created if missing) for each record.
    pub fn new(path: impl Into<PathBuf>, level: LevelFilter) -> Self {
        DiagnosticLog {
            path: path.into(),
            level,
            lock: Mutex::new(()),
        }
    }

    /// The log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|err| err.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl Log for DiagnosticLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{} {}: {}", record.level(), record.target(), record.args());
        let _ = self.append(&line);
    }

    fn flush(&self) {}
}

/// Install a [`DiagnosticLog`] as the process-wide logger
///
/// Fails if a logger is already installed.
pub fn init(path: impl Into<PathBuf>, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(DiagnosticLog::new(path, level)))?;
    log::set_max_level(level);
    Ok(())
}
