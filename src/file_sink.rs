// SPDX-License-Identifier: MIT OR Apache-2.0

//! A sink backed by a lazily opened file.
//!
//! The file is created (or truncated) by the first line written, not when the sink is built, so a
//! configuration that never logs at an active level never leaves an empty file behind.  The open
//! happens exactly once; every later line reuses the handle until the process exits.
//!
//! If the file cannot be opened the sink is *degraded*: lines are dropped silently and
//! [`FileSink::is_degraded`] reports it.  Nothing is ever returned to the logging call site.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

/// A sink appending lines to one file.
///
/// # Example
///
/// ```no_run
/// use scopelog::{Config, Level, Logger, FileSink, severity};
/// use std::sync::Arc;
///
/// let logger = Logger::new(Config::new(Level::Info))
///     .with_sink(Arc::new(FileSink::new("service.log")));
/// logger.statement::<severity::Warning>().append("disk at ").append(91).append('%');
/// ```
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: OnceLock<Option<Mutex<LineWriter<File>>>>,
    opens: AtomicUsize,
}

impl FileSink {
    /// Creates a sink for `path`.  The file is not touched until the first line arrives.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: OnceLock::new(),
            opens: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is open.
    pub fn is_open(&self) -> bool {
        matches!(self.file.get(), Some(Some(_)))
    }

    /// Whether opening the file failed.  A degraded sink drops every line.
    pub fn is_degraded(&self) -> bool {
        matches!(self.file.get(), Some(None))
    }

    /// Number of times the file has been opened.  At most one.
    pub(crate) fn open_count(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }

    fn writer(&self) -> Option<&Mutex<LineWriter<File>>> {
        self.file
            .get_or_init(|| {
                self.opens.fetch_add(1, Ordering::Relaxed);
                File::create(&self.path)
                    .ok()
                    .map(|file| Mutex::new(LineWriter::new(file)))
            })
            .as_ref()
    }
}

impl Sink for FileSink {
    fn finish_log_record(&self, record: LogRecord) {
        let Some(writer) = self.writer() else {
            return;
        };
        // a writer that panicked mid-line leaves nothing worse than a torn line
        let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(record.as_str().as_bytes());
    }

    fn flush(&self) {
        if let Some(Some(writer)) = self.file.get() {
            let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writer.flush();
        }
    }
}
