// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps finished lines in memory instead of writing them anywhere, for:
//!
//! - Unit testing code that logs
//! - Capturing logs where no file system is available (e.g. WASM in browsers)
//! - Programmatically examining log output
//!
//! The buffer is guarded by the crate's spinlock rather than a `Mutex`, so the sink can be used
//! from a wasm main thread where blocking is not allowed.  The lock is held only to push or take
//! the buffer.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use crate::spinlock::Spinlock;

/// A sink that stores finished lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use scopelog::{Config, Level, Logger, MemorySink, severity};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(Config::new(Level::Debug)).with_sink(sink.clone());
///
/// logger.statement::<severity::Info>().append("Test message ").append(42);
///
/// let logs = sink.drain_logs();
/// assert!(logs.ends_with("] Test message 42\n"));
/// ```
#[derive(Debug)]
pub struct MemorySink {
    lines: Spinlock<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Default: empty buffer
// - Clone: NOT implemented, two handles to one buffer is what Arc is for
// - PartialEq/Eq/Hash: NOT implemented, comparing live buffers is racy

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Spinlock::new(Vec::new()),
        }
    }

    /// Takes every stored line, concatenated exactly as a file sink would have written them.
    pub fn drain_logs(&self) -> String {
        self.drain_lines().concat()
    }

    /// Takes every stored line.  Each line keeps its trailing newline.
    pub fn drain_lines(&self) -> Vec<String> {
        self.lines.with_mut(std::mem::take)
    }

    /// Number of lines currently stored.
    pub fn len(&self) -> usize {
        self.lines.with(|lines| lines.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn finish_log_record(&self, record: LogRecord) {
        let line = record.into_string();
        self.lines.with_mut(|lines| lines.push(line));
    }

    fn flush(&self) {
        // nothing to flush, lines are already in memory
    }
}
