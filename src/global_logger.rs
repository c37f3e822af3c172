// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide logger.
//!
//! The logging macros and [`LogStatement::new`](crate::LogStatement::new) write through one global
//! [`Logger`].  It is initialised exactly once, in one of two ways:
//!
//! - **Explicitly**, by calling [`install`] early in `main` (or at the top of a test binary).
//! - **Lazily**, by the first log statement, with [`Config::BUILD`] and a [`FileSink`] named after
//!   the build threshold.  The file itself is only created by the first emitted line.
//!
//! After initialisation the logger never changes; there is no runtime reconfiguration.
//!
//! # Examples
//!
//! ## Installing a logger
//!
//! ```rust,standalone_crate
//! use scopelog::{Config, Level, Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemorySink::new());
//! let logger = Logger::new(Config::new(Level::Info)).with_sink(memory.clone());
//! scopelog::install(logger).expect("no statement has run yet");
//!
//! scopelog::warning!("low disk: ", 12, "%");
//! assert!(memory.drain_logs().ends_with("] low disk: 12%\n"));
//! ```
//!
//! ## Installing too late
//!
//! ```rust,standalone_crate
//! use scopelog::{Config, Level, Logger};
//!
//! scopelog::install(Logger::new(Config::new(Level::Error))).unwrap();
//! let rejected = scopelog::install(Logger::new(Config::new(Level::Debug)));
//! assert!(rejected.is_err());
//! assert_eq!(scopelog::global().config().threshold(), Level::Error);
//! ```
//!
//! [`Config::BUILD`]: crate::Config::BUILD
//! [`FileSink`]: crate::FileSink

use crate::logger::Logger;
use std::sync::OnceLock;

/// Static storage for the global logger.
///
/// `OnceLock` gives the once-only initialisation; after that reads are a single atomic load.
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, initialising it from the build configuration if needed.
///
/// This function is thread-safe and can be called from any thread.
pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default)
}

/// Sets the global logger.
///
/// Fails, handing `logger` back, if the global logger was already installed or lazily created
/// by an earlier log statement.
pub fn install(logger: Logger) -> Result<(), Logger> {
    GLOBAL_LOGGER.set(logger)
}

/// Whether the global logger has been initialised.
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Flushes the global logger's sinks.  Call before the application exits.
///
/// Does nothing, and creates nothing, if no statement has run and nothing was installed.
pub fn flush() {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.flush();
    }
}
