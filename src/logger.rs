// SPDX-License-Identifier: MIT OR Apache-2.0

//! The holder of configuration, routing and clock.
//!
//! A [`Logger`] answers the three questions a [`LogStatement`] asks when it is built: is my level
//! enabled, where do I write, and what time is it.  Most programs use the process-wide logger
//! from [`global_logger`](crate::global_logger); tests and embedders build their own.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::file_sink::FileSink;
use crate::location::CallSite;
use crate::sink::Sink;
use crate::statement::LogStatement;
use crate::{Level, Severity};
use std::sync::Arc;

/**
Configuration plus a per-level routing table of sinks.

# Routing

By default every level goes to one shared [FileSink] at [Config::log_file_name].  Use
[Logger::with_sink] to send every level somewhere else, and [Logger::route] to override single
levels:

```rust
use scopelog::{Config, ConsoleSink, Level, Logger, MemorySink};
use std::sync::Arc;

let memory = Arc::new(MemorySink::new());
let logger = Logger::new(Config::new(Level::Debug))
    .with_sink(memory.clone())
    .route(Level::Error, Arc::new(ConsoleSink::new()));
```
*/
#[derive(Debug, Clone)]
pub struct Logger {
    config: Config,
    routes: [Arc<dyn Sink>; 4],
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// A logger writing every level to a lazily opened [FileSink] named after the threshold.
    pub fn new(config: Config) -> Self {
        let file: Arc<dyn Sink> = Arc::new(FileSink::new(config.log_file_name()));
        Self {
            config,
            routes: [file.clone(), file.clone(), file.clone(), file],
            clock: Arc::new(SystemClock),
        }
    }

    /// Sends every level to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.routes = [sink.clone(), sink.clone(), sink.clone(), sink];
        self
    }

    /// Sends `level` to `sink`, leaving other levels alone.
    pub fn route(mut self, level: Level, sink: Arc<dyn Sink>) -> Self {
        self.routes[level.index()] = sink;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    /// The sink lines at `level` are written to.
    pub fn resolve_sink(&self, level: Level) -> &dyn Sink {
        &*self.routes[level.index()]
    }

    /// Whether statements at `level` are emitted.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.config.enables(level)
    }

    /**
    Begins a statement at severity `S`, located at the caller.

    ```rust
    use scopelog::{Config, Level, Logger, MemorySink, severity};
    use std::sync::Arc;

    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new(Config::new(Level::Info)).with_sink(sink.clone());
    logger.statement::<severity::Debug>().append("dropped");
    logger.statement::<severity::Error>().append("kept");
    assert_eq!(sink.len(), 1);
    ```
    */
    #[track_caller]
    pub fn statement<S: Severity>(&self) -> LogStatement<'_, S> {
        LogStatement::begin(self, None, CallSite::caller())
    }

    /// Begins a statement at severity `S` that writes to `sink` instead of the routed sink.
    #[track_caller]
    pub fn statement_to<'a, S: Severity>(&'a self, sink: &'a dyn Sink) -> LogStatement<'a, S> {
        LogStatement::begin(self, Some(sink), CallSite::caller())
    }

    /// Flushes every routed sink.
    pub fn flush(&self) {
        for (index, sink) in self.routes.iter().enumerate() {
            // shared sinks are flushed once
            let seen = self.routes[..index].iter().any(|s| Arc::ptr_eq(s, sink));
            if !seen {
                sink.flush();
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::BUILD)
    }
}

/*
Boilerplate notes.

Clone is cheap, the routes and clock are shared.
PartialEq makes no sense for a bundle of trait objects.
Default is the build configuration writing to its file.
*/
