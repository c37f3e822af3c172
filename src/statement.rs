// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The log statement: one value per emitted (or suppressed) line.

A [LogStatement] decides once, when it is built, whether its severity passes the threshold.

* **Active**: the prefix is rendered into a private [LogRecord], every [LogStatement::append]
  adds to it, and dropping the statement terminates the line and hands it to the sink.
* **Inactive**: the statement binds to a discard sink and holds no record.  The clock is never
  read, nothing is formatted, and appends do nothing.

Because finishing happens in `Drop`, the line is written on every exit from the enclosing scope,
including early returns and unwinding.
*/

use crate::clock::TimeOfDay;
use crate::global_logger::global;
use crate::location::CallSite;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use crate::sink::{DISCARD, Sink};
use crate::Severity;
use std::fmt::{Display, Write};
use std::marker::PhantomData;

/**
A scope-bound log line at severity `S`.

# Chaining

```rust
use scopelog::{Config, Level, Logger, MemorySink, severity};
use std::sync::Arc;

let sink = Arc::new(MemorySink::new());
let logger = Logger::new(Config::new(Level::Debug)).with_sink(sink.clone());

logger.statement::<severity::Info>().append("a").append(42).append("b");
assert!(sink.drain_logs().ends_with("] a42b\n"));
```

# Multi-line use

Held in a variable, a statement stays open until the end of its scope:

```rust
# use scopelog::{Config, Level, Logger, MemorySink, severity};
# use std::sync::Arc;
# let sink = Arc::new(MemorySink::new());
# let logger = Logger::new(Config::new(Level::Debug)).with_sink(sink.clone());
{
    let mut line = logger.statement::<severity::Debug>();
    for value in [1, 2, 3] {
        line.append(value).append(' ');
    }
}
assert_eq!(sink.drain_lines().len(), 1);
```
*/
#[must_use = "a log statement writes its line when dropped; binding it to `_` drops it at once"]
pub struct LogStatement<'a, S: Severity> {
    record: Option<LogRecord>,
    target: &'a dyn Sink,
    severity: PhantomData<S>,
}

impl<S: Severity> LogStatement<'static, S> {
    /**
    Begins a statement on the global logger, located at the caller.

    ```no_run
    use scopelog::{LogStatement, severity};
    LogStatement::<severity::Debug>::new().append("starting");
    ```
    */
    #[track_caller]
    pub fn new() -> Self {
        Self::at(CallSite::caller())
    }

    /// Begins a statement on the global logger with an explicit call site.  Used by the macros.
    pub fn at(call_site: CallSite) -> Self {
        Self::begin(global(), None, call_site)
    }
}

impl<'a, S: Severity> LogStatement<'a, S> {
    pub(crate) fn begin(
        logger: &'a Logger,
        sink: Option<&'a dyn Sink>,
        call_site: CallSite,
    ) -> Self {
        if !logger.enabled(S::LEVEL) {
            return Self {
                record: None,
                target: &DISCARD,
                severity: PhantomData,
            };
        }
        let config = logger.config();
        let time = TimeOfDay::from_since_epoch(
            logger.clock().since_epoch(),
            config.timezone_adjustment_hours(),
        );
        let function = if config.include_function_signature() {
            call_site.function
        } else {
            None
        };
        let mut record = LogRecord::new(S::LEVEL);
        record.log_prefix(time, &call_site, function);
        Self {
            record: Some(record),
            target: sink.unwrap_or_else(|| logger.resolve_sink(S::LEVEL)),
            severity: PhantomData,
        }
    }

    /// Whether this statement will write a line.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.record.is_some()
    }

    /**
    Appends the textual form of `value`, with no separator.
    */
    #[inline]
    pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
        if let Some(record) = &mut self.record {
            record.log_display(&value);
        }
        self
    }
}

impl<S: Severity> Default for LogStatement<'static, S> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Severity> Write for LogStatement<'_, S> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        if let Some(record) = &mut self.record {
            record.log(s);
        }
        Ok(())
    }
}

impl<S: Severity> std::fmt::Debug for LogStatement<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStatement")
            .field("level", &S::LEVEL)
            .field("record", &self.record)
            .field("target", &self.target)
            .finish()
    }
}

impl<S: Severity> Drop for LogStatement<'_, S> {
    fn drop(&mut self) {
        if let Some(mut record) = self.record.take() {
            record.end_line();
            self.target.finish_log_record(record);
        }
    }
}

/*
Boilerplate notes.

Clone would let one statement write two lines, so no.
PartialEq/Hash make no sense for an in-flight line.
Default begins a statement on the global logger, same as new.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use crate::config::Config;
    use crate::memory_sink::MemorySink;
    use crate::severity;
    use crate::sys::Duration;
    use crate::Level;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingClock {
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn since_epoch(&self) -> Duration {
            self.reads.fetch_add(1, Ordering::Relaxed);
            Duration::from_millis(90_061_123)
        }
    }

    fn memory_logger(threshold: Level) -> (Logger, Arc<MemorySink>, Arc<CountingClock>) {
        let sink = Arc::new(MemorySink::new());
        let clock = Arc::new(CountingClock::default());
        let logger = Logger::new(Config::new(threshold))
            .with_sink(sink.clone())
            .with_clock(clock.clone());
        (logger, sink, clock)
    }

    #[test]
    fn renders_prefix_and_content() {
        let (logger, sink, _) = memory_logger(Level::Debug);
        let line = line!() + 1;
        logger.statement::<severity::Warning>().append("disk ").append(91).append('%');
        assert_eq!(
            sink.drain_logs(),
            format!("[01:01:01.123][Warning][statement.rs:{line}] disk 91%\n")
        );
    }

    #[test]
    fn appends_concatenate_without_separators() {
        let (logger, sink, _) = memory_logger(Level::Debug);
        logger.statement::<severity::Info>().append("a").append(42).append("b");
        assert!(sink.drain_logs().ends_with("] a42b\n"));
    }

    #[test]
    fn one_newline_regardless_of_append_count() {
        let (logger, sink, _) = memory_logger(Level::Debug);
        drop(logger.statement::<severity::Info>());
        logger.statement::<severity::Info>().append("one");
        {
            let mut many = logger.statement::<severity::Info>();
            for i in 0..20 {
                many.append(i);
            }
        }
        let lines = sink.drain_lines();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.matches('\n').count(), 1, "{line:?}");
            assert!(line.ends_with('\n'));
        }
    }

    #[test]
    fn empty_statement_is_prefix_and_newline() {
        let (logger, sink, _) = memory_logger(Level::Debug);
        drop(logger.statement::<severity::Error>());
        let logs = sink.drain_logs();
        assert!(logs.starts_with("[01:01:01.123][Error][statement.rs:"));
        assert!(logs.ends_with("] \n"));
    }

    #[test]
    fn below_threshold_writes_nothing_and_skips_the_clock() {
        let (logger, sink, clock) = memory_logger(Level::Warning);
        let mut debug = logger.statement::<severity::Debug>();
        assert!(!debug.is_active());
        debug.append("expensive").append(1234);
        drop(debug);
        logger.statement::<severity::Info>().append("also dropped");

        assert!(sink.is_empty());
        assert_eq!(clock.reads.load(Ordering::Relaxed), 0);

        logger.statement::<severity::Warning>().append("kept");
        assert_eq!(sink.len(), 1);
        assert_eq!(clock.reads.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn threshold_is_inclusive() {
        let (logger, sink, _) = memory_logger(Level::Info);
        assert!(!logger.statement::<severity::Debug>().is_active());
        assert!(logger.statement::<severity::Info>().is_active());
        assert!(logger.statement::<severity::Warning>().is_active());
        assert!(logger.statement::<severity::Error>().is_active());
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn explicit_sink_overrides_routing() {
        let (logger, routed, _) = memory_logger(Level::Debug);
        let other = MemorySink::new();
        logger.statement_to::<severity::Info>(&other).append("elsewhere");
        assert!(routed.is_empty());
        assert!(other.drain_logs().ends_with("elsewhere\n"));
    }

    #[test]
    fn function_column_follows_config() {
        let sink = Arc::new(MemorySink::new());
        let clock = Arc::new(CountingClock::default());
        let config = Config::new(Level::Debug).with_function_signature(true);
        let logger = Logger::new(config).with_sink(sink.clone()).with_clock(clock);
        let site = CallSite::new("src/app.rs", 9, 1).with_function("app::serve");

        drop(LogStatement::<severity::Info>::begin(&logger, None, site));
        drop(logger.statement::<severity::Info>());

        let lines = sink.drain_lines();
        assert_eq!(lines[0], "[01:01:01.123][Info][app.rs:9][app::serve] \n");
        // no function known at a plain call site
        assert_eq!(lines[1].matches('[').count(), 3, "{}", lines[1]);
        assert!(lines[1].ends_with("] \n"));
    }

    #[test]
    fn timezone_adjustment_shifts_hours() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(Config::new(Level::Debug).with_timezone_adjustment_hours(5))
            .with_sink(sink.clone())
            .with_clock(Arc::new(CountingClock::default()));
        drop(logger.statement::<severity::Info>());
        assert!(sink.drain_logs().starts_with("[06:01:01.123]"));
    }

    #[test]
    fn garbage_timezone_adjustment_still_logs() {
        let sink = Arc::new(MemorySink::new());
        let config = Config::new(Level::Debug).with_timezone_adjustment_hours(i64::MAX);
        let logger = Logger::new(config)
            .with_sink(sink.clone())
            .with_clock(Arc::new(CountingClock::default()));
        logger.statement::<severity::Error>().append("still here");
        let logs = sink.drain_logs();
        assert!(logs.starts_with(&format!("[{}:01:01.123]", i64::MIN)), "{logs:?}");
        assert!(logs.ends_with("] still here\n"));
    }

    #[test]
    fn function_type_name_is_trimmed_when_rendered() {
        let sink = Arc::new(MemorySink::new());
        let config = Config::new(Level::Debug).with_function_signature(true);
        let logger = Logger::new(config)
            .with_sink(sink.clone())
            .with_clock(Arc::new(CountingClock::default()));
        let site = CallSite::new("src/app.rs", 9, 1).with_function("app::serve::{{closure}}::__f");
        drop(LogStatement::<severity::Info>::begin(&logger, None, site));
        assert_eq!(sink.drain_logs(), "[01:01:01.123][Info][app.rs:9][app::serve] \n");
    }

    #[test]
    fn write_macro_appends() {
        let (logger, sink, _) = memory_logger(Level::Debug);
        {
            let mut line = logger.statement::<severity::Info>();
            let _ = write!(line, "x = {}, y = {:.1}", 3, 0.5);
        }
        assert!(sink.drain_logs().ends_with("] x = 3, y = 0.5\n"));
    }

    #[test]
    fn line_is_written_when_unwinding() {
        let (logger, sink, _) = memory_logger(Level::Debug);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut line = logger.statement::<severity::Error>();
            line.append("before panic");
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(sink.drain_logs().ends_with("before panic\n"));
    }
}
