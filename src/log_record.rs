// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the scopelog logging system.
//!
//! A [`LogRecord`] accumulates the text of one line while a [`LogStatement`](crate::LogStatement)
//! is alive.  The whole line, prefix and terminator included, is handed to a
//! [`Sink`](crate::Sink) in a single call, so sinks shared between threads never see two lines
//! interleaved.
//!
//! # Example
//!
//! ```rust
//! use scopelog::{Level, LogRecord};
//!
//! let mut record = LogRecord::new(Level::Info);
//! record.log("Processing request ");
//! record.log_display(&42);
//! record.end_line();
//! assert_eq!(record.as_str(), "Processing request 42\n");
//! ```

use crate::clock::TimeOfDay;
use crate::location::{CallSite, enclosing_function, trim_file_name};
use crate::Level;
use std::fmt::{Display, Write};

/**
The text of one log line.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    text: String,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            text: String::new(),
            level,
        }
    }

    /**
    Append the message to the record.
    */
    #[inline]
    pub fn log(&mut self, message: &str) {
        self.text.push_str(message);
    }

    /**
    Append the textual representation of `value`.
    */
    #[inline]
    pub fn log_display<T: Display + ?Sized>(&mut self, value: &T) {
        // writing into a String cannot fail
        let _ = write!(self.text, "{}", value);
    }

    /**
    Write the line prefix:

    ```text
    [HH:MM:SS.mmm][Level][file.rs:LINE][function]
    ```

    The function column is written only when `function` is given.  A `type_name` captured by
    the macros is trimmed to the function path here.
    */
    pub fn log_prefix(&mut self, time: TimeOfDay, call_site: &CallSite, function: Option<&str>) {
        let _ = write!(
            self.text,
            "[{}][{}][{}:{}]",
            time,
            self.level,
            trim_file_name(call_site.file),
            call_site.line
        );
        if let Some(function) = function {
            let _ = write!(self.text, "[{}]", enclosing_function(function));
        }
        self.text.push(' ');
    }

    /// Terminate the line.
    pub fn end_line(&mut self) {
        self.text.push('\n');
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Write for LogRecord {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.log(s);
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

- Clone/PartialEq/Eq/Hash: derived, records are plain text plus a level
- Default: not implemented, there is no sensible default level for a line
- Copy: owns a String
- Ord: no meaningful ordering for log lines
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::Duration;

    #[test]
    fn prefix_without_function() {
        let mut record = LogRecord::new(Level::Warning);
        let time = TimeOfDay::from_since_epoch(Duration::from_millis(90_061_123), 0);
        let site = CallSite::new("/src/app/main.rs", 17, 5);
        record.log_prefix(time, &site, None);
        assert_eq!(record.as_str(), "[01:01:01.123][Warning][main.rs:17] ");
    }

    #[test]
    fn prefix_with_function() {
        let mut record = LogRecord::new(Level::Debug);
        let time = TimeOfDay::from_since_epoch(Duration::ZERO, 0);
        let site = CallSite::new("lib.rs", 3, 1).with_function("app::run");
        record.log_prefix(time, &site, site.function);
        record.log("hi");
        record.end_line();
        assert_eq!(record.to_string(), "[00:00:00.000][Debug][lib.rs:3][app::run] hi\n");
    }

    #[test]
    fn prefix_trims_captured_type_name() {
        let mut record = LogRecord::new(Level::Info);
        let time = TimeOfDay::from_since_epoch(Duration::ZERO, 0);
        let site = CallSite::new("lib.rs", 3, 1);
        record.log_prefix(time, &site, Some("app::run::{{closure}}::__f"));
        assert_eq!(record.as_str(), "[00:00:00.000][Info][lib.rs:3][app::run] ");
    }

    #[test]
    fn display_values_concatenate() {
        let mut record = LogRecord::new(Level::Info);
        record.log_display("a");
        record.log_display(&42);
        record.log_display(&'b');
        assert_eq!(record.into_string(), "a42b");
    }
}
