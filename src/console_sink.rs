// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;

/**
A sink that writes to stderr, or to the browser console on wasm.

Useful as a per-level route, e.g. errors to the console and everything else to a file.
 */
#[derive(Debug, Clone)]
pub struct ConsoleSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy/PartialEq/Eq/Hash: all instances write to the same console
// - Default: convenient zero-argument constructor
// - Display: no meaningful string representation

impl Copy for ConsoleSink {}

impl PartialEq for ConsoleSink {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ConsoleSink {}

impl std::hash::Hash for ConsoleSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    pub const fn new() -> Self {
        Self {}
    }
}

/// The browser console adds its own line break, so the record's is dropped.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn console_message(record: LogRecord) -> String {
    let mut msg = record.into_string();
    if msg.ends_with('\n') {
        msg.pop();
    }
    msg
}

impl Sink for ConsoleSink {
    fn finish_log_record(&self, record: LogRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            // stderr's lock keeps the line whole
            let mut lock = std::io::stderr().lock();
            let _ = lock.write_all(record.as_str().as_bytes());
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Level;
            let level = record.level();
            let msg = wasm_bindgen::JsValue::from(console_message(record));
            match level {
                Level::Debug => web_sys::console::debug_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Warning => web_sys::console::warn_1(&msg),
                Level::Error => web_sys::console::error_1(&msg),
            }
        }
    }

    fn flush(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = std::io::stderr().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn writes_without_panicking() {
        let sink = ConsoleSink::default();
        let mut record = LogRecord::new(Level::Error);
        record.log("console sink test");
        record.end_line();
        sink.finish_log_record(record);
        sink.flush();
        assert_eq!(sink, ConsoleSink::new());
    }

    #[test]
    fn console_message_drops_one_line_break() {
        let mut record = LogRecord::new(Level::Warning);
        record.log("[00:00:00.000][Warning][app.rs:1] low disk");
        record.end_line();
        assert_eq!(console_message(record), "[00:00:00.000][Warning][app.rs:1] low disk");

        let mut unterminated = LogRecord::new(Level::Info);
        unterminated.log("partial");
        assert_eq!(console_message(unterminated), "partial");
    }
}
