// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site macros.
//!
//! The macros capture `file!()`, `line!()`, `column!()` and the enclosing function, then build a
//! [`LogStatement`](crate::LogStatement) on the global logger.  Each level macro has two forms:
//!
//! - With arguments, it logs one line holding every argument concatenated in order.  The
//!   arguments are only evaluated if the level is enabled.
//! - Without arguments, it returns the live statement for chaining or multi-line use.
//!
//! ```rust,standalone_crate
//! # use scopelog::{Config, Level, Logger, MemorySink};
//! # use std::sync::Arc;
//! # let memory = Arc::new(MemorySink::new());
//! # scopelog::install(Logger::new(Config::new(Level::Debug)).with_sink(memory.clone())).unwrap();
//! let attempts = 3;
//! scopelog::info!("connected after ", attempts, " attempts");
//! scopelog::error!().append("exit code ").append(2);
//! # let logs = memory.drain_lines();
//! # assert!(logs[0].ends_with("] connected after 3 attempts\n"));
//! # assert!(logs[1].ends_with("] exit code 2\n"));
//! ```

/// Expands to a [`CallSite`](crate::CallSite) for the macro's location, enclosing function
/// included.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!(), column!())
            .with_function($crate::function_type_name!())
    };
}

/**
Logs at the severity marker type given first.

```rust,standalone_crate
# use scopelog::{Config, Level, Logger, MemorySink};
# use std::sync::Arc;
# let memory = Arc::new(MemorySink::new());
# scopelog::install(Logger::new(Config::new(Level::Info)).with_sink(memory.clone())).unwrap();
scopelog::log!(scopelog::severity::Warning, "retrying in ", 5, "s");

// arguments of disabled levels are never evaluated
fn expensive_summary() -> String {
    panic!("not evaluated below the threshold")
}
scopelog::log!(scopelog::severity::Debug, expensive_summary());
# assert_eq!(memory.len(), 1);
```
*/
#[macro_export]
macro_rules! log {
    ($severity:ty) => {
        $crate::LogStatement::<$severity>::at($crate::call_site!())
    };
    ($severity:ty, $($value:expr),+ $(,)?) => {{
        let mut statement = $crate::LogStatement::<$severity>::at($crate::call_site!());
        if statement.is_active() {
            $( statement.append($value); )+
        }
    }};
}

/// Logs at [`Level::Debug`](crate::Level::Debug).  See [`log!`].
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::severity::Debug $(, $value)*)
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).  See [`log!`].
#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::severity::Info $(, $value)*)
    };
}

/// Logs at [`Level::Warning`](crate::Level::Warning).  See [`log!`].
#[macro_export]
macro_rules! warning {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::severity::Warning $(, $value)*)
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).  See [`log!`].
#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::severity::Error $(, $value)*)
    };
}

/// Returns whether the global logger emits the given [`Level`](crate::Level).
///
/// Useful to guard work that only feeds a log line.
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {
        $crate::global().enabled($level)
    };
}
