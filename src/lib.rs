//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# scopelog

scopelog is a minimal leveled logger built around one idea: a log line is a value that lives for
one scope.

```rust,standalone_crate
# use scopelog::{Config, Level, Logger, MemorySink};
# use std::sync::Arc;
# let memory = Arc::new(MemorySink::new());
# scopelog::install(Logger::new(Config::new(Level::Debug)).with_sink(memory.clone())).unwrap();
let user = "alice";
scopelog::info!("login from ", user);
# assert!(memory.drain_logs().ends_with("] login from alice\n"));
```

writes

```text
[14:03:27.512][Info][main.rs:12] login from alice
```

# The log statement

A [LogStatement] is created at the call site.  When it is built it compares its severity with the
threshold, once:

* If the level is enabled, it renders the prefix (time, level, file:line and optionally the
  enclosing function) and collects everything appended to it.  When it is dropped it ends the
  line and writes it to its sink in one piece.
* If the level is disabled, it binds to a discard sink.  No time is read, nothing is formatted,
  and with the macros the arguments are not even evaluated.

Levels are ordered `Debug < Info < Warning < Error`; a statement is emitted when its level is at
or above the threshold.

# Configuration

Configuration is fixed at build time; see [config].  The threshold comes from the `threshold-*`
cargo features (default: `Debug` in debug builds, `Info` in release builds), and the
`function-signatures` feature adds the enclosing function to the prefix.

# Sinks

Lines go to a [Sink].  By default every level goes to a [FileSink] named after the threshold
(e.g. `Debug.log`), created by the first emitted line.  [ConsoleSink], [MemorySink] and
[ChannelSink] are provided, and a [Logger] can route each level to a different sink.

Logging never fails from the caller's point of view: a sink that cannot write drops the line.

# Multithreading

Statements are independent; each assembles its line privately.  The provided sinks serialise
whole lines, and [ChannelSink] moves writing onto a dedicated thread.
*/

mod level;
pub mod config;
mod clock;
mod location;
mod log_record;
mod sink;
mod console_sink;
mod memory_sink;
mod file_sink;
mod channel_sink;
mod logger;
pub mod global_logger;
mod statement;
mod macros;
mod sys;
mod spinlock;

pub use level::{Level, Severity, severity};
pub use config::Config;
pub use clock::{Clock, SystemClock, TimeOfDay};
pub use location::{CallSite, trim_file_name};
pub use log_record::LogRecord;
pub use sink::{DiscardSink, Sink};
pub use console_sink::ConsoleSink;
pub use memory_sink::MemorySink;
pub use file_sink::FileSink;
pub use channel_sink::ChannelSink;
pub use logger::Logger;
pub use global_logger::{flush, global, install, is_initialized};
pub use statement::LogStatement;

#[doc(hidden)]
pub mod hidden {
    pub use crate::location::enclosing_function;
}

pub use sys::Duration;
