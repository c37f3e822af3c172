// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-time logging configuration.
//!
//! The values here are fixed when the crate is compiled.  The threshold is selected by the
//! `threshold-*` cargo features, falling back to `Debug` in debug builds and `Info` in release
//! builds.  The `function-signatures` feature adds the enclosing function to each line.
//!
//! ```toml
//! [dependencies]
//! scopelog = { version = "0.1", features = ["threshold-warning"] }
//! ```
//!
//! Loggers built by hand (usually in tests) may use any [Config]; see [crate::Logger::new].

use crate::Level;

const BUILD_THRESHOLD: Level = if cfg!(feature = "threshold-error") {
    Level::Error
} else if cfg!(feature = "threshold-warning") {
    Level::Warning
} else if cfg!(feature = "threshold-info") {
    Level::Info
} else if cfg!(feature = "threshold-debug") {
    Level::Debug
} else if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

/**
Read-only logging parameters.

# Example

```rust
use scopelog::{Config, Level};

const CONFIG: Config = Config::new(Level::Warning)
    .with_timezone_adjustment_hours(2)
    .with_function_signature(true);
assert_eq!(CONFIG.threshold(), Level::Warning);
assert_eq!(CONFIG.log_file_name(), "Warning.log");
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    threshold: Level,
    timezone_adjustment_hours: i64,
    include_function_signature: bool,
}

impl Config {
    /// The configuration selected by this build.
    pub const BUILD: Config = Config {
        threshold: BUILD_THRESHOLD,
        timezone_adjustment_hours: 0,
        include_function_signature: cfg!(feature = "function-signatures"),
    };

    pub const fn new(threshold: Level) -> Self {
        Self {
            threshold,
            timezone_adjustment_hours: 0,
            include_function_signature: false,
        }
    }

    /**
    Hours added to the rendered hour field.

    The sum is not wrapped into 0..24.
    */
    pub const fn with_timezone_adjustment_hours(mut self, hours: i64) -> Self {
        self.timezone_adjustment_hours = hours;
        self
    }

    pub const fn with_function_signature(mut self, include: bool) -> Self {
        self.include_function_signature = include;
        self
    }

    /// The least severe level that is emitted.
    #[inline]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    #[inline]
    pub const fn timezone_adjustment_hours(&self) -> i64 {
        self.timezone_adjustment_hours
    }

    #[inline]
    pub const fn include_function_signature(&self) -> bool {
        self.include_function_signature
    }

    /// Whether a message at `level` passes the threshold.
    #[inline]
    pub const fn enables(&self, level: Level) -> bool {
        level as u8 >= self.threshold as u8
    }

    /// `"<Threshold>.log"`, the default file sink path.
    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.threshold.name())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::BUILD
    }
}
