// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Display;

/**
The severity of a log message.

Levels are totally ordered from least to most severe.  A message is emitted when its level is at or
above the configured threshold.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Print-style debugging
    Debug,
    /// Normal operation worth recording
    Info,
    /// Suspicious condition
    Warning,
    /// Runtime error
    Error,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warning, Level::Error];

    /// The name written into the line prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/**
Type-level selection of a [Level].

A [crate::LogStatement] is generic over a `Severity` rather than holding a runtime level, so the
activity check compares two constants when the threshold is the build configuration.
*/
pub trait Severity {
    const LEVEL: Level;
}

/// Marker types implementing [Severity], one per [Level].
pub mod severity {
    use super::{Level, Severity};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Debug;
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Info;
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Warning;
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Error;

    impl Severity for Debug {
        const LEVEL: Level = Level::Debug;
    }
    impl Severity for Info {
        const LEVEL: Level = Level::Info;
    }
    impl Severity for Warning {
        const LEVEL: Level = Level::Warning;
    }
    impl Severity for Error {
        const LEVEL: Level = Level::Error;
    }
}
