// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Timestamps for the line prefix.

The rendered time is arithmetic on the duration since the Unix epoch: it ignores the calendar and
leap seconds, and the time-zone adjustment is added to the hour without wrapping.  It is a fast
display convenience, not an accurate clock reading.
*/

use crate::sys::{Duration, SystemTime, UNIX_EPOCH};
use std::fmt::{Debug, Display};

/**
A source of wall-clock time.

Loggers read the clock only when an active statement renders its prefix.
*/
pub trait Clock: Debug + Send + Sync {
    /// Time elapsed since the clock's epoch.
    fn since_epoch(&self) -> Duration;
}

/// The system wall clock, measured from the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn since_epoch(&self) -> Duration {
        // a clock set before 1970 renders as midnight
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/**
A decomposed time of day, rendered as `HH:MM:SS.mmm`.

```rust
use scopelog::TimeOfDay;
use std::time::Duration;

let time = TimeOfDay::from_since_epoch(Duration::from_millis(90_061_123), 0);
assert_eq!(time.to_string(), "01:01:01.123");
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hours: i64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl TimeOfDay {
    pub fn from_since_epoch(since_epoch: Duration, timezone_adjustment_hours: i64) -> Self {
        let total_seconds = since_epoch.as_secs();
        let hours = ((total_seconds / 3600) % 24) as i64;
        Self {
            // out-of-range adjustments render as given, without panicking
            hours: hours.wrapping_add(timezone_adjustment_hours),
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
            millis: u64::from(since_epoch.subsec_millis()),
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}
