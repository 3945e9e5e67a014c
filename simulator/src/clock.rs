//! Wall clock backed by the host operating system.

use chrono::{Local, Timelike};
use hourline_common::{Clock, WallTime, WatchfaceError};

/// Reads local time from the OS via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now_local(&self) -> Result<WallTime, WatchfaceError> {
        let now = Local::now();
        Ok(WallTime::new(now.hour() as u8, now.minute() as u8))
    }
}
