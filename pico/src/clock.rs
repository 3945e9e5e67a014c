//! Wall clock derived from time since boot.
//!
//! The RP2350 has no battery-backed RTC, so the firmware cannot recover the
//! actual time of day. The dial starts at 12:00 on power-up and advances
//! from the embassy monotonic timer.

use embassy_time::Instant;
use hourline_common::{Clock, WallTime, WatchfaceError};

/// Hour shown at power-on.
const BOOT_HOUR: u8 = 12;

/// Clock seeded at boot and advanced by uptime. Copies share the same boot
/// instant, so every copy reads the same wall time.
#[derive(Clone, Copy)]
pub struct UptimeClock {
    boot: Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self { boot: Instant::now() }
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for UptimeClock {
    fn now_local(&self) -> Result<WallTime, WatchfaceError> {
        let minutes = self.boot.elapsed().as_secs() / 60;
        let hour = (u64::from(BOOT_HOUR) + minutes / 60) % 24;
        Ok(WallTime::new(hour as u8, (minutes % 60) as u8))
    }
}
