//! Hour label formatting.

use core::fmt::Write;

use heapless::String;

/// Character capacity of the hour label buffer.
pub const LABEL_LEN: usize = 2;

/// Format the zero-padded 12-hour label for an hour of day.
///
/// Midnight and noon both read "12"; 13:00 reads "01". Two characters,
/// stack-allocated, refreshed once per tick.
pub fn hour_label(hour: u8) -> String<LABEL_LEN> {
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    let mut label: String<LABEL_LEN> = String::new();
    let _ = write!(label, "{display_hour:02}");
    label
}
