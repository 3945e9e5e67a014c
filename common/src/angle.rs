//! Dial angle computation.
//!
//! A 12-hour dial maps 720 minutes onto 360 degrees, so the hand advances
//! half a degree per minute. [`dial_angle`] is the only place that mapping
//! lives, and [`angle_to_radians`] is the only place degrees are converted
//! to the unit the rotation math consumes.

use crate::config::{DEGREES_PER_TURN, MINUTES_PER_TURN};

// =============================================================================
// Wall-Clock Snapshot
// =============================================================================

/// A wall-clock snapshot: hour and minute read together.
///
/// The orchestrator derives both the hand angle and the hour label from one
/// snapshot, so the two can never disagree within a tick (no torn reads
/// across a minute or hour boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute of hour, 0-59.
    pub minute: u8,
}

impl WallTime {
    /// Create a snapshot from an hour of day and a minute of hour.
    #[inline]
    pub const fn new(
        hour: u8,
        minute: u8,
    ) -> Self {
        Self { hour, minute }
    }
}

// =============================================================================
// Angle Computation
// =============================================================================

/// Convert a wall-clock position to the hand angle in degrees, [0, 360).
///
/// Pure function of (hour mod 12, minute): midnight and noon both map to 0,
/// 3:00 to 90, 6:00 to 180, 9:00 to 270. The division truncates the
/// half-degree minute steps (03:15 is 97, not 97.5), matching the original
/// dial's behavior.
#[inline]
pub const fn dial_angle(
    hour: u8,
    minute: u8,
) -> u16 {
    // Up to 719 * 360 = 258,840: widen before multiplying.
    let minutes = (hour % 12) as u32 * 60 + minute as u32;
    (minutes * DEGREES_PER_TURN as u32 / MINUTES_PER_TURN as u32) as u16
}

/// Convert a dial angle in degrees to radians for the rotation math.
///
/// The single angle-unit conversion in the crate: everything else speaks
/// degrees, the trig in [`crate::hand`] speaks radians.
#[inline]
pub fn angle_to_radians(angle: u16) -> f32 { f32::from(angle).to_radians() }

// =============================================================================
// Unit Tests
// =============================================================================
