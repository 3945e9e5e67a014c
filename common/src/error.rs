//! Error types for the watchface core.

/// Faults the host collaborators can raise.
///
/// Both variants are fatal during startup (the face is pointless without a
/// clock and a surface). Mid-run, a clock failure only skips the current
/// tick: the previous angle and label stay on screen until the next tick
/// re-attempts the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchfaceError {
    /// The host clock could not produce a local time snapshot.
    ClockUnavailable,
    /// The drawing surface could not be created at startup.
    SurfaceUnavailable,
}

impl core::fmt::Display for WatchfaceError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::ClockUnavailable => write!(f, "host clock unavailable"),
            Self::SurfaceUnavailable => write!(f, "drawing surface unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        // Display impl backs the simulator's startup error message
        assert_eq!(WatchfaceError::ClockUnavailable.to_string(), "host clock unavailable");
        assert_eq!(
            WatchfaceError::SurfaceUnavailable.to_string(),
            "drawing surface unavailable"
        );
    }
}
