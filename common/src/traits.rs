//! Capability traits at the host seams.
//!
//! The host platform owns the clock, the minute timer, and the drawing
//! surface. The core consumes them through these traits, so the simulator,
//! the firmware, and the test fakes all plug into the same orchestrator.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

use crate::angle::WallTime;
use crate::error::WatchfaceError;

/// A source of local wall-clock time.
///
/// One call produces a complete snapshot, so the hour and minute can never
/// be torn across a minute or hour boundary. Hosts without a real-time
/// clock may derive the snapshot from uptime plus a boot seed.
pub trait Clock {
    /// Read the current local time.
    fn now_local(&self) -> Result<WallTime, WatchfaceError>;
}

/// Receives the host's minute-boundary ticks.
///
/// Ticks are fire-and-forget: implementations must not block, and a failed
/// clock read inside a tick leaves the previous display state intact.
pub trait TickObserver {
    /// Called once per minute boundary (and once for the initial refresh).
    fn on_minute_tick(&mut self);
}

/// Paints itself onto a drawing surface from stored state.
pub trait Redrawable {
    /// Redraw using the most recently computed state.
    ///
    /// The host may call this at any cadence (forced repaints included);
    /// implementations must not read the clock here, so the output always
    /// reflects the last tick's snapshot.
    fn redraw<D>(
        &mut self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}
