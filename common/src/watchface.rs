//! The watchface context object.
//!
//! `Watchface` owns every piece of display state the original kept in
//! globals: the clock, the hand, the last computed angle, the hour label,
//! and the dirty flag. The host constructs one at startup, attaches it to
//! the surface bounds, and drives it through the [`TickObserver`] and
//! [`Redrawable`] traits.
//!
//! # Update Flow
//!
//! Minute ticks and the initial refresh funnel into one path: read the
//! clock once, derive the angle and the label from that single snapshot,
//! mark the face dirty. Redraws consume stored state only and never read
//! the clock, so the hand and the digits always agree within a tick.
//!
//! # Failure Semantics
//!
//! A clock failure during [`Watchface::attach`] is fatal and propagates.
//! A clock failure during a tick skips the tick: the previous angle,
//! label, and dirty flag stay untouched, and the next tick re-attempts.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use crate::angle::{WallTime, dial_angle};
use crate::colors::BLACK;
use crate::error::WatchfaceError;
use crate::hand::HandRenderer;
use crate::label::{LABEL_LEN, hour_label};
use crate::styles::{CENTERED_MIDDLE, HOUR_STYLE_WHITE};
use crate::traits::{Clock, Redrawable, TickObserver};

// =============================================================================
// Tick Phase
// =============================================================================

/// Where the orchestrator is in its tick cycle.
///
/// `Idle` between ticks, `Updating` while a snapshot is being turned into
/// fresh display state. Single-threaded hosts only ever observe `Idle`;
/// the explicit phase guards against a re-entrant tick delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickPhase {
    /// Waiting for the next minute boundary.
    #[default]
    Idle,
    /// Snapshot taken, angle and label being recomputed.
    Updating,
}

// =============================================================================
// Watchface
// =============================================================================

/// Display state and orchestration for the analog face.
pub struct Watchface<C: Clock> {
    clock: C,
    hand: HandRenderer,
    /// Last computed dial angle, degrees in [0, 360).
    angle: u16,
    /// Last formatted hour label.
    label: String<LABEL_LEN>,
    phase: TickPhase,
    needs_redraw: bool,
}

impl<C: Clock> Watchface<C> {
    /// Create a face around the host clock.
    ///
    /// Until [`Watchface::attach`] performs the first refresh, the face
    /// shows the dial's resting state: hand at 12 o'clock, label "12".
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            hand: HandRenderer::new(),
            angle: 0,
            label: hour_label(12),
            phase: TickPhase::Idle,
            needs_redraw: false,
        }
    }

    /// Anchor the hand at the surface center and perform the initial
    /// refresh.
    ///
    /// Called when the surface dimensions are first known. Anchoring is
    /// absolute, so attaching again with the same bounds changes nothing.
    /// A clock failure here is fatal: without a first snapshot the face
    /// has nothing truthful to show.
    pub fn attach(
        &mut self,
        bounds: Rectangle,
    ) -> Result<(), WatchfaceError> {
        // Half the surface dimensions, the dial center.
        let center = Point::new(
            bounds.top_left.x + (bounds.size.width / 2) as i32,
            bounds.top_left.y + (bounds.size.height / 2) as i32,
        );
        self.hand.anchor_to(center);

        let now = self.clock.now_local()?;
        self.apply(now);
        Ok(())
    }

    /// Dial angle most recently computed, degrees in [0, 360).
    #[inline]
    pub const fn angle(&self) -> u16 { self.angle }

    /// Hour label most recently formatted.
    #[inline]
    pub fn label(&self) -> &str { self.label.as_str() }

    /// True when a tick produced state the surface has not painted yet.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.needs_redraw }

    /// Current tick phase. `Idle` whenever the host can observe it.
    #[inline]
    pub const fn phase(&self) -> TickPhase { self.phase }

    /// Turn a snapshot into fresh display state and mark the face dirty.
    fn apply(
        &mut self,
        now: WallTime,
    ) {
        self.angle = dial_angle(now.hour, now.minute);
        self.label = hour_label(now.hour);
        self.needs_redraw = true;
    }
}

impl<C: Clock> TickObserver for Watchface<C> {
    fn on_minute_tick(&mut self) {
        if self.phase == TickPhase::Updating {
            // Re-entrant delivery; the in-flight update already covers it.
            return;
        }
        self.phase = TickPhase::Updating;

        // One snapshot per tick. A failed read skips the tick and leaves
        // the previous angle and label on screen.
        if let Ok(now) = self.clock.now_local() {
            self.apply(now);
        }

        self.phase = TickPhase::Idle;
    }
}

impl<C: Clock> Redrawable for Watchface<C> {
    fn redraw<D>(
        &mut self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        // Full repaint from stored state. The hand draws after the digits
        // and crosses them, the original stacking order.
        target.clear(BLACK)?;

        Text::with_text_style(&self.label, self.hand.anchor(), HOUR_STYLE_WHITE, CENTERED_MIDDLE).draw(target)?;

        self.hand.render(self.angle, target)?;

        self.needs_redraw = false;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    use embedded_graphics::Pixel;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    const FACE_BOUNDS: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

    // -------------------------------------------------------------------------
    // Test Fakes
    // -------------------------------------------------------------------------

    struct FakeState {
        time: Result<WallTime, WatchfaceError>,
        reads: u32,
    }

    /// Programmable clock; the test keeps a handle to steer it after the
    /// watchface takes ownership of its clone.
    #[derive(Clone)]
    struct FakeClock {
        state: Rc<RefCell<FakeState>>,
    }

    impl FakeClock {
        fn at(
            hour: u8,
            minute: u8,
        ) -> Self {
            Self {
                state: Rc::new(RefCell::new(FakeState {
                    time: Ok(WallTime::new(hour, minute)),
                    reads: 0,
                })),
            }
        }

        fn set(
            &self,
            hour: u8,
            minute: u8,
        ) {
            self.state.borrow_mut().time = Ok(WallTime::new(hour, minute));
        }

        fn fail(&self) { self.state.borrow_mut().time = Err(WatchfaceError::ClockUnavailable); }

        fn reads(&self) -> u32 { self.state.borrow().reads }
    }

    impl Clock for FakeClock {
        fn now_local(&self) -> Result<WallTime, WatchfaceError> {
            let mut state = self.state.borrow_mut();
            state.reads += 1;
            state.time
        }
    }

    /// Draw target recording every pixel, for exact output comparisons.
    struct RecordingTarget {
        pixels: Vec<(Point, Rgb565)>,
    }

    impl RecordingTarget {
        fn new() -> Self { Self { pixels: Vec::new() } }
    }

    impl OriginDimensions for RecordingTarget {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for RecordingTarget {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                self.pixels.push((point, color));
            }
            Ok(())
        }
    }

    fn attached_face(
        hour: u8,
        minute: u8,
    ) -> (Watchface<FakeClock>, FakeClock) {
        let clock = FakeClock::at(hour, minute);
        let mut face = Watchface::new(clock.clone());
        face.attach(FACE_BOUNDS).unwrap();
        (face, clock)
    }

    // -------------------------------------------------------------------------
    // Startup
    // -------------------------------------------------------------------------

    #[test]
    fn test_resting_state_before_attach() {
        let face = Watchface::new(FakeClock::at(3, 15));

        assert_eq!(face.angle(), 0, "hand should rest at 12 o'clock");
        assert_eq!(face.label(), "12", "label should rest at 12");
        assert!(!face.is_dirty(), "nothing to paint before the first refresh");
        assert_eq!(face.phase(), TickPhase::Idle);
    }

    #[test]
    fn test_attach_performs_initial_refresh() {
        let (face, clock) = attached_face(3, 15);

        assert_eq!(face.angle(), 97, "3:15 should floor to 97 degrees");
        assert_eq!(face.label(), "03");
        assert!(face.is_dirty(), "initial refresh must mark the face dirty");
        assert_eq!(clock.reads(), 1, "attach reads the clock exactly once");
    }

    #[test]
    fn test_attach_without_clock_is_fatal() {
        let clock = FakeClock::at(0, 0);
        clock.fail();
        let mut face = Watchface::new(clock);

        assert_eq!(
            face.attach(FACE_BOUNDS),
            Err(WatchfaceError::ClockUnavailable),
            "startup without a clock must abort"
        );
        assert!(!face.is_dirty(), "a failed attach must not mark the face dirty");
    }

    #[test]
    fn test_reattach_same_bounds_is_idempotent() {
        let (mut once, _) = attached_face(9, 30);
        let (mut twice, _) = attached_face(9, 30);
        twice.attach(FACE_BOUNDS).unwrap();

        let mut first = RecordingTarget::new();
        let mut second = RecordingTarget::new();
        once.redraw(&mut first).unwrap();
        twice.redraw(&mut second).unwrap();

        assert_eq!(
            first.pixels, second.pixels,
            "attaching twice with the same bounds must not move anything"
        );
    }

    // -------------------------------------------------------------------------
    // Minute Ticks
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_updates_angle_and_label_together() {
        let (mut face, clock) = attached_face(10, 30);
        assert_eq!(face.angle(), 315, "10:30 is 315 degrees");

        clock.set(10, 31);
        face.on_minute_tick();

        assert_eq!(face.angle(), 315, "10:31 still floors to 315 degrees");
        clock.set(10, 32);
        face.on_minute_tick();
        assert_eq!(face.angle(), 316, "10:32 advances to 316 degrees");
        assert_eq!(face.label(), "10", "label comes from the same snapshot");
        assert!(face.is_dirty());
    }

    #[test]
    fn test_failed_tick_retains_previous_state() {
        let (mut face, clock) = attached_face(3, 15);
        let mut target = RecordingTarget::new();
        face.redraw(&mut target).unwrap();
        assert!(!face.is_dirty(), "redraw should consume the dirty flag");

        clock.fail();
        face.on_minute_tick();

        assert_eq!(face.angle(), 97, "skipped tick must keep the previous angle");
        assert_eq!(face.label(), "03", "skipped tick must keep the previous label");
        assert!(!face.is_dirty(), "skipped tick must not request a repaint");
        assert_eq!(face.phase(), TickPhase::Idle, "phase must settle back to Idle");
    }

    #[test]
    fn test_tick_recovers_after_failure() {
        let (mut face, clock) = attached_face(3, 15);

        clock.fail();
        face.on_minute_tick();
        clock.set(3, 17);
        face.on_minute_tick();

        assert_eq!(face.angle(), 98, "the next good tick re-attempts naturally");
        assert!(face.is_dirty());
    }

    #[test]
    fn test_hour_rollover_tick_sequence() {
        let (mut face, clock) = attached_face(11, 59);
        assert_eq!(face.angle(), 359, "11:59 is the final degree");
        assert_eq!(face.label(), "11");

        clock.set(12, 0);
        face.on_minute_tick();

        assert_eq!(face.angle(), 0, "12:00 wraps to the top of the dial");
        assert_eq!(face.label(), "12");
    }

    // -------------------------------------------------------------------------
    // Redraw
    // -------------------------------------------------------------------------

    #[test]
    fn test_redraw_never_reads_the_clock() {
        let (mut face, clock) = attached_face(6, 0);
        let reads_after_attach = clock.reads();

        let mut target = RecordingTarget::new();
        face.redraw(&mut target).unwrap();
        face.redraw(&mut target).unwrap();

        assert_eq!(
            clock.reads(),
            reads_after_attach,
            "redraw must consume stored state only"
        );
    }

    #[test]
    fn test_redraw_at_arbitrary_cadence_uses_last_angle() {
        let (mut face, clock) = attached_face(3, 0);

        // Forced repaints between ticks must repeat the last tick's output.
        let mut first = RecordingTarget::new();
        let mut second = RecordingTarget::new();
        face.redraw(&mut first).unwrap();
        face.redraw(&mut second).unwrap();
        assert_eq!(first.pixels, second.pixels, "repaints between ticks must be identical");

        clock.set(4, 0);
        face.on_minute_tick();
        let mut third = RecordingTarget::new();
        face.redraw(&mut third).unwrap();
        assert_ne!(first.pixels, third.pixels, "a new tick must change the output");
    }

    #[test]
    fn test_redraw_paints_digits_and_hand() {
        use crate::colors::WHITE;
        use crate::config::{CENTER_X, CENTER_Y};

        let (mut face, _) = attached_face(6, 0);
        let mut target = RecordingTarget::new();
        face.redraw(&mut target).unwrap();

        // 6:00: the hand is vertical (columns CENTER_X +/- 3) and long
        // enough to overshoot the top bezel.
        let hand_overshoot = target.pixels.iter().any(|(p, c)| *c == WHITE && p.y < 0);
        assert!(hand_overshoot, "the hand outline should reach past the bezel");

        // The "06" digits put white ink to the right of the hand columns
        // (everything the vertical hand paints sits at x <= CENTER_X + 3).
        let digit_ink = target
            .pixels
            .iter()
            .any(|(p, c)| *c == WHITE && p.x > CENTER_X + 3 && (p.y - CENTER_Y).abs() < 25);
        assert!(digit_ink, "the hour digits should be painted at the dial center");
    }
}
