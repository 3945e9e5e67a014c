//! Display and hand geometry constants.
//!
//! Layout values like the screen center are computed at compile time as
//! `const`, so the drawing code never recalculates positions at runtime.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate, the hand's rotation anchor.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate, the hand's rotation anchor.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Hand Geometry
// =============================================================================

/// Half the hand's width in pixels. The full hand is a 6 px thick bar.
pub const HAND_HALF_WIDTH: i32 = 3;

/// Half the hand's length in pixels, measured from the anchor.
///
/// The screen's half-diagonal is 200 px (sqrt(160^2 + 120^2)), so 210
/// overshoots it and the hand reaches the bezel at every angle.
pub const HAND_HALF_LENGTH: i32 = 210;

// =============================================================================
// Dial Configuration
// =============================================================================

/// Minutes on a full 12-hour dial revolution.
pub const MINUTES_PER_TURN: u16 = 12 * 60;

/// Degrees in a full revolution.
pub const DEGREES_PER_TURN: u16 = 360;
