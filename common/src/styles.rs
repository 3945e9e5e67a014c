//! Pre-computed static draw styles to avoid per-frame object construction.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` are all built with
//! `const fn` constructors, so the compiler stores them in the binary's
//! read-only data section and the draw code references them directly.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{BLACK, WHITE};

// =============================================================================
// Text Styles
// =============================================================================

/// Centered text anchored at its middle. Used to place the hour digits on
/// the exact screen center without measuring the string.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Large white digits for the hour label (`ProFont` 24pt, the largest font
/// in the stack).
pub const HOUR_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

// =============================================================================
// Hand Styles (const - `PrimitiveStyle::with_stroke`/`with_fill` are const fn)
// =============================================================================

/// White 1 px stroke for the hand's outline pass.
pub const HAND_OUTLINE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Black fill for the hand's filled pass. On the black dial only the
/// outline remains visible, the original two-pass look.
pub const HAND_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);
