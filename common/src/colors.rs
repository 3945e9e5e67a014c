//! Color constants for the watchface.
//!
//! The face is deliberately two-tone, matching a classic black dial: the
//! hand is stroked white with a black fill, over a black background. The
//! `embedded_graphics` `RgbColor` trait provides the canonical values.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7789 and requires no conversion when
//! writing to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Dial background and hand fill.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Hand outline and hour digits.
pub const WHITE: Rgb565 = Rgb565::WHITE;
