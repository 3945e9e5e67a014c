//! Core logic and shared types for the Hourline watchface.
//!
//! This crate contains the platform-agnostic code shared between the
//! simulator and the Pico hardware implementation:
//!
//! - [`angle`]: wall-clock snapshot and dial angle computation
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: display and hand geometry constants
//! - [`error`]: the watchface fault taxonomy
//! - [`hand`]: the rotating hand polygon and its two-pass renderer
//! - [`label`]: zero-padded 12-hour label formatting
//! - [`styles`]: pre-computed text and primitive styles
//! - [`traits`]: host capability seams (clock, ticks, redraw)
//! - [`watchface`]: the context object orchestrating ticks and redraws
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and runs unchanged on the embedded
//! target. Tests compile with `std` (via `cfg_attr`) so the standard test
//! harness works on the host.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod angle;
pub mod colors;
pub mod config;
pub mod error;
pub mod hand;
pub mod label;
pub mod styles;
pub mod traits;
pub mod watchface;

// Re-export commonly used items
pub use angle::{WallTime, dial_angle};
pub use colors::*;
pub use config::*;
pub use error::WatchfaceError;
pub use traits::{Clock, Redrawable, TickObserver};
pub use watchface::Watchface;
