//! The rotating hand: a thin 4-point polygon spanning the full dial.
//!
//! The polygon is a 6 px wide bar running edge to edge through the screen
//! center, vertical at angle 0 (the 12-6 axis). Rendering always rotates a
//! working copy of the fixed base shape, so rotation never accumulates and
//! repeated renders at the same angle are bit-identical.
//!
//! # Two-Pass Drawing
//!
//! The hand is drawn twice per render: a white 1 px outline pass and a
//! black filled pass. On the black dial only the outline remains visible,
//! a pair of parallel lines crossing the screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, Triangle};
use micromath::F32;

use crate::angle::angle_to_radians;
use crate::config::{HAND_HALF_LENGTH, HAND_HALF_WIDTH};
use crate::styles::{HAND_FILL_STYLE, HAND_OUTLINE_STYLE};

/// The hand's base shape: a thin rectangle centered on the origin, points
/// in clockwise winding order, long axis vertical.
const BASE_POINTS: [Point; 4] = [
    Point::new(-HAND_HALF_WIDTH, HAND_HALF_LENGTH),
    Point::new(HAND_HALF_WIDTH, HAND_HALF_LENGTH),
    Point::new(HAND_HALF_WIDTH, -HAND_HALF_LENGTH),
    Point::new(-HAND_HALF_WIDTH, -HAND_HALF_LENGTH),
];

/// Owns the hand polygon in its base orientation plus the screen anchor it
/// rotates around.
pub struct HandRenderer {
    base: [Point; 4],
    anchor: Point,
}

impl HandRenderer {
    /// Create the hand in its base orientation, anchored at the origin
    /// until the surface dimensions are known.
    pub const fn new() -> Self {
        Self {
            base: BASE_POINTS,
            anchor: Point::zero(),
        }
    }

    /// Move the rotation anchor.
    ///
    /// Absolute, not cumulative: re-anchoring to the same point changes
    /// nothing.
    pub const fn anchor_to(
        &mut self,
        anchor: Point,
    ) {
        self.anchor = anchor;
    }

    /// The current rotation anchor.
    #[inline]
    pub const fn anchor(&self) -> Point { self.anchor }

    /// Rotate a working copy of the base polygon to `angle` degrees
    /// clockwise and translate it to the anchor.
    ///
    /// Always starts from the base orientation. Coordinates round to the
    /// nearest pixel.
    pub fn rotated(
        &self,
        angle: u16,
    ) -> [Point; 4] {
        let radians = F32(angle_to_radians(angle));
        let (sin, cos) = (radians.sin().0, radians.cos().0);

        let mut points = [Point::zero(); 4];
        for (rotated, base) in points.iter_mut().zip(&self.base) {
            let x = base.x as f32;
            let y = base.y as f32;
            // Screen y grows downward, so the standard rotation matrix
            // turns the hand clockwise, the dial direction.
            *rotated = Point::new(
                self.anchor.x + F32(x * cos - y * sin).round().0 as i32,
                self.anchor.y + F32(x * sin + y * cos).round().0 as i32,
            );
        }
        points
    }

    /// Draw the hand at `angle`: outline pass, then filled pass.
    pub fn render<D>(
        &self,
        angle: u16,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let p = self.rotated(angle);

        // Outline: close the polygon by repeating the first point.
        let outline = [p[0], p[1], p[2], p[3], p[0]];
        Polyline::new(&outline).into_styled(HAND_OUTLINE_STYLE).draw(target)?;

        // Fill: no filled-quad primitive exists, so fan the convex
        // rectangle into two triangles.
        Triangle::new(p[0], p[1], p[2]).into_styled(HAND_FILL_STYLE).draw(target)?;
        Triangle::new(p[0], p[2], p[3]).into_styled(HAND_FILL_STYLE).draw(target)?;

        Ok(())
    }
}

impl Default for HandRenderer {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
