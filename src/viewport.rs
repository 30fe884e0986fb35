//! Pointer/device coordinates to simulation space and back.

use crate::constants::{view_half_extent, VIEW_EXTENT};
use crate::math::{R2, Scalar};

/// On-screen rectangle the simulation view is drawn into, in device pixels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub left: Scalar,
    /// Top edge.
    pub top: Scalar,
    /// Width in pixels.
    pub width: Scalar,
    /// Height in pixels.
    pub height: Scalar,
}

impl Viewport {
    /// Rectangle anchored at `(left, top)`.
    #[must_use]
    pub fn new(left: Scalar, top: Scalar, width: Scalar, height: Scalar) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// False for zero, negative or non-finite extents.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Maps the device point `(px, py)` into the 12×12 view centred at the origin.
///
/// An absent or degenerate viewport maps everything to the origin.
#[must_use]
pub fn screen_to_sim(px: Scalar, py: Scalar, viewport: Option<&Viewport>) -> R2 {
    match viewport {
        Some(rect) if rect.is_usable() => {
            let half = view_half_extent();
            R2::new(
                (px - rect.left) / rect.width * VIEW_EXTENT - half,
                (py - rect.top) / rect.height * VIEW_EXTENT - half,
            )
        }
        _ => R2::zeros(),
    }
}

/// Inverse of [`screen_to_sim`]; `None` for a degenerate viewport.
#[must_use]
pub fn sim_to_screen(point: R2, viewport: &Viewport) -> Option<(Scalar, Scalar)> {
    if !viewport.is_usable() {
        return None;
    }
    let half = view_half_extent();
    Some((
        (point.x + half) / VIEW_EXTENT * viewport.width + viewport.left,
        (point.y + half) / VIEW_EXTENT * viewport.height + viewport.top,
    ))
}

/// Rounds to two decimals, the precision drag positions are stored at.
#[inline]
#[must_use]
pub fn round_to_hundredths(v: Scalar) -> Scalar {
    (v * 100.0).round() / 100.0
}
