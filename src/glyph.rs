//! Mapping from field vectors to bounded arrow geometry.
//!
//! Arrows are drawn in simulation units. Their length follows the field
//! magnitude up to [`GlyphStyle::max_len`], beyond which every arrow has the
//! same length so neighbouring lattice cells never overlap. The arrowhead is
//! a three-point polyline `(wing, tip, wing)`.

use crate::constants::{ARROW_HEAD_LEN, ARROW_HEAD_PERP, ARROW_SCALE, MAX_ARROW_LEN};
use crate::errors::SandboxError;
use crate::math::{perp, R2, Scalar};

/// Geometry parameters for arrow glyphs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    /// Length per unit of field magnitude.
    pub scale: Scalar,
    /// Length cap.
    pub max_len: Scalar,
    /// Back-offset of the arrowhead base from the tip.
    pub head: Scalar,
    /// Wing offset, as a multiple of the shaft vector's perpendicular.
    pub perp: Scalar,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            scale: ARROW_SCALE,
            max_len: MAX_ARROW_LEN,
            head: ARROW_HEAD_LEN,
            perp: ARROW_HEAD_PERP,
        }
    }
}

impl GlyphStyle {
    /// Returns a copy with a different length cap.
    #[must_use]
    pub fn with_max_len(mut self, max_len: Scalar) -> Self {
        self.max_len = max_len;
        self
    }

    /// Returns a copy with a different magnitude-to-length scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Scalar) -> Self {
        self.scale = scale;
        self
    }

    /// Every parameter must be finite and non-negative.
    pub fn validate(&self) -> Result<(), SandboxError> {
        for (name, value) in [
            ("scale", self.scale),
            ("max_len", self.max_len),
            ("head", self.head),
            ("perp", self.perp),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SandboxError::InvalidConfig(format!(
                    "glyph {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Whether the arrow agrees with the field direction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// `E · u >= 0`.
    Outward,
    /// `E · u < 0`.
    Inward,
}

impl Polarity {
    /// Rendering class name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outward => "outward",
            Self::Inward => "inward",
        }
    }
}

/// Drawable arrow: shaft from `tail` to `tip` plus a two-wing head.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGlyph {
    /// Shaft start, the sample point.
    pub tail: R2,
    /// Shaft end.
    pub tip: R2,
    /// Arrowhead wing on the counter-clockwise side.
    pub wing_left: R2,
    /// Arrowhead wing on the clockwise side.
    pub wing_right: R2,
    /// Rendering hint; see [`Polarity`].
    pub polarity: Polarity,
}

impl ArrowGlyph {
    /// Shaft length.
    #[must_use]
    pub fn length(&self) -> Scalar {
        (self.tip - self.tail).norm()
    }

    /// Arrowhead as `[wing_left, tip, wing_right]`.
    #[must_use]
    pub fn polyline(&self) -> [R2; 3] {
        [self.wing_left, self.tip, self.wing_right]
    }
}

/// Converts the field `vector` sampled at `point` into an arrow.
///
/// Returns `None` exactly when the field magnitude is zero.
#[must_use]
pub fn to_glyph(point: R2, vector: R2, style: &GlyphStyle) -> Option<ArrowGlyph> {
    let mag = vector.norm();
    if mag == 0.0 {
        return None;
    }
    let len = style.max_len.min(mag * style.scale);
    let u = vector / mag * len;
    let tail = point;
    let tip = tail + u;

    // len is zero for a zero scale or when mag * scale underflows
    let back = style.head / len;
    let back = if back.is_finite() { back } else { 0.0 };
    let base = tip - u * back;
    let wing = perp(&u) * style.perp;

    // u is a positive multiple of the field, so this is never Inward as written
    let polarity = if vector.dot(&u) >= 0.0 {
        Polarity::Outward
    } else {
        Polarity::Inward
    };

    Some(ArrowGlyph {
        tail,
        tip,
        wing_left: base + wing,
        wing_right: base - wing,
        polarity,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_field_has_no_glyph() {
        assert!(to_glyph(R2::new(1.0, 1.0), R2::zeros(), &GlyphStyle::default()).is_none());
    }

    #[test]
    fn weak_field_is_scaled_not_capped() {
        let g = to_glyph(R2::zeros(), R2::new(0.1, 0.0), &GlyphStyle::default()).unwrap();
        assert_relative_eq!(g.length(), 0.022, epsilon = 1.0e-12);
        assert_relative_eq!(g.tip.x, 0.022, epsilon = 1.0e-12);
        assert_relative_eq!(g.tip.y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn strong_field_is_capped() {
        let g = to_glyph(R2::new(2.0, -1.0), R2::new(0.0, 50.0), &GlyphStyle::default()).unwrap();
        assert_relative_eq!(g.length(), MAX_ARROW_LEN, epsilon = 1.0e-12);
        assert_relative_eq!(g.tip.x, 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(g.tip.y, -1.0 + MAX_ARROW_LEN, epsilon = 1.0e-12);
    }

    #[test]
    fn arrowhead_geometry_matches_offsets() {
        // capped arrow along +x: u = (0.12, 0)
        let g = to_glyph(R2::zeros(), R2::new(10.0, 0.0), &GlyphStyle::default()).unwrap();
        let base_x = 0.12 - 0.035;
        assert_relative_eq!(g.wing_left.x, base_x, epsilon = 1.0e-12);
        assert_relative_eq!(g.wing_right.x, base_x, epsilon = 1.0e-12);
        assert_relative_eq!(g.wing_left.y, 0.12 * 0.02, epsilon = 1.0e-12);
        assert_relative_eq!(g.wing_right.y, -0.12 * 0.02, epsilon = 1.0e-12);
        assert_eq!(g.polyline()[1], g.tip);
    }

    #[test]
    fn zero_length_falls_back_to_zero_offset() {
        let style = GlyphStyle::default().with_scale(0.0);
        let g = to_glyph(R2::new(1.0, 2.0), R2::new(3.0, 0.0), &style).unwrap();
        assert!(g.wing_left.x.is_finite() && g.wing_left.y.is_finite());
        assert!(g.wing_right.x.is_finite() && g.wing_right.y.is_finite());
        assert_eq!(g.tip, g.tail);
    }

    #[test]
    fn polarity_is_outward_for_any_direction() {
        for v in [R2::new(1.0, 0.0), R2::new(-3.0, 0.5), R2::new(0.0, -1.0e-6)] {
            let g = to_glyph(R2::zeros(), v, &GlyphStyle::default()).unwrap();
            assert_eq!(g.polarity, Polarity::Outward);
        }
    }

    #[test]
    fn validate_rejects_negative_and_nan() {
        assert!(GlyphStyle::default().validate().is_ok());
        assert!(GlyphStyle::default().with_max_len(-1.0).validate().is_err());
        assert!(GlyphStyle::default().with_scale(f64::NAN).validate().is_err());
    }

    proptest! {
        #[test]
        fn length_never_exceeds_cap(
            ex in -1.0e6_f64..1.0e6,
            ey in -1.0e6_f64..1.0e6,
        ) {
            let v = R2::new(ex, ey);
            match to_glyph(R2::zeros(), v, &GlyphStyle::default()) {
                Some(g) => prop_assert!(g.length() <= MAX_ARROW_LEN * (1.0 + 1.0e-12)),
                None => prop_assert_eq!(v.norm(), 0.0),
            }
        }

        #[test]
        fn glyph_points_along_field(
            ex in -10.0_f64..10.0,
            ey in -10.0_f64..10.0,
        ) {
            let v = R2::new(ex, ey);
            prop_assume!(v.norm() > 1.0e-9);
            let g = to_glyph(R2::zeros(), v, &GlyphStyle::default()).unwrap();
            let shaft = g.tip - g.tail;
            prop_assert!(shaft.dot(&v) > 0.0);
        }
    }
}
