//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (points and field vectors alike).
pub type R2 = Vector2<Scalar>;

/// Returns `true` when both components are finite.
#[inline]
#[must_use]
pub fn is_finite_r2(v: &R2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Perpendicular of `v`, rotated a quarter turn counter-clockwise: `(-y, x)`.
#[inline]
#[must_use]
pub fn perp(v: &R2) -> R2 {
    R2::new(-v.y, v.x)
}
