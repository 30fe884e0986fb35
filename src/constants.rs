//! Dimensionless model constants for the sandbox.
//!
//! ## Units
//!
//! Nothing here is SI. Charges are plain "charge units", distances are
//! simulation-space units, and the Coulomb coefficient is fixed at 1. The
//! values reproduce the classroom sandbox the crate was built for: a
//! `[-5, 5]` lattice inside a 12-unit wide view.

use crate::math::Scalar;

/// Coulomb-like coupling constant _k_ (dimensionless).
pub const COULOMB_K: Scalar = 1.0;
/// Softening term ε added to r² so the field stays bounded at a charge.
pub const SOFTENING_EPSILON: Scalar = 0.2;

/// Multiplier from field magnitude to arrow length.
pub const ARROW_SCALE: Scalar = 0.22;
/// Upper bound on arrow length in simulation units.
pub const MAX_ARROW_LEN: Scalar = 0.12;
/// Distance from the tip back along the shaft to the arrowhead base.
pub const ARROW_HEAD_LEN: Scalar = 0.035;
/// Perpendicular factor applied to the shaft vector for each arrowhead wing.
pub const ARROW_HEAD_PERP: Scalar = 0.02;

/// Half-width of the square sample region, i.e. the lattice spans `[-5, 5]`.
pub const GRID_HALF_EXTENT: Scalar = 5.0;
/// Lattice points per axis used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 11;

/// Width and height of the logical view box (centred at the origin).
pub const VIEW_EXTENT: Scalar = 12.0;

/// Half of [`VIEW_EXTENT`]; the view spans `[-6, 6]` on both axes.
#[inline]
#[must_use]
pub fn view_half_extent() -> Scalar {
    VIEW_EXTENT / 2.0
}

/// Lattice spacing for `n` points per axis over `[-half_extent, half_extent]`.
///
/// Returns `None` for `n < 2`, where the spacing is undefined.
#[inline]
#[must_use]
pub fn lattice_spacing(n: usize, half_extent: Scalar) -> Option<Scalar> {
    (n >= 2).then(|| 2.0 * half_extent / (n as Scalar - 1.0))
}
