//! Field evaluation over point-charge sets.

mod electrostatic;

pub use electrostatic::{electric_field_at, potential_at, SofteningModel};

use crate::charges::Charge;
use crate::grid::SampleGrid;
use crate::math::R2;

/// Field vector evaluated at one lattice point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Where the field was evaluated.
    pub point: R2,
    /// The superposed field `(ex, ey)` at `point`.
    pub vector: R2,
}

/// Evaluates the field at every point of `grid`, in the grid's iteration order.
#[must_use]
pub fn sample_field(grid: &SampleGrid, charges: &[Charge], model: &SofteningModel) -> Vec<FieldSample> {
    grid.points()
        .iter()
        .map(|&point| FieldSample {
            point,
            vector: electric_field_at(point, charges, model),
        })
        .collect()
}
