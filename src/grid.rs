//! Square sample lattices and their memoization.

use std::sync::Arc;

use tracing::trace;

use crate::constants::lattice_spacing;
use crate::errors::SandboxError;
use crate::math::{R2, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Immutable `n × n` lattice over `[-h, h]²`.
///
/// Cloning is cheap: clones share the same point buffer.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    size: usize,
    half_extent: Scalar,
    points: Arc<[R2]>,
}

impl SampleGrid {
    /// Builds the lattice with `size` points per axis.
    ///
    /// `size < 2` is rejected: the spacing `2h/(size-1)` is undefined there.
    pub fn new(size: usize, half_extent: Scalar) -> Result<Self, SandboxError> {
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(SandboxError::InvalidConfig(format!(
                "grid half extent must be finite and positive, got {half_extent}"
            )));
        }
        if lattice_spacing(size, half_extent).is_none() {
            return Err(SandboxError::InvalidGridSize(size));
        }
        let axis = linspace(-half_extent, half_extent, size);
        // x-major; consumers must not rely on the order
        let points: Arc<[R2]> = axis
            .iter()
            .flat_map(|&x| axis.iter().map(move |&y| R2::new(x, y)))
            .collect();
        trace!(size, half_extent, "sample grid generated");
        Ok(Self {
            size,
            half_extent,
            points,
        })
    }

    /// Points per axis.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-width of the covered square.
    #[must_use]
    pub fn half_extent(&self) -> Scalar {
        self.half_extent
    }

    /// Distance between neighbouring lattice points.
    #[must_use]
    pub fn spacing(&self) -> Scalar {
        2.0 * self.half_extent / (self.size as Scalar - 1.0)
    }

    /// All `size²` points.
    #[must_use]
    pub fn points(&self) -> &[R2] {
        &self.points
    }

    /// Number of points in the lattice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed grid; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when both grids share one point buffer.
    #[must_use]
    pub fn shares_points_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}

/// Keeps the most recent lattice and rebuilds only when its key changes.
#[derive(Debug, Clone, Default)]
pub struct GridCache {
    current: Option<SampleGrid>,
}

impl GridCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lattice for `(size, half_extent)`, reusing the cached one on a hit.
    pub fn get(&mut self, size: usize, half_extent: Scalar) -> Result<SampleGrid, SandboxError> {
        if let Some(grid) = &self.current {
            if grid.size == size && grid.half_extent == half_extent {
                return Ok(grid.clone());
            }
        }
        let grid = SampleGrid::new(size, half_extent)?;
        self.current = Some(grid.clone());
        Ok(grid)
    }
}
