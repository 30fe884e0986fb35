//! Interactive sandbox session: the charge store plus everything derived from it.
//!
//! A [`Sandbox`] owns its [`ChargeStore`] and recomputes the complete
//! [`FieldFrame`] synchronously after every successful mutation, so callers
//! always observe a frame that matches the current charges. There is no
//! incremental update: each recomputation costs `O(grid_size² × charges)`,
//! which is fine for the small lattices and handful of charges a sandbox
//! shows but would need spatial pruning at larger scales.

use tracing::{debug, trace, warn};

use crate::charges::{Charge, ChargeId, ChargeStore};
use crate::constants::{DEFAULT_GRID_SIZE, GRID_HALF_EXTENT};
use crate::errors::SandboxError;
use crate::fields::{self, FieldSample, SofteningModel};
use crate::glyph::{self, ArrowGlyph, GlyphStyle};
use crate::grid::{GridCache, SampleGrid};
use crate::math::{R2, Scalar};
use crate::viewport::{self, round_to_hundredths, Viewport};

/// Tunables for a sandbox session.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    /// Lattice points per axis; at least 2.
    pub grid_size: usize,
    /// Half-width of the sampled square.
    pub grid_half_extent: Scalar,
    /// Field kernel parameters.
    pub softening: SofteningModel,
    /// Arrow geometry.
    pub glyph: GlyphStyle,
    /// Round dragged positions to two decimals.
    pub snap_drag_to_hundredths: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            grid_half_extent: GRID_HALF_EXTENT,
            softening: SofteningModel::default(),
            glyph: GlyphStyle::default(),
            snap_drag_to_hundredths: true,
        }
    }
}

impl SandboxConfig {
    /// Returns a copy with a different lattice size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Returns a copy with a different field kernel.
    #[must_use]
    pub fn with_softening(mut self, softening: SofteningModel) -> Self {
        self.softening = softening;
        self
    }

    /// Returns a copy with different arrow geometry.
    #[must_use]
    pub fn with_glyph(mut self, glyph: GlyphStyle) -> Self {
        self.glyph = glyph;
        self
    }

    /// Returns a copy with drag snapping switched on or off.
    #[must_use]
    pub fn with_drag_snapping(mut self, snap: bool) -> Self {
        self.snap_drag_to_hundredths = snap;
        self
    }

    /// Checks every parameter without building anything.
    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.grid_size < 2 {
            return Err(SandboxError::InvalidGridSize(self.grid_size));
        }
        if !(self.grid_half_extent.is_finite() && self.grid_half_extent > 0.0) {
            return Err(SandboxError::InvalidConfig(format!(
                "grid half extent must be finite and positive, got {}",
                self.grid_half_extent
            )));
        }
        self.softening.validate()?;
        self.glyph.validate()
    }
}

/// Field samples and arrows for one state of the charge set.
#[derive(Debug, Clone, Default)]
pub struct FieldFrame {
    /// One sample per lattice point.
    pub samples: Vec<FieldSample>,
    /// One arrow per sample with a nonzero field.
    pub glyphs: Vec<ArrowGlyph>,
}

/// A single-user sandbox session.
#[derive(Debug)]
pub struct Sandbox {
    config: SandboxConfig,
    store: ChargeStore,
    grids: GridCache,
    grid: SampleGrid,
    frame: FieldFrame,
    recomputes: u64,
}

impl Sandbox {
    /// Creates an empty session.
    pub fn new(config: SandboxConfig) -> Result<Self, SandboxError> {
        config.validate()?;
        let mut grids = GridCache::new();
        let grid = grids.get(config.grid_size, config.grid_half_extent)?;
        let mut sandbox = Self {
            config,
            store: ChargeStore::new(),
            grids,
            grid,
            frame: FieldFrame::default(),
            recomputes: 0,
        };
        sandbox.recompute();
        Ok(sandbox)
    }

    /// Creates a session seeded with a +1 charge at `(-2, 2)` and a -1 charge at `(2, -2)`.
    pub fn with_demo_charges(config: SandboxConfig) -> Result<Self, SandboxError> {
        let mut sandbox = Self::new(config)?;
        sandbox.add_charge(1.0, -2.0, 2.0)?;
        sandbox.add_charge(-1.0, 2.0, -2.0)?;
        Ok(sandbox)
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Read access to the underlying store (selection, drag target, lookups).
    #[must_use]
    pub fn store(&self) -> &ChargeStore {
        &self.store
    }

    /// Adds a charge and recomputes. Rejected input leaves everything untouched.
    pub fn add_charge(&mut self, q: Scalar, x: Scalar, y: Scalar) -> Result<ChargeId, SandboxError> {
        let id = self.store.add(q, x, y)?;
        self.recompute();
        Ok(id)
    }

    /// Adds a charge from form text and recomputes.
    pub fn add_charge_parsed(&mut self, q: &str, x: &str, y: &str) -> Result<ChargeId, SandboxError> {
        let id = self.store.add_parsed(q, x, y)?;
        self.recompute();
        Ok(id)
    }

    /// Removes a charge if present and recomputes.
    pub fn remove_charge(&mut self, id: ChargeId) {
        if self.store.remove(id) {
            self.recompute();
        }
    }

    /// Moves a charge if present and recomputes.
    ///
    /// Non-finite coordinates are ignored.
    pub fn move_charge(&mut self, id: ChargeId, x: Scalar, y: Scalar) {
        if !(x.is_finite() && y.is_finite()) {
            warn!(%id, x, y, "ignored non-finite move");
            return;
        }
        if self.store.move_to(id, x, y) {
            self.recompute();
        }
    }

    /// Charges in insertion order.
    #[must_use]
    pub fn list_charges(&self) -> &[Charge] {
        self.store.list()
    }

    /// Marks a charge as selected. Selection does not change the field.
    pub fn select(&mut self, id: ChargeId) -> bool {
        self.store.select(id)
    }

    /// Evaluates the field over an `n × n` lattice, reusing the cached lattice for a repeated `n`.
    pub fn sample_field(&mut self, grid_size: usize) -> Result<Vec<FieldSample>, SandboxError> {
        let grid = self.grids.get(grid_size, self.config.grid_half_extent)?;
        Ok(fields::sample_field(&grid, self.store.list(), &self.config.softening))
    }

    /// Arrow for one sample using the session's glyph style.
    #[must_use]
    pub fn to_glyph(&self, point: R2, vector: R2) -> Option<ArrowGlyph> {
        glyph::to_glyph(point, vector, &self.config.glyph)
    }

    /// Device coordinates to simulation coordinates.
    #[must_use]
    pub fn screen_to_sim(&self, px: Scalar, py: Scalar, viewport: Option<&Viewport>) -> R2 {
        viewport::screen_to_sim(px, py, viewport)
    }

    /// Pointer went down on a charge.
    pub fn begin_drag(&mut self, id: ChargeId) -> bool {
        self.store.begin_drag(id)
    }

    /// Pointer moved; relocates the dragged charge, if any.
    ///
    /// Returns the new position when a charge was moved.
    pub fn drag_to(&mut self, px: Scalar, py: Scalar, viewport: Option<&Viewport>) -> Option<R2> {
        let id = self.store.drag_target()?;
        let mut p = viewport::screen_to_sim(px, py, viewport);
        if self.config.snap_drag_to_hundredths {
            p = p.map(round_to_hundredths);
        }
        self.move_charge(id, p.x, p.y);
        Some(p)
    }

    /// Pointer released or left the view.
    pub fn end_drag(&mut self) {
        self.store.end_drag();
    }

    /// Switches to an `n × n` lattice and recomputes. Rejected sizes keep the current lattice.
    pub fn set_grid_size(&mut self, grid_size: usize) -> Result<(), SandboxError> {
        let grid = self.grids.get(grid_size, self.config.grid_half_extent)?;
        debug!(grid_size, "grid size changed");
        self.config.grid_size = grid_size;
        self.grid = grid;
        self.recompute();
        Ok(())
    }

    /// Lattice the current frame was sampled on.
    #[must_use]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Latest frame, consistent with [`Self::list_charges`].
    #[must_use]
    pub fn frame(&self) -> &FieldFrame {
        &self.frame
    }

    /// Number of full recomputations so far, including the initial one.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    fn recompute(&mut self) {
        let samples = fields::sample_field(&self.grid, self.store.list(), &self.config.softening);
        let glyphs = samples
            .iter()
            .filter_map(|s| glyph::to_glyph(s.point, s.vector, &self.config.glyph))
            .collect();
        self.frame = FieldFrame { samples, glyphs };
        self.recomputes += 1;
        trace!(
            charges = self.store.len(),
            samples = self.frame.samples.len(),
            glyphs = self.frame.glyphs.len(),
            "field frame recomputed"
        );
    }
}
