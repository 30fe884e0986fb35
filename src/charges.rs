//! Ordered store of point charges, plus the selection and drag references the
//! interaction layer needs.

use std::fmt;

use tracing::{debug, warn};

use crate::errors::SandboxError;
use crate::math::{R2, Scalar};

/// Opaque, session-unique charge identifier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChargeId(u64);

impl ChargeId {
    /// Raw numeric value, for display or keyed rendering.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChargeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Point charge in dimensionless charge units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// Identifier assigned by the owning store.
    pub id: ChargeId,
    /// Signed magnitude. Zero is allowed and contributes nothing.
    pub q: Scalar,
    /// Position in simulation space.
    pub position: R2,
}

impl Charge {
    /// `'+'` for non-negative charges, `'-'` otherwise.
    #[must_use]
    pub fn polarity_label(&self) -> char {
        if self.q >= 0.0 { '+' } else { '-' }
    }
}

/// Insertion-ordered collection of charges. The sole mutator of charge data.
#[derive(Debug, Clone)]
pub struct ChargeStore {
    charges: Vec<Charge>,
    next_id: u64,
    selected: Option<ChargeId>,
    drag_target: Option<ChargeId>,
}

impl Default for ChargeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            charges: Vec::new(),
            next_id: 1,
            selected: None,
            drag_target: None,
        }
    }

    /// Appends a charge and returns its fresh id. Clears the selection.
    ///
    /// Rejects the whole request if any of `q`, `x`, `y` is NaN or infinite.
    pub fn add(&mut self, q: Scalar, x: Scalar, y: Scalar) -> Result<ChargeId, SandboxError> {
        for (field, value) in [("q", q), ("x", x), ("y", y)] {
            if !value.is_finite() {
                warn!(field, value, "rejected charge");
                return Err(SandboxError::invalid_input(field, value));
            }
        }
        let id = ChargeId(self.next_id);
        self.next_id += 1;
        self.charges.push(Charge {
            id,
            q,
            position: R2::new(x, y),
        });
        self.selected = None;
        debug!(%id, q, x, y, "charge added");
        Ok(id)
    }

    /// Parses form text for `q`, `x`, `y` and adds the charge.
    ///
    /// Surrounding whitespace is ignored. Text that does not parse as a finite
    /// number yields [`SandboxError::InvalidInput`] and leaves the store as it was.
    pub fn add_parsed(&mut self, q: &str, x: &str, y: &str) -> Result<ChargeId, SandboxError> {
        let q = parse_finite("q", q)?;
        let x = parse_finite("x", x)?;
        let y = parse_finite("y", y)?;
        self.add(q, x, y)
    }

    /// Removes the charge with `id`. Absent ids are ignored.
    ///
    /// Returns `true` if a charge was removed.
    pub fn remove(&mut self, id: ChargeId) -> bool {
        let before = self.charges.len();
        self.charges.retain(|c| c.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag_target == Some(id) {
            self.drag_target = None;
        }
        let removed = self.charges.len() != before;
        if removed {
            debug!(%id, "charge removed");
        }
        removed
    }

    /// Moves the charge with `id` to `(x, y)`. Absent ids are ignored.
    ///
    /// Returns `true` if a charge was moved.
    pub fn move_to(&mut self, id: ChargeId, x: Scalar, y: Scalar) -> bool {
        match self.charges.iter_mut().find(|c| c.id == id) {
            Some(charge) => {
                charge.position = R2::new(x, y);
                debug!(%id, x, y, "charge moved");
                true
            }
            None => false,
        }
    }

    /// Snapshot of all charges in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Charge] {
        &self.charges
    }

    /// Looks up a charge by id.
    #[must_use]
    pub fn get(&self, id: ChargeId) -> Option<&Charge> {
        self.charges.iter().find(|c| c.id == id)
    }

    /// Number of live charges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.charges.len()
    }

    /// True if the store holds no charges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Marks `id` as selected if it exists.
    pub fn select(&mut self, id: ChargeId) -> bool {
        let exists = self.get(id).is_some();
        if exists {
            self.selected = Some(id);
        }
        exists
    }

    /// Currently selected charge, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ChargeId> {
        self.selected
    }

    /// Drops the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Starts dragging `id`. Ignored for unknown ids.
    pub fn begin_drag(&mut self, id: ChargeId) -> bool {
        let exists = self.get(id).is_some();
        if exists {
            self.drag_target = Some(id);
            debug!(%id, "drag started");
        }
        exists
    }

    /// Charge currently being dragged, if any.
    #[must_use]
    pub fn drag_target(&self) -> Option<ChargeId> {
        self.drag_target
    }

    /// Ends any drag in progress.
    pub fn end_drag(&mut self) {
        if let Some(id) = self.drag_target.take() {
            debug!(%id, "drag ended");
        }
    }
}

fn parse_finite(field: &'static str, text: &str) -> Result<Scalar, SandboxError> {
    match text.trim().parse::<Scalar>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => {
            warn!(field, text, "rejected charge input");
            Err(SandboxError::invalid_input(field, text))
        }
    }
}
