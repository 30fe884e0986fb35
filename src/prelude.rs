//! Convenience re-exports for building field sandboxes.

pub use crate::charges::{Charge, ChargeId, ChargeStore};
pub use crate::constants::*;
pub use crate::errors::SandboxError;
pub use crate::fields::{electric_field_at, potential_at, sample_field, FieldSample, SofteningModel};
pub use crate::glyph::{to_glyph, ArrowGlyph, GlyphStyle, Polarity};
pub use crate::grid::{linspace, GridCache, SampleGrid};
pub use crate::io::{write_charges_csv, write_field_csv, write_glyphs_csv};
pub use crate::math::{R2, Scalar};
pub use crate::sandbox::{FieldFrame, Sandbox, SandboxConfig};
pub use crate::viewport::{round_to_hundredths, screen_to_sim, sim_to_screen, Viewport};
