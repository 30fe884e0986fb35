#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Dimensionless model constants (coupling, softening, arrow geometry, extents).
pub mod constants;
/// Shared mathematical utilities (2D vectors, perpendiculars).
pub mod math;
/// Ordered point-charge storage with selection and drag references.
pub mod charges;
/// Softened superposition field and potential evaluation.
pub mod fields;
/// Square sample lattices and their memoization.
pub mod grid;
/// Field-vector to arrow-glyph mapping.
pub mod glyph;
/// Device-to-simulation coordinate transforms.
pub mod viewport;
/// Session orchestration: store, lattice, and per-mutation recomputation.
pub mod sandbox;
/// CSV export of charges, samples, and glyphs.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
