//! I/O helpers for exporting sandbox data.

pub mod csv;

pub use csv::*;
