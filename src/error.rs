//! Crate-level error types.

use thiserror::Error;

/// Rejected configuration. The simulation itself has no failure modes once
/// a lattice and controller are built from validated values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lattice dimension `{name}` must be at least 1")]
    ZeroDimension { name: &'static str },

    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    TooManyCells { rows: usize, cols: usize },

    #[error("pinned column {column} is outside a grid with {cols} columns")]
    PinnedColumnOutOfRange { column: usize, cols: usize },

    #[error("`{name}` must be a finite weight greater than zero, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("tick rate must be at least 1 per second")]
    ZeroTickRate,
}
