//! Neighbor topologies a lattice can be built on.
//!
//! A topology knows how many cells exist, which cells are adjacent and
//! which cells start pinned. Adjacency never wraps around an edge.

use arrayvec::ArrayVec;
use crate::error::ConfigError;

/// Up to four adjacent cell indices
pub type Neighbors = ArrayVec<usize, 4>;

/// Strategy describing the shape of a lattice.
pub trait Topology: Clone + Send + Sync {
    /// Number of cells
    fn len(&self) -> usize;

    /// Adjacent cells of `index`, in a fixed order
    fn neighbors(&self, index: usize) -> Neighbors;

    /// Whether `index` belongs to the default pin mask
    fn is_pinned(&self, index: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rectangular grid, row-major, 4-neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTopology {
    rows: usize,
    cols: usize,
    pinned_column: Option<usize>,
}

impl GridTopology {
    pub fn new(rows: usize, cols: usize, pinned_column: Option<usize>) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroDimension { name: "rows" });
        }
        if cols == 0 {
            return Err(ConfigError::ZeroDimension { name: "cols" });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(ConfigError::TooManyCells { rows, cols });
        }
        if let Some(column) = pinned_column.filter(|&c| c >= cols) {
            return Err(ConfigError::PinnedColumnOutOfRange { column, cols });
        }
        Ok(Self { rows, cols, pinned_column })
    }

    /// Column three fifths of the way across, without overflowing on huge widths
    pub const fn default_wall(cols: usize) -> usize {
        cols / 5 * 3 + cols % 5 * 3 / 5
    }

    /// Grid with the wall placed three fifths of the way across
    pub fn with_default_wall(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::new(rows, cols, Some(Self::default_wall(cols)))
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn pinned_column(&self) -> Option<usize> {
        self.pinned_column
    }

    /// Convert (row, col) to a cell index, `None` outside the grid
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Convert a cell index back to (row, col)
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl Topology for GridTopology {
    fn len(&self) -> usize {
        self.rows * self.cols
    }

    fn neighbors(&self, index: usize) -> Neighbors {
        let (row, col) = self.position(index);
        let mut out = Neighbors::new();
        if row != 0 {
            out.push(index - self.cols);
        }
        if col != 0 {
            out.push(index - 1);
        }
        if row != self.rows - 1 {
            out.push(index + self.cols);
        }
        if col != self.cols - 1 {
            out.push(index + 1);
        }
        out
    }

    fn is_pinned(&self, index: usize) -> bool {
        self.pinned_column == Some(self.position(index).1)
    }
}

/// Single row of cells with both ends pinned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineTopology {
    length: usize,
}

impl LineTopology {
    pub fn new(length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroDimension { name: "length" });
        }
        Ok(Self { length })
    }
}

impl Topology for LineTopology {
    fn len(&self) -> usize {
        self.length
    }

    fn neighbors(&self, index: usize) -> Neighbors {
        let mut out = Neighbors::new();
        if index != 0 {
            out.push(index - 1);
        }
        if index != self.length - 1 {
            out.push(index + 1);
        }
        out
    }

    fn is_pinned(&self, index: usize) -> bool {
        index == 0 || index == self.length - 1
    }
}
