use crate::domain::{GridTopology, Topology};

/// Screen geometry of the grid view: one square per cell, no camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cell_size: f32,
}

impl GridLayout {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Largest whole-pixel cell size that fits the grid inside the given window
    pub fn fit(rows: usize, cols: usize, max_width: f32, max_height: f32) -> Self {
        let side = (max_width / cols as f32).floor().min((max_height / rows as f32).floor());
        Self { cell_size: side.max(1.0) }
    }

    /// Canvas size in pixels for a grid
    pub fn canvas_size(&self, topology: &GridTopology) -> (f32, f32) {
        let (rows, cols) = topology.dimensions();
        (cols as f32 * self.cell_size, rows as f32 * self.cell_size)
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, topology: &GridTopology, index: usize) -> (f32, f32) {
        let (row, col) = topology.position(index);
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Convert pointer coordinates to a cell index
    pub fn cell_at(&self, topology: &GridTopology, x: f32, y: f32) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        topology.index(row, col)
    }
}

/// Screen geometry of the line view.
///
/// Cells sit side by side along a horizontal baseline through the middle of
/// the canvas and are drawn raised by their height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineLayout {
    pub cell_size: f32,
    pub margin: f32,
    pub canvas_height: f32,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self { cell_size: 4.0, margin: 10.0, canvas_height: 800.0 }
    }
}

impl LineLayout {
    pub fn canvas_width<T: Topology>(&self, topology: &T) -> f32 {
        2.0 * self.margin + topology.len() as f32 * self.cell_size
    }

    pub fn cell_x(&self, index: usize) -> f32 {
        self.margin + index as f32 * self.cell_size
    }

    pub fn cell_y(&self, height: f64) -> f32 {
        (self.canvas_height - self.cell_size) / 2.0 - height as f32
    }

    /// Height a dragged cell takes for a pointer at screen row `y`
    pub fn lift(&self, y: f32) -> f64 {
        f64::from(self.canvas_height / 2.0 - y)
    }

    /// Hit-test drawn cells; the first cell whose square contains the point wins
    pub fn cell_at(&self, heights: &[f64], x: f32, y: f32) -> Option<usize> {
        heights.iter().enumerate().find_map(|(i, &h)| {
            let (cx, cy) = (self.cell_x(i), self.cell_y(h));
            let hit = cx <= x && x <= cx + self.cell_size && cy <= y && y <= cy + self.cell_size;
            hit.then_some(i)
        })
    }
}
