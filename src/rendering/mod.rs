mod palette;

pub use palette::{Palette, Rgb, Shading};

use macroquad::prelude::*;
use crate::application::{GridLayout, LineLayout, Simulation};
use crate::domain::{GridTopology, Lattice, LineTopology, Topology};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

/// Draw one filled square per grid cell
pub fn draw_grid(lattice: &Lattice<GridTopology>, layout: &GridLayout, palette: &Palette) {
    let topology = lattice.topology();
    for (index, height, weight) in lattice.iter_cells() {
        let (x, y) = layout.cell_origin(topology, index);
        let color = palette.color_of(height, weight);
        draw_rectangle(x, y, layout.cell_size, layout.cell_size, color.into());
    }
}

/// Draw the row of cells raised by their heights
pub fn draw_line(lattice: &Lattice<LineTopology>, layout: &LineLayout, palette: &Palette) {
    for (index, height, weight) in lattice.iter_cells() {
        let color = palette.color_of(height, weight);
        draw_rectangle(
            layout.cell_x(index),
            layout.cell_y(height),
            layout.cell_size,
            layout.cell_size,
            color.into(),
        );
    }
}

/// Status line in the top-left corner
pub fn draw_hud<T: Topology>(sim: &Simulation<T>, color: Color) {
    let status = format!(
        "FPS: {} | {} | Gen {} | {} {:.1}ms",
        get_fps(),
        sim.run_state.label(),
        sim.generation,
        sim.integrator.name(),
        sim.last_step_ms,
    );
    draw_text(&status, 8.0, 18.0, 18.0, color);
}
