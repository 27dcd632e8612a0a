use macroquad::prelude::*;
use crate::application::{GridLayout, InputSnapshot, Key, LineLayout, PointerInput};
use crate::domain::{GridTopology, Lattice, LineTopology};

/// Keyboard bindings shared by both visualizers
const KEY_BINDINGS: [(KeyCode, Key); 3] = [
    (KeyCode::F, Key::ToggleRun),
    (KeyCode::C, Key::StepOnce),
    (KeyCode::R, Key::Reset),
];

/// Escape closes the window
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Collects edge-triggered input every frame so nothing is lost between
/// simulation ticks, which run slower than the display.
#[derive(Default)]
pub struct InputBuffer {
    keys: Vec<Key>,
    right_clicked: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame
    pub fn collect(&mut self) {
        self.keys.extend(
            KEY_BINDINGS
                .iter()
                .filter(|(code, _)| is_key_pressed(*code))
                .map(|(_, key)| *key),
        );
        self.right_clicked |= is_mouse_button_pressed(MouseButton::Right);
    }

    fn take(&mut self, cell: Option<usize>, lift: f64) -> InputSnapshot {
        let pointer = PointerInput {
            cell,
            lift,
            left_down: is_mouse_button_down(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
            right_clicked: std::mem::take(&mut self.right_clicked),
        };
        InputSnapshot { pointer, keys: std::mem::take(&mut self.keys) }
    }

    /// Snapshot for the grid view: pointer mapped through the cell grid
    pub fn take_grid(&mut self, layout: &GridLayout, topology: &GridTopology) -> InputSnapshot {
        let (x, y) = mouse_position();
        self.take(layout.cell_at(topology, x, y), 0.0)
    }

    /// Snapshot for the line view: pointer hit-tested against drawn cells
    pub fn take_line(&mut self, layout: &LineLayout, lattice: &Lattice<LineTopology>) -> InputSnapshot {
        let (x, y) = mouse_position();
        self.take(layout.cell_at(lattice.heights(), x, y), layout.lift(y))
    }
}
