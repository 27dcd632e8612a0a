//! Interaction controller: turns one tick of input into lattice mutations.

use tracing::debug;
use crate::config::InteractionConfig;
use crate::domain::{Lattice, Topology};
use crate::error::ConfigError;
use super::simulation::Simulation;

/// Discrete key presses the controller understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ToggleRun,
    StepOnce,
    Reset,
}

/// Pointer state for one tick, already mapped onto the lattice
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    /// Cell under the pointer, `None` outside the lattice
    pub cell: Option<usize>,
    /// Height a dragged cell should take at the pointer's vertical position
    pub lift: f64,
    pub left_down: bool,
    pub right_down: bool,
    /// Right button went down this tick
    pub right_clicked: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: PointerInput,
    pub keys: Vec<Key>,
}

/// Which set of pointer rules applies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    /// Grid: left injects a source, right releases heavy cells
    Paint,
    /// Line: left drags a cell, right bumps it
    Drag,
}

pub struct InteractionController {
    config: InteractionConfig,
    mode: PointerMode,
    grabbed: Option<usize>,
}

impl InteractionController {
    /// Grid rules. Rejects configs whose weights would break `weight > 0`.
    pub fn paint(config: InteractionConfig) -> Result<Self, ConfigError> {
        Self::with_mode(config, PointerMode::Paint)
    }

    /// Line rules, validated the same way
    pub fn drag(config: InteractionConfig) -> Result<Self, ConfigError> {
        Self::with_mode(config, PointerMode::Drag)
    }

    fn with_mode(config: InteractionConfig, mode: PointerMode) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, mode, grabbed: None })
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Cell currently held by a drag, if any
    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    /// Apply keys first, then the pointer
    pub fn apply<T: Topology>(&mut self, input: &InputSnapshot, sim: &mut Simulation<T>) {
        for key in &input.keys {
            match key {
                Key::ToggleRun => sim.toggle_running(),
                Key::StepOnce if !sim.is_running() => sim.step(),
                Key::StepOnce => {}
                Key::Reset => {
                    sim.reset();
                    self.grabbed = None;
                }
            }
        }

        match self.mode {
            PointerMode::Paint => self.paint_pointer(&input.pointer, &mut sim.lattice),
            PointerMode::Drag => self.drag_pointer(&input.pointer, &mut sim.lattice),
        }
    }

    fn paint_pointer<T: Topology>(&self, pointer: &PointerInput, lattice: &mut Lattice<T>) {
        let Some(index) = pointer.cell else {
            return;
        };

        if pointer.left_down {
            lattice.set_height(index, self.config.source_height);
            lattice.set_weight(index, self.config.source_weight);
        } else if pointer.right_down
            && lattice.weight(index).is_some_and(|w| w > self.config.release_threshold)
        {
            lattice.set_weight(index, self.config.release_weight);
        }
    }

    fn drag_pointer<T: Topology>(&mut self, pointer: &PointerInput, lattice: &mut Lattice<T>) {
        match (self.grabbed, pointer.left_down) {
            (None, true) => {
                if let Some(index) = pointer.cell {
                    lattice.set_active(index, false);
                    lattice.set_height(index, pointer.lift);
                    self.grabbed = Some(index);
                    debug!(index, "cell grabbed");
                }
            }
            (Some(index), true) => lattice.set_height(index, pointer.lift),
            (Some(index), false) => {
                lattice.set_active(index, true);
                self.grabbed = None;
                debug!(index, "cell released");
            }
            (None, false) => {
                if let (true, Some(index)) = (pointer.right_clicked, pointer.cell) {
                    if let Some(height) = lattice.height(index) {
                        lattice.set_height(index, height + self.config.bump_offset);
                    }
                }
            }
        }
    }
}
