//! Integrator enum for selecting the sweep implementation.

use super::engine;
use super::lattice::Lattice;
use super::topology::Topology;

/// Available sweep strategies. Both produce identical lattice states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Integrator {
    /// One thread, cell by cell
    Serial,
    /// Cells split across the rayon pool
    #[default]
    Parallel,
}

impl Integrator {
    /// Get all available integrators
    pub fn all() -> Vec<Integrator> {
        vec![Integrator::Serial, Integrator::Parallel]
    }

    /// Display name for the status line
    pub fn name(&self) -> &'static str {
        match self {
            Integrator::Serial => "Serial",
            Integrator::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Integrator::Serial => "Single-threaded sweep",
            Integrator::Parallel => "Rayon sweep, one task per cell chunk",
        }
    }

    /// Advance the lattice by one step
    pub fn step<T: Topology>(self, lattice: &mut Lattice<T>) {
        match self {
            Integrator::Serial => engine::step(lattice),
            Integrator::Parallel => engine::step_parallel(lattice),
        }
    }
}
