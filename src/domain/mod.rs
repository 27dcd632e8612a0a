mod topology;
mod lattice;
mod engine;
mod integrator;

pub use topology::{Topology, GridTopology, LineTopology, Neighbors};
pub use lattice::{Lattice, PINNED_WEIGHT, is_pinned_weight};
pub use engine::{step, step_parallel};
pub use integrator::Integrator;
