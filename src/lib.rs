// Domain layer - lattice, topologies, update engine
pub mod domain;

// Application layer - simulation state, interaction rules, screen geometry
pub mod application;

// Configuration and errors
pub mod config;
pub mod error;
pub mod cli;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Lattice, Topology, GridTopology, LineTopology, Integrator};
pub use application::{Simulation, InteractionController, InputSnapshot, RunState};
pub use config::InteractionConfig;
pub use error::ConfigError;
pub use rendering::{Palette, Rgb};
