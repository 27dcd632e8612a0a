mod controller;
mod layout;
mod simulation;

pub use controller::{InteractionController, InputSnapshot, PointerInput, PointerMode, Key};
pub use layout::{GridLayout, LineLayout};
pub use simulation::{Simulation, RunState};
