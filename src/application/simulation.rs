use std::time::Instant;
use tracing::debug;
use crate::domain::{Integrator, Lattice, Topology};
use super::controller::{InputSnapshot, InteractionController};

/// Host loop state. Only the toggle key moves between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RunState::Running => "Running",
            RunState::Paused => "Paused",
        }
    }
}

/// Simulation orchestrates a lattice, its run state and tick pacing.
pub struct Simulation<T: Topology> {
    pub lattice: Lattice<T>,
    pub run_state: RunState,
    pub integrator: Integrator,
    pub generation: u64,
    pub ticks_per_second: f32,
    pub update_timer: f32,
    pub last_step_ms: f32,
}

impl<T: Topology> Simulation<T> {
    pub fn new(lattice: Lattice<T>) -> Self {
        Self {
            lattice,
            run_state: RunState::default(),
            integrator: Integrator::default(),
            generation: 0,
            ticks_per_second: 25.0,
            update_timer: 0.0,
            last_step_ms: 0.0,
        }
    }

    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn with_tick_rate(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second.max(1) as f32;
        self
    }

    pub fn with_run_state(mut self, run_state: RunState) -> Self {
        self.run_state = run_state;
        self
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn toggle_running(&mut self) {
        self.run_state = self.run_state.toggled();
        debug!(state = self.run_state.label(), "run state changed");
    }

    /// Advance the lattice by exactly one step
    pub fn step(&mut self) {
        let start = Instant::now();
        self.integrator.step(&mut self.lattice);
        self.last_step_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Restore the lattice defaults and the generation counter
    pub fn reset(&mut self) {
        self.lattice.reset();
        self.generation = 0;
        debug!(cells = self.lattice.len(), "lattice reset");
    }

    /// One host tick: apply input, then step if running
    pub fn tick(&mut self, controller: &mut InteractionController, input: &InputSnapshot) {
        controller.apply(input, self);
        if self.is_running() {
            self.step();
        }
    }

    /// Accumulate frame time; true when the next tick is due
    pub fn advance_clock(&mut self, delta_time: f32) -> bool {
        self.update_timer += delta_time;
        if self.update_timer >= 1.0 / self.ticks_per_second {
            self.update_timer = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InteractionConfig;
    use crate::domain::LineTopology;

    fn sim(length: usize) -> Simulation<LineTopology> {
        Simulation::new(Lattice::new(LineTopology::new(length).unwrap()))
    }

    #[test]
    fn test_starts_running() {
        let sim = sim(3);
        assert_eq!(sim.run_state, RunState::Running);
        assert_eq!(sim.generation, 0);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut sim = sim(3);
        sim.toggle_running();
        assert_eq!(sim.run_state, RunState::Paused);
        sim.toggle_running();
        assert_eq!(sim.run_state, RunState::Running);
    }

    #[test]
    fn test_tick_steps_only_when_running() {
        let mut sim = sim(5);
        let mut controller = InteractionController::drag(InteractionConfig::default()).unwrap();
        let idle = InputSnapshot::default();

        sim.tick(&mut controller, &idle);
        assert_eq!(sim.generation, 1);

        sim.toggle_running();
        sim.tick(&mut controller, &idle);
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn test_reset_keeps_run_state() {
        let mut sim = sim(5).with_run_state(RunState::Paused);
        sim.lattice.set_height(2, 9.0);
        sim.step();
        sim.reset();

        assert_eq!(sim.generation, 0);
        assert_eq!(sim.run_state, RunState::Paused);
        assert_eq!(sim.lattice, Lattice::new(LineTopology::new(5).unwrap()));
    }

    #[test]
    fn test_clock_paces_ticks() {
        let mut sim = sim(3).with_tick_rate(10);
        assert!(!sim.advance_clock(0.05));
        assert!(sim.advance_clock(0.06));
        assert!(!sim.advance_clock(0.01));
    }
}
