use proptest::prelude::*;
use spring_lattice::application::{InputSnapshot, Key, PointerInput};
use spring_lattice::domain::{step, step_parallel, is_pinned_weight};
use spring_lattice::{
    GridTopology, InteractionConfig, InteractionController, Lattice, LineTopology, Simulation,
};

const ROWS: usize = 6;
const COLS: usize = 8;

fn grid() -> GridTopology {
    GridTopology::new(ROWS, COLS, Some(5)).unwrap()
}

/// One tick of arbitrary user input
fn input_strategy(cells: usize) -> impl Strategy<Value = InputSnapshot> {
    let key = prop_oneof![Just(Key::ToggleRun), Just(Key::StepOnce), Just(Key::Reset)];
    (
        proptest::option::of(0..cells),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        -300.0f64..300.0,
        proptest::collection::vec(key, 0..2),
    )
        .prop_map(|(cell, left_down, right_down, right_clicked, lift, keys)| InputSnapshot {
            pointer: PointerInput { cell, lift, left_down, right_down, right_clicked },
            keys,
        })
}

/// (cell, height, weight) sources written straight into a lattice
fn sources(cells: usize) -> impl Strategy<Value = Vec<(usize, f64, f64)>> {
    proptest::collection::vec((0..cells, -1e4f64..1e4, 1.0f64..2000.0), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    /// Weights stay strictly positive under any grid interaction sequence.
    #[test]
    fn grid_weights_stay_positive(inputs in proptest::collection::vec(input_strategy(ROWS * COLS), 1..60)) {
        let mut sim = Simulation::new(Lattice::new(grid()));
        let mut controller = InteractionController::paint(InteractionConfig::default()).unwrap();

        for input in &inputs {
            sim.tick(&mut controller, input);
            prop_assert!(sim.lattice.weights().iter().all(|&w| w > 0.0));
        }
    }

    /// Arbitrary configured weights: either rejected up front or never
    /// produce a non-positive weight in the lattice.
    #[test]
    fn configured_weights_never_reach_zero(
        source_weight in -5.0f64..50.0,
        release_weight in -5.0f64..5.0,
        inputs in proptest::collection::vec(input_strategy(ROWS * COLS), 1..40),
    ) {
        let config = InteractionConfig { source_weight, release_weight, ..InteractionConfig::default() }
            .with_release_threshold(1.0);
        let Ok(mut controller) = InteractionController::paint(config) else {
            prop_assert!(source_weight <= 0.0 || release_weight <= 0.0);
            return Ok(());
        };

        let mut sim = Simulation::new(Lattice::new(grid()));
        for input in &inputs {
            sim.tick(&mut controller, input);
            prop_assert!(sim.lattice.weights().iter().all(|&w| w > 0.0));
        }
    }

    /// Same for the line with drag and bump gestures.
    #[test]
    fn line_weights_stay_positive(inputs in proptest::collection::vec(input_strategy(12), 1..60)) {
        let mut sim = Simulation::new(Lattice::new(LineTopology::new(12).unwrap()));
        let mut controller = InteractionController::drag(InteractionConfig::default()).unwrap();

        for input in &inputs {
            sim.tick(&mut controller, input);
            prop_assert!(sim.lattice.weights().iter().all(|&w| w > 0.0));
        }
    }

    /// Pinned cells keep their height and velocity across any number of steps.
    #[test]
    fn pinned_cells_do_not_move(writes in sources(ROWS * COLS), steps in 1usize..200) {
        let mut lattice = Lattice::new(grid());
        for &(cell, height, weight) in &writes {
            if !is_pinned_weight(lattice.weight(cell).unwrap()) {
                lattice.set_height(cell, height);
                lattice.set_weight(cell, weight);
            }
        }
        let pinned: Vec<usize> = (0..lattice.len())
            .filter(|&i| is_pinned_weight(lattice.weight(i).unwrap()))
            .collect();
        prop_assert_eq!(pinned.len(), ROWS);

        for _ in 0..steps {
            step(&mut lattice);
        }
        for &i in &pinned {
            prop_assert_eq!(lattice.height(i), Some(0.0));
            prop_assert_eq!(lattice.velocity(i), Some(0.0));
        }
    }

    /// Any history followed by reset equals a fresh lattice.
    #[test]
    fn reset_is_deterministic(writes in sources(ROWS * COLS), steps in 0usize..50) {
        let mut lattice = Lattice::new(grid());
        for &(cell, height, weight) in &writes {
            lattice.set_height(cell, height);
            lattice.set_weight(cell, weight);
        }
        for _ in 0..steps {
            step(&mut lattice);
        }
        lattice.reset();
        prop_assert_eq!(lattice, Lattice::new(grid()));
    }

    /// After a step the snapshot equals the heights; serial and parallel agree.
    #[test]
    fn sweeps_commit_and_agree(writes in sources(ROWS * COLS), steps in 1usize..40) {
        let mut serial = Lattice::new(grid());
        for &(cell, height, weight) in &writes {
            serial.set_height(cell, height);
            serial.set_weight(cell, weight);
        }
        let mut parallel = serial.clone();

        for _ in 0..steps {
            step(&mut serial);
            step_parallel(&mut parallel);
            prop_assert_eq!(serial.prev_heights(), serial.heights());
        }
        prop_assert_eq!(serial, parallel);
    }
}
