use std::sync::OnceLock;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use spring_lattice::{
    application::GridLayout,
    cli::{self, GridArgs},
    input::{self, InputBuffer},
    rendering, InteractionController, Lattice, Palette, Simulation,
};

fn args() -> &'static GridArgs {
    static ARGS: OnceLock<GridArgs> = OnceLock::new();
    ARGS.get_or_init(GridArgs::parse)
}

fn layout() -> GridLayout {
    let args = args();
    GridLayout::fit(args.rows.max(1), args.cols.max(1), args.max_width, args.max_height)
}

fn window_conf() -> Conf {
    let args = args();
    let layout = layout();
    Conf {
        window_title: "Spring Lattice - Grid".to_owned(),
        window_width: (args.cols.max(1) as f32 * layout.cell_size) as i32,
        window_height: (args.rows.max(1) as f32 * layout.cell_size) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    cli::init_tracing();
    let args = args();

    let built = args.topology().and_then(|topology| {
        Ok((topology, InteractionController::paint(args.interaction.config())?))
    });
    let (topology, mut controller) = match built {
        Ok(built) => built,
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    let layout = layout();
    let palette = Palette::grid();
    let mut sim = Simulation::new(Lattice::new(topology))
        .with_integrator(args.integrator)
        .with_tick_rate(args.tps);

    info!(
        rows = args.rows,
        cols = args.cols,
        pinned_column = ?topology.pinned_column(),
        cell_size = layout.cell_size,
        integrator = sim.integrator.name(),
        "grid visualizer started"
    );

    let mut buffer = InputBuffer::new();

    loop {
        if input::quit_requested() {
            break;
        }

        buffer.collect();
        if sim.advance_clock(get_frame_time()) {
            let snapshot = buffer.take_grid(&layout, sim.lattice.topology());
            sim.tick(&mut controller, &snapshot);
        }

        clear_background(BLACK);
        rendering::draw_grid(&sim.lattice, &layout, &palette);
        rendering::draw_hud(&sim, YELLOW);

        next_frame().await;
    }

    info!(generation = sim.generation, "grid visualizer closed");
}
