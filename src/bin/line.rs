//! Line visualizer: drag cells with the left button, bump them with the right.

use std::sync::OnceLock;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use spring_lattice::{
    application::LineLayout,
    cli::{self, LineArgs},
    input::{self, InputBuffer},
    rendering, InteractionController, Lattice, Palette, Simulation,
};

fn args() -> &'static LineArgs {
    static ARGS: OnceLock<LineArgs> = OnceLock::new();
    ARGS.get_or_init(LineArgs::parse)
}

fn layout() -> LineLayout {
    let args = args();
    LineLayout {
        cell_size: args.cell_size,
        canvas_height: args.height,
        ..LineLayout::default()
    }
}

fn window_conf() -> Conf {
    let args = args();
    let layout = layout();
    Conf {
        window_title: "Spring Lattice - Line".to_owned(),
        window_width: (2.0 * layout.margin + args.length as f32 * layout.cell_size) as i32,
        window_height: layout.canvas_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    cli::init_tracing();
    let args = args();

    let built = args.topology().and_then(|topology| {
        Ok((topology, InteractionController::drag(args.interaction.config())?))
    });
    let (topology, mut controller) = match built {
        Ok(built) => built,
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    let layout = layout();
    let palette = Palette::line();
    let mut sim = Simulation::new(Lattice::new(topology))
        .with_integrator(args.integrator)
        .with_tick_rate(args.tps);

    info!(
        length = args.length,
        cell_size = layout.cell_size,
        canvas_width = layout.canvas_width(&topology),
        "line visualizer started"
    );

    let mut buffer = InputBuffer::new();

    loop {
        if input::quit_requested() {
            break;
        }

        buffer.collect();
        if sim.advance_clock(get_frame_time()) {
            let snapshot = buffer.take_line(&layout, &sim.lattice);
            sim.tick(&mut controller, &snapshot);
        }

        clear_background(WHITE);
        rendering::draw_line(&sim.lattice, &layout, &palette);
        rendering::draw_hud(&sim, DARKGRAY);

        next_frame().await;
    }

    info!(generation = sim.generation, "line visualizer closed");
}
