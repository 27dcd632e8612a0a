//! Command-line flags for the visualizer binaries.

use clap::{Args, Parser};
use crate::config::{validate_tick_rate, InteractionConfig};
use crate::domain::{GridTopology, Integrator, LineTopology};
use crate::error::ConfigError;

/// Interaction constants shared by both visualizers. The controller
/// validates them when it is built.
#[derive(Args, Debug, Clone)]
pub struct InteractionArgs {
    /// Height written by the source brush
    #[arg(long, default_value_t = 10_000.0, allow_negative_numbers = true)]
    pub source_height: f64,

    /// Weight written by the source brush
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub source_weight: f64,

    /// Right click only releases cells heavier than this
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub release_threshold: f64,

    /// Weight a released cell gets
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub release_weight: f64,

    /// Height added by a bump
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub bump_offset: f64,
}

impl InteractionArgs {
    pub fn config(&self) -> InteractionConfig {
        InteractionConfig {
            source_height: self.source_height,
            source_weight: self.source_weight,
            release_threshold: self.release_threshold,
            release_weight: self.release_weight,
            bump_offset: self.bump_offset,
        }
    }
}

/// Grid visualizer options
#[derive(Parser, Debug, Clone)]
#[command(name = "spring_lattice", about = "Interactive spring lattice on a 2D grid")]
pub struct GridArgs {
    #[arg(long, default_value_t = 250)]
    pub rows: usize,

    #[arg(long, default_value_t = 250)]
    pub cols: usize,

    /// Column of pinned cells (defaults to three fifths across)
    #[arg(long)]
    pub pinned_column: Option<usize>,

    /// Disable the pinned column entirely
    #[arg(long, conflicts_with = "pinned_column")]
    pub no_wall: bool,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 25)]
    pub tps: u32,

    #[arg(long, value_enum, default_value_t = Integrator::Parallel)]
    pub integrator: Integrator,

    /// Largest window the canvas may occupy
    #[arg(long, default_value_t = 1200.0)]
    pub max_width: f32,

    #[arg(long, default_value_t = 800.0)]
    pub max_height: f32,

    #[command(flatten)]
    pub interaction: InteractionArgs,
}

impl GridArgs {
    pub fn topology(&self) -> Result<GridTopology, ConfigError> {
        validate_tick_rate(self.tps)?;
        let column = if self.no_wall {
            None
        } else {
            Some(self.pinned_column.unwrap_or(GridTopology::default_wall(self.cols)))
        };
        GridTopology::new(self.rows, self.cols, column)
    }
}

/// Line visualizer options
#[derive(Parser, Debug, Clone)]
#[command(name = "line", about = "Interactive spring lattice on a single row")]
pub struct LineArgs {
    #[arg(long, default_value_t = 275)]
    pub length: usize,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    pub tps: u32,

    /// Pixel side of each cell
    #[arg(long, default_value_t = 4.0)]
    pub cell_size: f32,

    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    #[arg(long, value_enum, default_value_t = Integrator::Serial)]
    pub integrator: Integrator,

    #[command(flatten)]
    pub interaction: InteractionArgs,
}

impl LineArgs {
    pub fn topology(&self) -> Result<LineTopology, ConfigError> {
        validate_tick_rate(self.tps)?;
        LineTopology::new(self.length)
    }
}

/// Install the fmt subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
