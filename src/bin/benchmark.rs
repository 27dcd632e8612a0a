//! Performance benchmark comparing serial and parallel sweeps

use std::time::Instant;
use rand::Rng;
use spring_lattice::{GridTopology, Integrator, InteractionConfig, Lattice};

/// Grid with a few hundred random sources so the sweep has real work to do
fn seeded_grid(size: usize) -> Lattice<GridTopology> {
    let topology = GridTopology::with_default_wall(size, size).expect("benchmark sizes are non-zero");
    let mut lattice = Lattice::new(topology);
    let config = InteractionConfig::default();
    let mut rng = rand::rng();

    for _ in 0..(size * size / 1000).max(1) {
        let index = rng.random_range(0..lattice.len());
        lattice.set_height(index, config.source_height);
        lattice.set_weight(index, config.source_weight);
    }
    lattice
}

fn benchmark(integrator: Integrator, size: usize, iterations: u32) -> f64 {
    let mut lattice = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        integrator.step(&mut lattice);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Spring Lattice Sweep Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000, 4000];
    let iterations = 20;

    print!("{:>10}", "Size");
    for integrator in Integrator::all() {
        print!(" {:>12}", integrator.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let timings: Vec<f64> = Integrator::all()
            .into_iter()
            .map(|integrator| benchmark(integrator, size, iterations))
            .collect();

        print!("{:>10}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>12.2}", ms);
        }
        println!(" {:>9.1}x", timings[0] / timings[1]);
    }

    println!("\n=== Throughput at 4000x4000 ===\n");

    let cells = 4000 * 4000;
    for integrator in Integrator::all() {
        let ms = benchmark(integrator, 4000, iterations);
        println!(
            "{:<10} {:.2} ms/step, {:.1}M cells/sec ({})",
            integrator.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0,
            integrator.description(),
        );
    }
}
