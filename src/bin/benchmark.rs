//! Generation throughput: serial vs rayon rule evaluation on random soups

use std::time::Instant;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use fading_life::{CellCoord, EngineConfig, LifeEngine, Simulation, SparseGrid};

/// Random soup of `size`x`size` cells at 50% density, fades settled
fn soup(size: i64) -> Result<SparseGrid> {
    let config = EngineConfig { fade_rate_per_sec: 1.0, ..EngineConfig::default() };
    let mut sim = Simulation::new(config)?;
    sim.set_paused(true);
    sim.randomize_with(&mut StdRng::seed_from_u64(42), CellCoord::new(0, 0), size, size);
    sim.on_tick(1_000.0);
    Ok(sim.grid().clone())
}

fn benchmark(engine: LifeEngine, mut grid: SparseGrid, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        engine.step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<()> {
    println!("=== Sparse Life Step Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512];
    let iterations = 20;

    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Soup", "Alive", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let grid = soup(size)?;
        let alive = grid.live_count();

        let serial_ms = benchmark(LifeEngine::serial(), grid.clone(), iterations);
        let parallel_ms = benchmark(LifeEngine::parallel(), grid, iterations);

        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            alive,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
    Ok(())
}
