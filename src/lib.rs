pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod host;
pub mod noise;
pub mod rng;

use std::time::Instant;

pub use config::NoiseParams;
pub use error::NoiseError;
pub use grid::NoiseGrid;

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// One-shot generation: allocate a grid, fill it from `params`, and report
/// per-stage timings alongside it.
pub fn generate(params: &NoiseParams) -> Result<(NoiseGrid, Vec<Timing>), NoiseError> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let mut grid = NoiseGrid::new();

    let t = Instant::now();
    generator::generate_into(&mut grid, params)?;
    timings.push(Timing {
        name: "fbm",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    Ok((grid, timings))
}
