//! Full-grid rendering: the core's externally invoked entry point.

use crate::classify::classify;
use crate::config::{ConfigError, MapConfig};
use crate::grid::PixelGrid;
use crate::noise::NoiseSource;
use crate::sampler::elevation;

#[cfg(feature = "threading")]
use rayon::prelude::*;

/// Render the configured map.
///
/// Validates `cfg` up front (the render never fails part-way through the
/// grid) and then assigns every pixel exactly once, in row-major order.
/// The per-pixel computation touches no shared mutable state, so with the
/// `threading` feature rows are filled in parallel into disjoint slices and
/// the output is identical regardless of worker count.
pub fn render<N: NoiseSource + Sync>(cfg: &MapConfig, noise: &N) -> Result<PixelGrid, ConfigError> {
    cfg.validate()?;
    let mut grid = PixelGrid::new(cfg.width, cfg.height, cfg.palette.sea);
    fill(&mut grid, cfg, noise);
    Ok(grid)
}

#[cfg(not(feature = "threading"))]
fn fill<N: NoiseSource>(grid: &mut PixelGrid, cfg: &MapConfig, noise: &N) {
    for py in 0..cfg.height {
        for px in 0..cfg.width {
            grid.set(px, py, classify(elevation(px, py, cfg, noise), cfg));
        }
    }
}

#[cfg(feature = "threading")]
fn fill<N: NoiseSource + Sync>(grid: &mut PixelGrid, cfg: &MapConfig, noise: &N) {
    grid.data
        .par_chunks_exact_mut(cfg.width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, cell) in row.iter_mut().enumerate() {
                *cell = classify(elevation(px as u32, py as u32, cfg, noise), cfg);
            }
        });
}
