//! Pixel-to-elevation sampling.

use crate::config::MapConfig;
use crate::noise::NoiseSource;

/// Map a pixel coordinate to an elevation in `[min_height, max_height]`.
///
/// World coordinates are `px * freq + xoffset` with `freq = scale / width`,
/// so `scale` counts the noise-space units spanned by the image width
/// regardless of resolution. The noise value in [-1, 1] is then remapped
/// linearly onto the configured elevation range; the remap is exact and
/// monotonic, so ordering of noise values is preserved.
///
/// `px`/`py` must lie inside the grid; the renderer is the only caller and
/// iterates in range, so this is a debug assertion rather than a clamp.
pub fn elevation<N: NoiseSource>(px: u32, py: u32, cfg: &MapConfig, noise: &N) -> f64 {
    debug_assert!(px < cfg.width && py < cfg.height, "pixel ({px},{py}) outside grid");
    let freq = cfg.scale / cfg.width as f64;
    let nx = px as f64 * freq + cfg.xoffset;
    let ny = py as f64 * freq + cfg.yoffset;
    let n = noise.sample(nx, ny, cfg.octaves);
    cfg.min_height + (cfg.max_height - cfg.min_height) * ((n + 1.0) / 2.0)
}
