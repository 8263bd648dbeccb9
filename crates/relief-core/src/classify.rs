//! Elevation-to-color classification policies.

use crate::color::Rgb;
use crate::config::{MapConfig, Policy};

/// Classify one elevation sample under the configured policy.
pub fn classify(elevation: f64, cfg: &MapConfig) -> Rgb {
    match cfg.policy {
        Policy::Biome => biome_bands(elevation, cfg),
        Policy::Greyscale => grey_ramp(elevation, cfg),
    }
}

/// Ordered threshold bands, first match wins.
///
/// The land test is strict `>`, so an elevation exactly at `sea_level` is
/// water. The coast and shore bands are half-open: a zero `coast_diff` or
/// `shore_diff` collapses that band to nothing.
fn biome_bands(elevation: f64, cfg: &MapConfig) -> Rgb {
    let p = &cfg.palette;
    if elevation > cfg.sea_level {
        if elevation - cfg.min_height < cfg.mountain_height {
            if elevation - cfg.sea_level < cfg.shore_diff {
                p.shore
            } else {
                p.land
            }
        } else {
            p.mountain
        }
    } else if cfg.sea_level - elevation < cfg.coast_diff {
        p.coast
    } else {
        p.sea
    }
}

/// Linear grey ramp over the elevation range.
///
/// At `elevation == max_height` the scaled value reaches 256; the clamp
/// keeps the channel inside u8 range.
fn grey_ramp(elevation: f64, cfg: &MapConfig) -> Rgb {
    let t = (elevation - cfg.min_height) / (cfg.max_height - cfg.min_height);
    let h = (256.0 * t).floor().clamp(0.0, 255.0) as u8;
    Rgb::new(h, h, h)
}
