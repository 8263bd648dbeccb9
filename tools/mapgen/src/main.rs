//! Terrain map renderer CLI.
//!
//! Samples fractal Perlin noise over a pixel grid, classifies each height
//! into a map color, and writes the result as an RGB PNG. All map semantics
//! live in relief-core; this binary only builds the configuration and
//! encodes the output.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use relief_core::noise::DEFAULT_SEED;
use relief_core::{render, Fbm, MapConfig, Palette, Policy, Rgb};

#[derive(Parser, Debug)]
#[command(name = "mapgen", about = "Render a noise-derived terrain map to a PNG")]
struct Args {
    /// Width of the final image in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Height of the final image in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Noise-space units spanned by the image width; higher zooms out.
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    scale: f64,

    /// Offset to apply to the horizontal noise position.
    #[arg(short = 'x', long, default_value_t = 0.0, allow_negative_numbers = true)]
    xoffset: f64,

    /// Offset to apply to the vertical noise position.
    #[arg(short = 'y', long, default_value_t = 0.0, allow_negative_numbers = true)]
    yoffset: f64,

    /// Fractal octave count.
    #[arg(long, default_value_t = 6)]
    octaves: u32,

    /// Noise permutation seed; the same seed reproduces the same map.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Bottom of the elevation range.
    #[arg(long, default_value_t = -10000.0, allow_negative_numbers = true)]
    min_height: f64,

    /// Top of the elevation range.
    #[arg(long, default_value_t = 10000.0, allow_negative_numbers = true)]
    max_height: f64,

    /// How high the map's sea level should be.
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    sea_level: f64,

    /// Width of the shallow-water band below sea level.
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    coast_diff: f64,

    /// Width of the shore band above sea level.
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    shore_diff: f64,

    /// Height above the range bottom where land turns to mountain.
    #[arg(long, default_value_t = 15000.0, allow_negative_numbers = true)]
    mountain_height: f64,

    /// Classification policy: biome or greyscale.
    #[arg(long, default_value = "biome")]
    policy: Policy,

    /// Sea color ("#RGB", "#RRGGBB" or "r,g,b").
    #[arg(long)]
    sea_color: Option<Rgb>,

    /// Coast color.
    #[arg(long)]
    coast_color: Option<Rgb>,

    /// Shore color.
    #[arg(long)]
    shore_color: Option<Rgb>,

    /// Land color.
    #[arg(long)]
    land_color: Option<Rgb>,

    /// Mountain color.
    #[arg(long)]
    mountain_color: Option<Rgb>,

    /// Load the whole configuration from a JSON file instead of flags.
    #[arg(long)]
    config: Option<String>,

    /// Output PNG path.
    #[arg(short, long, default_value = "map.png")]
    output: String,
}

fn build_config(args: &Args) -> Result<MapConfig> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {path}"))?;
        let cfg = MapConfig::from_json_str(&text)
            .with_context(|| format!("invalid config file {path}"))?;
        return Ok(cfg);
    }

    let defaults = Palette::default();
    Ok(MapConfig {
        width: args.width,
        height: args.height,
        scale: args.scale,
        xoffset: args.xoffset,
        yoffset: args.yoffset,
        octaves: args.octaves,
        seed: args.seed,
        min_height: args.min_height,
        max_height: args.max_height,
        sea_level: args.sea_level,
        coast_diff: args.coast_diff,
        shore_diff: args.shore_diff,
        mountain_height: args.mountain_height,
        policy: args.policy,
        palette: Palette {
            sea: args.sea_color.unwrap_or(defaults.sea),
            coast: args.coast_color.unwrap_or(defaults.coast),
            shore: args.shore_color.unwrap_or(defaults.shore),
            land: args.land_color.unwrap_or(defaults.land),
            mountain: args.mountain_color.unwrap_or(defaults.mountain),
        },
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = build_config(&args)?;

    println!(
        "Rendering {}×{} map (scale {}, {} octaves, seed {})…",
        cfg.width, cfg.height, cfg.scale, cfg.octaves, cfg.seed
    );
    let noise = Fbm::new(cfg.seed);
    let grid = render(&cfg, &noise)?;

    let img = image::RgbImage::from_raw(grid.width, grid.height, grid.to_rgb8())
        .context("pixel buffer does not match image dimensions")?;
    img.save(&args.output)
        .with_context(|| format!("failed to save {}", args.output))?;
    println!("Wrote {}", args.output);
    Ok(())
}
