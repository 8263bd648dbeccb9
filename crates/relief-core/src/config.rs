//! Render configuration and its up-front validation.
//!
//! A [`MapConfig`] is built once (from CLI flags or a JSON file), validated,
//! and then passed by reference into every stage. Nothing mutates it after
//! construction, and the renderer refuses to start on an invalid one, so a
//! render can never fail part-way through the grid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{self, Rgb};
use crate::noise::DEFAULT_SEED;

/// How an elevation value is turned into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Ordered threshold bands: sea, coast, shore, land, mountain.
    Biome,
    /// Linear elevation → grey ramp.
    Greyscale,
}

impl FromStr for Policy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "biome" | "biome-banding" => Ok(Policy::Biome),
            "greyscale" | "grayscale" | "greyscale-ramp" => Ok(Policy::Greyscale),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// The five named map colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub sea: Rgb,
    pub coast: Rgb,
    pub shore: Rgb,
    pub land: Rgb,
    pub mountain: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sea: color::SEA,
            coast: color::COAST,
            shore: color::SHORE,
            land: color::LAND,
            mountain: color::MOUNTAIN,
        }
    }
}

/// Full render configuration.
///
/// Missing fields in a JSON config file fall back to the documented defaults
/// (container-level `serde(default)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Noise-space units spanned by the image width; higher zooms out.
    pub scale: f64,
    /// Offset added to the horizontal noise position.
    pub xoffset: f64,
    /// Offset added to the vertical noise position.
    pub yoffset: f64,
    /// Fractal octave count, at least 1.
    pub octaves: u32,
    /// Noise permutation seed. Identical configurations (seed included)
    /// reproduce the map bit-for-bit.
    pub seed: u32,
    /// Bottom of the elevation range.
    pub min_height: f64,
    /// Top of the elevation range, strictly above `min_height`.
    pub max_height: f64,
    /// Elevations above this are land; at or below, water.
    pub sea_level: f64,
    /// Width of the shallow-water band below sea level, ≥ 0.
    pub coast_diff: f64,
    /// Width of the shore band above sea level, ≥ 0.
    pub shore_diff: f64,
    /// Height above `min_height` where land turns to mountain.
    pub mountain_height: f64,
    pub policy: Policy,
    pub palette: Palette,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 3.0,
            xoffset: 0.0,
            yoffset: 0.0,
            octaves: 6,
            seed: DEFAULT_SEED,
            min_height: -10_000.0,
            max_height: 10_000.0,
            sea_level: 1_000.0,
            coast_diff: 1_000.0,
            shore_diff: 1_000.0,
            mountain_height: 15_000.0,
            policy: Policy::Biome,
            palette: Palette::default(),
        }
    }
}

impl MapConfig {
    /// Reject invalid configurations before any rendering begins.
    ///
    /// The band thresholds carry no required ordering among themselves
    /// (`shore_diff` may exceed `coast_diff`); only signs and the elevation
    /// range are checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_height < self.max_height) {
            return Err(ConfigError::InvalidElevationRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        if self.octaves == 0 {
            return Err(ConfigError::InvalidOctaves);
        }
        if self.coast_diff < 0.0 {
            return Err(ConfigError::NegativeBandWidth {
                name: "coast_diff",
                value: self.coast_diff,
            });
        }
        if self.shore_diff < 0.0 {
            return Err(ConfigError::NegativeBandWidth {
                name: "shore_diff",
                value: self.shore_diff,
            });
        }
        Ok(())
    }

    /// Load a configuration from JSON, filling unset fields with defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("min_height ({min}) must be strictly below max_height ({max})")]
    InvalidElevationRange { min: f64, max: f64 },
    #[error("octave count must be at least 1")]
    InvalidOctaves,
    #[error("{name} must be non-negative, got {value}")]
    NegativeBandWidth { name: &'static str, value: f64 },
    #[error("unknown classification policy `{0}`")]
    UnknownPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = MapConfig::default();
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.octaves, 6);
        assert_eq!(cfg.sea_level, 1_000.0);
        assert_eq!(cfg.mountain_height, 15_000.0);
        assert_eq!(cfg.palette.sea, Rgb::new(0, 0, 255));
        assert_eq!(cfg.palette.mountain, Rgb::new(122, 102, 78));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let cfg = MapConfig { width: 0, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidDimensions { .. })));
        let cfg = MapConfig { height: 0, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidDimensions { .. })));
    }

    #[test]
    fn inverted_elevation_range_is_rejected() {
        let cfg = MapConfig { min_height: 10.0, max_height: 10.0, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidElevationRange { .. })));
    }

    #[test]
    fn zero_octaves_are_rejected() {
        let cfg = MapConfig { octaves: 0, ..MapConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidOctaves));
    }

    #[test]
    fn negative_band_widths_are_rejected() {
        let cfg = MapConfig { coast_diff: -1.0, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NegativeBandWidth { name: "coast_diff", .. })));
        let cfg = MapConfig { shore_diff: -0.5, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NegativeBandWidth { name: "shore_diff", .. })));
    }

    #[test]
    fn zero_band_widths_are_valid() {
        let cfg = MapConfig { coast_diff: 0.0, shore_diff: 0.0, ..MapConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!("biome".parse::<Policy>().unwrap(), Policy::Biome);
        assert_eq!("biome-banding".parse::<Policy>().unwrap(), Policy::Biome);
        assert_eq!("greyscale".parse::<Policy>().unwrap(), Policy::Greyscale);
        assert_eq!("grayscale".parse::<Policy>().unwrap(), Policy::Greyscale);
        assert!(matches!(
            "sepia".parse::<Policy>(),
            Err(ConfigError::UnknownPolicy(name)) if name == "sepia"
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = MapConfig::from_json_str(r#"{"width": 4, "policy": "greyscale"}"#).unwrap();
        assert_eq!(cfg.width, 4);
        assert_eq!(cfg.policy, Policy::Greyscale);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.palette, Palette::default());
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let cfg = MapConfig {
            width: 32,
            height: 16,
            seed: 7,
            policy: Policy::Greyscale,
            ..MapConfig::default()
        };
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(MapConfig::from_json_str(&text).unwrap(), cfg);
    }
}
