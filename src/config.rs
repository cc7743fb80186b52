//! System configuration: the body catalogue and UI ranges
//!
//! Configuration is read once at startup from JSON. Lookup order:
//! 1. the path in `BEVYSOLAR_CONFIG`, if set
//! 2. `system.json` in the platform config directory
//!    (e.g. `~/.config/bevysolar/` on Linux)
//! 3. the built-in catalogue

use anyhow::{Context, bail};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::orbital::DEFAULT_ORBIT_SEGMENTS;

pub const CONFIG_ENV_VAR: &str = "BEVYSOLAR_CONFIG";
const CONFIG_FILE_NAME: &str = "system.json";

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    pub radius: f64,
    pub orbit_distance: f64,
    pub angular_speed: f64,
    /// 0xRRGGBB
    pub color: u32,
}

impl BodySpec {
    pub fn new(name: &str, radius: f64, orbit_distance: f64, color: u32, angular_speed: f64) -> Self {
        Self {
            name: name.to_string(),
            radius,
            orbit_distance,
            angular_speed,
            color,
        }
    }

    pub fn bevy_color(&self) -> Color {
        hex_color(self.color)
    }
}

pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Inclusive range accepted for a per-body angular speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self { min: 0.0, max: 0.05 }
    }
}

impl SpeedRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Startup configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub bodies: Vec<BodySpec>,
    pub speed_range: SpeedRange,
    /// Upper bound of the global speed slider
    pub multiplier_max: f64,
    pub orbit_segments: usize,
    pub star_count: usize,
    /// Side length of the cube the starfield is scattered in
    pub star_spread: f32,
    pub star_seed: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
            speed_range: SpeedRange::default(),
            multiplier_max: 5.0,
            orbit_segments: DEFAULT_ORBIT_SEGMENTS,
            star_count: 5000,
            star_spread: 1000.0,
            star_seed: 0x5eed_5015,
        }
    }
}

/// The eight planets, scaled for display rather than realism
pub fn default_bodies() -> Vec<BodySpec> {
    vec![
        BodySpec::new("Mercury", 0.5, 4.0, 0x909090, 0.013),
        BodySpec::new("Venus", 0.8, 6.0, 0xffcc99, 0.01),
        BodySpec::new("Earth", 0.85, 8.0, 0x2a60ff, 0.009),
        BodySpec::new("Mars", 0.45, 10.0, 0xff4500, 0.007),
        BodySpec::new("Jupiter", 0.55, 11.0, 0xd2b48c, 0.006),
        BodySpec::new("Saturn", 0.65, 13.0, 0xf5deb3, 0.003),
        BodySpec::new("Uranus", 0.75, 15.0, 0xadd8e6, 0.002),
        BodySpec::new("Neptune", 0.85, 16.0, 0x4169e1, 0.001),
    ]
}

impl SystemConfig {
    /// Resolve and load the configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self, anyhow::Error> {
        match Self::resolve_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("No config at {}, using built-in catalogue", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Config file location, if one can be determined
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "bevysolar").map(|d| d.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, anyhow::Error> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: SystemConfig = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        info!(
            "Loaded {} bodies from {}",
            config.bodies.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let range = self.speed_range;
        if !(range.min.is_finite() && range.max.is_finite() && range.min <= range.max) {
            bail!("speed range [{}, {}] is not a valid interval", range.min, range.max);
        }
        if !(self.multiplier_max.is_finite() && self.multiplier_max > 0.0) {
            bail!("multiplier_max must be positive, got {}", self.multiplier_max);
        }
        if !(self.star_spread.is_finite() && self.star_spread > 0.0) {
            bail!("star_spread must be positive, got {}", self.star_spread);
        }
        for body in &self.bodies {
            if !range.contains(body.angular_speed) {
                bail!(
                    "'{}' speed {} is outside [{}, {}]",
                    body.name,
                    body.angular_speed,
                    range.min,
                    range.max
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(test_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "bevysolar-config-{}-{}-{}",
            test_name,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        dir
    }

    #[test]
    fn test_default_catalogue() {
        let config = SystemConfig::default();
        assert_eq!(config.bodies.len(), 8);
        assert_eq!(config.bodies[2].name, "Earth");
        assert_eq!(config.bodies[2].orbit_distance, 8.0);
        assert_eq!(config.orbit_segments, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = unique_temp_dir("load");
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{
                "bodies": [
                    { "name": "Vulcan", "radius": 0.3, "orbit_distance": 3.0,
                      "angular_speed": 0.02, "color": 16711680 }
                ],
                "multiplier_max": 10.0
            }"#,
        )
        .unwrap();

        let config = SystemConfig::load_from(&path).expect("Failed to load config");
        assert_eq!(config.bodies.len(), 1);
        assert_eq!(config.bodies[0].name, "Vulcan");
        assert_eq!(config.multiplier_max, 10.0);
        // Unspecified fields fall back to defaults
        assert_eq!(config.speed_range, SpeedRange::default());
        assert_eq!(config.star_count, 5000);
    }

    #[test]
    fn test_out_of_range_speed_rejected() {
        let dir = unique_temp_dir("range");
        let path = dir.join(CONFIG_FILE_NAME);
        let mut config = SystemConfig::default();
        config.bodies[0].angular_speed = 0.2;
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert!(SystemConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = unique_temp_dir("malformed");
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(SystemConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_hex_color() {
        let c = hex_color(0xff4500).to_srgba();
        assert!((c.red - 1.0).abs() < 1e-6);
        assert!((c.green - 69.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.blue, 0.0);
    }
}
