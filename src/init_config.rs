// init_config.rs
// Loads runtime overrides for the simulation from a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;
use crate::error::{Result, SimError};

/// Default config file, looked up relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "coulomb_sim.toml";
/// Environment variable overriding `DEFAULT_CONFIG_PATH`.
pub const CONFIG_PATH_ENV: &str = "COULOMB_SIM_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimConfig {
    /// Wall-clock ticks per second of the fixed-rate scheduler.
    pub tick_hz: f32,
    /// Random particles spawned at start-up.
    pub initial_particles: usize,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Half-size of the cube enclosed by the boundary walls.
    pub boundary_half_extent: f32,
    /// Half-size of the cube used for regeneration without active walls.
    pub default_half_extent: f32,
    /// Restitution applied to the normal velocity on wall contact.
    pub wall_restitution: f32,
    /// Whether the walls start enabled.
    pub boundaries_active: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: config::DEFAULT_TICK_HZ,
            initial_particles: config::DEFAULT_INITIAL_PARTICLES,
            seed: None,
            boundary_half_extent: config::DEFAULT_BOUNDARY_HALF_EXTENT,
            default_half_extent: config::DEFAULT_HALF_EXTENT,
            wall_restitution: config::DEFAULT_WALL_RESTITUTION,
            boundaries_active: false,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `$COULOMB_SIM_CONFIG` or `coulomb_sim.toml`. A missing file
    /// yields the defaults; a malformed one is an error.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            tracing::debug!(%path, "no config file, using defaults");
            return Ok(Self::default());
        }
        tracing::info!(%path, "loading config");
        Self::load_from_file(path)
    }

    /// Unscaled duration of one fixed tick in seconds.
    pub fn base_tick(&self) -> f32 {
        config::tick_interval(self.tick_hz).as_secs_f32()
    }

    fn validate(&self) -> Result<()> {
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(SimError::Config("tick_hz must be finite and > 0".into()));
        }
        for (name, value) in [
            ("boundary_half_extent", self.boundary_half_extent),
            ("default_half_extent", self.default_half_extent),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::Config(format!("{name} must be finite and > 0")));
            }
        }
        if !(0.0..=1.0).contains(&self.wall_restitution) {
            return Err(SimError::Config("wall_restitution must be within [0, 1]".into()));
        }
        Ok(())
    }
}
