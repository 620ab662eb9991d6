//! Engine parameter loading and validation.
//!
//! Parameters resolve in order: explicit CLI path, then the `WW_PARAMS`
//! environment variable, then built-in defaults. Files are JSON; shape
//! checking is serde's job, semantic checking (positive ranges, non-empty
//! pod set) happens in [`Params::validate`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ww_common::{Error, Result};

/// Environment variable naming a parameter file.
pub const PARAMS_ENV: &str = "WW_PARAMS";

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Density grid bins per degree.
    pub grid_scale: u32,
    /// Daily-range half-width in degrees (≈111 km per degree).
    pub daily_range: f64,
    /// Inflated-sighting half-width in degrees.
    pub point_radius: f64,
    /// Monte Carlo draws per probability estimate.
    pub trials: u64,
    /// Fixed RNG seed for reproducible bootstrap runs.
    pub seed: Option<u64>,
    /// Known pod codes, in enumeration (tie-break) order.
    pub pods: Vec<String>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            grid_scale: 100,
            daily_range: 1.0,
            point_radius: 0.01,
            trials: 100_000,
            seed: None,
            pods: vec!["J".to_string(), "K".to_string(), "L".to_string()],
        }
    }
}

impl Params {
    /// Load parameters from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfiguration(format!("cannot read {}: {e}", path.display()))
        })?;
        let params: Params = serde_json::from_str(&text).map_err(|e| {
            Error::InvalidConfiguration(format!("invalid JSON in {}: {e}", path.display()))
        })?;
        params.validate()?;
        Ok(params)
    }

    /// Resolve parameters: CLI path > `WW_PARAMS` > defaults.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Self::from_path(path);
        }
        if let Ok(env_path) = std::env::var(PARAMS_ENV) {
            return Self::from_path(&PathBuf::from(env_path));
        }
        Ok(Self::default())
    }

    /// Semantic validation beyond serde's shape checking.
    pub fn validate(&self) -> Result<()> {
        if self.grid_scale == 0 {
            return Err(Error::InvalidConfiguration(
                "grid_scale must be positive".to_string(),
            ));
        }
        if !(self.daily_range > 0.0) || !self.daily_range.is_finite() {
            return Err(Error::InvalidConfiguration(
                "daily_range must be positive and finite".to_string(),
            ));
        }
        if !(self.point_radius > 0.0) || !self.point_radius.is_finite() {
            return Err(Error::InvalidConfiguration(
                "point_radius must be positive and finite".to_string(),
            ));
        }
        if self.point_radius >= self.daily_range {
            return Err(Error::InvalidConfiguration(
                "point_radius must be smaller than daily_range".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfiguration(
                "trials must be positive".to_string(),
            ));
        }
        if self.pods.is_empty() {
            return Err(Error::InvalidConfiguration(
                "pods must not be empty".to_string(),
            ));
        }
        if self.pods.iter().any(|pod| pod.is_empty()) {
            return Err(Error::InvalidConfiguration(
                "pod codes must not be empty strings".to_string(),
            ));
        }
        Ok(())
    }
}
