//! User settings read from `{data_dir}/config.yaml`

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use networth_core::interaction::{InteractionConfig, ZoomLimits};
use networth_core::simulation::InflationAdjustment;
use networth_core::{Horizon, SimulationOptions};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Settings for a session. Distances are in terminal cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Months to simulate
    pub horizon: Horizon,
    /// Max distance in columns between pointer and marker for a hit
    pub hit_tolerance: f64,
    /// Rate change per row of vertical drag
    pub rate_sensitivity: f64,
    pub zoom: ZoomLimits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation: Option<InflationAdjustment>,
    /// Calendar month of step 0; labels fall back to `1y 2m` without it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            horizon: Horizon::default(),
            hit_tolerance: 1.0,
            rate_sensitivity: 0.0025,
            zoom: ZoomLimits::default(),
            inflation: None,
            start_date: None,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(Self::path(data_dir))?;
        serde_saphyr::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::load(data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let yaml = serde_saphyr::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::create_dir_all(data_dir)?;
        fs::write(Self::path(data_dir), yaml)?;
        Ok(())
    }

    pub fn interaction(&self) -> InteractionConfig {
        InteractionConfig {
            hit_tolerance: self.hit_tolerance,
            zoom: self.zoom,
            rate_sensitivity: self.rate_sensitivity,
        }
    }

    pub fn simulation_options(&self) -> SimulationOptions {
        SimulationOptions {
            inflation: self.inflation,
        }
    }
}
