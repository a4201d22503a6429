use crate::error::{BiblioError, Result};
use crate::fine::{DEFAULT_LOAN_DAYS, DEFAULT_RATE_PER_DAY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for biblio, stored next to the catalog in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiblioConfig {
    /// Fine charged per full day overdue
    #[serde(default = "default_fine_rate")]
    pub fine_rate: f64,

    /// Loan duration in calendar days when none is given
    #[serde(default = "default_loan_days")]
    pub loan_days: i64,
}

fn default_fine_rate() -> f64 {
    DEFAULT_RATE_PER_DAY
}

fn default_loan_days() -> i64 {
    DEFAULT_LOAN_DAYS
}

impl Default for BiblioConfig {
    fn default() -> Self {
        Self {
            fine_rate: DEFAULT_RATE_PER_DAY,
            loan_days: DEFAULT_LOAN_DAYS,
        }
    }
}

impl BiblioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BiblioError::Io)?;
        let config: BiblioConfig =
            serde_json::from_str(&content).map_err(BiblioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BiblioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BiblioError::Serialization)?;
        fs::write(config_path, content).map_err(BiblioError::Io)?;
        Ok(())
    }
}
