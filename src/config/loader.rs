//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading a
//! [`CalculatorConfig`] from a YAML file or string.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::CalculatorConfig;

/// Loads calculator configuration from YAML sources.
///
/// # File Layout
///
/// ```yaml
/// time_zone: Europe/Helsinki
/// base_rate_by_100: 425
/// regular_rates:
///   - { from_hour: 6, rate_by_100: 100 }
///   - { from_hour: 18, rate_by_100: 115 }
/// overtime_levels:
///   - { threshold_minutes: 480, percent: 25 }
///   - { threshold_minutes: 600, percent: 50 }
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/salary.yaml")?;
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the given YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read and
    /// [`EngineError::ConfigParseError`] if it is not valid YAML or misses a
    /// required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<CalculatorConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            rates = config.regular_rates.len(),
            tiers = config.overtime_levels.len(),
            "loaded calculator configuration"
        );

        Ok(config)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> EngineResult<CalculatorConfig> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<CalculatorConfig> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}
