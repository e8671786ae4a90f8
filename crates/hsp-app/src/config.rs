//! Session configuration.
//!
//! ```yaml
//! threshold: 7.0
//! margin: 2.0
//! ```

use std::path::Path;

use hsp_engine::{ClassificationPolicy, DEFAULT_MARGIN, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HspConfig {
    pub threshold: f64,
    pub margin: f64,
}

impl Default for HspConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl HspConfig {
    pub fn policy(&self) -> ClassificationPolicy {
        ClassificationPolicy::new(self.threshold).with_margin(self.margin)
    }

    pub fn validate(&self) -> AppResult<()> {
        for (what, value) in [("threshold", self.threshold), ("margin", self.margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Validation(format!(
                    "{what} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate a YAML config document.
pub fn parse_config(content: &str) -> AppResult<HspConfig> {
    let config: HspConfig = serde_yaml::from_str(content)
        .map_err(|e| AppError::ConfigParse(format!("Failed to parse config YAML: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<HspConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = parse_config("threshold: 5.5\n").unwrap();
        assert_eq!(config.threshold, 5.5);
        assert_eq!(config.margin, DEFAULT_MARGIN);
    }

    #[test]
    fn empty_mapping_is_default() {
        assert_eq!(parse_config("{}").unwrap(), HspConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("treshold: 5.0\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn negative_threshold_fails_validation() {
        let err = parse_config("threshold: -1.0\n").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn policy_carries_both_values() {
        let config = HspConfig {
            threshold: 4.0,
            margin: 3.0,
        };
        assert_eq!(config.policy(), ClassificationPolicy::fixed_bands());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/hsp.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hsp.yaml"));
    }
}
