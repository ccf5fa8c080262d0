//! Session configuration with validation and JSON file I/O

use crate::sensors::FixOptions;
use crate::tracking::{AnchorPolicy, ConstellationConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration failure taxonomy
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

/// Session-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How fixes after the first affect the WorldOrigin
    pub anchor_policy: AnchorPolicy,
    /// Options forwarded to the geolocation provider
    pub fix_options: FixOptions,
    /// Default entity constellation parameters
    pub constellation: ConstellationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            anchor_policy: AnchorPolicy::default(),
            fix_options: FixOptions::default(),
            constellation: ConstellationConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a JSON file, validating before returning
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: SessionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.constellation.prop_count > 64 {
            return Err(ConfigError::InvalidParameter {
                parameter: "constellation.prop_count".to_string(),
                value: self.constellation.prop_count.to_string(),
                reason: "more than 64 props is unreasonable for a default constellation".to_string(),
            });
        }

        if self.constellation.ring_radius_deg <= 0.0 || self.constellation.ring_radius_deg > 0.01 {
            return Err(ConfigError::InvalidParameter {
                parameter: "constellation.ring_radius_deg".to_string(),
                value: self.constellation.ring_radius_deg.to_string(),
                reason: "ring radius must be positive and below 0.01 degrees (~1 km)".to_string(),
            });
        }

        if self.constellation.button_offset_deg <= 0.0 || self.constellation.button_offset_deg > 0.01
        {
            return Err(ConfigError::InvalidParameter {
                parameter: "constellation.button_offset_deg".to_string(),
                value: self.constellation.button_offset_deg.to_string(),
                reason: "button offset must be positive and below 0.01 degrees (~1 km)".to_string(),
            });
        }

        if let Some(timeout_ms) = self.fix_options.timeout_ms {
            if timeout_ms < 100 {
                return Err(ConfigError::InvalidParameter {
                    parameter: "fix_options.timeout_ms".to_string(),
                    value: timeout_ms.to_string(),
                    reason: "a sub-100ms geolocation timeout cannot succeed in practice"
                        .to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.anchor_policy, AnchorPolicy::FirstFixOnly);
        assert!(config.fix_options.high_accuracy);
    }

    #[test]
    fn test_validation_rejects_bad_ring_radius() {
        let mut config = SessionConfig::default();
        config.constellation.ring_radius_deg = 0.0;
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { ref parameter, .. })
                if parameter == "constellation.ring_radius_deg"
        ));
    }

    #[test]
    fn test_validation_rejects_short_timeout() {
        let mut config = SessionConfig::default();
        config.fix_options.timeout_ms = Some(10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file_round_trip() {
        let mut config = SessionConfig::default();
        config.anchor_policy = AnchorPolicy::EveryFix;
        config.constellation.prop_count = 6;

        let path = PathBuf::from("test_session_config.json");
        config.save_to_file(&path).unwrap();
        let loaded = SessionConfig::load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
