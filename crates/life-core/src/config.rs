//! Configuration types for the engine.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Universe configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Width of the grid in cells
    pub width: u32,
    /// Height of the grid in cells
    pub height: u32,
    /// Random seed for reproducible reseeding
    pub seed: u64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed: 0,
        }
    }
}

impl UniverseConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Reject zero-sized grids
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UniverseConfig::default();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 64);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = UniverseConfig::new(0, 64);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidDimension {
                width: 0,
                height: 64
            })
        );

        let config = UniverseConfig::new(64, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = UniverseConfig {
            width: 32,
            height: 48,
            seed: 7,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: UniverseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.width, deserialized.width);
        assert_eq!(config.height, deserialized.height);
        assert_eq!(config.seed, deserialized.seed);
    }
}
