//! Import options

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, ImportResult};

/// Environment variable overriding [`ImportConfig::ndm`]
pub const NDM_ENV: &str = "CSI_FRAMES_NDM";

/// Options for the frame import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Number of spatial dimensions of the target model
    pub ndm: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self { ndm: 3 }
    }
}

impl ImportConfig {
    /// Options for a planar (2D) model
    pub fn planar() -> Self {
        Self { ndm: 2 }
    }

    /// Default options with overrides from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ndm) = std::env::var(NDM_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v > 0)
        {
            config.ndm = ndm;
        }
        config
    }

    /// Parse options from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> ImportResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ImportResult<()> {
        if !(2..=3).contains(&self.ndm) {
            return Err(ImportError::InvalidInput(format!(
                "ndm must be 2 or 3, got {}",
                self.ndm
            )));
        }
        Ok(())
    }
}
