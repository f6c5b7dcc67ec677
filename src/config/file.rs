//! Configuration file data structures

use crate::error::HomeCarbonError;
use crate::impact::DEFAULT_OCCUPANTS;
use crate::vision::DEFAULT_CONFIDENCE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".home-carbon.toml";

/// home-carbon configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Household settings
    #[serde(default)]
    pub household: HouseholdSettings,

    /// Detector settings
    #[serde(default)]
    pub detection: DetectionSettings,

    /// Console report settings
    #[serde(default)]
    pub report: ReportSettings,
}

/// Household settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdSettings {
    /// People sharing the footprint
    #[serde(default = "default_occupants")]
    pub occupants: u32,
}

fn default_occupants() -> u32 {
    DEFAULT_OCCUPANTS
}

impl Default for HouseholdSettings {
    fn default() -> Self {
        Self {
            occupants: default_occupants(),
        }
    }
}

/// Detector settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Detections below this confidence are ignored
    #[serde(rename = "confidence-threshold", default = "default_threshold")]
    pub confidence_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: default_threshold(),
        }
    }
}

/// Console report settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// List rooms with no appliances
    #[serde(rename = "show-empty-rooms", default)]
    pub show_empty_rooms: bool,
}

impl ConfigFile {
    /// Check value ranges
    ///
    /// # Examples
    ///
    /// ```
    /// use home_carbon::config::ConfigFile;
    ///
    /// let mut config = ConfigFile::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.household.occupants = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), HomeCarbonError> {
        if self.household.occupants == 0 {
            return Err(HomeCarbonError::InvalidConfig {
                reason: "household.occupants must be at least 1".to_string(),
            });
        }

        let threshold = self.detection.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(HomeCarbonError::InvalidConfig {
                reason: format!(
                    "detection.confidence-threshold must be between 0 and 1, got {}",
                    threshold
                ),
            });
        }

        Ok(())
    }
}
