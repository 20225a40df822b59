//! Configuration for the assessment pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::probability::ProbabilityModel;
use crate::algorithm::risk::RiskBands;
use crate::error::Result;

/// Scale of the confidences reported by the detection service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceScale {
    /// 0-100, the scale the probability models expect
    #[default]
    Percent,
    /// 0-1, multiplied by 100 before use
    Unit,
}

impl ConfidenceScale {
    /// Convert a detector confidence to the 0-100 scale
    #[must_use]
    pub fn to_percent(self, confidence: f64) -> f64 {
        match self {
            Self::Percent => confidence,
            Self::Unit => confidence * 100.0,
        }
    }
}

/// Configuration for an assessment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which probability model to run
    pub model: ProbabilityModel,
    /// Scale of incoming detector confidences
    pub confidence_scale: ConfidenceScale,
    /// Drop detections below their lesion's detector threshold
    pub apply_detection_thresholds: bool,
    /// Cut-offs for risk labels
    pub risk_bands: RiskBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: ProbabilityModel::ConfidenceWeighted,
            confidence_scale: ConfidenceScale::Percent,
            apply_detection_thresholds: false,
            risk_bands: RiskBands::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a configuration from a JSON file. Missing fields take
    /// their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        if let Err(e) = config.validate() {
            log::warn!("Rejected configuration {}: {e}", path.display());
            return Err(e);
        }
        Ok(config)
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<()> {
        self.risk_bands.validate()
    }
}
