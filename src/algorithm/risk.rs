//! Risk banding for disease probabilities
//!
//! Maps a 0-100 probability onto the High/Medium/Low labels used by the
//! presentation layer. The engine itself never enforces these bands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Risk levels derived from a disease probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl RiskLevel {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Probability cut-offs for risk levels. A probability must exceed a bound to
/// reach its level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBands {
    pub high: f64,
    pub medium: f64,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            high: 60.0,
            medium: 30.0,
        }
    }
}

impl RiskBands {
    /// Classify a probability
    #[must_use]
    pub fn classify(&self, probability: f64) -> RiskLevel {
        if probability > self.high {
            RiskLevel::High
        } else if probability > self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Check `0 <= medium < high <= 100`
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.medium) || !(0.0..=100.0).contains(&self.high) {
            return Err(EngineError::InvalidConfig(format!(
                "risk bands must lie within 0-100 (medium {}, high {})",
                self.medium, self.high
            )));
        }
        if self.medium >= self.high {
            return Err(EngineError::InvalidConfig(format!(
                "medium risk bound {} must be below high bound {}",
                self.medium, self.high
            )));
        }
        Ok(())
    }
}
