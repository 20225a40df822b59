//! Gastrointestinal disease categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// GI diseases the engine produces probabilities for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiseaseType {
    /// Crohn's disease
    #[serde(rename = "Crohn's Disease")]
    CrohnsDisease,
    /// Ulcerative colitis
    #[serde(rename = "Ulcerative Colitis")]
    UlcerativeColitis,
    /// Celiac disease
    #[serde(rename = "Celiac Disease")]
    CeliacDisease,
    /// Chronic liver disease
    #[serde(rename = "Chronic Liver Disease")]
    ChronicLiverDisease,
}

impl DiseaseType {
    /// All diseases in the fixed order used by the confidence-weighted model
    pub const ALL: [Self; 4] = [
        Self::CrohnsDisease,
        Self::UlcerativeColitis,
        Self::CeliacDisease,
        Self::ChronicLiverDisease,
    ];

    /// Get the canonical display name for this disease
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CrohnsDisease => "Crohn's Disease",
            Self::UlcerativeColitis => "Ulcerative Colitis",
            Self::CeliacDisease => "Celiac Disease",
            Self::ChronicLiverDisease => "Chronic Liver Disease",
        }
    }

    /// Parse a canonical disease name (case-sensitive)
    #[must_use]
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|disease| disease.display_name() == name)
    }
}

impl fmt::Display for DiseaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DiseaseType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s).ok_or_else(|| EngineError::UnknownDisease(s.to_string()))
    }
}
