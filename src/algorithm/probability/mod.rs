//! Disease probability models
//!
//! Two independent strategies over the same lesion vocabulary:
//!
//! - [`contribution`]: confidence-weighted contributions, split across
//!   co-mapped diseases and capped at an absolute 100.
//! - [`linkage`]: presence-only linkage rates, normalized against the
//!   strongest disease.
//!
//! Their normalization semantics differ and they are kept as separate pure
//! functions; [`ProbabilityModel`] only selects between them.

pub mod contribution;
pub mod linkage;
pub mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use contribution::{ContributionRecord, DiseaseComputation, compute_disease_probabilities};
pub use linkage::{LesionProbability, LinkageProbability, calculate_disease_probabilities};

/// Selects which probability model an assessment runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityModel {
    /// Confidence-weighted contribution model
    #[default]
    ConfidenceWeighted,
    /// Linkage-normalization model
    LinkageNormalization,
}

impl ProbabilityModel {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ConfidenceWeighted => "Confidence-weighted contribution",
            Self::LinkageNormalization => "Linkage normalization",
        }
    }
}

impl fmt::Display for ProbabilityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Round half away from zero to two decimal places
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
