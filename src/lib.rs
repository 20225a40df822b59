//! Estimates gastrointestinal disease probabilities from detected oral lesions
//! using static lesion-to-disease linkage tables.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ConfidenceScale, EngineConfig};
pub use error::{EngineError, Result};
pub use models::{
    BoundingBox, DetectedLesion, DiseaseType, LesionType, PresentLesion, RawDetection,
};

// Probability models
pub use algorithm::probability::{
    ContributionRecord, DiseaseComputation, LesionProbability, LinkageProbability,
    ProbabilityModel, calculate_disease_probabilities, compute_disease_probabilities,
};

// Assessment pipeline
pub use algorithm::assessment::{AssessmentReport, DiseaseRisk, ModelBreakdown, assess};
pub use algorithm::risk::{RiskBands, RiskLevel};

// Label normalization
pub use normalize::{normalize_lesion_name, resolve_lesion};
