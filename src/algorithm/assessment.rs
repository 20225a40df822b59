//! End-to-end assessment of a set of raw detections
//!
//! Normalizes detector labels, optionally gates detections by their lesion's
//! detector threshold, runs the configured probability model and attaches risk
//! labels and care guidance to the result.

use std::time::Instant;

use serde::Serialize;

use crate::algorithm::probability::{
    DiseaseComputation, LinkageProbability, ProbabilityModel, calculate_disease_probabilities,
    compute_disease_probabilities,
};
use crate::algorithm::risk::RiskLevel;
use crate::config::EngineConfig;
use crate::models::{
    BoundingBox, CareGuidance, DetectedLesion, DiseaseType, GENERAL_GUIDANCE, LesionType,
    PresentLesion, RawDetection,
};
use crate::normalize::normalize_lesion_name;
use crate::utils::logging::log_operation_complete;

/// A detection resolved to a known lesion type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LesionFinding {
    pub lesion: LesionType,
    /// Confidence on the 0-100 scale
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub guidance: CareGuidance,
}

/// Probability and risk label for one disease
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiseaseRisk {
    pub disease: DiseaseType,
    pub probability: f64,
    pub risk: RiskLevel,
}

/// Full output of whichever model was run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model", content = "diseases", rename_all = "snake_case")]
pub enum ModelBreakdown {
    ConfidenceWeighted(Vec<DiseaseComputation>),
    LinkageNormalization(Vec<LinkageProbability>),
}

impl ModelBreakdown {
    /// The model that produced this breakdown
    #[must_use]
    pub const fn model(&self) -> ProbabilityModel {
        match self {
            Self::ConfidenceWeighted(_) => ProbabilityModel::ConfidenceWeighted,
            Self::LinkageNormalization(_) => ProbabilityModel::LinkageNormalization,
        }
    }

    /// `(disease, probability)` pairs in the model's sorted order
    #[must_use]
    pub fn probabilities(&self) -> Vec<(DiseaseType, f64)> {
        match self {
            Self::ConfidenceWeighted(results) => results
                .iter()
                .map(|r| (r.disease, r.total_probability))
                .collect(),
            Self::LinkageNormalization(results) => {
                results.iter().map(|r| (r.disease, r.probability)).collect()
            }
        }
    }
}

/// Result of assessing one set of detections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    /// Detections that resolved to a known lesion and passed gating
    pub findings: Vec<LesionFinding>,
    /// Labels that could not be mapped to a lesion type
    pub unmapped_labels: Vec<String>,
    /// Generic guidance, present only when some labels were unmapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_guidance: Option<CareGuidance>,
    /// Recognized detections dropped by the detector threshold
    pub below_threshold: Vec<LesionType>,
    /// Per-disease probabilities with risk labels, highest first
    pub diseases: Vec<DiseaseRisk>,
    pub breakdown: ModelBreakdown,
}

impl AssessmentReport {
    /// The highest ranked disease with a non-zero probability
    #[must_use]
    pub fn top_disease(&self) -> Option<&DiseaseRisk> {
        self.diseases.first().filter(|d| d.probability > 0.0)
    }
}

fn passes_threshold(lesion: LesionType, percent_confidence: f64) -> bool {
    percent_confidence / 100.0 >= lesion.detection_threshold()
}

/// Assess a batch of raw detections with the given configuration
#[must_use]
pub fn assess(detections: &[RawDetection], config: &EngineConfig) -> AssessmentReport {
    let start = Instant::now();

    let mut findings = Vec::with_capacity(detections.len());
    let mut unmapped_labels = Vec::new();
    let mut below_threshold = Vec::new();

    for detection in detections {
        let canonical = normalize_lesion_name(&detection.label);
        let Some(lesion) = LesionType::from_canonical(&canonical) else {
            unmapped_labels.push(detection.label.clone());
            continue;
        };

        let confidence = config.confidence_scale.to_percent(detection.confidence);
        if config.apply_detection_thresholds && !passes_threshold(lesion, confidence) {
            log::debug!(
                "Dropping {lesion} at {confidence:.2} (threshold {:.2})",
                lesion.detection_threshold() * 100.0
            );
            below_threshold.push(lesion);
            continue;
        }

        findings.push(LesionFinding {
            lesion,
            confidence,
            bbox: detection.bbox,
            guidance: lesion.care_guidance(),
        });
    }

    let breakdown = match config.model {
        ProbabilityModel::ConfidenceWeighted => {
            let inputs: Vec<DetectedLesion> = findings
                .iter()
                .map(|f| DetectedLesion {
                    lesion_type: f.lesion.display_name().to_string(),
                    confidence: f.confidence,
                    bbox: f.bbox,
                })
                .collect();
            ModelBreakdown::ConfidenceWeighted(compute_disease_probabilities(&inputs))
        }
        ProbabilityModel::LinkageNormalization => {
            let inputs: Vec<PresentLesion> =
                findings.iter().map(|f| PresentLesion::from(f.lesion)).collect();
            ModelBreakdown::LinkageNormalization(calculate_disease_probabilities(&inputs))
        }
    };

    let diseases = breakdown
        .probabilities()
        .into_iter()
        .map(|(disease, probability)| DiseaseRisk {
            disease,
            probability,
            risk: config.risk_bands.classify(probability),
        })
        .collect();

    let general_guidance = if unmapped_labels.is_empty() {
        None
    } else {
        log::info!("{} detection labels could not be mapped", unmapped_labels.len());
        Some(GENERAL_GUIDANCE)
    };
    log::debug!("Assessment used the {} model", config.model);
    log_operation_complete("assessed", detections.len(), Some(start.elapsed()));

    AssessmentReport {
        findings,
        unmapped_labels,
        general_guidance,
        below_threshold,
        diseases,
        breakdown,
    }
}
