//! Confidence-weighted contribution model
//!
//! Each detection contributes `confidence * adjustment_factor` to the diseases
//! its lesion maps to, split evenly across them. Per-disease sums are capped at
//! 100 (saturation) and rounded to two decimals.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::round_to_hundredths;
use super::tables::disease_links;
use crate::models::detection::DetectedLesion;
use crate::models::disease::DiseaseType;
use crate::models::lesion::LesionType;

/// Upper bound of a confidence-weighted disease probability
pub const MAX_PROBABILITY: f64 = 100.0;

/// One lesion's share of a disease probability, kept for auditability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub lesion: LesionType,
    pub confidence: f64,
    pub adjustment_factor: f64,
    /// `confidence * adjustment_factor`
    pub adjusted_value: f64,
    /// Number of diseases the lesion's evidence is split across
    pub shared_with: usize,
    /// `adjusted_value / shared_with`
    pub final_contribution: f64,
}

/// Per-disease result of the confidence-weighted model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseComputation {
    pub disease: DiseaseType,
    pub contributions: Vec<ContributionRecord>,
    /// Capped at 100, rounded to 2 decimals
    pub total_probability: f64,
}

/// Compute confidence-weighted probabilities for every disease.
///
/// Detections whose type is not a canonical lesion name are skipped. Repeated
/// detections of the same lesion are summed independently. The result holds
/// one entry per disease, sorted by `total_probability` descending with ties
/// kept in [`DiseaseType::ALL`] order.
#[must_use]
pub fn compute_disease_probabilities(
    detected_lesions: &[DetectedLesion],
) -> Vec<DiseaseComputation> {
    let mut contributions: FxHashMap<DiseaseType, Vec<ContributionRecord>> =
        DiseaseType::ALL.into_iter().map(|d| (d, Vec::new())).collect();

    for detected in detected_lesions {
        let Some(lesion) = detected.lesion() else {
            log::trace!("Skipping unrecognized lesion type \"{}\"", detected.lesion_type);
            continue;
        };

        let links = disease_links(lesion);
        let shared_with = links.len();

        for link in links {
            let adjusted_value = detected.confidence * link.adjustment_factor;
            let final_contribution = adjusted_value / shared_with as f64;

            contributions
                .entry(link.disease)
                .or_default()
                .push(ContributionRecord {
                    lesion,
                    confidence: detected.confidence,
                    adjustment_factor: link.adjustment_factor,
                    adjusted_value,
                    shared_with,
                    final_contribution,
                });
        }
    }

    let mut results: Vec<DiseaseComputation> = DiseaseType::ALL
        .into_iter()
        .map(|disease| {
            let contributions = contributions.remove(&disease).unwrap_or_default();
            // `Sum` for f64 starts at -0.0, which `total_cmp` orders below +0.0
            let total = contributions
                .iter()
                .fold(0.0_f64, |acc, c| acc + c.final_contribution);

            DiseaseComputation {
                disease,
                contributions,
                total_probability: round_to_hundredths(total.min(MAX_PROBABILITY)),
            }
        })
        .collect();

    // Stable: ties keep the fixed disease order
    results.sort_by(|a, b| b.total_probability.total_cmp(&a.total_probability));

    log::debug!(
        "Computed confidence-weighted probabilities from {} detections",
        detected_lesions.len()
    );
    results
}
