//! Linkage-normalization model
//!
//! Lesions are treated as present or absent. Each present lesion adds its
//! linkage rate (as a percentage) to every disease it is linked to, and the
//! per-disease scores are normalized against the highest one. The result is a
//! relative ranking, not a calibrated probability: the strongest candidate is
//! always scaled to exactly 100.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::round_to_hundredths;
use super::tables::{LINKAGE_TABLE, linkage_probability};
use crate::models::detection::PresentLesion;
use crate::models::disease::DiseaseType;
use crate::models::lesion::LesionType;

/// A lesion's linkage rate toward one disease, as a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LesionProbability {
    pub lesion: LesionType,
    pub probability: f64,
}

/// Per-disease result of the linkage-normalization model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkageProbability {
    pub disease: DiseaseType,
    /// Score relative to the top disease, 0-100, rounded to 2 decimals
    pub probability: f64,
    /// De-duplicated input lesion names, in first-seen order
    pub detected_lesions: Vec<String>,
    pub contributing_lesion_probabilities: Vec<LesionProbability>,
}

struct DiseaseScore {
    disease: DiseaseType,
    score: f64,
    lesions: Vec<LesionProbability>,
}

fn linkage_for(disease: DiseaseType, lesion_name: &str) -> Option<(LesionType, f64)> {
    LesionType::from_canonical(lesion_name)
        .map(|lesion| (lesion, linkage_probability(disease, lesion)))
}

/// Compute relative disease rankings from lesion presence.
///
/// Unrecognized lesion names contribute nothing to any disease but are still
/// listed in `detected_lesions`. When no lesion has a positive linkage every
/// probability is 0. Results are sorted by `probability` descending; ties keep
/// the linkage table's row order.
#[must_use]
pub fn calculate_disease_probabilities(
    detected_lesions: &[PresentLesion],
) -> Vec<LinkageProbability> {
    let mut scores: Vec<DiseaseScore> = LINKAGE_TABLE
        .iter()
        .map(|(disease, _)| DiseaseScore {
            disease: *disease,
            score: 0.0,
            lesions: Vec::new(),
        })
        .collect();

    for PresentLesion { lesion } in detected_lesions {
        for entry in &mut scores {
            let Some((lesion_type, p)) = linkage_for(entry.disease, lesion) else {
                continue;
            };
            if p > 0.0 {
                entry.score += p * 100.0;
                entry.lesions.push(LesionProbability {
                    lesion: lesion_type,
                    probability: p * 100.0,
                });
            }
        }
    }

    let max_score = scores.iter().map(|s| s.score).fold(0.0_f64, f64::max);
    let unique_lesions: Vec<String> = detected_lesions
        .iter()
        .map(|d| d.lesion.clone())
        .unique()
        .collect();

    let mut probabilities: Vec<LinkageProbability> = scores
        .into_iter()
        .map(|entry| {
            let normalized = if max_score > 0.0 {
                entry.score / max_score * 100.0
            } else {
                0.0
            };
            LinkageProbability {
                disease: entry.disease,
                probability: round_to_hundredths(normalized),
                detected_lesions: unique_lesions.clone(),
                contributing_lesion_probabilities: entry.lesions,
            }
        })
        .collect();

    probabilities.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    log::debug!(
        "Calculated linkage probabilities for {} lesions (max score {max_score:.2})",
        unique_lesions.len()
    );
    probabilities
}
