//! Lesion label normalization
//!
//! Detector output labels are free-form: synonyms, hyphenated forms and
//! colloquial terms. Both probability models key their lookups on canonical
//! lesion names, so labels must pass through here first.

use crate::models::lesion::LesionType;

/// Look up the canonical lesion for a lowercased detector label
fn canonical_for(label: &str) -> Option<LesionType> {
    match label {
        "mucosal tags" | "mucosal-tags" => Some(LesionType::MucosalTags),
        "xerostomia" | "dry mouth" => Some(LesionType::Xerostomia),
        "aphthous ulcer" | "aphthous-ulcer" | "ulcer" => Some(LesionType::AphthousUlcer),
        "dental caries" | "dental-caries" | "caries" | "cavity" => {
            Some(LesionType::DentalCaries)
        }
        "oral candidiasis" | "oral-candidiasis" | "candidiasis" | "thrush" => {
            Some(LesionType::OralCandidiasis)
        }
        "gingivitis" | "gum disease" => Some(LesionType::Gingivitis),
        _ => None,
    }
}

/// Map a raw detector label to its canonical lesion name.
///
/// Matching is case-insensitive. Labels without a synonym entry are returned
/// unchanged, so callers must treat a non-canonical return value as unmapped.
#[must_use]
pub fn normalize_lesion_name(raw_label: &str) -> String {
    let normalized = canonical_for(&raw_label.to_lowercase())
        .map_or_else(|| raw_label.to_string(), |lesion| lesion.display_name().to_string());
    log::debug!("Normalized lesion: \"{raw_label}\" -> \"{normalized}\"");
    normalized
}

/// Normalize a raw label and resolve it to a lesion type.
///
/// Returns `None` for labels that are neither a known synonym nor a canonical
/// name.
#[must_use]
pub fn resolve_lesion(raw_label: &str) -> Option<LesionType> {
    LesionType::from_canonical(&normalize_lesion_name(raw_label))
}
