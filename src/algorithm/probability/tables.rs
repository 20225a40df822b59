//! Static lesion-disease linkage tables
//!
//! Both tables encode fixed domain knowledge and are compile-time constants
//! keyed by the lesion and disease enums.

use crate::models::disease::DiseaseType;
use crate::models::lesion::LesionType;

/// One lesion-to-disease edge of the confidence-weighted model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiseaseLink {
    pub disease: DiseaseType,
    /// Weight in (0, 1] applied to the detector confidence
    pub adjustment_factor: f64,
}

const fn link(disease: DiseaseType, adjustment_factor: f64) -> DiseaseLink {
    DiseaseLink {
        disease,
        adjustment_factor,
    }
}

const APHTHOUS_ULCER_LINKS: [DiseaseLink; 3] = [
    link(DiseaseType::CrohnsDisease, 0.62),
    link(DiseaseType::UlcerativeColitis, 0.62),
    link(DiseaseType::CeliacDisease, 0.62),
];

const XEROSTOMIA_LINKS: [DiseaseLink; 2] = [
    link(DiseaseType::ChronicLiverDisease, 0.7),
    link(DiseaseType::CeliacDisease, 0.7),
];

const DENTAL_CARIES_LINKS: [DiseaseLink; 1] = [link(DiseaseType::CeliacDisease, 0.82)];

const MUCOSAL_TAGS_LINKS: [DiseaseLink; 2] = [
    link(DiseaseType::CrohnsDisease, 0.68),
    link(DiseaseType::CeliacDisease, 0.68),
];

const GINGIVITIS_LINKS: [DiseaseLink; 3] = [
    link(DiseaseType::CrohnsDisease, 0.72),
    link(DiseaseType::ChronicLiverDisease, 0.72),
    link(DiseaseType::UlcerativeColitis, 0.72),
];

const ORAL_CANDIDIASIS_LINKS: [DiseaseLink; 2] = [
    link(DiseaseType::ChronicLiverDisease, 0.75),
    link(DiseaseType::CeliacDisease, 0.75),
];

/// Diseases a lesion is evidence for, with their adjustment factors.
/// Every lesion maps to at least one disease.
#[must_use]
pub const fn disease_links(lesion: LesionType) -> &'static [DiseaseLink] {
    match lesion {
        LesionType::AphthousUlcer => &APHTHOUS_ULCER_LINKS,
        LesionType::Xerostomia => &XEROSTOMIA_LINKS,
        LesionType::DentalCaries => &DENTAL_CARIES_LINKS,
        LesionType::MucosalTags => &MUCOSAL_TAGS_LINKS,
        LesionType::Gingivitis => &GINGIVITIS_LINKS,
        LesionType::OralCandidiasis => &ORAL_CANDIDIASIS_LINKS,
    }
}

/// Row of the linkage table: probabilities indexed by [`LesionType::index`]
pub type LinkageRow = [f64; LesionType::ALL.len()];

/// Empirical linkage rates of each lesion per disease.
///
/// Columns: Gingivitis, Dental Caries, Aphthous Ulcer, Oral Candidiasis,
/// Mucosal Tags, Xerostomia. Row order is the encounter order of the
/// linkage-normalization model.
pub const LINKAGE_TABLE: [(DiseaseType, LinkageRow); 4] = [
    (DiseaseType::CrohnsDisease, [0.5, 0.02, 0.1, 0.05, 0.68, 0.35]),
    (DiseaseType::CeliacDisease, [0.2, 0.1, 0.25, 0.15, 0.02, 0.25]),
    (DiseaseType::UlcerativeColitis, [0.5, 0.2, 0.6, 0.2, 0.05, 0.6]),
    (DiseaseType::ChronicLiverDisease, [0.18, 0.4, 0.07, 0.45, 0.02, 0.3]),
];

/// Linkage probability in [0, 1] for a (disease, lesion) pair
#[must_use]
pub fn linkage_probability(disease: DiseaseType, lesion: LesionType) -> f64 {
    LINKAGE_TABLE
        .iter()
        .find(|(row_disease, _)| *row_disease == disease)
        .map_or(0.0, |(_, row)| row[lesion.index()])
}
