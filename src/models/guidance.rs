//! Care guidance attached to lesion findings

use serde::Serialize;

use crate::models::lesion::LesionType;

/// Static care guidance for a lesion finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareGuidance {
    pub urgent_actions: &'static [&'static str],
    pub monitoring: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
}

/// Guidance used when a label could not be mapped to a lesion type
pub const GENERAL_GUIDANCE: CareGuidance = CareGuidance {
    urgent_actions: &["Consult healthcare provider"],
    monitoring: &["Monitor symptoms"],
    lifestyle: &["Maintain oral hygiene"],
};

impl LesionType {
    /// Get the care guidance for this lesion type
    #[must_use]
    pub const fn care_guidance(self) -> CareGuidance {
        match self {
            Self::AphthousUlcer => CareGuidance {
                urgent_actions: &["Avoid spicy foods", "Use topical anesthetics"],
                monitoring: &["Track ulcer size", "Monitor for secondary infection"],
                lifestyle: &["Maintain oral hygiene", "Reduce stress"],
            },
            Self::DentalCaries => CareGuidance {
                urgent_actions: &["Schedule dental appointment", "Avoid sugary foods"],
                monitoring: &["Check for pain", "Monitor cavity progression"],
                lifestyle: &["Brush twice daily", "Floss regularly"],
            },
            Self::Gingivitis => CareGuidance {
                urgent_actions: &["Improve oral hygiene", "Use antimicrobial mouthwash"],
                monitoring: &["Check for bleeding", "Monitor inflammation"],
                lifestyle: &["Brush gently", "Floss daily"],
            },
            Self::OralCandidiasis => CareGuidance {
                urgent_actions: &["Consult healthcare provider", "Avoid irritants"],
                monitoring: &["Track white patches", "Monitor symptoms"],
                lifestyle: &["Maintain oral hygiene", "Avoid tobacco"],
            },
            Self::MucosalTags => CareGuidance {
                urgent_actions: &["Monitor for changes", "Consult specialist if needed"],
                monitoring: &["Track size and appearance"],
                lifestyle: &["Maintain oral hygiene"],
            },
            Self::Xerostomia => CareGuidance {
                urgent_actions: &["Stay hydrated", "Use saliva substitutes"],
                monitoring: &["Monitor dry mouth severity"],
                lifestyle: &["Drink water frequently", "Avoid dry foods"],
            },
        }
    }
}
