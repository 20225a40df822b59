//! Oral lesion categories
//!
//! This module defines the closed set of oral lesion types recognized by the
//! engine, together with the per-lesion detector thresholds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Oral lesion categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LesionType {
    /// Inflammation of the gums
    #[serde(rename = "Gingivitis")]
    Gingivitis,
    /// Tooth decay (cavities)
    #[serde(rename = "Dental Caries")]
    DentalCaries,
    /// Recurrent shallow mouth ulcers
    #[serde(rename = "Aphthous Ulcer")]
    AphthousUlcer,
    /// Fungal infection of the oral mucosa (thrush)
    #[serde(rename = "Oral Candidiasis")]
    OralCandidiasis,
    /// Tag-like mucosal folds
    #[serde(rename = "Mucosal Tags")]
    MucosalTags,
    /// Dry mouth
    #[serde(rename = "Xerostomia")]
    Xerostomia,
}

impl LesionType {
    /// All lesion types, in the order used for table columns
    pub const ALL: [Self; 6] = [
        Self::Gingivitis,
        Self::DentalCaries,
        Self::AphthousUlcer,
        Self::OralCandidiasis,
        Self::MucosalTags,
        Self::Xerostomia,
    ];

    /// Get the canonical display name for this lesion type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gingivitis => "Gingivitis",
            Self::DentalCaries => "Dental Caries",
            Self::AphthousUlcer => "Aphthous Ulcer",
            Self::OralCandidiasis => "Oral Candidiasis",
            Self::MucosalTags => "Mucosal Tags",
            Self::Xerostomia => "Xerostomia",
        }
    }

    /// Parse a canonical lesion name. Matching is case-sensitive; run raw
    /// detector labels through [`crate::normalize::normalize_lesion_name`] first.
    #[must_use]
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lesion| lesion.display_name() == name)
    }

    /// Column index of this lesion in the linkage table
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Minimum detector confidence (0-1 scale) at which the detection backend
    /// reports this lesion
    #[must_use]
    pub const fn detection_threshold(self) -> f64 {
        match self {
            Self::AphthousUlcer | Self::Xerostomia => 0.70,
            Self::DentalCaries => 0.75,
            Self::Gingivitis => 0.65,
            Self::OralCandidiasis => 0.68,
            Self::MucosalTags => 0.72,
        }
    }
}

impl fmt::Display for LesionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LesionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s).ok_or_else(|| EngineError::UnknownLesion(s.to_string()))
    }
}
