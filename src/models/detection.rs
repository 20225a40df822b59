//! Detection inputs handed to the probability models
//!
//! `RawDetection` is what the external detection service produces. The
//! models consume `DetectedLesion` (confidence-weighted) or `PresentLesion`
//! (presence only), whose lesion names are expected to be canonical already.

use serde::{Deserialize, Serialize};

use crate::models::lesion::LesionType;

/// Rectangle around a detection, carried for display only
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A single label emitted by the detection service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Free-form detector label ("thrush", "dental-caries", ...)
    pub label: String,
    /// Detector confidence, on the scale given by the engine configuration
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl RawDetection {
    /// Create a detection without a bounding box
    #[must_use]
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox: None,
        }
    }
}

/// Input to the confidence-weighted model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLesion {
    /// Canonical lesion name. Names outside the lesion set are skipped.
    #[serde(rename = "type")]
    pub lesion_type: String,
    /// Confidence on a 0-100 scale
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl DetectedLesion {
    #[must_use]
    pub fn new(lesion_type: impl Into<String>, confidence: f64) -> Self {
        Self {
            lesion_type: lesion_type.into(),
            confidence,
            bbox: None,
        }
    }

    /// Attach a bounding box
    #[must_use]
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Resolve the lesion name, `None` when it is not canonical
    #[must_use]
    pub fn lesion(&self) -> Option<LesionType> {
        LesionType::from_canonical(&self.lesion_type)
    }
}

/// Input to the linkage-normalization model: presence of a lesion only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentLesion {
    pub lesion: String,
}

impl PresentLesion {
    #[must_use]
    pub fn new(lesion: impl Into<String>) -> Self {
        Self {
            lesion: lesion.into(),
        }
    }
}

impl From<LesionType> for PresentLesion {
    fn from(lesion: LesionType) -> Self {
        Self::new(lesion.display_name())
    }
}
