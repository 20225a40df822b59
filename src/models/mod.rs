//! Domain models for the disease probability engine
//!
//! This module contains the lesion and disease vocabularies and the detection
//! inputs handed to the probability models.

pub mod detection;
pub mod disease;
pub mod guidance;
pub mod lesion;

// Re-export commonly used types
pub use detection::{BoundingBox, DetectedLesion, PresentLesion, RawDetection};
pub use disease::DiseaseType;
pub use guidance::{CareGuidance, GENERAL_GUIDANCE};
pub use lesion::LesionType;
