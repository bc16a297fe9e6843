//! Merged assessment handed to consumers of the detector and the AIS parser.
//!
//! Scalars are rounded for presentation (area to 4 decimals, confidence to 2)
//! and the annotated image is embedded as a base64-encoded PNG, so the whole
//! report serializes to a single JSON document.
use crate::image::io::encode_png;
use crate::types::DetectionResult;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Spill area in km², rounded to 4 decimals.
    pub area: f64,
    pub pixel_count: u64,
    /// Rounded to 2 decimals.
    pub confidence: f64,
    pub risk_level: String,
    pub vessels: Vec<String>,
    /// Annotated image, PNG encoded then base64 (standard alphabet, padded).
    pub image: String,
}

impl AssessmentReport {
    pub fn build(result: &DetectionResult, vessels: Vec<String>) -> Result<Self, String> {
        let png = encode_png(&result.annotated_image)?;
        Ok(Self {
            area: round_to(result.area_km2, 4),
            pixel_count: result.pixel_count,
            confidence: round_to(result.confidence, 2),
            risk_level: result.risk_level.to_string(),
            vessels,
            image: STANDARD.encode(png),
        })
    }

    /// Decode the embedded PNG bytes.
    pub fn image_png(&self) -> Result<Vec<u8>, String> {
        STANDARD
            .decode(&self.image)
            .map_err(|e| format!("Failed to decode report image: {e}"))
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
