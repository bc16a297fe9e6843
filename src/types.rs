use crate::image::ColorImage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse spill severity derived from the absolute spill pixel count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one detection call.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    /// Spill area in km² at the configured pixel scale.
    pub area_km2: f64,
    pub pixel_count: u64,
    /// Heuristic certainty in [0, 1] derived from image coverage.
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// Input copy with spill regions highlighted, same size and channel order.
    pub annotated_image: ColorImage,
}
