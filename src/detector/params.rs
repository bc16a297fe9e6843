//! Parameter types configuring the spill detector.
//!
//! Defaults reproduce the reference triage behaviour: luminance below 30 is
//! spill, one million pixels count as one square kilometre, regions are tinted
//! red at 40% and outlined with a 2 px stroke.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Pixels with luminance strictly below this value are spill candidates.
    pub threshold: u8,
    /// Pixels per square kilometre. The default is a synthetic scale, not a
    /// georeference; set it from the ground sample distance when known.
    pub pixels_per_km2: f64,
    /// Weight of the highlight color when tinting spill regions, in [0, 1].
    pub overlay_alpha: f32,
    /// Stroke width of the contour outlines in pixels (0 disables outlines).
    pub outline_width: u32,
    /// Highlight color as `[r, g, b]`; mapped to the image's channel order.
    pub highlight_rgb: [u8; 3],
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            threshold: 30,
            pixels_per_km2: 1_000_000.0,
            overlay_alpha: 0.4,
            outline_width: 2,
            highlight_rgb: [255, 0, 0],
        }
    }
}

impl DetectorParams {
    /// Reject values that would make the metrics meaningless.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.pixels_per_km2.is_finite() && self.pixels_per_km2 > 0.0) {
            return Err(format!(
                "pixels_per_km2 must be a positive number, got {}",
                self.pixels_per_km2
            ));
        }
        if !(0.0..=1.0).contains(&self.overlay_alpha) {
            return Err(format!(
                "overlay_alpha must lie in [0, 1], got {}",
                self.overlay_alpha
            ));
        }
        Ok(())
    }
}
