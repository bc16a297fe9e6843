use super::timing::TimingBreakdown;
use crate::image::ChannelOrder;
use crate::segmentation::ContourSet;
use crate::types::DetectionResult;
use serde::Serialize;

/// Result produced by [`SpillDetector::detect_with_diagnostics`](crate::SpillDetector).
#[derive(Clone, Debug)]
pub struct DetectionReport {
    pub result: DetectionResult,
    pub trace: DetectionTrace,
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionTrace {
    pub input: InputDescriptor,
    pub mask: MaskStage,
    pub contours: ContourStage,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channel_order: ChannelOrder,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStage {
    pub threshold: u8,
    pub spill_pixels: u64,
    pub total_pixels: u64,
    /// Fraction of the image covered by spill pixels.
    pub coverage: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourStage {
    pub count: usize,
    pub point_count: usize,
    pub contours: ContourSet,
}

impl ContourStage {
    pub fn from_set(contours: ContourSet) -> Self {
        Self {
            count: contours.len(),
            point_count: contours.point_count(),
            contours,
        }
    }
}
