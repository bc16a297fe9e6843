//! Detector pipeline driving spill detection end-to-end.
//!
//! The [`SpillDetector`] exposes a simple API: feed a color image view and get
//! the spill metrics with an annotated copy of the image. Detection holds no
//! mutable state, so a single detector can serve any number of images.
//!
//! Typical usage:
//! ```no_run
//! use oil_spill_detector::{DetectorParams, SpillDetector};
//! use oil_spill_detector::image::ColorImageU8;
//!
//! # fn example(image: ColorImageU8) -> Result<(), oil_spill_detector::DetectionError> {
//! let detector = SpillDetector::new(DetectorParams::default());
//! let report = detector.detect_with_diagnostics(image)?;
//! println!(
//!     "risk={} contours={}",
//!     report.result.risk_level, report.trace.contours.count
//! );
//! # Ok(())
//! # }
//! ```
//
// Stages
// - Luminance: fixed-point BT.601 luma of the validated view.
// - Threshold: strict `luma < threshold` spill mask.
// - Metrics: pixel count, area, confidence and risk tier.
// - Contours: external boundaries of the 8-connected spill regions.
// - Annotate: tint enclosed regions, stroke outlines (skipped without contours).
use super::error::DetectionError;
use super::params::DetectorParams;
use crate::annotate::{annotate, AnnotationStyle};
use crate::diagnostics::{
    ContourStage, DetectionReport, DetectionTrace, InputDescriptor, MaskStage, TimingBreakdown,
};
use crate::image::ColorImageU8;
use crate::risk::SpillMetrics;
use crate::segmentation::{external_contours, luminance, SpillMask};
use crate::types::DetectionResult;
use log::debug;
use std::time::Instant;

/// Spill detector configured once with [`DetectorParams`].
#[derive(Clone, Debug, Default)]
pub struct SpillDetector {
    params: DetectorParams,
}

impl SpillDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect spill regions and return the metrics with the annotated image.
    pub fn detect(&self, image: ColorImageU8) -> Result<DetectionResult, DetectionError> {
        self.detect_with_diagnostics(image).map(|report| report.result)
    }

    /// Run the full pipeline and capture a per-stage trace.
    pub fn detect_with_diagnostics(
        &self,
        image: ColorImageU8,
    ) -> Result<DetectionReport, DetectionError> {
        image.validate()?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage_start = Instant::now();
        let gray = luminance(&image);
        timings.push_since("luminance", stage_start);

        let stage_start = Instant::now();
        let mask = SpillMask::from_gray(gray.as_view(), self.params.threshold);
        let spill_pixels = mask.count();
        timings.push_since("threshold", stage_start);

        let total_pixels = image.pixel_count() as u64;
        let metrics = SpillMetrics::assess(spill_pixels, total_pixels, self.params.pixels_per_km2);
        debug!(
            "SpillDetector::detect {}x{} spill_pixels={} coverage={:.5} risk={} confidence={:.2}",
            image.w,
            image.h,
            metrics.pixel_count,
            metrics.coverage,
            metrics.risk_level,
            metrics.confidence
        );

        let stage_start = Instant::now();
        let contours = external_contours(&mask)?;
        timings.push_since("contours", stage_start);

        let stage_start = Instant::now();
        let style = AnnotationStyle::from(&self.params);
        let annotated_image = annotate(&image, &mask, &contours, &style)?;
        timings.push_since("annotate", stage_start);

        if contours.is_empty() {
            debug!("SpillDetector::detect no spill contours, annotation is a plain copy");
        } else {
            debug!(
                "SpillDetector::detect contours={} points={}",
                contours.len(),
                contours.point_count()
            );
        }

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let trace = DetectionTrace {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
                channel_order: image.order,
            },
            mask: MaskStage {
                threshold: self.params.threshold,
                spill_pixels,
                total_pixels,
                coverage: metrics.coverage,
            },
            contours: ContourStage::from_set(contours),
            timings,
        };
        let result = DetectionResult {
            area_km2: metrics.area_km2,
            pixel_count: metrics.pixel_count,
            confidence: metrics.confidence,
            risk_level: metrics.risk_level,
            annotated_image,
        };

        Ok(DetectionReport { result, trace })
    }
}
