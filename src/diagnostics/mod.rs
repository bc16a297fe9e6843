//! Diagnostics data model exposed by the detector and the report tool.
//!
//! `DetectionReport` is returned by
//! [`SpillDetector::detect_with_diagnostics`](crate::SpillDetector), bundling
//! the plain [`DetectionResult`](crate::DetectionResult) with a
//! `DetectionTrace` describing every stage the pipeline executed.

pub mod pipeline;
pub mod timing;

pub use pipeline::{ContourStage, DetectionReport, DetectionTrace, InputDescriptor, MaskStage};
pub use timing::{StageTiming, TimingBreakdown};
