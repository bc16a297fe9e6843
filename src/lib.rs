#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod report;
pub mod types;
pub mod vessels;

// Building blocks used by the detector, public for tools and tests.
pub mod annotate;
pub mod config;
pub mod risk;
pub mod segmentation;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{DetectionError, DetectorParams, SpillDetector};
pub use crate::types::{DetectionResult, RiskLevel};

pub use crate::diagnostics::{DetectionReport, DetectionTrace};
pub use crate::report::AssessmentReport;
pub use crate::vessels::parse_vessel_records;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{ChannelOrder, ColorImage, ColorImageU8};
    pub use crate::vessels::parse_vessel_records;
    pub use crate::{DetectionResult, DetectorParams, RiskLevel, SpillDetector};
}
