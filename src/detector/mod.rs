//! Spill detector: threshold segmentation, metrics and annotation.
//!
//! Overview
//! - Converts the color input to 8-bit luminance with fixed-point
//!   0.299/0.587/0.114 weights (see [`crate::segmentation::luminance`]).
//! - Marks every pixel darker than [`DetectorParams::threshold`] as a spill
//!   candidate, producing a [`SpillMask`](crate::segmentation::SpillMask).
//! - Derives pixel count, area, coverage-based confidence and a size-based
//!   risk tier ([`crate::risk`]).
//! - Traces the outer boundaries of the connected spill regions and renders an
//!   annotated copy: enclosed regions tinted with the highlight color, outlines
//!   stroked on top ([`crate::annotate`]).
//!
//! Modules
//! - [`params`] – detector knobs, deserializable from tool configs.
//! - `error` – [`DetectionError`] for unusable input buffers.
//! - `pipeline` – the [`SpillDetector`] implementation.

mod error;
pub mod params;
mod pipeline;

pub use error::DetectionError;
pub use params::DetectorParams;
pub use pipeline::SpillDetector;
