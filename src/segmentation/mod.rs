//! Spill segmentation: luminance, threshold mask, external contours and
//! enclosed-region fill.
//!
//! Connectivity follows the usual binary-image convention: spill pixels are
//! 8-connected, background pixels 4-connected. A hole is therefore any
//! background pixel that cannot reach the image border through 4-connected
//! background.

pub mod contours;
pub mod fill;
pub mod luminance;
pub mod mask;

pub use contours::{compress_chain, external_contours, Contour, ContourSet, Point};
pub use fill::enclosed_region;
pub use luminance::{luma, luminance};
pub use mask::SpillMask;
