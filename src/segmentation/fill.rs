//! Region enclosed by the external contours of a mask.
use super::mask::SpillMask;
use crate::detector::DetectionError;
use crate::image::ImageView;
use image::Luma;
use imageproc::region_labelling::{connected_components, Connectivity};

/// Per-pixel flags (row-major) for everything inside an external contour.
///
/// That is every spill pixel plus every hole: background components
/// (4-connected) that touch no image border. Equivalent to filling each
/// external contour as a solid polygon.
pub fn enclosed_region(mask: &SpillMask) -> Result<Vec<bool>, DetectionError> {
    let (w, h) = (mask.width(), mask.height());
    if w == 0 || h == 0 {
        return Ok(Vec::new());
    }

    // Spill pixels are the labelling background and keep label 0.
    let background = mask.to_background_image()?;
    let labels = connected_components(&background, Connectivity::Four, Luma([0u8]));
    let (lw, lh) = labels.dimensions();
    let max_label = labels.pixels().map(|p| p[0]).max().unwrap_or(0) as usize;

    let mut open = vec![false; max_label + 1];
    let border = (0..lw)
        .flat_map(|x| [(x, 0), (x, lh - 1)])
        .chain((0..lh).flat_map(|y| [(0, y), (lw - 1, y)]));
    for (x, y) in border {
        open[labels.get_pixel(x, y)[0] as usize] = true;
    }
    open[0] = false;

    Ok(labels.pixels().map(|p| !open[p[0] as usize]).collect())
}
