//! 8-bit luminance with fixed-point BT.601 weights.
//!
//! `Y = (4899·R + 9617·G + 1868·B + 2^13) >> 14`, i.e. 0.299/0.587/0.114
//! scaled by 2^14 with round-half-up. Integer arithmetic keeps spill pixel
//! counts reproducible across platforms.
use crate::image::{ColorImageU8, GrayImageU8, CHANNELS};

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const ROUNDING: u32 = 1 << (SHIFT - 1);

#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb;
    let y = R_WEIGHT * r as u32 + G_WEIGHT * g as u32 + B_WEIGHT * b as u32 + ROUNDING;
    (y >> SHIFT) as u8
}

/// Convert a validated color view to an owned luminance image.
pub fn luminance(image: &ColorImageU8) -> GrayImageU8 {
    let mut data = Vec::with_capacity(image.pixel_count());
    for y in 0..image.h {
        data.extend(
            image
                .row(y)
                .chunks_exact(CHANNELS)
                .map(|px| luma(image.order.to_rgb(px))),
        );
    }
    GrayImageU8::new(image.w, image.h, data)
}
