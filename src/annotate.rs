//! Spill annotation: translucent region tint plus opaque contour outlines.
//!
//! The enclosed area of every external contour is blended as
//! `round(alpha·highlight + (1 - alpha)·original)`, then each contour is
//! stroked with a square brush of `outline_width` pixels at full opacity.
//! Without contours the output is a plain copy of the input.
use crate::detector::{DetectionError, DetectorParams};
use crate::image::{ColorImage, ColorImageU8, CHANNELS};
use crate::segmentation::{enclosed_region, ContourSet, SpillMask};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

/// Rendering knobs taken from [`DetectorParams`].
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationStyle {
    pub highlight_rgb: [u8; 3],
    pub overlay_alpha: f32,
    pub outline_width: u32,
}

impl From<&DetectorParams> for AnnotationStyle {
    fn from(params: &DetectorParams) -> Self {
        Self {
            highlight_rgb: params.highlight_rgb,
            overlay_alpha: params.overlay_alpha,
            outline_width: params.outline_width,
        }
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self::from(&DetectorParams::default())
    }
}

/// Render the annotated copy of `image`. The view must be valid.
pub fn annotate(
    image: &ColorImageU8,
    mask: &SpillMask,
    contours: &ContourSet,
    style: &AnnotationStyle,
) -> Result<ColorImage, DetectionError> {
    let mut out = image.to_owned_image();
    if contours.is_empty() {
        return Ok(out);
    }
    let color = image.order.arrange(style.highlight_rgb);
    let region = enclosed_region(mask)?;
    tint_region(&mut out, &region, color, style.overlay_alpha);
    stroke_contours(out, contours, color, style.outline_width)
}

#[inline]
fn blend(original: u8, overlay: u8, alpha: f32) -> u8 {
    let v = alpha * overlay as f32 + (1.0 - alpha) * original as f32;
    v.round().clamp(0.0, 255.0) as u8
}

fn tint_region(image: &mut ColorImage, region: &[bool], color: [u8; 3], alpha: f32) {
    let w = image.width();
    for (i, &inside) in region.iter().enumerate() {
        if !inside {
            continue;
        }
        let (x, y) = (i % w, i / w);
        let px = image.pixel(x, y);
        image.set_pixel(
            x,
            y,
            [
                blend(px[0], color[0], alpha),
                blend(px[1], color[1], alpha),
                blend(px[2], color[2], alpha),
            ],
        );
    }
}

/// Offsets of a square brush `width` pixels wide, roughly centred on the line.
fn brush_offsets(width: u32) -> Vec<(f32, f32)> {
    let width = width as i32;
    let lo = -(width / 2);
    let hi = lo + width;
    (lo..hi)
        .flat_map(|dy| (lo..hi).map(move |dx| (dx as f32, dy as f32)))
        .collect()
}

fn stroke_contours(
    image: ColorImage,
    contours: &ContourSet,
    color: [u8; 3],
    width: u32,
) -> Result<ColorImage, DetectionError> {
    if width == 0 {
        return Ok(image);
    }
    let (w, h, order) = (image.width(), image.height(), image.order());
    let overflow = DetectionError::DimensionOverflow {
        width: w,
        height: h,
    };
    let cw = u32::try_from(w).map_err(|_| overflow.clone())?;
    let ch = u32::try_from(h).map_err(|_| overflow.clone())?;
    // Samples are already in the image's channel order; the canvas only moves bytes.
    let mut canvas = RgbImage::from_raw(cw, ch, image.into_raw()).ok_or(overflow)?;
    let brush = brush_offsets(width);
    let pen = Rgb(color);

    for contour in contours {
        let n = contour.points.len();
        for i in 0..n {
            let a = contour.points[i];
            let b = contour.points[(i + 1) % n];
            for &(dx, dy) in &brush {
                draw_line_segment_mut(
                    &mut canvas,
                    (a.x as f32 + dx, a.y as f32 + dy),
                    (b.x as f32 + dx, b.y as f32 + dy),
                    pen,
                );
            }
        }
    }

    ColorImage::from_raw(w, h, CHANNELS, order, canvas.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ChannelOrder, GrayImageU8};
    use crate::segmentation::{external_contours, luminance};

    const GRAY: u8 = 128;

    fn scene_with_square(w: usize, h: usize, x0: usize, y0: usize, side: usize) -> Vec<u8> {
        let mut data = vec![GRAY; w * h * 3];
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                let i = (y * w + x) * 3;
                data[i..i + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
        data
    }

    fn run(view: &ColorImageU8, style: &AnnotationStyle) -> ColorImage {
        let gray: GrayImageU8 = luminance(view);
        let mask = SpillMask::from_gray(gray.as_view(), 30);
        let contours = external_contours(&mask).unwrap();
        annotate(view, &mask, &contours, style).unwrap()
    }

    #[test]
    fn blend_matches_weighted_sum() {
        assert_eq!(blend(0, 255, 0.4), 102);
        assert_eq!(blend(128, 0, 0.4), 77);
        assert_eq!(blend(200, 200, 0.4), 200);
    }

    #[test]
    fn interior_is_tinted_and_background_untouched() {
        let data = scene_with_square(20, 20, 5, 5, 10);
        let view = ColorImageU8::packed(20, 20, ChannelOrder::Rgb, &data);
        let out = run(&view, &AnnotationStyle::default());
        // Interior pixel away from the outline: 0.4 * red over black.
        assert_eq!(out.pixel(10, 10), [102, 0, 0]);
        // Far background keeps its value.
        assert_eq!(out.pixel(0, 0), [GRAY, GRAY, GRAY]);
        assert_eq!(out.pixel(19, 19), [GRAY, GRAY, GRAY]);
        // Corner of the region lies on the outline.
        assert_eq!(out.pixel(5, 5), [255, 0, 0]);
    }

    #[test]
    fn highlight_follows_channel_order() {
        let data = scene_with_square(12, 12, 3, 3, 6);
        let view = ColorImageU8::packed(12, 12, ChannelOrder::Bgr, &data);
        let out = run(&view, &AnnotationStyle::default());
        assert_eq!(out.pixel(3, 3), [0, 0, 255]);
        assert_eq!(out.order(), ChannelOrder::Bgr);
    }

    #[test]
    fn zero_width_outline_only_tints() {
        let data = scene_with_square(12, 12, 3, 3, 6);
        let view = ColorImageU8::packed(12, 12, ChannelOrder::Rgb, &data);
        let style = AnnotationStyle {
            outline_width: 0,
            ..Default::default()
        };
        let out = run(&view, &style);
        assert_eq!(out.pixel(3, 3), [102, 0, 0]);
    }

    #[test]
    fn brush_is_square() {
        assert_eq!(brush_offsets(1), vec![(0.0, 0.0)]);
        assert_eq!(brush_offsets(2).len(), 4);
        assert!(brush_offsets(0).is_empty());
    }
}
