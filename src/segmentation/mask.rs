use crate::image::{GrayImageU8, ImageU8, ImageView};
use crate::detector::DetectionError;
use image::{GrayImage, Luma};

/// Value stored for spill pixels; background is 0.
pub const MASK_ON: u8 = 255;

/// Binary spill mask: `MASK_ON` where luminance is below the threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpillMask {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl SpillMask {
    /// Inverse binary threshold: `luma < threshold` marks a spill pixel.
    pub fn from_gray(gray: ImageU8<'_>, threshold: u8) -> Self {
        let mut data = Vec::with_capacity(gray.pixel_count());
        for row in gray.rows() {
            data.extend(row.iter().map(|&v| if v < threshold { MASK_ON } else { 0 }));
        }
        Self {
            w: gray.w,
            h: gray.h,
            data,
        }
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    /// Number of spill pixels.
    pub fn count(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0).count() as u64
    }

    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }

    /// Owned 0/255 copy, e.g. for saving as a debug PNG.
    pub fn to_gray(&self) -> GrayImageU8 {
        GrayImageU8::new(self.w, self.h, self.data.clone())
    }

    /// `image` crate copy with a one-pixel background frame around it.
    ///
    /// The contour tracer only starts outer borders after a background pixel,
    /// so regions touching the image edge need the frame. Traced coordinates
    /// are offset by (+1, +1).
    pub(crate) fn to_padded_luma_image(&self) -> Result<GrayImage, DetectionError> {
        let (w, h) = self.dims_u32(2)?;
        Ok(GrayImage::from_fn(w, h, |x, y| {
            let (x, y) = (x as usize, y as usize);
            let inside = (1..=self.w).contains(&x) && (1..=self.h).contains(&y);
            if inside && self.is_set(x - 1, y - 1) {
                Luma([MASK_ON])
            } else {
                Luma([0])
            }
        }))
    }

    /// Inverted `image` crate copy: background pixels on, spill pixels off.
    pub(crate) fn to_background_image(&self) -> Result<GrayImage, DetectionError> {
        let (w, h) = self.dims_u32(0)?;
        Ok(GrayImage::from_fn(w, h, |x, y| {
            if self.is_set(x as usize, y as usize) {
                Luma([0])
            } else {
                Luma([MASK_ON])
            }
        }))
    }

    fn dims_u32(&self, border: usize) -> Result<(u32, u32), DetectionError> {
        let overflow = DetectionError::DimensionOverflow {
            width: self.w,
            height: self.h,
        };
        let w = self.w.checked_add(border).ok_or(overflow.clone())?;
        let h = self.h.checked_add(border).ok_or(overflow.clone())?;
        let w = u32::try_from(w).map_err(|_| overflow.clone())?;
        let h = u32::try_from(h).map_err(|_| overflow)?;
        Ok((w, h))
    }
}

impl ImageView for SpillMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}
