//! Interleaved 3-channel 8-bit images.
//!
//! - [`ColorImageU8`]: borrowed, possibly strided view as handed over by a
//!   decoder or a caller-owned frame buffer. Fields are public, so the view is
//!   validated before use (see [`ColorImageU8::validate`]).
//! - [`ColorImage`]: owned, tightly packed buffer. Produced by the annotator
//!   and by the I/O helpers.
//!
//! Both carry a [`ChannelOrder`]. Detection logic only depends on the order
//! through the luminance weights and the highlight color.
use crate::detector::DetectionError;
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Samples per pixel.
pub const CHANNELS: usize = 3;

/// Byte order of the three color samples within a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// Lay out an `[r, g, b]` triple in this order.
    #[inline]
    pub fn arrange(self, rgb: [u8; 3]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => rgb,
            ChannelOrder::Bgr => [rgb[2], rgb[1], rgb[0]],
        }
    }

    /// Read a stored pixel back as `[r, g, b]`.
    #[inline]
    pub fn to_rgb(self, px: &[u8]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => [px[0], px[1], px[2]],
            ChannelOrder::Bgr => [px[2], px[1], px[0]],
        }
    }
}

/// Borrowed interleaved color view.
#[derive(Clone, Debug)]
pub struct ColorImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows, >= w * CHANNELS
    pub order: ChannelOrder,
    pub data: &'a [u8],
}

impl<'a> ColorImageU8<'a> {
    /// View over a tightly packed buffer (`stride == w * 3`).
    pub fn packed(w: usize, h: usize, order: ChannelOrder, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w * CHANNELS,
            order,
            data,
        }
    }

    /// Check that every row addressed by the view lies inside `data`.
    pub fn validate(&self) -> Result<(), DetectionError> {
        let row_bytes = self
            .w
            .checked_mul(CHANNELS)
            .ok_or(DetectionError::DimensionOverflow {
                width: self.w,
                height: self.h,
            })?;
        if self.stride < row_bytes {
            return Err(DetectionError::InvalidStride {
                stride: self.stride,
                row_bytes,
            });
        }
        if self.w == 0 || self.h == 0 {
            return Ok(());
        }
        let required = self
            .stride
            .checked_mul(self.h - 1)
            .and_then(|v| v.checked_add(row_bytes))
            .ok_or(DetectionError::DimensionOverflow {
                width: self.w,
                height: self.h,
            })?;
        if self.data.len() < required {
            return Err(DetectionError::BufferTooSmall {
                required,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Interleaved samples of row `y` (`w * 3` bytes).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * CHANNELS]
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.w * self.h
    }

    /// Packed copy of the viewed pixels. The view must be valid.
    pub fn to_owned_image(&self) -> ColorImage {
        let mut data = Vec::with_capacity(self.w * self.h * CHANNELS);
        for y in 0..self.h {
            data.extend_from_slice(self.row(y));
        }
        ColorImage {
            width: self.w,
            height: self.h,
            order: self.order,
            data,
        }
    }
}

/// Owned, tightly packed interleaved color image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImage {
    width: usize,
    height: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl ColorImage {
    /// Wrap decoded samples. Fails unless `channels == 3` and `data` holds
    /// exactly `width * height * channels` bytes.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, DetectionError> {
        if channels != CHANNELS {
            return Err(DetectionError::UnsupportedChannels(channels));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or(DetectionError::DimensionOverflow { width, height })?;
        if data.len() != expected {
            return Err(DetectionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    pub fn from_rgb_image(image: RgbImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        Self {
            width,
            height,
            order: ChannelOrder::Rgb,
            data: image.into_raw(),
        }
    }

    /// Convert to an `image` crate buffer in RGB order.
    pub fn to_rgb_image(&self) -> Result<RgbImage, String> {
        let w = u32::try_from(self.width).map_err(|_| "Image width exceeds u32".to_string())?;
        let h = u32::try_from(self.height).map_err(|_| "Image height exceeds u32".to_string())?;
        let data = match self.order {
            ChannelOrder::Rgb => self.data.clone(),
            ChannelOrder::Bgr => self
                .data
                .chunks_exact(CHANNELS)
                .flat_map(|px| ChannelOrder::Bgr.to_rgb(px))
                .collect(),
        };
        RgbImage::from_raw(w, h, data).ok_or_else(|| "Failed to create image buffer".to_string())
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Stored samples of pixel (x, y), in [`Self::order`].
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = (y * self.width + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ColorImageU8` view
    pub fn as_view(&self) -> ColorImageU8<'_> {
        ColorImageU8::packed(self.width, self.height, self.order, &self.data)
    }
}
