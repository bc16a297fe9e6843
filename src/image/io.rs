//! I/O helpers for color images, masks and JSON.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into an owned RGB buffer.
//! - `save_color_png`: write a `ColorImage` to a PNG, honouring its channel order.
//! - `encode_png`: in-memory PNG encoding for reports.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer (e.g. a spill mask) to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ColorImage, GrayImageU8};
use image::{DynamicImage, GrayImage, ImageFormat};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_color_image(path: &Path) -> Result<ColorImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    Ok(ColorImage::from_rgb_image(img))
}

/// Encode a color image as PNG bytes.
pub fn encode_png(image: &ColorImage) -> Result<Vec<u8>, String> {
    let rgb = image.to_rgb_image()?;
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| format!("Failed to encode PNG: {e}"))?;
    Ok(bytes)
}

/// Save a color image to a PNG.
pub fn save_color_png(image: &ColorImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let rgb = image.to_rgb_image()?;
    rgb.save_with_format(path, ImageFormat::Png)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let w = u32::try_from(buffer.width()).map_err(|_| "Image width exceeds u32".to_string())?;
    let h = u32::try_from(buffer.height()).map_err(|_| "Image height exceeds u32".to_string())?;
    let image = GrayImage::from_raw(w, h, buffer.as_bytes().to_vec())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
