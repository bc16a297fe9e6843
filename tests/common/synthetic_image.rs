/// Tightly packed RGB buffer filled with one color.
pub fn solid_rgb(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        img.extend_from_slice(&rgb);
    }
    img
}

/// Paint `rgb` onto every pixel for which `inside(x, y)` holds.
pub fn paint<F>(img: &mut [u8], width: usize, rgb: [u8; 3], inside: F)
where
    F: Fn(usize, usize) -> bool,
{
    for (i, px) in img.chunks_exact_mut(3).enumerate() {
        if inside(i % width, i / width) {
            px.copy_from_slice(&rgb);
        }
    }
}

/// Bright sea with the first `dark` pixels (raster order) set to black.
pub fn dark_prefix_rgb(width: usize, height: usize, dark: usize) -> Vec<u8> {
    assert!(dark <= width * height, "more dark pixels than the image holds");
    let mut img = solid_rgb(width, height, [170, 180, 190]);
    paint(&mut img, width, [0, 0, 0], |x, y| y * width + x < dark);
    img
}

/// Bright sea with a filled dark disc.
pub fn slick_disc_rgb(width: usize, height: usize, cx: f32, cy: f32, radius: f32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = solid_rgb(width, height, [120, 140, 160]);
    paint(&mut img, width, [8, 8, 12], |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        dx * dx + dy * dy <= radius * radius
    });
    img
}

/// Reverse the channel order of every pixel.
pub fn swap_rb(img: &[u8]) -> Vec<u8> {
    img.chunks_exact(3)
        .flat_map(|px| [px[2], px[1], px[0]])
        .collect()
}
