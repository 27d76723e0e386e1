//! Gradient rasters for the picker surfaces.
//!
//! Rasters are produced through a typed byte buffer, one packed u32 per
//! pixel, then wrapped in a cairo `ImageSurface` for painting. Filling the
//! buffer directly keeps a full repaint of either picker well inside a
//! frame; issuing per-pixel cairo calls does not.

use crate::color::hsv_to_rgb;

const BYTES_PER_PIXEL: i32 = 4;

/// Pack an RGB triple as an opaque ARGB32 pixel (native-endian u32, as
/// cairo expects).
fn pack_pixel(r: f64, g: f64, b: f64) -> u32 {
    let r = (r * 255.0).round() as u32;
    let g = (g * 255.0).round() as u32;
    let b = (b * 255.0).round() as u32;
    0xff00_0000 | (r << 16) | (g << 8) | b
}

/// Fill `data` with the hue strip: a left-to-right spectrum at full
/// saturation and value, identical on every row.
///
/// `data` must hold at least `stride * height` bytes with `stride` covering
/// `width` ARGB32 pixels per row.
pub fn fill_hue_strip(data: &mut [u8], width: i32, height: i32, stride: i32) {
    for x in 0..width {
        let h = x as f64 / (width - 1) as f64;
        let (r, g, b) = hsv_to_rgb(h, 1.0, 1.0);
        let pixel = pack_pixel(r, g, b).to_ne_bytes();
        for y in 0..height {
            let idx = (y * stride + x * BYTES_PER_PIXEL) as usize;
            data[idx..idx + 4].copy_from_slice(&pixel);
        }
    }
}

/// Fill `data` with the saturation/value plane for a fixed hue:
/// desaturated at the left edge, saturated at the right, bright at the
/// top, dark at the bottom.
pub fn fill_sat_val_plane(data: &mut [u8], width: i32, height: i32, stride: i32, hue: f64) {
    for y in 0..height {
        let v = 1.0 - y as f64 / (height - 1) as f64;
        for x in 0..width {
            let s = x as f64 / (width - 1) as f64;
            let (r, g, b) = hsv_to_rgb(hue, s, v);
            let pixel = pack_pixel(r, g, b).to_ne_bytes();
            let idx = (y * stride + x * BYTES_PER_PIXEL) as usize;
            data[idx..idx + 4].copy_from_slice(&pixel);
        }
    }
}

/// Render the hue strip as a cairo surface, or `None` when the surface is
/// too small to carry a gradient.
pub fn hue_strip_surface(width: i32, height: i32) -> Option<cairo::ImageSurface> {
    build_surface(width, height, |data, stride| {
        fill_hue_strip(data, width, height, stride)
    })
}

/// Render the saturation/value plane for `hue` as a cairo surface, or
/// `None` for degenerate sizes.
pub fn sat_val_plane_surface(width: i32, height: i32, hue: f64) -> Option<cairo::ImageSurface> {
    build_surface(width, height, |data, stride| {
        fill_sat_val_plane(data, width, height, stride, hue)
    })
}

fn build_surface(
    width: i32,
    height: i32,
    fill: impl FnOnce(&mut [u8], i32),
) -> Option<cairo::ImageSurface> {
    // Fewer than two pixels along an axis leaves nothing to map a pointer
    // onto; skip the draw instead of dividing by zero.
    if width <= 1 || height <= 1 {
        return None;
    }

    let stride = cairo::Format::ARgb32.stride_for_width(width as u32).ok()?;
    let mut data = vec![0u8; (stride * height) as usize];
    fill(&mut data, stride);

    cairo::ImageSurface::create_for_data(data, cairo::Format::ARgb32, width, height, stride).ok()
}
