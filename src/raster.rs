//! Pixel-level drawing primitives shared by the overlay stages.

use image::{Pixel, Rgba, RgbaImage};

/// Alpha-blends `color` over the pixel at (x, y), ignoring out-of-bounds
/// coordinates.
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    px.blend(&color);
}

/// Writes `color` to the pixel at (x, y), ignoring out-of-bounds coordinates.
pub fn put_pixel_clipped(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}

/// Draws a filled disk centered at (cx, cy). Pixels outside the image are
/// clipped.
pub fn fill_disk(img: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: Rgba<u8>) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel_clipped(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Returns the integer points of the line from (x0, y0) to (x1, y1)
/// (Bresenham).
pub fn line_points(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    let mut points = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Strokes a polyline with the given width by stamping disks of radius
/// width/2 along each segment.
pub fn stroke_polyline(img: &mut RgbaImage, points: &[(i64, i64)], color: Rgba<u8>, width: u32) {
    let radius = (width / 2).max(1) as i64;
    for pair in points.windows(2) {
        for (x, y) in line_points(pair[0].0, pair[0].1, pair[1].0, pair[1].1) {
            fill_disk(img, x, y, radius, color);
        }
    }
}
