//! Storm lightning and fog overlays.

use image::{imageops, Rgba, RgbaImage};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::params::{GenerationParams, Weather};
use crate::raster::{blend_pixel, stroke_polyline};

/// Applies the weather effect for the face, if any. Storm and fog are
/// mutually exclusive by construction of the `Weather` enum.
pub fn apply(img: &mut RgbaImage, params: &GenerationParams, rng: &mut ChaCha8Rng) {
    match params.weather {
        Weather::Storm => add_lightning(img, params.storm_intensity, rng),
        Weather::Foggy => add_fog(img, params.storm_intensity),
        Weather::Calm => {}
    }
}

/// Draws lightning bolts with per-bolt glow layers.
///
/// Bolt count scales with intensity; each bolt is a descending polyline
/// stroked in opaque white, then re-stroked wider at alpha 100 on its own
/// transparent layer, blurred, and composited.
pub fn add_lightning(img: &mut RgbaImage, intensity: f32, rng: &mut ChaCha8Rng) {
    let (width, height) = img.dimensions();
    let max_bolts = 10 + (intensity * 20.0) as u32;
    let num_bolts = rng.random_range(5..=max_bolts);

    for _ in 0..num_bolts {
        let start_x = rng.random_range(0..width) as i64;
        // Upper half of the face; a 1-pixel-tall face still has row 0.
        let start_y = rng.random_range(0..(height / 2).max(1)) as i64;

        let mut points = vec![(start_x, start_y)];
        let segments = rng.random_range(5..=10);
        for _ in 0..segments {
            let (last_x, last_y) = *points.last().unwrap();
            points.push((
                last_x + rng.random_range(-20..=20),
                last_y + rng.random_range(20..=40),
            ));
        }

        let stroke_width = rng.random_range(2..=4);
        stroke_polyline(img, &points, Rgba([255, 255, 255, 255]), stroke_width);

        // Glow: same polyline on a transparent layer, wider and translucent,
        // blurred with a per-bolt radius.
        let glow_width = rng.random_range(8..=12);
        let glow_sigma = rng.random_range(3..=6) as f32;
        let mut glow = RgbaImage::new(width, height);
        stroke_polyline(&mut glow, &points, Rgba([255, 255, 255, 100]), glow_width);
        let glow = imageops::blur(&glow, glow_sigma);
        imageops::overlay(img, &glow, 0, 0);
    }
}

/// Blends a top-opaque-to-bottom-transparent light gray gradient over the
/// face. Only applies when intensity exceeds 0.5; below that the face is
/// left untouched.
pub fn add_fog(img: &mut RgbaImage, intensity: f32) {
    if intensity <= 0.5 {
        return;
    }

    let (width, height) = img.dimensions();
    for y in 0..height {
        let alpha = (255.0 * (1.0 - y as f32 / height as f32) * intensity) as u8;
        let fog = Rgba([200, 200, 200, alpha]);
        for x in 0..width {
            blend_pixel(img, x as i64, y as i64, fog);
        }
    }
}
