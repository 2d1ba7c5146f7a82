//! Night-sky decorations: stars on every face, a moon on the top face.

use image::{Rgba, RgbaImage};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::face::FaceId;
use crate::params::{GenerationParams, TimeOfDay};
use crate::raster::fill_disk;

/// Stars drawn per face at night.
pub const STAR_COUNT: u32 = 100;

/// Applies night-time decorations. Stars go on every face; the moon goes on
/// the top face only. Does nothing outside of night.
pub fn apply(img: &mut RgbaImage, face: FaceId, params: &GenerationParams, rng: &mut ChaCha8Rng) {
    if params.time_of_day != TimeOfDay::Night {
        return;
    }
    add_stars(img, rng);
    if face == FaceId::Top {
        add_moon(img, rng);
    }
}

/// Scatters small gray-white disks of random brightness and radius.
pub fn add_stars(img: &mut RgbaImage, rng: &mut ChaCha8Rng) {
    let (width, height) = img.dimensions();
    for _ in 0..STAR_COUNT {
        let x = rng.random_range(0..width) as i64;
        let y = rng.random_range(0..height) as i64;
        let brightness = rng.random_range(180..=255u8);
        let radius = rng.random_range(1..=3);
        fill_disk(img, x, y, radius, Rgba([brightness, brightness, brightness, 255]));
    }
}

/// Draws the moon: center and radius ranges keep the disk in the upper half
/// of the face.
pub fn add_moon(img: &mut RgbaImage, rng: &mut ChaCha8Rng) {
    let (width, height) = img.dimensions();
    let (cx, cy, radius) = moon_disk(width, height, rng);
    fill_disk(img, cx, cy, radius, Rgba([255, 255, 255, 255]));
}

/// Picks the moon placement: x in [w/4, 3w/4], y in [h/4, h/2],
/// radius in [20, 40].
pub fn moon_disk(width: u32, height: u32, rng: &mut ChaCha8Rng) -> (i64, i64, i64) {
    let cx = rng.random_range(width / 4..=3 * width / 4) as i64;
    let cy = rng.random_range(height / 4..=height / 2) as i64;
    let radius = rng.random_range(20..=40);
    (cx, cy, radius)
}
