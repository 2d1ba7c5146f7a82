//! Cloud layer synthesis.
//!
//! Combines a coarse and a fine open-simplex octave into an alpha mask,
//! recolors bright pixels to the configured cloud color, feathers the mask
//! edges with a Gaussian blur, and softens the whole layer. The result is an
//! RGBA buffer the compositor alpha-blends over the sky gradient.

use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::noise_field::{NoiseField, COARSE_DIVISOR, FINE_DIVISOR};
use crate::params::{GenerationParams, Weather};

/// Sigma of the alpha-mask feathering blur.
const EDGE_SIGMA: f32 = 3.0;
/// Sigma of the final whole-layer blur.
const LAYER_SIGMA: f32 = 2.0;
/// Channel threshold above which a pixel counts as a bright cloud pixel.
const BRIGHT_THRESHOLD: u8 = 200;

/// Builds the raw (pre-blur) cloud mask from two noise octaves.
///
/// Per pixel: combined = (coarse + 0.5 * fine) / 1.5, normalized to [0, 1],
/// then alpha = normalized * 255. Storm clouds are gray, biased lighter by
/// intensity; calm clouds are white.
pub fn raw_cloud_layer(
    params: &GenerationParams,
    field: &NoiseField,
    width: u32,
    height: u32,
) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);

    let base = if params.weather == Weather::Storm {
        let gray = 50 + (params.storm_intensity * 100.0) as u8;
        [gray, gray, gray]
    } else {
        [255, 255, 255]
    };

    for y in 0..height {
        for x in 0..width {
            let coarse = field.sample(x, y, COARSE_DIVISOR);
            let fine = field.sample(x, y, FINE_DIVISOR);
            let combined = (coarse + 0.5 * fine) / 1.5;
            let normalized = (combined + 1.0) / 2.0;
            let alpha = (normalized * 255.0) as u8;
            img.put_pixel(x, y, Rgba([base[0], base[1], base[2], alpha]));
        }
    }

    img
}

/// Replaces the RGB of every bright pixel (all channels > 200) with the
/// configured cloud color, preserving alpha. Storm-gray pixels pass through.
pub fn apply_cloud_color(img: &mut RgbaImage, color: [u8; 3]) {
    for px in img.pixels_mut() {
        if px[0] > BRIGHT_THRESHOLD && px[1] > BRIGHT_THRESHOLD && px[2] > BRIGHT_THRESHOLD {
            *px = Rgba([color[0], color[1], color[2], px[3]]);
        }
    }
}

/// Feathers the hard noise edges: the alpha channel is extracted, blurred,
/// and written back.
pub fn soften_edges(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    let mut mask = GrayImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels() {
        mask.put_pixel(x, y, Luma([px[3]]));
    }

    let blurred = imageops::blur(&mask, EDGE_SIGMA);
    for (x, y, px) in img.enumerate_pixels_mut() {
        px[3] = blurred.get_pixel(x, y)[0];
    }
}

/// Runs the full cloud pipeline for one face.
///
/// The face RNG supplies the noise seed (drawn from [0, 100_000)) and the
/// spatial offsets (each drawn from [0, 100)), so the layer is a pure
/// function of the per-face RNG state and the parameters.
pub fn synthesize(
    params: &GenerationParams,
    width: u32,
    height: u32,
    rng: &mut ChaCha8Rng,
) -> RgbaImage {
    let noise_seed: u32 = rng.random_range(0..100_000);
    let offset_x: f64 = rng.random_range(0.0..100.0);
    let offset_y: f64 = rng.random_range(0.0..100.0);
    let field = NoiseField::new(noise_seed, offset_x, offset_y);

    let mut layer = raw_cloud_layer(params, &field, width, height);
    apply_cloud_color(&mut layer, params.cloud_color);
    soften_edges(&mut layer);
    imageops::blur(&layer, LAYER_SIGMA)
}
