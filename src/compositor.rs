//! Per-face stage sequencing.

use image::{imageops, RgbaImage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::face::FaceId;
use crate::params::GenerationParams;
use crate::{celestial, clouds, sky, weather};

/// Derives the face's private RNG from the master seed and face index.
///
/// Every random draw a face makes comes from this generator, so faces are
/// reproducible independently of the order the scheduler runs them in.
pub fn face_rng(master_seed: u64, face: FaceId) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(master_seed.wrapping_add(face.index() as u64 * 31))
}

/// Composites one face: sky gradient, then clouds, then weather effects,
/// then night decorations. Never fails under pre-clamped parameters.
pub fn compose_face(
    face: FaceId,
    params: &GenerationParams,
    width: u32,
    height: u32,
    master_seed: u64,
) -> RgbaImage {
    let mut rng = face_rng(master_seed, face);

    let mut img = sky::gradient(params, width, height);

    let cloud_layer = clouds::synthesize(params, width, height, &mut rng);
    imageops::overlay(&mut img, &cloud_layer, 0, 0);

    weather::apply(&mut img, params, &mut rng);
    celestial::apply(&mut img, face, params, &mut rng);

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{TimeOfDay, Weather};

    #[test]
    fn test_face_rng_is_per_face() {
        use rand::Rng;
        let mut a = face_rng(42, FaceId::Left);
        let mut b = face_rng(42, FaceId::Right);
        let draw_a: u64 = a.random();
        let draw_b: u64 = b.random();
        assert_ne!(draw_a, draw_b, "faces must not share an RNG stream");
    }

    #[test]
    fn test_compose_face_deterministic() {
        let params = GenerationParams {
            time_of_day: TimeOfDay::Night,
            weather: Weather::Storm,
            storm_intensity: 0.7,
            ..Default::default()
        };
        let a = compose_face(FaceId::Front, &params, 64, 64, 1234);
        let b = compose_face(FaceId::Front, &params, 64, 64, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_face_dimensions() {
        let params = GenerationParams::default();
        let img = compose_face(FaceId::Bottom, &params, 48, 48, 1);
        assert_eq!(img.dimensions(), (48, 48));
    }

    #[test]
    fn test_faces_differ_under_same_seed() {
        let params = GenerationParams::default();
        let left = compose_face(FaceId::Left, &params, 64, 64, 42);
        let right = compose_face(FaceId::Right, &params, 64, 64, 42);
        assert_ne!(left, right, "per-face offsets should vary the clouds");
    }

    #[test]
    fn test_composited_face_is_opaque() {
        let params = GenerationParams::default();
        let img = compose_face(FaceId::Front, &params, 32, 32, 7);
        assert!(img.pixels().all(|px| px[3] == 255));
    }
}
