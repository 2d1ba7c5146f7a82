//! Skybox orchestration: seed resolution and the six-face fan-out.

use std::collections::HashMap;

use image::RgbaImage;
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use crate::compositor::compose_face;
use crate::face::FaceId;
use crate::params::GenerationParams;

/// A finished RGBA buffer for one face.
pub type FaceImage = RgbaImage;

/// Seeds drawn by the engine when the caller supplies none lie in
/// [0, 1_000_000).
const AUTO_SEED_RANGE: u64 = 1_000_000;

/// Errors surfaced by the orchestrator.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("face dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("generation of face '{face}' failed: {message}")]
    Face { face: &'static str, message: String },
    #[error("worker pool construction failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// The complete generation result: all six faces plus the seed that was
/// actually used.
#[derive(Debug)]
pub struct SkyboxResult {
    pub faces: HashMap<FaceId, FaceImage>,
    /// Resolved master seed; reportable even when the caller left the seed
    /// unspecified.
    pub seed: u64,
}

impl SkyboxResult {
    /// Returns the image for a face. All six faces are present on success.
    pub fn face(&self, id: FaceId) -> &FaceImage {
        &self.faces[&id]
    }
}

/// Generates all six cube-map faces.
///
/// The seed is resolved before any face work starts: the caller's seed if
/// supplied, otherwise one drawn uniformly from [0, 1_000_000). Each face
/// then renders on a worker pool sized at twice the available hardware
/// parallelism, from an RNG derived from (seed, face index). The call either
/// returns all six faces or the first failure; no partial skybox is ever
/// produced.
pub fn generate_skybox(
    params: &GenerationParams,
    width: u32,
    height: u32,
) -> Result<SkyboxResult, GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::InvalidDimensions { width, height });
    }

    let seed = params
        .seed
        .unwrap_or_else(|| rand::rng().random_range(0..AUTO_SEED_RANGE));

    let workers = std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(4);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let faces: HashMap<FaceId, FaceImage> = pool.install(|| {
        FaceId::all()
            .into_par_iter()
            .map(|face| {
                let img =
                    std::panic::catch_unwind(|| compose_face(face, params, width, height, seed))
                        .map_err(|cause| GenerateError::Face {
                            face: face.name(),
                            message: panic_message(cause),
                        })?;
                Ok((face, img))
            })
            .collect::<Result<_, GenerateError>>()
    })?;

    Ok(SkyboxResult { faces, seed })
}

fn panic_message(cause: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
