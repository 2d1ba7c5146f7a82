//! PNG export for finished skybox faces.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

use crate::face::FaceId;
use crate::generate::SkyboxResult;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Writes one face as an RGBA8 PNG.
pub fn export_face_png(img: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);

    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(())
}

/// Writes all six faces as `<faceid>.png` into the output directory.
///
/// Stops at the first failure; files already written are left in place.
pub fn export_skybox_png(result: &SkyboxResult, output_dir: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(output_dir)?;

    for face in FaceId::all() {
        let path = output_dir.join(format!("{}.png", face.name()));
        export_face_png(result.face(face), &path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_skybox;
    use crate::params::GenerationParams;
    use tempfile::tempdir;

    #[test]
    fn test_export_face_png() {
        let img = RgbaImage::from_pixel(32, 32, image::Rgba([10, 20, 30, 255]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("face.png");

        export_face_png(&img, &path).unwrap();

        assert!(path.exists());
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_export_skybox_writes_six_files() {
        let params = GenerationParams {
            seed: Some(42),
            ..Default::default()
        };
        let result = generate_skybox(&params, 32, 32).unwrap();
        let dir = tempdir().unwrap();

        export_skybox_png(&result, dir.path()).unwrap();

        for face in FaceId::all() {
            let path = dir.path().join(format!("{}.png", face.name()));
            assert!(path.exists(), "missing file for {:?}", face);
        }
    }

    #[test]
    fn test_exported_face_roundtrips() {
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            image::Rgba([x as u8 * 16, y as u8 * 16, 128, 255])
        });
        let dir = tempdir().unwrap();
        let path = dir.path().join("rt.png");

        export_face_png(&img, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, img);
    }
}
