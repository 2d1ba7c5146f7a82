//! Procedural skybox cube-map generator.
//!
//! This crate synthesizes the six square faces of a cube-map sky from a
//! compact parameter set: a vertical color gradient, layered open-simplex
//! cloud masks with recoloring and soft edges, optional storm lightning or
//! fog overlays, and night-time stars with a moon on the top face. A fixed
//! seed reproduces the exact same six images.

pub mod params;
pub mod face;
pub mod noise_field;
pub mod sky;
pub mod clouds;
pub mod weather;
pub mod celestial;
pub mod raster;
pub mod compositor;
pub mod generate;
pub mod export;

pub use params::{GenerationParams, ParamsError, TimeOfDay, Weather};
pub use face::FaceId;
pub use generate::{generate_skybox, FaceImage, GenerateError, SkyboxResult};
pub use export::{export_face_png, export_skybox_png, ExportError};
