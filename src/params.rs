//! Generation parameters supplied by the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building parameters, before any generation work.
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("invalid seed '{0}': expected an unsigned integer")]
    InvalidSeed(String),
    #[error("invalid cloud color '{0}': expected #rrggbb")]
    InvalidCloudColor(String),
}

/// Time of day controlling the sky gradient and celestial decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Day,
    Night,
    Sunrise,
    Sunset,
}

/// Weather condition controlling clouds, gradient, and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    Calm,
    Storm,
    Foggy,
}

/// Immutable parameter set for one skybox generation run.
///
/// The caller is responsible for clamping `saturation` and `storm_intensity`
/// to [0, 1] before invoking the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Color saturation in [0, 1]. Carried for the parameter contract;
    /// the current sky color math does not consume it.
    pub saturation: f32,
    pub time_of_day: TimeOfDay,
    pub weather: Weather,
    /// Storm intensity in [0, 1]; doubles as fog intensity when foggy.
    pub storm_intensity: f32,
    /// Master seed. `None` asks the engine to pick one and report it back.
    pub seed: Option<u64>,
    /// RGB replacement color for bright cloud pixels.
    pub cloud_color: [u8; 3],
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            saturation: 0.5,
            time_of_day: TimeOfDay::Day,
            weather: Weather::Calm,
            storm_intensity: 0.5,
            seed: None,
            cloud_color: [255, 255, 255],
        }
    }
}

/// Parses a free-form seed string as entered by the caller.
///
/// An empty string means "no seed supplied"; anything else must parse as an
/// unsigned integer.
pub fn parse_seed(input: &str) -> Result<Option<u64>, ParamsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ParamsError::InvalidSeed(trimmed.to_string()))
}

/// Parses a `#rrggbb` hex color into an RGB triple.
pub fn parse_cloud_color(input: &str) -> Result<[u8; 3], ParamsError> {
    let hex = input.trim().strip_prefix('#').unwrap_or_else(|| input.trim());
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParamsError::InvalidCloudColor(input.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ParamsError::InvalidCloudColor(input.to_string()))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
