//! Skyboxgen CLI - deterministic procedural skybox generator.
//!
//! Generates the six cube-map faces of a sky scene and exports them as
//! `<faceid>.png` files.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use skyboxgen::params::{parse_cloud_color, parse_seed};
use skyboxgen::{export_skybox_png, generate_skybox, GenerationParams, TimeOfDay, Weather};

/// Deterministic procedural skybox generator.
#[derive(Parser)]
#[command(name = "skyboxgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Face resolution in pixels (faces are square).
    #[arg(short, long, default_value = "512")]
    resolution: u32,

    /// Random seed for reproducible generation (unsigned integer).
    /// Omitted or empty: the engine picks one and prints it.
    #[arg(short, long)]
    seed: Option<String>,

    /// Output directory for the six face PNGs.
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Time of day.
    #[arg(short, long, default_value = "day")]
    time_of_day: TimeArg,

    /// Weather condition.
    #[arg(short, long, default_value = "calm")]
    weather: WeatherArg,

    /// Storm intensity in [0, 1]; doubles as fog intensity when foggy.
    #[arg(long, default_value = "0.5")]
    storm_intensity: f32,

    /// Cloud color as #rrggbb.
    #[arg(long, default_value = "#ffffff")]
    cloud_color: String,

    /// Color saturation in [0, 1].
    #[arg(long, default_value = "0.5")]
    saturation: f32,
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeArg {
    Day,
    Night,
    Sunrise,
    Sunset,
}

impl From<TimeArg> for TimeOfDay {
    fn from(arg: TimeArg) -> Self {
        match arg {
            TimeArg::Day => TimeOfDay::Day,
            TimeArg::Night => TimeOfDay::Night,
            TimeArg::Sunrise => TimeOfDay::Sunrise,
            TimeArg::Sunset => TimeOfDay::Sunset,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WeatherArg {
    Calm,
    Storm,
    Foggy,
}

impl From<WeatherArg> for Weather {
    fn from(arg: WeatherArg) -> Self {
        match arg {
            WeatherArg::Calm => Weather::Calm,
            WeatherArg::Storm => Weather::Storm,
            WeatherArg::Foggy => Weather::Foggy,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.resolution == 0 {
        eprintln!("Error: Resolution must be positive");
        std::process::exit(1);
    }

    let seed = match parse_seed(cli.seed.as_deref().unwrap_or("")) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let cloud_color = match parse_cloud_color(&cli.cloud_color) {
        Ok(color) => color,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let params = GenerationParams {
        saturation: cli.saturation.clamp(0.0, 1.0),
        time_of_day: cli.time_of_day.into(),
        weather: cli.weather.into(),
        storm_intensity: cli.storm_intensity.clamp(0.0, 1.0),
        seed,
        cloud_color,
    };

    println!("Skyboxgen - Procedural Skybox Generator");
    println!("=======================================");
    println!("Resolution: {}x{} per face", cli.resolution, cli.resolution);
    println!("Output: {}", cli.output.display());

    let start = Instant::now();

    let result = generate_skybox(&params, cli.resolution, cli.resolution).unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });

    let gen_time = start.elapsed();
    println!("Seed: {}", result.seed);
    println!("Generation completed in {:.2?}", gen_time);

    println!("\nExporting faces...");
    let export_start = Instant::now();

    export_skybox_png(&result, &cli.output).unwrap_or_else(|e| {
        eprintln!("Error exporting skybox: {}", e);
        std::process::exit(1);
    });

    println!("  Exported 6 PNG files: left/right/front/back/top/bottom.png");
    println!("Export completed in {:.2?}", export_start.elapsed());
    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}
