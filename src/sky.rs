//! Vertical sky gradient.

use image::{Rgba, RgbaImage};

use crate::params::{GenerationParams, TimeOfDay, Weather};

/// Returns the (top, bottom) color stops for the sky gradient.
///
/// A storm overrides the time of day; every other weather falls back to the
/// time-of-day table, which covers the whole input domain.
pub fn color_stops(params: &GenerationParams) -> ([u8; 3], [u8; 3]) {
    if params.weather == Weather::Storm {
        let boost = (params.storm_intensity * 50.0) as u8;
        return ([20, 20, 40 + boost], [50, 50, 60 + boost]);
    }
    match params.time_of_day {
        TimeOfDay::Day => ([0, 102, 204], [135, 206, 235]),
        TimeOfDay::Night => ([0, 0, 51], [0, 0, 102]),
        TimeOfDay::Sunrise => ([255, 102, 0], [255, 178, 102]),
        TimeOfDay::Sunset => ([153, 51, 0], [255, 102, 102]),
    }
}

/// Fills an opaque vertical gradient: row y is lerp(top, bottom, y/height),
/// truncated per channel.
pub fn gradient(params: &GenerationParams, width: u32, height: u32) -> RgbaImage {
    let (top, bottom) = color_stops(params);
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        let t = y as f32 / height as f32;
        let color = Rgba([
            (top[0] as f32 * (1.0 - t) + bottom[0] as f32 * t) as u8,
            (top[1] as f32 * (1.0 - t) + bottom[1] as f32 * t) as u8,
            (top[2] as f32 * (1.0 - t) + bottom[2] as f32 * t) as u8,
            255,
        ]);
        for x in 0..width {
            img.put_pixel(x, y, color);
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(time: TimeOfDay, weather: Weather, intensity: f32) -> GenerationParams {
        GenerationParams {
            time_of_day: time,
            weather,
            storm_intensity: intensity,
            ..Default::default()
        }
    }

    #[test]
    fn test_day_stops() {
        let (top, bottom) = color_stops(&params(TimeOfDay::Day, Weather::Calm, 0.5));
        assert_eq!(top, [0, 102, 204]);
        assert_eq!(bottom, [135, 206, 235]);
    }

    #[test]
    fn test_storm_overrides_time_of_day() {
        for time in [TimeOfDay::Day, TimeOfDay::Night, TimeOfDay::Sunrise, TimeOfDay::Sunset] {
            let (top, bottom) = color_stops(&params(time, Weather::Storm, 1.0));
            assert_eq!(top, [20, 20, 90]);
            assert_eq!(bottom, [50, 50, 110]);
        }
    }

    #[test]
    fn test_foggy_uses_time_of_day_table() {
        let (top, _) = color_stops(&params(TimeOfDay::Sunset, Weather::Foggy, 0.9));
        assert_eq!(top, [153, 51, 0]);
    }

    #[test]
    fn test_gradient_endpoints() {
        for (time, weather) in [
            (TimeOfDay::Day, Weather::Calm),
            (TimeOfDay::Night, Weather::Calm),
            (TimeOfDay::Sunrise, Weather::Foggy),
            (TimeOfDay::Sunset, Weather::Calm),
            (TimeOfDay::Day, Weather::Storm),
        ] {
            let p = params(time, weather, 0.5);
            let (top, bottom) = color_stops(&p);
            let img = gradient(&p, 16, 64);

            let first = img.get_pixel(0, 0);
            assert_eq!([first[0], first[1], first[2]], top);
            assert_eq!(first[3], 255);

            // Row height-1 sits at t = 63/64, one lerp step short of the
            // bottom stop; each channel must be within one truncation step.
            let last = img.get_pixel(15, 63);
            for c in 0..3 {
                let expected = top[c] as f32 * (1.0 - 63.0 / 64.0) + bottom[c] as f32 * (63.0 / 64.0);
                assert!((last[c] as f32 - expected).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn test_gradient_rows_are_uniform() {
        let img = gradient(&params(TimeOfDay::Day, Weather::Calm, 0.5), 8, 8);
        for y in 0..8 {
            let reference = img.get_pixel(0, y);
            for x in 1..8 {
                assert_eq!(img.get_pixel(x, y), reference);
            }
        }
    }
}
