use chrono::{Datelike, Timelike};
use std::path::{Path, PathBuf};

use crate::{film::Film, hikari_info};

/// Returns a timestamped path for an image of `scene_name` in the working directory.
pub fn default_output_path(scene_name: &str, extension: &str) -> Result<PathBuf, String> {
    match std::env::current_dir() {
        Ok(mut path) => {
            let now = chrono::Local::now();
            let timestamp = format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute(),
                now.second()
            );
            let filename = format!("{}_{}.{}", scene_name, timestamp, extension);
            path.push(filename);

            Ok(path)
        }
        Err(why) => Err(format!(
            "Error getting current working directory: {:?}",
            why
        )),
    }
}

/// Writes `film` into `path`, the extension choosing the format.
///
/// EXR gets the linear values as is, other formats the clamped 8-bit colors.
pub fn write_image(film: &Film, path: &Path) -> Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("exr") => write_exr(film, path),
        Some(_) => write_8bit(film, path),
        None => Err(format!(
            "Expected an extension in '{}'",
            path.to_string_lossy()
        )),
    }
}

fn write_exr(film: &Film, path: &Path) -> Result<(), String> {
    hikari_info!("Writing out EXR");

    let width = film.res().x as usize;
    let height = film.res().y as usize;
    let pixels = film.pixels();
    match exr::prelude::write_rgb_file(path, width, height, |x, y| {
        let px = pixels[y * width + x];
        (px.r, px.g, px.b)
    }) {
        Ok(_) => {
            hikari_info!("EXR written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing EXR to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}

fn write_8bit(film: &Film, path: &Path) -> Result<(), String> {
    hikari_info!("Writing out image");

    let bytes: Vec<u8> = film
        .to_packed()
        .into_iter()
        .flat_map(|p| [(p >> 24) as u8, (p >> 16) as u8, (p >> 8) as u8])
        .collect();

    let image = match image::RgbImage::from_raw(film.res().x as u32, film.res().y as u32, bytes) {
        Some(image) => image,
        None => return Err("Film size doesn't match its pixel count".into()),
    };

    match image.save(path) {
        Ok(_) => {
            hikari_info!("Image written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing image to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}
