mod builtin;
mod yaml;

pub use yaml::{SceneDescription, ShapeDescription};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames, VariantNames};

use crate::{camera::CameraParameters, hikari_info, shapes::Shape};

use std::{path::Path, str::FromStr, time::Instant};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The scenes that ship with the renderer
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumString, EnumVariantNames)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SceneType {
    Room,
    Mirrors,
    Spheres,
}

pub struct Scene {
    pub name: String,
    pub shapes: Vec<Shape>,
    pub camera: CameraParameters,
}

impl Scene {
    /// Assembles one of the built-in scenes.
    ///
    /// Also returns the time it took to load in seconds.
    pub fn builtin(scene_type: SceneType) -> (Scene, f32) {
        let load_start = Instant::now();

        let shapes = match scene_type {
            SceneType::Room => builtin::room(),
            SceneType::Mirrors => builtin::mirrors(),
            SceneType::Spheres => builtin::spheres(),
        };
        let scene = Scene {
            name: scene_type.to_string(),
            shapes,
            camera: CameraParameters::default(),
        };

        let total_secs = load_start.elapsed().as_secs_f32();
        hikari_info!(
            "{}: {} shapes assembled in {:.2}s",
            scene.name,
            scene.shapes.len(),
            total_secs
        );

        (scene, total_secs)
    }

    /// Loads a YAML scene description.
    ///
    /// Also returns the time it took to load in seconds.
    pub fn yaml(path: &Path) -> Result<(Scene, f32)> {
        let load_start = Instant::now();

        let name = path
            .file_stem()
            .map_or_else(|| "scene".into(), |s| s.to_string_lossy().into_owned());
        let scene = yaml::load(path, name)?;

        let total_secs = load_start.elapsed().as_secs_f32();
        hikari_info!(
            "YAML: {} shapes loaded in {:.2}s",
            scene.shapes.len(),
            total_secs
        );

        Ok((scene, total_secs))
    }
}

/// Loads the scene `source` names, either a built-in or a path to a YAML file.
///
/// Also returns the time it took to load in seconds.
pub fn try_load_scene(source: &str) -> std::result::Result<(Scene, f32), String> {
    if let Ok(scene_type) = SceneType::from_str(source) {
        return Ok(Scene::builtin(scene_type));
    }

    let path = Path::new(source);
    if !path.exists() {
        return Err(format!(
            "'{}' is neither a built-in scene {:?} nor an existing file",
            source,
            SceneType::VARIANTS
        ));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => match Scene::yaml(path) {
            Ok(ret) => {
                hikari_info!("Scene loaded from '{}'", path.to_string_lossy());
                Ok(ret)
            }
            Err(why) => Err(format!("Loading YAML scene failed: {}", why)),
        },
        Some(ext) => Err(format!("Unknown extension '{}'", ext)),
        None => Err("Expected a file with an extension".into()),
    }
}
