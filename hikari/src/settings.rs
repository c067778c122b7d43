use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    camera::CameraParameters,
    hikari_info,
    integrators::IntegratorType,
    math::{vec2, Vec2},
    scene::SceneType,
};

/// Everything a render needs that isn't part of the scene itself
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Film resolution in pixels
    pub res: Vec2<u16>,
    /// Name of a built-in scene or path to a YAML scene
    pub scene: String,
    pub integrator: IntegratorType,
    /// Overrides the camera of the scene
    pub camera: Option<CameraParameters>,
    /// Renders without the thread pool
    pub single_thread: bool,
    /// Image to write, the extension picks the format. A timestamped png in
    /// the working directory if empty.
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            res: vec2(640, 480),
            scene: SceneType::Room.to_string(),
            integrator: IntegratorType::default(),
            camera: None,
            single_thread: false,
            output: PathBuf::new(),
        }
    }
}

impl Settings {
    /// Loads `Settings` from a YAML file. Missing fields get their defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let file = match std::fs::File::open(path) {
            Ok(f) => f,
            Err(why) => {
                return Err(format!(
                    "Could not open settings '{}': {}",
                    path.to_string_lossy(),
                    why
                ))
            }
        };

        let settings: Settings = match serde_yaml::from_reader(std::io::BufReader::new(file)) {
            Ok(s) => s,
            Err(why) => {
                return Err(format!(
                    "Failed to parse settings '{}': {}",
                    path.to_string_lossy(),
                    why
                ))
            }
        };
        settings.validate()?;

        hikari_info!("Settings loaded from '{}'", path.to_string_lossy());

        Ok(settings)
    }

    /// Checks for values a render can't be started with.
    pub fn validate(&self) -> Result<(), String> {
        if self.res.x == 0 || self.res.y == 0 {
            return Err(format!(
                "Resolution has to be non-zero, got {}x{}",
                self.res.x, self.res.y
            ));
        }
        if let IntegratorType::Glow(params) = self.integrator {
            if params.halo_max_distance < 0.0 || params.ambient_intensity < 0.0 {
                return Err("Glow parameters have to be non-negative".into());
            }
        }
        if let Some(camera) = &self.camera {
            camera.validate()?;
        }
        Ok(())
    }
}
