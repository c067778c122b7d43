use super::{Result, Scene};
use crate::{
    camera::CameraParameters,
    hikari_error,
    materials::Material,
    math::Vec3,
    shapes::{Cuboid, Rect, Shape, Sphere, Triangle},
};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A shape as it is written in a scene file
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere {
        center: Vec3<f32>,
        radius: f32,
        material: Material,
    },
    /// Front face is the one the vertices wind counter clockwise on
    Triangle {
        vertices: [Vec3<f32>; 3],
        material: Material,
    },
    /// Corner followed by its two neighbours
    Rect {
        corners: [Vec3<f32>; 3],
        material: Material,
    },
    /// Corner and the three edges leaving it
    Box {
        corner: Vec3<f32>,
        edges: [Vec3<f32>; 3],
        material: Material,
    },
    AxisAlignedBox {
        min: Vec3<f32>,
        max: Vec3<f32>,
        material: Material,
    },
}

impl ShapeDescription {
    /// Checks the description for shapes that can't be constructed.
    fn validate(&self) -> std::result::Result<(), String> {
        let material = match self {
            ShapeDescription::Sphere {
                radius, material, ..
            } => {
                if radius.is_nan() || *radius <= 0.0 {
                    return Err(format!("Sphere radius has to be positive, got {}", radius));
                }
                material
            }
            ShapeDescription::Triangle {
                vertices: [p0, p1, p2],
                material,
            }
            | ShapeDescription::Rect {
                corners: [p0, p1, p2],
                material,
            } => {
                if (*p1 - *p0).cross(*p2 - *p0).len_sqr() == 0.0 {
                    return Err("Degenerate triangle or rect".into());
                }
                material
            }
            ShapeDescription::Box {
                edges: [a, b, h],
                material,
                ..
            } => {
                if a.cross(*b).dot(*h) == 0.0 {
                    return Err("Degenerate box".into());
                }
                material
            }
            ShapeDescription::AxisAlignedBox { min, max, material } => {
                let diagonal = *max - *min;
                if diagonal.has_nans() || diagonal.x <= 0.0 || diagonal.y <= 0.0 || diagonal.z <= 0.0 {
                    return Err(format!("Box min {:?} is not below max {:?}", min, max));
                }
                material
            }
        };

        if material.color != material.color.clamped() {
            return Err(format!("Color {:?} outside [0,1]", material.color));
        }
        if material.intensity.is_nan() || material.intensity < 0.0 {
            return Err(format!("Negative intensity {}", material.intensity));
        }

        Ok(())
    }

    /// Converts the description into a [Shape].
    pub fn to_shape(&self) -> std::result::Result<Shape, String> {
        self.validate()?;

        let shape = match *self {
            ShapeDescription::Sphere {
                center,
                radius,
                material,
            } => Sphere::new(center, radius, material).into(),
            ShapeDescription::Triangle {
                vertices: [p0, p1, p2],
                material,
            } => Triangle::new(p0, p1, p2, material).into(),
            ShapeDescription::Rect {
                corners: [p0, p1, p2],
                material,
            } => Rect::new(p0, p1, p2, material).into(),
            ShapeDescription::Box {
                corner,
                edges: [a, b, h],
                material,
            } => Cuboid::new(corner, a, b, h, material).into(),
            ShapeDescription::AxisAlignedBox { min, max, material } => {
                Cuboid::axis_aligned(min, max, material).into()
            }
        };

        Ok(shape)
    }
}

/// Contents of a scene file
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraParameters,
    pub shapes: Vec<ShapeDescription>,
}

impl SceneDescription {
    /// Converts the description into a [Scene] called `name`.
    pub fn into_scene(self, name: String) -> Result<Scene> {
        if let Err(why) = self.camera.validate() {
            return Err(format!("Camera: {}", why).into());
        }

        let mut shapes = Vec::with_capacity(self.shapes.len());
        for (i, desc) in self.shapes.iter().enumerate() {
            match desc.to_shape() {
                Ok(shape) => shapes.push(shape),
                Err(why) => return Err(format!("Shape {}: {}", i, why).into()),
            }
        }

        Ok(Scene {
            name,
            shapes,
            camera: self.camera,
        })
    }
}

pub fn load(path: &Path, name: String) -> Result<Scene> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            hikari_error!("Could not open '{}'", path.to_string_lossy());
            return Err(e.into());
        }
    };

    let desc: SceneDescription = serde_yaml::from_reader(std::io::BufReader::new(file))?;
    desc.into_scene(name)
}
