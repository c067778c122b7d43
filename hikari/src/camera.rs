use serde::{Deserialize, Serialize};

use crate::math::{vec2, vec3, Ray, Vec2, Vec3};

/// Placement of the screen rectangle and the eye behind it
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraParameters {
    /// Lower left corner of the screen, which lies on a z-constant plane
    pub screen_min: Vec3<f32>,
    /// Screen width and height in world units
    pub screen_size: Vec2<f32>,
    pub focal_point: Vec3<f32>,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            screen_min: vec3(-4.0, -3.0, 0.0),
            screen_size: vec2(8.0, 6.0),
            focal_point: vec3(0.0, 0.0, 6.0),
        }
    }
}

impl CameraParameters {
    /// Checks for placements that can't produce rays for every pixel.
    ///
    /// The screen needs a positive size and the focal point can't lie on the
    /// screen plane.
    pub fn validate(&self) -> Result<(), String> {
        let size = self.screen_size;
        if size.has_nans() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(format!(
                "Screen size has to be positive, got {}x{}",
                size.x, size.y
            ));
        }
        if self.screen_min.has_nans() || self.focal_point.has_nans() {
            return Err("Camera parameters contain NaNs".into());
        }
        if self.focal_point.z == self.screen_min.z {
            return Err(format!(
                "Focal point {:?} lies on the screen plane z = {}",
                self.focal_point, self.screen_min.z
            ));
        }
        Ok(())
    }
}

/// A perspective camera that shoots rays from the screen away from the focal point
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    params: CameraParameters,
    res: Vec2<u16>,
    pixel_size: Vec2<f32>,
}

impl Camera {
    /// Creates a new `Camera` for a film of `res` pixels.
    pub fn new(params: CameraParameters, res: Vec2<u16>) -> Self {
        debug_assert!(res.x > 0 && res.y > 0);

        let pixel_size = vec2(
            params.screen_size.x / (res.x as f32),
            params.screen_size.y / (res.y as f32),
        );
        Self {
            params,
            res,
            pixel_size,
        }
    }

    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns the primary ray through pixel (`row`, `col`), row 0 being the bottom.
    ///
    /// The ray starts at the pixel center on the screen.
    pub fn ray(&self, row: u16, col: u16) -> Ray<f32> {
        debug_assert!(row < self.res.y && col < self.res.x);

        let offset = vec3(
            ((col as f32) + 0.5) * self.pixel_size.x,
            ((row as f32) + 0.5) * self.pixel_size.y,
            0.0,
        );
        let o = self.params.screen_min + offset;

        Ray::new(o, (o - self.params.focal_point).normalized())
    }
}
