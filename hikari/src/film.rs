use crate::math::{Spectrum, Vec2};

/// Pixel buffer of a render.
#[derive(Clone, Debug)]
pub struct Film {
    // Resolution of the stored pixel buffer.
    res: Vec2<u16>,
    // Pixel values in row-major order, top row first.
    pixels: Vec<Spectrum<f32>>,
}

impl Film {
    /// Creates a new black `Film` with the given resolution.
    pub fn new(res: Vec2<u16>) -> Self {
        Self {
            res,
            pixels: vec![Spectrum::zeros(); (res.x as usize) * (res.y as usize)],
        }
    }

    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    pub fn pixels(&self) -> &Vec<Spectrum<f32>> {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut Vec<Spectrum<f32>> {
        &mut self.pixels
    }

    /// Returns the pixel at (`x`, `y`), y growing downward.
    pub fn pixel(&self, x: u16, y: u16) -> Spectrum<f32> {
        debug_assert!(x < self.res.x && y < self.res.y);
        self.pixels[(y as usize) * (self.res.x as usize) + (x as usize)]
    }

    /// Returns the pixels packed as `0xRRGGBB00`.
    pub fn to_packed(&self) -> Vec<u32> {
        self.pixels.iter().map(|p| p.to_packed()).collect()
    }
}
