use rayon::prelude::*;
use std::time::Instant;

use crate::{
    camera::Camera,
    film::Film,
    integrators::{Integrator, IntegratorType},
    math::Spectrum,
    scene::Scene,
    hikari_debug, hikari_info,
};

pub struct RenderResult {
    pub film: Film,
    pub secs: f32,
    pub ray_count: usize,
}

/// Renders `scene` through `camera` with one ray per pixel.
///
/// Rows are traced in parallel unless `single_thread` is set.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    integrator_type: IntegratorType,
    single_thread: bool,
) -> RenderResult {
    let render_start = Instant::now();

    let integrator = integrator_type.instantiate();
    let res = camera.res();
    let mut film = Film::new(res);

    hikari_info!(
        "Rendering '{}' at {}x{} with {}",
        scene.name,
        res.x,
        res.y,
        integrator_type
    );

    let width = res.x as usize;
    let trace_row = |(i, row): (usize, &mut [Spectrum<f32>])| -> usize {
        // Film rows are stored top first
        let camera_row = res.y - 1 - (i as u16);
        render_row(integrator.as_ref(), scene, camera, camera_row, row)
    };

    let ray_count = if single_thread {
        hikari_debug!("Rendering on a single thread");
        film.pixels_mut()
            .chunks_mut(width)
            .enumerate()
            .map(trace_row)
            .sum::<usize>()
    } else {
        film.pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .map(trace_row)
            .sum::<usize>()
    };

    let secs = render_start.elapsed().as_secs_f32();

    RenderResult {
        film,
        secs,
        ray_count,
    }
}

// Returns the number of rays intersected with the scene
fn render_row(
    integrator: &dyn Integrator,
    scene: &Scene,
    camera: &Camera,
    row: u16,
    pixels: &mut [Spectrum<f32>],
) -> usize {
    let mut ray_count = 0;
    for (col, pixel) in pixels.iter_mut().enumerate() {
        let ray = camera.ray(row, col as u16);
        let result = integrator.li(ray, &scene.shapes, 0, None);
        *pixel = result.li;
        ray_count += result.ray_scene_intersections;
    }
    ray_count
}
