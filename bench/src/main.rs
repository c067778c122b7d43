use std::time::Instant;

use hikari::{
    camera::Camera,
    integrators::{GlowParams, IntegratorType},
    math::vec2,
    renderer::render,
    scene::{Scene, SceneType},
};

const ITERATIONS: usize = 10;

fn bench_render(scene_type: SceneType, single_thread: bool) {
    let (scene, _) = Scene::builtin(scene_type);
    let camera = Camera::new(scene.camera, vec2(320, 240));
    let integrator = IntegratorType::Glow(GlowParams::default());

    let start = Instant::now();
    let mut ray_count = 0;
    for _ in 0..ITERATIONS {
        let result = render(&scene, &camera, integrator, single_thread);
        if result.film.pixels()[0].has_nans() {
            panic!("We only wanted to force the render to be used!")
        }
        ray_count += result.ray_count;
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_ray = (elapsed_ns as f64) / (ray_count as f64);
    println!(
        "{:8} {:6} took {:6.1} ms total, {:0.1} ns per ray",
        scene_type.to_string(),
        if single_thread { "single" } else { "pool" },
        elapsed_ms,
        ns_per_ray
    );
}

fn main() {
    for scene_type in [SceneType::Room, SceneType::Mirrors, SceneType::Spheres] {
        bench_render(scene_type, true);
        bench_render(scene_type, false);
    }
}
