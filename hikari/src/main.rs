mod cli;

use clap::Parser;
use hikari::{
    camera::Camera,
    expect, hikari_info, hikari_warn,
    integrators::IntegratorType,
    output::{default_output_path, write_image},
    renderer::{render, RenderResult},
    scene::try_load_scene,
    settings::Settings,
};

use cli::Args;

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(scene) = &args.scene {
        settings.scene = scene.clone();
    }
    if let Some(width) = args.width {
        settings.res.x = width;
    }
    if let Some(height) = args.height {
        settings.res.y = height;
    }
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if let Some(max_depth) = args.max_depth {
        match settings.integrator {
            IntegratorType::Glow(ref mut params) => params.max_depth = max_depth,
            other => hikari_warn!("--max-depth has no effect on {}", other),
        }
    }
    settings.single_thread |= args.single_thread;
}

fn main() {
    let args = Args::parse();

    if let Err(why) = setup_logger(args.log_level.into()) {
        panic!("{}", why);
    };

    let mut settings = match &args.settings {
        Some(path) => expect!(Settings::load(path), "Failed to load settings"),
        None => Settings::default(),
    };
    apply_overrides(&mut settings, &args);
    expect!(settings.validate(), "Invalid settings");

    let (scene, _) = expect!(try_load_scene(&settings.scene), "Scene loading failed");
    let camera = Camera::new(settings.camera.unwrap_or(scene.camera), settings.res);

    let RenderResult {
        film,
        secs,
        ray_count,
    } = render(&scene, &camera, settings.integrator, settings.single_thread);

    hikari_info!(
        "Render finished in {:.2}s, {:.2}M rays/s",
        secs,
        (ray_count as f32) * 1e-6 / secs.max(f32::EPSILON)
    );

    let path = if settings.output.as_os_str().is_empty() {
        expect!(default_output_path(&scene.name, "png"), "")
    } else {
        settings.output.clone()
    };
    expect!(write_image(&film, &path), "Failed to write image");
}
