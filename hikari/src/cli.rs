use clap::{Parser, ValueEnum};
use log::LevelFilter;

use std::path::PathBuf;

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Values given here override the ones in the settings file
#[derive(Parser)]
#[command(name = "hikari")]
#[command(about = "A recursive mirror ray tracer")]
pub struct Args {
    /// YAML settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Built-in scene (room, mirrors, spheres) or path to a YAML scene
    #[arg(long)]
    pub scene: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u16>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u16>,

    /// Output file path (.exr for linear HDR, .png/.bmp for 8-bit)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reflection bounces of the glow integrator
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Render without the thread pool
    #[arg(long)]
    pub single_thread: bool,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
