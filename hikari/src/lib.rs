mod macros;

pub mod camera;
pub mod film;
pub mod integrators;
pub mod lights;
pub mod materials;
pub mod math;
pub mod output;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod shapes;

// Exported for the logging macros
#[doc(hidden)]
pub use log;
