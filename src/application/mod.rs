mod camera;
mod config;
mod pacer;
mod paint;
mod simulation;

pub use camera::Camera;
pub use config::{ConfigError, EngineConfig};
pub use pacer::FramePacer;
pub use paint::{PaintState, PaintTool};
pub use simulation::Simulation;
