// Domain layer - grid, rule, fades; no timing or graphics
pub mod domain;

// Application layer - pacing, painting, the engine the shell drives
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellCoord, CellState, SparseGrid, LifeEngine, StepStats, FadeAnimator, Pattern, presets};
pub use application::{Simulation, EngineConfig, ConfigError, FramePacer, PaintTool, Camera};
