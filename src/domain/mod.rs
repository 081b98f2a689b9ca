mod coord;
mod cell;
mod grid;
mod life;
mod fade;
mod patterns;

pub use coord::CellCoord;
pub use cell::{CellState, next_alive};
pub use grid::SparseGrid;
pub use life::{LifeEngine, StepStats};
pub use fade::{FadeAnimator, shade};
pub use patterns::{Pattern, presets};
