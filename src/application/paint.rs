use crate::domain::{CellCoord, SparseGrid};

/// Drag-painting gesture state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    /// Mid-gesture, writing `alive` to every cell touched
    Painting { alive: bool },
}

/// PaintTool turns a press-drag-release gesture into cell writes.
/// The value painted is chosen once, at the start of the gesture: pressing
/// on a live cell erases, pressing on a dead cell fills.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaintTool {
    state: PaintState,
}

impl PaintTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, PaintState::Painting { .. })
    }

    /// Start a gesture at `coord` and paint it
    pub fn begin(&mut self, grid: &mut SparseGrid, coord: CellCoord) {
        let alive = !grid.is_alive(coord);
        self.state = PaintState::Painting { alive };
        grid.set_alive(coord, alive);
    }

    /// Continue the gesture over `coord`; ignored when idle
    pub fn drag(&mut self, grid: &mut SparseGrid, coord: CellCoord) {
        if let PaintState::Painting { alive } = self.state {
            grid.set_alive(coord, alive);
        }
    }

    pub fn end(&mut self) {
        self.state = PaintState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i64, y: i64) -> CellCoord {
        CellCoord::new(x, y)
    }

    #[test]
    fn test_begin_on_dead_cell_fills() {
        let mut grid = SparseGrid::new();
        let mut tool = PaintTool::new();
        tool.begin(&mut grid, c(1, 1));
        assert!(grid.is_alive(c(1, 1)));
        assert_eq!(tool.state(), PaintState::Painting { alive: true });
    }

    #[test]
    fn test_each_begin_samples_again() {
        let mut grid = SparseGrid::new();
        let mut tool = PaintTool::new();
        tool.begin(&mut grid, c(1, 1));
        tool.begin(&mut grid, c(1, 1));
        assert!(!grid.is_alive(c(1, 1)));
        assert_eq!(tool.state(), PaintState::Painting { alive: false });
    }

    #[test]
    fn test_drag_applies_gesture_color() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(0, 0), true);
        grid.set_alive(c(1, 0), true);

        let mut tool = PaintTool::new();
        tool.begin(&mut grid, c(0, 0));
        tool.drag(&mut grid, c(1, 0));
        tool.drag(&mut grid, c(2, 0));
        assert!(!grid.is_alive(c(0, 0)));
        assert!(!grid.is_alive(c(1, 0)));
        assert!(!grid.is_alive(c(2, 0)));
        assert!(!grid.contains(c(2, 0)));
    }

    #[test]
    fn test_drag_when_idle_does_nothing() {
        let mut grid = SparseGrid::new();
        let mut tool = PaintTool::new();
        tool.drag(&mut grid, c(3, 3));
        assert!(grid.is_empty());

        tool.begin(&mut grid, c(0, 0));
        tool.end();
        tool.drag(&mut grid, c(3, 3));
        assert!(!grid.is_alive(c(3, 3)));
        assert!(!tool.is_painting());
    }

    #[test]
    fn test_repeated_drag_keeps_fade_progress() {
        let mut grid = SparseGrid::new();
        let mut tool = PaintTool::new();
        tool.begin(&mut grid, c(0, 0));
        grid.retain_fades(|_, _, i| {
            *i = 0.7;
            true
        });
        tool.drag(&mut grid, c(0, 0));
        tool.drag(&mut grid, c(0, 0));
        assert_eq!(grid.fade_intensity(c(0, 0)), Some(0.7));
    }
}
