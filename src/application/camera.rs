use crate::domain::CellCoord;

/// Camera holds the pixel-space pan offset of the view.
/// World pixel = screen pixel + offset; cell = floor(world / cell_size).
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Pan the view by a screen-space drag delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x -= dx;
        self.offset_y -= dy;
    }

    /// Convert screen coordinates to world pixel coordinates
    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x + self.offset_x, screen_y + self.offset_y)
    }

    /// Cell under a screen position
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> CellCoord {
        let (wx, wy) = self.screen_to_world(screen_x, screen_y);
        CellCoord::from_pixel(wx, wy, cell_size)
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_to_screen(&self, cell: CellCoord, cell_size: f32) -> (f32, f32) {
        let (px, py) = cell.to_pixel(cell_size);
        (px - self.offset_x, py - self.offset_y)
    }

    /// Check if any part of the cell lands inside the viewport.
    /// Bounds are compared in pixels, after scaling the cell by its size.
    pub fn is_cell_visible(&self, cell: CellCoord, cell_size: f32, viewport_width: f32, viewport_height: f32) -> bool {
        let (sx, sy) = self.cell_to_screen(cell, cell_size);
        sx + cell_size > 0.0 && sy + cell_size > 0.0 && sx < viewport_width && sy < viewport_height
    }

    /// Top-left visible cell and the visible extent in cells
    pub fn visible_cells(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> (CellCoord, i64, i64) {
        let origin = self.screen_to_cell(0.0, 0.0, cell_size);
        let far = self.screen_to_cell(viewport_width, viewport_height, cell_size);
        (origin, far.x - origin.x + 1, far.y - origin.y + 1)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
