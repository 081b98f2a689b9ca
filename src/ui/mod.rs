mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{Rect, screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_GAP: f32 = 10.0;
const PANEL_MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the cell area left of the panel
pub fn grid_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel buttons, top to bottom; the first label tracks the pause state
pub fn create_buttons(paused: bool) -> Vec<Button> {
    let x = panel_x() + PANEL_MARGIN;
    let w = PANEL_WIDTH - 2.0 * PANEL_MARGIN;
    let row = |i: usize| Rect::new(x, PANEL_MARGIN + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP), w, BUTTON_HEIGHT);

    vec![
        Button::new(row(0), if paused { "Play" } else { "Pause" }, ButtonAction::TogglePause),
        Button::new(row(1), "Step", ButtonAction::Step),
        Button::new(row(2), "Clear", ButtonAction::Clear),
        Button::new(row(3), "Random", ButtonAction::Randomize),
    ]
}

/// Y position below the buttons where panel text can start
pub fn panel_text_top(button_count: usize) -> f32 {
    PANEL_MARGIN + button_count as f32 * (BUTTON_HEIGHT + BUTTON_GAP) + 20.0
}
