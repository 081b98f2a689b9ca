use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    TogglePause,
    Step,
    Clear,
    Randomize,
}

/// Clickable panel button with a hover highlight
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    action: ButtonAction,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Check if the button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(90, 90, 90, 255)
        } else {
            Color::from_rgba(55, 55, 55, 255)
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 1.0, Color::from_rgba(153, 153, 153, 255));

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
