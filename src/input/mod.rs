use macroquad::prelude::*;

use crate::application::{Camera, Simulation};
use crate::domain::Pattern;
use crate::ui::{Button, ButtonAction, grid_area_height, grid_area_width};

/// Pattern hotkeys, in `presets::all_patterns()` order
const PATTERN_KEYS: [KeyCode; 10] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
];

/// Pointer bookkeeping carried between frames
#[derive(Default)]
pub struct InputState {
    last_pan: Option<(f32, f32)>,
}

fn in_grid_area(mouse_pos: (f32, f32)) -> bool {
    mouse_pos.0 < grid_area_width()
}

/// Pan with middle mouse button drag
pub fn handle_pan(input: &mut InputState, camera: &mut Camera, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = input.last_pan {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        input.last_pan = Some(mouse_pos);
    } else {
        input.last_pan = None;
    }
}

/// Forward left-button gestures to the paint tool in world pixels
pub fn handle_mouse_paint(sim: &mut Simulation, camera: &Camera, mouse_pos: (f32, f32)) {
    let (wx, wy) = camera.screen_to_world(mouse_pos.0, mouse_pos.1);

    if is_mouse_button_pressed(MouseButton::Left) && in_grid_area(mouse_pos) {
        sim.on_pointer_down(wx, wy);
    } else if is_mouse_button_down(MouseButton::Left) && sim.is_painting() {
        if in_grid_area(mouse_pos) {
            sim.on_pointer_move(wx, wy);
        }
    } else if sim.is_painting() {
        sim.on_pointer_up();
    }
}

/// Fill the visible region with random cells
fn randomize_view(sim: &mut Simulation, camera: &Camera) {
    let (origin, w, h) = camera.visible_cells(grid_area_width(), grid_area_height(), sim.config().cell_size);
    sim.randomize_at(origin, w, h);
}

fn apply(sim: &mut Simulation, camera: &Camera, action: ButtonAction) {
    match action {
        ButtonAction::TogglePause => sim.toggle_paused(),
        ButtonAction::Step => {
            sim.step_once();
        }
        ButtonAction::Clear => sim.clear_all(),
        ButtonAction::Randomize => randomize_view(sim, camera),
    }
}

/// Keyboard shortcuts
pub fn process_keyboard_input(
    sim: &mut Simulation,
    camera: &mut Camera,
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) {
    let actions = [
        (KeyCode::Space, ButtonAction::TogglePause),
        (KeyCode::N, ButtonAction::Step),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Randomize),
    ];
    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|&(_, action)| apply(sim, camera, action));

    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    if !in_grid_area(mouse_pos) {
        return;
    }
    let center = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, sim.config().cell_size);
    for (key, pattern) in PATTERN_KEYS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            sim.place_pattern(pattern, pattern.origin_centered_on(center));
        }
    }
}

/// Panel button clicks
pub fn process_button_clicks(sim: &mut Simulation, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| apply(sim, camera, btn.action()));
}
