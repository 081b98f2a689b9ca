use macroquad::prelude::*;

use crate::application::{Camera, Simulation};
use crate::domain::{CellCoord, shade};
use crate::ui::{Button, PANEL_WIDTH, grid_area_height, grid_area_width, panel_text_top, panel_x};

const GRID_LINE_COLOR: Color = Color::new(0.6, 0.6, 0.6, 1.0); // #999

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

fn gray(intensity: f32) -> Color {
    let [r, g, b, a] = shade(intensity);
    Color::from_rgba(r, g, b, a)
}

/// Cell edge lines across the grid area, shifted with the camera
fn draw_grid_lines(camera: &Camera, cell_size: f32) {
    let (area_w, area_h) = (grid_area_width(), grid_area_height());
    let start_x = -camera.offset_x.rem_euclid(cell_size);
    let start_y = -camera.offset_y.rem_euclid(cell_size);

    let mut x = start_x;
    while x < area_w {
        draw_line(x + 0.5, 0.0, x + 0.5, area_h, 1.0, GRID_LINE_COLOR);
        x += cell_size;
    }
    let mut y = start_y;
    while y < area_h {
        draw_line(0.0, y + 0.5, area_w, y + 0.5, 1.0, GRID_LINE_COLOR);
        y += cell_size;
    }
}

/// Paint one cell inside its grid lines; off-screen cells are skipped
fn draw_cell(camera: &Camera, cell_size: f32, x: i64, y: i64, color: Color) {
    let cell = CellCoord::new(x, y);
    if !camera.is_cell_visible(cell, cell_size, grid_area_width(), grid_area_height()) {
        return;
    }
    let (sx, sy) = camera.cell_to_screen(cell, cell_size);
    draw_rectangle(sx + 1.0, sy + 1.0, cell_size - 1.0, cell_size - 1.0, color);
}

/// Draw live cells at full intensity, then fading cells on top
pub fn draw_cells(sim: &Simulation, camera: &Camera) {
    let cell_size = sim.config().cell_size;
    draw_grid_lines(camera, cell_size);

    let on = gray(1.0);
    sim.for_each_live_cell(|x, y| draw_cell(camera, cell_size, x, y, on));
    sim.for_each_dirty_cell(|x, y, intensity| draw_cell(camera, cell_size, x, y, gray(intensity)));
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the side panel with buttons, counters and key help
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let top = panel_text_top(buttons.len());
    let stats = sim.last_step();
    let status_color = if sim.is_paused() {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(0, 255, 0, 255)
    };

    let lines = [
        (if sim.is_paused() { "Paused".to_string() } else { "Running".to_string() }, 18.0, status_color),
        (format!("Generation: {}", sim.generation()), 16.0, WHITE),
        (format!("Alive: {}", format_number(sim.live_count())), 14.0, LIGHTGRAY),
        (format!("Fading: {}", format_number(sim.dirty_count())), 14.0, LIGHTGRAY),
        (format!("+{} / -{}", stats.births, stats.deaths), 14.0, LIGHTGRAY),
        (format!("{:.0} gen/s", sim.config().generations_per_second()), 14.0, LIGHTGRAY),
        (format!("FPS: {}", get_fps()), 14.0, GRAY),
    ];
    for (i, (text, size, color)) in lines.iter().enumerate() {
        draw_text(text, px, top + i as f32 * 20.0, *size, *color);
    }

    let help = [
        "LMB: Paint / erase",
        "MMB drag: Pan",
        "Space: Play/Pause",
        "N: Step  C: Clear",
        "R: Random  H: Home",
        "1-0: Stamp pattern",
    ];
    let help_top = top + lines.len() as f32 * 20.0 + 20.0;
    for (i, text) in help.iter().enumerate() {
        draw_text(text, px, help_top + i as f32 * 15.0, 13.0, GRAY);
    }
}
