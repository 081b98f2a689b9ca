use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use fading_life::{
    Camera, EngineConfig, Simulation, presets,
    input::{self, InputState},
    rendering, ui,
};

/// Conway's Game of Life on an unbounded grid with fading cells
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds per generation
    #[arg(long = "tick-ms", value_name = "MILLIS", default_value_t = 100.0)]
    tick_ms: f32,

    /// Fade speed, in full intensity swings per second
    #[arg(long = "fade-rate", value_name = "PER_SEC", default_value_t = 4.0)]
    fade_rate: f32,

    /// Most generations one frame may run to catch up
    #[arg(long = "max-catchup", value_name = "STEPS", default_value_t = 5)]
    max_catchup: u32,

    /// Cell edge length in pixels
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = 10.0)]
    cell_size: f32,

    /// Start with the simulation paused
    #[arg(long)]
    paused: bool,

    /// Fill the initial view with random cells
    #[arg(long = "seed-random")]
    seed_random: bool,
}

impl From<&Args> for EngineConfig {
    fn from(args: &Args) -> Self {
        Self {
            tick_period_ms: args.tick_ms,
            fade_rate_per_sec: args.fade_rate,
            max_catchup_steps: args.max_catchup,
            cell_size: args.cell_size,
            ..EngineConfig::default()
        }
    }
}

fn build_simulation(args: &Args) -> Result<Simulation> {
    let sim = Simulation::new(EngineConfig::from(args))
        .with_context(|| format!("invalid engine settings: {:?}", args))?;
    Ok(sim)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Fading Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut sim = match build_simulation(&args) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("{:#}", err);
            return;
        }
    };
    let mut camera = Camera::new();
    let mut input_state = InputState::default();
    let patterns = presets::all_patterns();

    sim.set_paused(args.paused);
    if args.seed_random {
        let (origin, w, h) = camera.visible_cells(ui::grid_area_width(), ui::grid_area_height(), args.cell_size);
        sim.randomize_at(origin, w, h);
    }

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(sim.is_paused());

        input::process_button_clicks(&mut sim, &camera, &buttons, mouse_pos);
        input::handle_pan(&mut input_state, &mut camera, mouse_pos);
        input::handle_mouse_paint(&mut sim, &camera, mouse_pos);
        input::process_keyboard_input(&mut sim, &mut camera, &patterns, mouse_pos);

        sim.on_tick(get_frame_time() * 1000.0);

        clear_background(BLACK);
        rendering::draw_cells(&sim, &camera);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
