use rand::Rng;

use crate::domain::{CellCoord, FadeAnimator, LifeEngine, Pattern, SparseGrid, StepStats};
use super::{ConfigError, EngineConfig, FramePacer, PaintTool};

/// Simulation is the single owned engine instance a UI shell drives.
///
/// Each frame the shell calls `on_tick`, forwards pointer events, and then
/// reads cells back through `for_each_dirty_cell` and `for_each_live_cell`.
/// All work for a tick completes before `on_tick` returns.
pub struct Simulation {
    config: EngineConfig,
    grid: SparseGrid,
    engine: LifeEngine,
    animator: FadeAnimator,
    pacer: FramePacer,
    paint: PaintTool,
    generation: u64,
    last_step: StepStats,
}

impl Simulation {
    /// Build a simulation with an empty grid
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "simulation ready: {:.1} gen/s, fade {}/s, catch-up cap {}",
            config.generations_per_second(),
            config.fade_rate_per_sec,
            config.max_catchup_steps
        );

        Ok(Self {
            config,
            grid: SparseGrid::new(),
            engine: LifeEngine::new(config.parallel_threshold),
            animator: FadeAnimator::new(config.fade_rate_per_sec),
            pacer: FramePacer::new(config.tick_period_ms, config.max_catchup_steps),
            paint: PaintTool::new(),
            generation: 0,
            last_step: StepStats::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    /// Advance by `elapsed_ms` of wall-clock time: run due generations,
    /// then move every fade. Returns the number of generations run.
    pub fn on_tick(&mut self, elapsed_ms: f32) -> u32 {
        let elapsed_ms = if elapsed_ms > 0.0 { elapsed_ms } else { 0.0 };

        let steps = self.pacer.advance(elapsed_ms, || {
            self.last_step = self.engine.step(&mut self.grid);
            self.generation += 1;
        });

        self.animator.advance(&mut self.grid, elapsed_ms / 1000.0);
        steps
    }

    /// Run one generation now, paused or not
    pub fn step_once(&mut self) -> StepStats {
        self.last_step = self.engine.step(&mut self.grid);
        self.generation += 1;
        self.last_step
    }

    pub fn on_pointer_down(&mut self, px: f32, py: f32) {
        let coord = CellCoord::from_pixel(px, py, self.config.cell_size);
        self.paint.begin(&mut self.grid, coord);
    }

    pub fn on_pointer_move(&mut self, px: f32, py: f32) {
        let coord = CellCoord::from_pixel(px, py, self.config.cell_size);
        self.paint.drag(&mut self.grid, coord);
    }

    pub fn on_pointer_up(&mut self) {
        self.paint.end();
    }

    pub fn is_painting(&self) -> bool {
        self.paint.is_painting()
    }

    pub fn is_alive(&self, coord: CellCoord) -> bool {
        self.grid.is_alive(coord)
    }

    pub fn set_alive(&mut self, coord: CellCoord, alive: bool) {
        self.grid.set_alive(coord, alive);
    }

    /// Fill the `width` x `height` cell region at the origin with coin flips
    pub fn randomize(&mut self, width: i64, height: i64) {
        self.randomize_at(CellCoord::default(), width, height);
    }

    /// Fill a cell region with coin flips from the thread-local generator
    pub fn randomize_at(&mut self, origin: CellCoord, width: i64, height: i64) {
        let mut rng = rand::rng();
        self.randomize_with(&mut rng, origin, width, height);
    }

    /// Fill a cell region with coin flips from `rng`.
    /// Every cell in the region is written, so live cells may die.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, origin: CellCoord, width: i64, height: i64) {
        for dy in 0..height.max(0) {
            for dx in 0..width.max(0) {
                if let Some(coord) = origin.offset(dx, dy) {
                    self.grid.set_alive(coord, rng.random_bool(0.5));
                }
            }
        }
        log::info!(
            "randomized {}x{} cells at ({}, {}): {} alive",
            width,
            height,
            origin.x,
            origin.y,
            self.grid.live_count()
        );
    }

    /// Kill every live cell; each fades out rather than vanishing
    pub fn clear_all(&mut self) {
        let live = self.grid.live_cells();
        for &coord in &live {
            self.grid.set_alive(coord, false);
        }
        log::info!("cleared {} cells", live.len());
    }

    /// Stamp `pattern` alive with its top-left corner at `origin`
    pub fn place_pattern(&mut self, pattern: &Pattern, origin: CellCoord) {
        for coord in pattern.cells_at(origin) {
            self.grid.set_alive(coord, true);
        }
        log::info!("placed {} at ({}, {})", pattern.name, origin.x, origin.y);
    }

    /// Freeze rule evaluation. Fades keep running.
    pub fn set_paused(&mut self, paused: bool) {
        if self.pacer.is_paused() != paused {
            log::info!("simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.pacer.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.pacer.is_paused()
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.is_paused());
    }

    /// Visit every cell mid-fade with its displayed intensity
    pub fn for_each_dirty_cell(&self, mut f: impl FnMut(i64, i64, f32)) {
        self.grid
            .for_each_animated_cell(|coord, intensity| f(coord.x, coord.y, intensity));
    }

    /// Visit every live cell
    pub fn for_each_live_cell(&self, mut f: impl FnMut(i64, i64)) {
        self.grid.for_each_live_cell(|coord| f(coord.x, coord.y));
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn dirty_count(&self) -> usize {
        self.grid.animated_count()
    }

    /// Births and deaths of the most recent generation
    pub fn last_step(&self) -> StepStats {
        self.last_step
    }
}
