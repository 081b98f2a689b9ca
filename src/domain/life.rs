//! One-generation stepping of Conway's Game of Life over a `SparseGrid`.
//!
//! A step runs in three phases:
//! 1. collect the 3x3 neighborhood of every live cell (the candidates),
//! 2. evaluate the rule for each candidate against the current plane and
//!    write the outcome into the next plane, arming fades for transitions,
//! 3. shift next into current for every candidate.
//!
//! Phase 2 never writes the current plane, so neighbor counts stay stable
//! for the whole pass. Evaluation is read-only and can fan out over rayon.

use std::collections::BTreeSet;

use rayon::prelude::*;

use super::{CellCoord, SparseGrid, next_alive};

/// Births and deaths produced by one generation
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepStats {
    pub births: usize,
    pub deaths: usize,
}

/// Outcome of evaluating one candidate
#[derive(Clone, Copy)]
struct Verdict {
    coord: CellCoord,
    alive: bool,
    next: bool,
}

/// LifeEngine applies the B3/S23 rule one generation at a time.
#[derive(Clone, Copy, Debug)]
pub struct LifeEngine {
    /// Candidate count at which evaluation switches to rayon
    parallel_threshold: usize,
}

impl LifeEngine {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Engine that always evaluates on the calling thread
    pub fn serial() -> Self {
        Self::new(usize::MAX)
    }

    /// Engine that always fans evaluation out over rayon
    pub fn parallel() -> Self {
        Self::new(0)
    }

    /// Advance the grid by exactly one generation
    pub fn step(&self, grid: &mut SparseGrid) -> StepStats {
        let candidates = Self::candidates(grid);
        if candidates.is_empty() {
            return StepStats::default();
        }

        let verdicts = if candidates.len() >= self.parallel_threshold {
            Self::evaluate_parallel(grid, &candidates)
        } else {
            Self::evaluate(grid, &candidates)
        };

        let mut stats = StepStats::default();
        for v in &verdicts {
            if v.next {
                grid.mark_next(v.coord);
            }
            match (v.alive, v.next) {
                (true, false) => {
                    grid.arm_fade(v.coord, false);
                    stats.deaths += 1;
                }
                (false, true) => {
                    grid.arm_fade(v.coord, true);
                    stats.births += 1;
                }
                _ => {}
            }
        }

        grid.finish_generation(candidates);

        log::trace!("generation step: {} births, {} deaths", stats.births, stats.deaths);
        stats
    }

    /// Every live cell and its 8 neighbors, deduplicated
    fn candidates(grid: &SparseGrid) -> BTreeSet<CellCoord> {
        let mut candidates = BTreeSet::new();
        grid.for_each_live_cell(|coord| candidates.extend(coord.neighborhood()));
        candidates
    }

    fn verdict(grid: &SparseGrid, coord: CellCoord) -> Verdict {
        let alive = grid.is_alive(coord);
        let next = next_alive(alive, grid.live_neighbors(coord));
        Verdict { coord, alive, next }
    }

    fn evaluate(grid: &SparseGrid, candidates: &BTreeSet<CellCoord>) -> Vec<Verdict> {
        candidates
            .iter()
            .map(|&coord| Self::verdict(grid, coord))
            .collect()
    }

    fn evaluate_parallel(grid: &SparseGrid, candidates: &BTreeSet<CellCoord>) -> Vec<Verdict> {
        candidates
            .par_iter()
            .map(|&coord| Self::verdict(grid, coord))
            .collect()
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new(4096)
    }
}
