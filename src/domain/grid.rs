use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::{CellCoord, CellState};

/// SparseGrid stores only the coordinates that matter on an unbounded plane:
/// cells alive in the current generation and cells still fading on screen.
/// Each stored coordinate also owns an optional fade intensity in [0, 1].
#[derive(Clone, Debug, Default)]
pub struct SparseGrid {
    cells: BTreeMap<CellCoord, CellState>,
    fades: BTreeMap<CellCoord, f32>,
}

impl SparseGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Packed state at a coordinate (EMPTY when absent)
    pub fn state(&self, coord: CellCoord) -> CellState {
        self.cells.get(&coord).copied().unwrap_or_default()
    }

    /// Check if the cell is alive in the current generation
    pub fn is_alive(&self, coord: CellCoord) -> bool {
        self.state(coord).is_alive()
    }

    /// Set the current-generation liveness of a cell.
    ///
    /// Arms a fade toward the new state unless one is already in flight,
    /// in which case the displayed intensity carries on from where it is.
    /// Returns `false` when the cell was already in the requested state.
    pub fn set_alive(&mut self, coord: CellCoord, alive: bool) -> bool {
        if self.is_alive(coord) == alive {
            return false;
        }

        let state = self.cells.entry(coord).or_default();
        *state = state.with_current(alive);
        self.arm_fade(coord, alive);
        true
    }

    /// Number of live neighbors, read strictly from the current plane
    pub fn live_neighbors(&self, coord: CellCoord) -> u8 {
        coord
            .neighbors()
            .filter(|&n| self.is_alive(n))
            .count() as u8
    }

    /// Snapshot of every live coordinate, in coordinate order
    pub fn live_cells(&self) -> Vec<CellCoord> {
        self.cells
            .iter()
            .filter(|(_, state)| state.is_alive())
            .map(|(&coord, _)| coord)
            .collect()
    }

    pub fn for_each_live_cell(&self, mut f: impl FnMut(CellCoord)) {
        self.cells
            .iter()
            .filter(|(_, state)| state.is_alive())
            .for_each(|(&coord, _)| f(coord));
    }

    /// Visit every cell with an in-flight fade and its displayed intensity
    pub fn for_each_animated_cell(&self, mut f: impl FnMut(CellCoord, f32)) {
        self.fades
            .iter()
            .for_each(|(&coord, &intensity)| f(coord, intensity));
    }

    /// Displayed intensity of an animating cell
    pub fn fade_intensity(&self, coord: CellCoord) -> Option<f32> {
        self.fades.get(&coord).copied()
    }

    pub fn is_animating(&self, coord: CellCoord) -> bool {
        self.fades.contains_key(&coord)
    }

    /// Check if the coordinate occupies storage at all
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Iterate over every stored coordinate with its packed state
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellState)> + '_ {
        self.cells.iter().map(|(&coord, &state)| (coord, state))
    }

    /// Number of stored coordinates (live or fading)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.cells.values().filter(|state| state.is_alive()).count()
    }

    pub fn animated_count(&self) -> usize {
        self.fades.len()
    }

    /// Start a fade toward `alive` if none is running.
    /// A fresh fade starts from the opposite end of the range.
    pub(crate) fn arm_fade(&mut self, coord: CellCoord, alive: bool) {
        self.fades
            .entry(coord)
            .or_insert(if alive { 0.0 } else { 1.0 });
    }

    /// Record that `coord` is alive in the generation under construction
    pub(crate) fn mark_next(&mut self, coord: CellCoord) {
        let state = self.cells.entry(coord).or_default();
        *state = state.with_next(true);
    }

    /// Shift next into current for every touched coordinate.
    /// Entries left dead with nothing to fade are dropped.
    pub(crate) fn finish_generation(&mut self, touched: impl IntoIterator<Item = CellCoord>) {
        for coord in touched {
            if let Entry::Occupied(mut entry) = self.cells.entry(coord) {
                let shifted = entry.get().shifted();
                if shifted.is_empty() && !self.fades.contains_key(&coord) {
                    entry.remove();
                } else {
                    *entry.get_mut() = shifted;
                }
            }
        }
    }

    /// Update every fade in place.
    ///
    /// `f` receives the coordinate, its current liveness and a mutable
    /// intensity, and returns whether the fade is still running. Dead cells
    /// whose fade finished are removed from the grid.
    pub(crate) fn retain_fades<F>(&mut self, mut f: F)
    where
        F: FnMut(CellCoord, bool, &mut f32) -> bool,
    {
        let cells = &self.cells;
        let mut settled = Vec::new();

        self.fades.retain(|&coord, intensity| {
            let alive = cells.get(&coord).is_some_and(|s| s.is_alive());
            let running = f(coord, alive, intensity);
            if !running && !alive {
                settled.push(coord);
            }
            running
        });

        for coord in settled {
            if self.cells.get(&coord).is_some_and(|s| s.is_empty()) {
                self.cells.remove(&coord);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i64, y: i64) -> CellCoord {
        CellCoord::new(x, y)
    }

    #[test]
    fn test_absent_cell_is_dead() {
        let grid = SparseGrid::new();
        assert!(!grid.is_alive(c(5, -7)));
        assert!(grid.state(c(5, -7)).is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_set_alive_arms_fade_in() {
        let mut grid = SparseGrid::new();
        assert!(grid.set_alive(c(1, 1), true));
        assert!(grid.is_alive(c(1, 1)));
        assert_eq!(grid.fade_intensity(c(1, 1)), Some(0.0));
    }

    #[test]
    fn test_set_alive_noop_when_unchanged() {
        let mut grid = SparseGrid::new();
        assert!(!grid.set_alive(c(0, 0), false));
        assert!(grid.is_empty());
        assert_eq!(grid.animated_count(), 0);
    }

    #[test]
    fn test_set_dead_keeps_entry_while_fading() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(2, 3), true);
        grid.set_alive(c(2, 3), false);
        assert!(!grid.is_alive(c(2, 3)));
        assert!(grid.contains(c(2, 3)));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_inflight_fade_is_not_reset() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(0, 0), true);
        grid.retain_fades(|_, _, intensity| {
            *intensity = 0.4;
            true
        });
        grid.set_alive(c(0, 0), false);
        assert_eq!(grid.fade_intensity(c(0, 0)), Some(0.4));
    }

    #[test]
    fn test_live_neighbors_ignores_fading_cells() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(0, 0), true);
        grid.set_alive(c(1, 0), true);
        grid.set_alive(c(1, 1), true);
        grid.set_alive(c(1, 1), false);
        assert_eq!(grid.live_neighbors(c(0, 1)), 2);
        assert_eq!(grid.live_neighbors(c(5, 5)), 0);
    }

    #[test]
    fn test_settled_dead_cell_is_removed() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(4, 4), true);
        grid.set_alive(c(4, 4), false);
        grid.retain_fades(|_, _, _| false);
        assert!(!grid.contains(c(4, 4)));
        assert_eq!(grid.animated_count(), 0);
    }

    #[test]
    fn test_settled_live_cell_stays() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(4, 4), true);
        grid.retain_fades(|_, alive, intensity| {
            assert!(alive);
            *intensity = 1.0;
            false
        });
        assert!(grid.is_alive(c(4, 4)));
        assert!(!grid.is_animating(c(4, 4)));
    }

    #[test]
    fn test_live_cells_are_ordered() {
        let mut grid = SparseGrid::new();
        grid.set_alive(c(3, 0), true);
        grid.set_alive(c(-1, 2), true);
        grid.set_alive(c(0, 0), true);
        assert_eq!(grid.live_cells(), vec![c(-1, 2), c(0, 0), c(3, 0)]);
    }
}
