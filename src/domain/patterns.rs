use super::CellCoord;

/// A named arrangement of live cells that can be stamped anywhere
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<(i64, i64)>,  // Offsets from the top-left corner
}

impl Pattern {
    /// Create a new pattern from live cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Absolute cell positions with the top-left corner at `origin`
    pub fn cells_at(&self, origin: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells
            .iter()
            .filter_map(move |&(dx, dy)| origin.offset(dx, dy))
    }

    /// Top-left corner that centers the pattern on `center`
    pub fn origin_centered_on(&self, center: CellCoord) -> CellCoord {
        center
            .offset(-(self.width / 2), -(self.height / 2))
            .unwrap_or(center)
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves (+1, +1) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let mut cells = Vec::new();
        // One quadrant, mirrored into the other three
        let quadrant = [
            (2, 0), (3, 0), (4, 0),
            (0, 2), (0, 3), (0, 4),
            (5, 2), (5, 3), (5, 4),
            (2, 5), (3, 5), (4, 5),
        ];
        for (x, y) in quadrant {
            cells.push((x, y));
            cells.push((12 - x, y));
            cells.push((x, 12 - y));
            cells.push((12 - x, 12 - y));
        }
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                (0, 4), (0, 5), (1, 4), (1, 5),

                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                (34, 2), (34, 3), (35, 2), (35, 3),
            ]
        )
    }

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Get all available patterns, in hotkey order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifeEngine, SparseGrid};
    use std::collections::BTreeSet;

    fn run(pattern: &Pattern, generations: usize) -> BTreeSet<CellCoord> {
        let mut grid = SparseGrid::new();
        for c in pattern.cells_at(CellCoord::new(0, 0)) {
            grid.set_alive(c, true);
        }
        let engine = LifeEngine::serial();
        for _ in 0..generations {
            engine.step(&mut grid);
        }
        grid.live_cells().into_iter().collect()
    }

    fn initial(pattern: &Pattern) -> BTreeSet<CellCoord> {
        pattern.cells_at(CellCoord::new(0, 0)).collect()
    }

    #[test]
    fn test_pattern_dimensions() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(presets::pulsar().cells.len(), 48);
        assert_eq!(presets::glider_gun().cells.len(), 36);
    }

    #[test]
    fn test_oscillators_return_to_start() {
        for (pattern, period) in [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ] {
            assert_eq!(run(&pattern, period), initial(&pattern), "{}", pattern.name);
        }
    }

    #[test]
    fn test_lwss_moves_two_cells_left_in_four() {
        let lwss = presets::lwss();
        let expected: BTreeSet<_> = initial(&lwss)
            .iter()
            .map(|c| CellCoord::new(c.x - 2, c.y))
            .collect();
        assert_eq!(run(&lwss, 4), expected);
    }

    #[test]
    fn test_origin_centered_on() {
        let block = presets::block();
        assert_eq!(block.origin_centered_on(CellCoord::new(10, 10)), CellCoord::new(9, 9));
    }

    #[test]
    fn test_all_patterns_names_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
