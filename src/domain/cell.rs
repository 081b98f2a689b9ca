/// Packed per-cell state: two generations in one byte.
///
/// Bit 0 holds the generation being displayed and read by the rule.
/// Bit 1 collects the generation being computed during a step, so a
/// single map serves both without a second copy of the grid.
/// A value of 0 means "dead in both planes".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CellState(u8);

impl CellState {
    const CURRENT: u8 = 0b01;
    const NEXT: u8 = 0b10;

    /// Dead in both planes
    pub const EMPTY: Self = Self(0);

    /// Alive in the current plane only
    pub const ALIVE: Self = Self(Self::CURRENT);

    /// Raw packed value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if the cell is alive in the current generation
    pub const fn is_alive(self) -> bool {
        self.0 & Self::CURRENT != 0
    }

    /// Check if the cell was marked alive for the generation under construction
    pub const fn is_alive_next(self) -> bool {
        self.0 & Self::NEXT != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn with_current(self, alive: bool) -> Self {
        if alive {
            Self(self.0 | Self::CURRENT)
        } else {
            Self(self.0 & !Self::CURRENT)
        }
    }

    pub const fn with_next(self, alive: bool) -> Self {
        if alive {
            Self(self.0 | Self::NEXT)
        } else {
            Self(self.0 & !Self::NEXT)
        }
    }

    /// Promote the next plane into the current one and clear the next plane
    pub const fn shifted(self) -> Self {
        Self((self.0 & Self::NEXT) >> 1)
    }
}

/// Conway's B3/S23 rule:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}
