/// A cell position on the unbounded integer plane.
/// Ordered so that grid iteration is deterministic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct CellCoord {
    pub x: i64,
    pub y: i64,
}

/// Relative offsets of the Moore neighborhood (self excluded)
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl CellCoord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy). `None` past the edge of the i64 range.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The 8 surrounding coordinates.
    /// Coordinates that would overflow i64 do not exist and are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = CellCoord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// This coordinate followed by its neighbors (the 3x3 block)
    pub fn neighborhood(self) -> impl Iterator<Item = CellCoord> {
        std::iter::once(self).chain(self.neighbors())
    }

    /// Map a pixel position to the cell containing it (floor division)
    pub fn from_pixel(px: f32, py: f32, cell_size: f32) -> Self {
        Self {
            x: (px / cell_size).floor() as i64,
            y: (py / cell_size).floor() as i64,
        }
    }

    /// Top-left pixel corner of this cell
    pub fn to_pixel(self, cell_size: f32) -> (f32, f32) {
        (self.x as f32 * cell_size, self.y as f32 * cell_size)
    }
}

impl From<(i64, i64)> for CellCoord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_excludes_self() {
        let c = CellCoord::new(3, -2);
        let n: Vec<_> = c.neighbors().collect();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c));
        assert!(n.contains(&CellCoord::new(2, -3)));
        assert!(n.contains(&CellCoord::new(4, -1)));
    }

    #[test]
    fn test_neighbors_at_domain_edge() {
        let corner = CellCoord::new(i64::MAX, i64::MAX);
        assert_eq!(corner.neighbors().count(), 3);
        assert_eq!(corner.neighborhood().count(), 4);
    }

    #[test]
    fn test_from_pixel_floors_negative() {
        assert_eq!(CellCoord::from_pixel(0.0, 9.9, 10.0), CellCoord::new(0, 0));
        assert_eq!(CellCoord::from_pixel(10.0, 25.0, 10.0), CellCoord::new(1, 2));
        assert_eq!(CellCoord::from_pixel(-0.5, -10.0, 10.0), CellCoord::new(-1, -1));
        assert_eq!(CellCoord::from_pixel(-10.5, 0.0, 10.0), CellCoord::new(-2, 0));
    }
}
