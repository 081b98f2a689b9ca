use super::SparseGrid;

/// Moves displayed cell intensities toward the state each cell is in.
///
/// Advancing is independent of stepping and of visibility: every fade
/// moves on every tick, on-screen or not.
#[derive(Clone, Copy, Debug)]
pub struct FadeAnimator {
    rate_per_sec: f32,
}

impl FadeAnimator {
    pub fn new(rate_per_sec: f32) -> Self {
        Self { rate_per_sec }
    }

    pub fn rate_per_sec(&self) -> f32 {
        self.rate_per_sec
    }

    /// Advance all fades by `elapsed_secs`.
    /// Fades that land exactly on their target are dropped.
    pub fn advance(&self, grid: &mut SparseGrid, elapsed_secs: f32) {
        let delta = if elapsed_secs > 0.0 {
            elapsed_secs * self.rate_per_sec
        } else {
            0.0
        };

        grid.retain_fades(|_, alive, intensity| {
            let target = if alive { 1.0 } else { 0.0 };
            *intensity = approach(*intensity, target, delta);
            *intensity != target
        });
    }
}

/// Step `current` toward `target` by at most `delta`, never past it
fn approach(current: f32, target: f32, delta: f32) -> f32 {
    if current < target {
        (current + delta).min(target)
    } else {
        (current - delta).max(target)
    }
}

/// Opaque gray for an intensity: RGBA with the channel at round(i * 255)
pub fn shade(intensity: f32) -> [u8; 4] {
    let level = (intensity.clamp(0.0, 1.0) * 255.0).round() as u8;
    [level, level, level, 255]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellCoord;
    use proptest::prelude::*;

    #[test]
    fn test_fade_in_converges_exactly() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(0, 0);
        grid.set_alive(c, true);

        let animator = FadeAnimator::new(1.0);
        animator.advance(&mut grid, 0.5);
        assert_eq!(grid.fade_intensity(c), Some(0.5));

        animator.advance(&mut grid, 0.5);
        assert_eq!(grid.fade_intensity(c), None);
        assert!(grid.is_alive(c));
    }

    #[test]
    fn test_one_second_at_unit_rate_finishes() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(3, 3);
        grid.set_alive(c, true);
        FadeAnimator::new(1.0).advance(&mut grid, 1.0);
        assert!(!grid.is_animating(c));
    }

    #[test]
    fn test_never_overshoots() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(0, 0);
        grid.set_alive(c, true);

        let animator = FadeAnimator::new(1.0);
        animator.advance(&mut grid, 0.3);
        let mut seen = Vec::new();
        grid.for_each_animated_cell(|_, i| seen.push(i));
        assert!(seen.iter().all(|&i| (0.0..=1.0).contains(&i)));

        animator.advance(&mut grid, 1000.0);
        assert_eq!(grid.animated_count(), 0);
    }

    #[test]
    fn test_fade_out_removes_dead_cell() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(-2, 9);
        grid.set_alive(c, true);
        let animator = FadeAnimator::new(2.0);
        animator.advance(&mut grid, 1.0);

        grid.set_alive(c, false);
        animator.advance(&mut grid, 0.25);
        assert_eq!(grid.fade_intensity(c), Some(0.5));
        assert!(grid.contains(c));

        animator.advance(&mut grid, 0.25);
        assert!(!grid.contains(c));
    }

    #[test]
    fn test_reversal_continues_from_displayed_intensity() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(0, 0);
        grid.set_alive(c, true);
        let animator = FadeAnimator::new(1.0);
        animator.advance(&mut grid, 0.75);

        grid.set_alive(c, false);
        animator.advance(&mut grid, 0.25);
        assert_eq!(grid.fade_intensity(c), Some(0.5));
    }

    #[test]
    fn test_zero_elapsed_still_settles_reached_targets() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(0, 0);
        grid.set_alive(c, true);
        grid.set_alive(c, false);
        FadeAnimator::new(1.0).advance(&mut grid, 0.0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut grid = SparseGrid::new();
        let c = CellCoord::new(0, 0);
        grid.set_alive(c, true);
        FadeAnimator::new(1.0).advance(&mut grid, -5.0);
        assert_eq!(grid.fade_intensity(c), Some(0.0));
    }

    #[test]
    fn test_shade_levels() {
        assert_eq!(shade(0.0), [0, 0, 0, 255]);
        assert_eq!(shade(1.0), [255, 255, 255, 255]);
        assert_eq!(shade(0.5), [128, 128, 128, 255]);
        assert_eq!(shade(2.0), [255, 255, 255, 255]);
    }

    proptest! {
        #[test]
        fn test_intensity_stays_in_range(steps in prop::collection::vec((0.0f32..2.0, any::<bool>()), 1..40)) {
            let mut grid = SparseGrid::new();
            let c = CellCoord::new(0, 0);
            let animator = FadeAnimator::new(3.0);
            for (dt, alive) in steps {
                grid.set_alive(c, alive);
                animator.advance(&mut grid, dt);
                if let Some(i) = grid.fade_intensity(c) {
                    prop_assert!((0.0..=1.0).contains(&i));
                }
            }
        }
    }
}
