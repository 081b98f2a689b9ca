/// FramePacer decouples the generation rate from the frame rate.
///
/// It keeps a time debt in milliseconds. Each frame's elapsed time is paid
/// off against the debt, and every time it reaches zero one generation runs
/// and a tick period is added back. A single frame runs at most
/// `max_catchup` generations; beyond that the backlog is dropped.
#[derive(Clone, Debug)]
pub struct FramePacer {
    debt_ms: f32,
    period_ms: f32,
    max_catchup: u32,
    paused: bool,
}

impl FramePacer {
    pub fn new(period_ms: f32, max_catchup: u32) -> Self {
        Self {
            debt_ms: period_ms,
            period_ms,
            max_catchup,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Time left until the next generation is due
    pub fn debt_ms(&self) -> f32 {
        self.debt_ms
    }

    pub fn period_ms(&self) -> f32 {
        self.period_ms
    }

    /// Account for `elapsed_ms` and call `step` once per due generation.
    /// Returns the number of generations run.
    pub fn advance(&mut self, elapsed_ms: f32, mut step: impl FnMut()) -> u32 {
        if self.paused || !(elapsed_ms > 0.0) {
            return 0;
        }

        self.debt_ms -= elapsed_ms;

        let mut steps = 0;
        while self.debt_ms <= 0.0 {
            if steps == self.max_catchup {
                log::debug!(
                    "catch-up cap of {} reached, dropping {:.0}ms of backlog",
                    self.max_catchup,
                    -self.debt_ms
                );
                self.debt_ms = 0.0;
                break;
            }
            step();
            steps += 1;
            self.debt_ms += self.period_ms;
        }
        steps
    }
}
