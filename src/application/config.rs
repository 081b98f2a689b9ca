use std::fmt;

/// Engine settings, fixed once a `Simulation` is built
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Milliseconds of wall-clock time per generation
    pub tick_period_ms: f32,
    /// Intensity change per second of a fading cell
    pub fade_rate_per_sec: f32,
    /// Most generations a single tick may run to catch up
    pub max_catchup_steps: u32,
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    /// Candidate count at which rule evaluation goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 100.0,
            fade_rate_per_sec: 4.0,
            max_catchup_steps: 5,
            cell_size: 10.0,
            parallel_threshold: 4096,
        }
    }
}

impl EngineConfig {
    /// Reject settings that would stall or spin the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_period_ms.is_finite() && self.tick_period_ms > 0.0) {
            return Err(ConfigError::NonPositiveTickPeriod(self.tick_period_ms));
        }
        if !(self.fade_rate_per_sec.is_finite() && self.fade_rate_per_sec > 0.0) {
            return Err(ConfigError::NonPositiveFadeRate(self.fade_rate_per_sec));
        }
        if self.max_catchup_steps == 0 {
            return Err(ConfigError::ZeroCatchup);
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        Ok(())
    }

    /// Generations per second implied by the tick period
    pub fn generations_per_second(&self) -> f32 {
        1000.0 / self.tick_period_ms
    }
}

/// Invalid `EngineConfig` value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveTickPeriod(f32),
    NonPositiveFadeRate(f32),
    ZeroCatchup,
    NonPositiveCellSize(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveTickPeriod(v) => {
                write!(f, "tick period must be a positive number of milliseconds, got {}", v)
            }
            ConfigError::NonPositiveFadeRate(v) => {
                write!(f, "fade rate must be positive, got {}", v)
            }
            ConfigError::ZeroCatchup => write!(f, "max catch-up steps must be at least 1"),
            ConfigError::NonPositiveCellSize(v) => {
                write!(f, "cell size must be a positive number of pixels, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
        assert_eq!(EngineConfig::default().generations_per_second(), 10.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let base = EngineConfig::default();

        let cfg = EngineConfig { tick_period_ms: 0.0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveTickPeriod(0.0)));

        let cfg = EngineConfig { fade_rate_per_sec: -1.0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveFadeRate(-1.0)));

        let cfg = EngineConfig { max_catchup_steps: 0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCatchup));

        let cfg = EngineConfig { cell_size: f32::INFINITY, ..base };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositiveCellSize(_))));
    }

    #[test]
    fn test_nan_tick_period_rejected() {
        let cfg = EngineConfig { tick_period_ms: f32::NAN, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
