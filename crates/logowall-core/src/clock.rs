//! Marquee animation clock.
//!
//! Targets without a native animation engine drive the scroll themselves:
//! one linear, infinitely repeating cycle per `duration`, frozen in place
//! while paused.

/// Progress through the current scroll cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarqueeClock {
    /// Position in the cycle, always in `[0, 1)`.
    phase: f64,
}

impl MarqueeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance by `dt` seconds of a `duration`-second cycle.
    ///
    /// No-op while paused or for a zero duration, so the current offset is
    /// kept rather than reset.
    pub fn advance(&mut self, dt: f64, duration: f64, paused: bool) {
        if paused || duration <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.phase = (self.phase + dt / duration).rem_euclid(1.0);
    }

    /// Restart the cycle from the beginning.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Translation along the main axis for a loop of length `period`.
    ///
    /// Forward tracks move from `0` to `-period`; reverse tracks play the
    /// same cycle backwards.
    pub fn offset(&self, period: f64, reverse: bool) -> f64 {
        let progress = if reverse && self.phase > 0.0 {
            1.0 - self.phase
        } else {
            self.phase
        };
        -progress * period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_linear() {
        let mut clock = MarqueeClock::new();
        clock.advance(15.0, 60.0, false);
        assert!((clock.phase() - 0.25).abs() < 1e-9);
        assert!((clock.offset(400.0, false) + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_phase_wraps() {
        let mut clock = MarqueeClock::new();
        clock.advance(50.0, 60.0, false);
        clock.advance(20.0, 60.0, false);
        assert!((clock.phase() - 1.0 / 6.0).abs() < 1e-9);
        clock.advance(600.0, 60.0, false);
        assert!(clock.phase() >= 0.0 && clock.phase() < 1.0);
    }

    #[test]
    fn test_paused_freezes_offset() {
        let mut clock = MarqueeClock::new();
        clock.advance(12.0, 60.0, false);
        let before = clock.offset(500.0, false);
        clock.advance(30.0, 60.0, true);
        assert_eq!(clock.offset(500.0, false), before);
    }

    #[test]
    fn test_reverse_mirrors_forward() {
        let mut clock = MarqueeClock::new();
        assert_eq!(clock.offset(300.0, true), 0.0);
        clock.advance(1.0, 4.0, false);
        assert!((clock.offset(300.0, false) + 75.0).abs() < 1e-9);
        assert!((clock.offset(300.0, true) + 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_and_bad_dt() {
        let mut clock = MarqueeClock::new();
        clock.advance(1.0, 0.0, false);
        clock.advance(f64::NAN, 60.0, false);
        clock.advance(-1.0, 60.0, false);
        assert_eq!(clock.phase(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = MarqueeClock::new();
        clock.advance(10.0, 60.0, false);
        clock.reset();
        assert_eq!(clock.phase(), 0.0);
    }
}
