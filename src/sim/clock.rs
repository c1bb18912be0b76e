//! Frame clock
//!
//! Turns host frame timestamps (milliseconds) into a bounded simulation delta.

use crate::consts::MAX_FRAME_DT;

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now_ms` and return the seconds to simulate, in `[0, MAX_FRAME_DT]`
    ///
    /// The first call only sets the baseline and returns 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        // NaN timestamps collapse to a zero step
        if dt.is_nan() { 0.0 } else { dt }
    }

    /// Forget the baseline; the next frame is treated as the first
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(12_345.0), 0.0);
        assert_eq!(clock.last_timestamp(), Some(12_345.0));
    }

    #[test]
    fn test_regular_frame() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        let dt = clock.advance(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(5000.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0.0);
        // Baseline follows the latest timestamp
        let dt = clock.advance(910.0);
        assert!((dt - 0.010).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restarts_baseline() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        clock.reset();
        assert_eq!(clock.advance(9000.0), 0.0);
    }
}
