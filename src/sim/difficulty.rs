//! Score-driven difficulty curve
//!
//! Both knobs ease toward a target derived from the current score, so the
//! ramp never jumps visibly when a big enemy goes down.

use serde::Serialize;

use crate::consts::*;

#[derive(Debug, Clone, Serialize)]
pub struct Difficulty {
    /// Multiplier applied to the speed of newly spawned enemies
    pub speed_multiplier: f32,
    /// Current delay between enemy spawns (ms)
    pub spawn_interval_ms: f32,
    /// Spawn interval at score 0 (ms)
    base_interval_ms: f32,
}

impl Difficulty {
    pub fn new(base_interval_ms: f32) -> Self {
        Self {
            speed_multiplier: 1.0,
            spawn_interval_ms: base_interval_ms,
            base_interval_ms,
        }
    }

    pub fn speed_target(score: u64) -> f32 {
        1.0 + score as f32 / SPEED_SCORE_SCALE
    }

    pub fn spawn_target(&self, score: u64) -> f32 {
        (self.base_interval_ms - score as f32 * SPAWN_SCORE_SCALE).max(ENEMY_SPAWN_FLOOR_MS)
    }

    /// Ease both knobs toward their score-derived targets
    pub fn advance(&mut self, score: u64, dt: f32) {
        let speed_target = Self::speed_target(score);
        self.speed_multiplier += (speed_target - self.speed_multiplier) * dt * SPEED_APPROACH_RATE;

        let spawn_target = self.spawn_target(score);
        self.spawn_interval_ms += (spawn_target - self.spawn_interval_ms) * dt * SPAWN_APPROACH_RATE;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.base_interval_ms);
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new(ENEMY_SPAWN_BASE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        let d = Difficulty::default();
        assert_eq!(Difficulty::speed_target(0), 1.0);
        assert_eq!(Difficulty::speed_target(4000), 2.0);
        assert_eq!(d.spawn_target(0), 950.0);
        assert_eq!(d.spawn_target(500), 700.0);
        // Floor bounds maximum enemy density
        assert_eq!(d.spawn_target(100_000), ENEMY_SPAWN_FLOOR_MS);
    }

    #[test]
    fn test_no_change_at_zero_score() {
        let mut d = Difficulty::default();
        d.advance(0, 1.0 / 30.0);
        assert_eq!(d.speed_multiplier, 1.0);
        assert_eq!(d.spawn_interval_ms, 950.0);
    }

    #[test]
    fn test_eases_toward_target() {
        let mut d = Difficulty::default();
        let dt = 1.0 / 30.0;
        d.advance(4000, dt);
        // One step moves by (target - current) * dt * rate, not a snap
        let expected = 1.0 + (2.0 - 1.0) * dt * SPEED_APPROACH_RATE;
        assert!((d.speed_multiplier - expected).abs() < 1e-6);
        assert!(d.speed_multiplier < 2.0);

        let expected_spawn = 950.0 + (ENEMY_SPAWN_FLOOR_MS - 950.0) * dt * SPAWN_APPROACH_RATE;
        assert!((d.spawn_interval_ms - expected_spawn).abs() < 1e-3);
    }

    #[test]
    fn test_converges() {
        let mut d = Difficulty::default();
        for _ in 0..30 * 60 {
            d.advance(2000, 1.0 / 30.0);
        }
        assert!((d.speed_multiplier - 1.5).abs() < 1e-3);
        assert!((d.spawn_interval_ms - ENEMY_SPAWN_FLOOR_MS).abs() < 1e-2);
    }

    #[test]
    fn test_reset() {
        let mut d = Difficulty::new(800.0);
        d.advance(10_000, 0.5);
        d.reset();
        assert_eq!(d.speed_multiplier, 1.0);
        assert_eq!(d.spawn_interval_ms, 800.0);
    }
}
