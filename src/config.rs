//! Game configuration and quality presets
//!
//! Defaults reproduce the classic tuning; a JSON document can override any field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("arena {width}x{height} is too small for the player ship and enemies")]
    ArenaTooSmall { width: f32, height: f32 },
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("starting lives must be at least 1")]
    NoLives,
    #[error("unknown quality preset `{0}`")]
    UnknownQuality(String),
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 250,
            QualityPreset::Medium => MAX_PARTICLES,
            QualityPreset::High => 4000,
        }
    }

    /// Background star count
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 30,
            QualityPreset::Medium => STAR_COUNT,
            QualityPreset::High => 140,
        }
    }
}

impl std::str::FromStr for QualityPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            _ => Err(ConfigError::UnknownQuality(s.to_string())),
        }
    }
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena width in canvas pixels
    pub arena_width: f32,
    /// Arena height in canvas pixels
    pub arena_height: f32,
    /// Ship speed (pixels/s)
    pub player_speed: f32,
    /// Player bullet speed (pixels/s)
    pub bullet_speed: f32,
    /// Delay between volleys (ms)
    pub bullet_cooldown_ms: f32,
    /// Enemy bullet speed (pixels/s)
    pub enemy_bullet_speed: f32,
    /// Base enemy descent speed before jitter and difficulty (pixels/s)
    pub enemy_base_speed: f32,
    /// Spawn interval at score 0 (ms)
    pub enemy_spawn_base_ms: f32,
    pub starting_lives: u8,
    pub quality: QualityPreset,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_speed: PLAYER_SPEED,
            bullet_speed: BULLET_SPEED,
            bullet_cooldown_ms: BULLET_COOLDOWN_MS,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_spawn_base_ms: ENEMY_SPAWN_BASE_MS,
            starting_lives: STARTING_LIVES,
            quality: QualityPreset::Medium,
        }
    }
}

impl GameConfig {
    /// Default tuning with a given quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse a JSON override document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no session could be played in
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("bullet_cooldown_ms", self.bullet_cooldown_ms),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
            ("enemy_base_speed", self.enemy_base_speed),
            ("enemy_spawn_base_ms", self.enemy_spawn_base_ms),
        ];
        for (field, value) in positive {
            // NaN fails this check too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let min_width = (PLAYER_WIDTH + 2.0 * PLAYER_MARGIN).max(ENEMY_MIN_SIZE + ENEMY_SIZE_JITTER);
        let min_height = (PLAYER_HEIGHT + PLAYER_SPAWN_OFFSET) / (1.0 - PLAYER_ZONE_TOP);
        if self.arena_width < min_width || self.arena_height < min_height {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Effective particle cap
    pub fn max_particles(&self) -> usize {
        self.quality.max_particles()
    }

    /// Effective star count
    pub fn star_count(&self) -> usize {
        self.quality.star_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.star_count(), STAR_COUNT);
        assert_eq!(config.starting_lives, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "player_speed": 400.0, "quality": "High" }"#)
            .expect("valid config");
        assert_eq!(config.player_speed, 400.0);
        assert_eq!(config.quality, QualityPreset::High);
        assert_eq!(config.arena_width, ARENA_WIDTH);
        assert_eq!(config.max_particles(), 4000);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let err = GameConfig::from_json(r#"{ "arena_width": 50.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ArenaTooSmall { .. }));
    }

    #[test]
    fn test_rejects_non_positive() {
        let config = GameConfig {
            bullet_cooldown_ms: 0.0,
            ..GameConfig::default()
        };
        match config.validate() {
            Err(ConfigError::NonPositive { field, .. }) => assert_eq!(field, "bullet_cooldown_ms"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_lives() {
        let config = GameConfig {
            starting_lives: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoLives)));
    }

    #[test]
    fn test_quality_from_str() {
        assert_eq!("low".parse::<QualityPreset>().ok(), Some(QualityPreset::Low));
        assert_eq!("MED".parse::<QualityPreset>().ok(), Some(QualityPreset::Medium));
        assert_eq!(" High ".parse::<QualityPreset>().ok(), Some(QualityPreset::High));
        assert!("ultra".parse::<QualityPreset>().is_err());
    }
}
