//! Starfall - a single-screen vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, difficulty, session state)
//! - `game`: Frame loop driver and the collaborators it reports to
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Data-driven game tuning

pub mod config;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig, QualityPreset};
pub use game::{Game, Hud, Overlay, Renderer};

/// Game configuration constants
pub mod consts {
    /// Largest simulated step per frame (seconds); guards against tab stalls
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 640.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 42.0;
    pub const PLAYER_HEIGHT: f32 = 54.0;
    pub const PLAYER_SPEED: f32 = 320.0;
    /// Distance kept from the left, right and bottom arena edges
    pub const PLAYER_MARGIN: f32 = 12.0;
    /// Spawn gap between the ship and the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 30.0;
    /// Fraction of the arena height above which the ship may not fly
    pub const PLAYER_ZONE_TOP: f32 = 0.45;
    pub const STARTING_LIVES: u8 = 3;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 520.0;
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 16.0;
    pub const BULLET_COOLDOWN_MS: f32 = 160.0;

    /// Enemy bullets
    pub const ENEMY_BULLET_SPEED: f32 = 180.0;
    pub const ENEMY_BULLET_WIDTH: f32 = 8.0;
    pub const ENEMY_BULLET_HEIGHT: f32 = 18.0;

    /// Enemies
    pub const ENEMY_BASE_SPEED: f32 = 120.0;
    pub const ENEMY_SPEED_JITTER: f32 = 60.0;
    pub const ENEMY_MIN_SIZE: f32 = 36.0;
    pub const ENEMY_SIZE_JITTER: f32 = 20.0;
    pub const ENEMY_MIN_AMPLITUDE: f32 = 20.0;
    pub const ENEMY_AMPLITUDE_JITTER: f32 = 40.0;
    /// Chance that a spawned enemy is the armored variant
    pub const TOUGH_ENEMY_CHANCE: f64 = 0.2;
    /// Weave angular rate (radians per simulated millisecond)
    pub const WEAVE_FREQUENCY: f64 = 0.002;

    /// Difficulty curve
    pub const ENEMY_SPAWN_BASE_MS: f32 = 950.0;
    pub const ENEMY_SPAWN_FLOOR_MS: f32 = 380.0;
    /// Score needed to add 1.0 to the enemy speed multiplier
    pub const SPEED_SCORE_SCALE: f32 = 4000.0;
    /// Spawn interval reduction per point scored (ms)
    pub const SPAWN_SCORE_SCALE: f32 = 0.5;
    pub const SPEED_APPROACH_RATE: f32 = 0.7;
    pub const SPAWN_APPROACH_RATE: f32 = 2.0;

    /// Background
    pub const STAR_COUNT: usize = 70;

    /// Particles
    pub const PARTICLE_SHRINK: f32 = 0.96;
    pub const MAX_PARTICLES: usize = 1000;

    /// Undrained events kept on the state; older ones are dropped first
    pub const MAX_PENDING_EVENTS: usize = 512;
}

/// Clamp without panicking when the range is inverted (min wins)
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
