//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{Aabb, Bounded};
use super::difficulty::Difficulty;
use super::spawn;
use crate::clamp;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; waiting for a reset
    GameOver,
}

/// Notifications produced during a step, drained by the loop driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Player fired a volley
    Fired,
    /// Enemy took a bullet and survived
    EnemyHit,
    /// Enemy destroyed by a bullet
    EnemyDestroyed { points: u32 },
    /// Player took damage
    PlayerHit { lives: u8 },
    /// Lives exhausted
    GameOver { score: u64 },
    /// Session restarted
    Reset,
}

/// The player's ship
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub lives: u8,
    pub score: u64,
    /// Time until the next volley may fire (ms)
    pub cooldown_ms: f32,
}

impl Player {
    pub fn new(arena: Vec2, lives: u8) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Self::spawn_position(arena, size),
            size,
            lives,
            score: 0,
            cooldown_ms: 0.0,
        }
    }

    /// Bottom-centre start position
    pub fn spawn_position(arena: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            arena.x / 2.0 - size.x / 2.0,
            arena.y - size.y - PLAYER_SPAWN_OFFSET,
        )
    }

    /// Knock the ship back to its start position
    pub fn recenter(&mut self, arena: Vec2) {
        self.pos = Self::spawn_position(arena, self.size);
    }

    /// Keep the ship inside its flight zone (lower part of the arena)
    pub fn clamp_to_zone(&mut self, arena: Vec2) {
        self.pos.x = clamp(self.pos.x, PLAYER_MARGIN, arena.x - self.size.x - PLAYER_MARGIN);
        self.pos.y = clamp(
            self.pos.y,
            arena.y * PLAYER_ZONE_TOP,
            arena.y - self.size.y - PLAYER_MARGIN,
        );
    }

    /// Where the ship's nose is (horizontal centre, top edge)
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A projectile (player or enemy)
#[derive(Debug, Clone, Serialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed in pixels/s; negative travels up
    pub speed: f32,
}

impl Bullet {
    /// Upward player bullet
    pub fn player(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            speed: -speed.abs(),
        }
    }

    /// Downward enemy bullet
    pub fn enemy(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT),
            speed: speed.abs(),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Enemy variants; behavior differs only by data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EnemyKind {
    #[default]
    Weak,
    Tough,
}

impl EnemyKind {
    pub fn max_health(&self) -> u8 {
        match self {
            EnemyKind::Weak => 1,
            EnemyKind::Tough => 3,
        }
    }

    /// Delay between shots (ms)
    pub fn fire_rate_ms(&self) -> f32 {
        match self {
            EnemyKind::Weak => 2600.0,
            EnemyKind::Tough => 1800.0,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            EnemyKind::Weak => 60,
            EnemyKind::Tough => 150,
        }
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Descent speed (pixels/s), already scaled by difficulty at spawn
    pub speed: f32,
    /// Weave phase offset (radians)
    pub phase: f32,
    /// Weave amplitude (pixels/s at the sine peak)
    pub amplitude: f32,
    pub health: u8,
    pub fire_cooldown_ms: f32,
    pub fire_rate_ms: f32,
    pub points: u32,
}

impl Enemy {
    /// Enemy with no weave, ready to fire after one full fire interval
    pub fn new(kind: EnemyKind, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            kind,
            pos,
            size,
            speed,
            phase: 0.0,
            amplitude: 0.0,
            health: kind.max_health(),
            fire_cooldown_ms: kind.fire_rate_ms(),
            fire_rate_ms: kind.fire_rate_ms(),
            points: kind.points(),
        }
    }

    /// Descend and weave; `elapsed_ms` is simulation time
    pub fn advance(&mut self, dt: f32, elapsed_ms: f64) {
        self.pos.y += self.speed * dt;
        let weave = (elapsed_ms * WEAVE_FREQUENCY + self.phase as f64).sin() as f32;
        self.pos.x += weave * self.amplitude * dt;
    }

    /// Count down the fire timer; returns true when a shot is due
    pub fn ready_to_fire(&mut self, dt: f32) -> bool {
        self.fire_cooldown_ms -= dt * 1000.0;
        if self.fire_cooldown_ms <= 0.0 {
            self.fire_cooldown_ms = self.fire_rate_ms;
            true
        } else {
            false
        }
    }

    /// Where a shot leaves the hull
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2.0 - ENEMY_BULLET_WIDTH / 2.0,
            self.pos.y + self.size.y,
        )
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Particle palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParticleColor {
    /// Engine flash when firing (cyan)
    Exhaust,
    /// Bullet impact (yellow)
    Spark,
    /// Enemy destroyed (red)
    Explosion,
    /// Player hit (light blue)
    ShipBurst,
}

/// A cosmetic particle
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime (seconds)
    pub life: f32,
    pub radius: f32,
    pub color: ParticleColor,
}

/// Background star; wraps forever
#[derive(Debug, Clone, Serialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    /// Arena size in pixels
    pub arena: Vec2,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub difficulty: Difficulty,
    /// Time since the last enemy spawn (ms)
    pub spawn_timer_ms: f32,
    /// Simulated time since the session started (ms)
    pub elapsed_ms: f64,
    /// Simulation steps taken while playing
    pub time_ticks: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let arena = Vec2::new(config.arena_width, config.arena_height);
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = spawn::seed_stars(&mut rng, arena, config.star_count());

        Self {
            seed,
            arena,
            phase: GamePhase::Playing,
            player: Player::new(arena, config.starting_lives),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            stars,
            difficulty: Difficulty::new(config.enemy_spawn_base_ms),
            spawn_timer_ms: 0.0,
            elapsed_ms: 0.0,
            time_ticks: 0,
            rng,
            events: Vec::new(),
            config,
        }
    }

    /// New session with the default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, GameConfig::default())
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Restore the initial session state; the star field and RNG stream carry over
    pub fn reset(&mut self) {
        self.player = Player::new(self.arena, self.config.starting_lives);
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.particles.clear();
        self.difficulty.reset();
        self.spawn_timer_ms = 0.0;
        self.elapsed_ms = 0.0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset (seed {})", self.seed);
    }

    /// Centre the ship on a pointer position (arena coordinates)
    pub fn move_player_to(&mut self, x: f32, y: f32) {
        let half = self.player.size / 2.0;
        self.player.pos = Vec2::new(x, y) - half;
        self.player.clamp_to_zone(self.arena);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
        self.trim_events();
    }

    /// Drop the oldest events beyond `MAX_PENDING_EVENTS`
    pub(crate) fn trim_events(&mut self) {
        if self.events.len() > MAX_PENDING_EVENTS {
            let excess = self.events.len() - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
    }

    /// Events queued since the last drain, oldest first
    ///
    /// Hosts driving `tick` directly should drain once per frame; only the
    /// newest `MAX_PENDING_EVENTS` are kept otherwise.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
