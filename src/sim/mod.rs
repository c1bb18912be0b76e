//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State passed explicitly, no globals
//! - Seeded RNG only
//! - Stable, order-preserving removal from entity stores
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Aabb, Bounded, first_overlap, rects_overlap};
pub use difficulty::Difficulty;
pub use input::{InputState, bindings};
pub use state::{
    Bullet, Enemy, EnemyKind, GameEvent, GamePhase, GameState, Particle, ParticleColor, Player,
    Star,
};
pub use tick::{movement_direction, tick};
