//! Randomized entity creation: enemies, particle bursts and the star field
//!
//! All draws come from the session's seeded RNG and stay inside bounded
//! ranges, so no spawned entity can have a negative size or runaway speed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameState, Particle, ParticleColor, Star};
use crate::consts::*;

/// `min + U[0,1) * span`
#[inline]
fn uniform<R: Rng>(rng: &mut R, min: f32, span: f32) -> f32 {
    min + rng.random::<f32>() * span.max(0.0)
}

/// Spawn one enemy just above the top edge
pub fn spawn_enemy(state: &mut GameState) {
    let enemy = roll_enemy(
        &mut state.rng,
        state.arena,
        state.config.enemy_base_speed,
        state.difficulty.speed_multiplier,
    );
    log::debug!(
        "Spawned {:?} enemy at x={:.0} speed={:.0}",
        enemy.kind,
        enemy.pos.x,
        enemy.speed
    );
    state.enemies.push(enemy);
}

/// Draw a random enemy for an arena of the given size
pub fn roll_enemy<R: Rng>(rng: &mut R, arena: Vec2, base_speed: f32, speed_multiplier: f32) -> Enemy {
    let width = uniform(rng, ENEMY_MIN_SIZE, ENEMY_SIZE_JITTER);
    let height = uniform(rng, ENEMY_MIN_SIZE, ENEMY_SIZE_JITTER);
    let kind = if rng.random_bool(TOUGH_ENEMY_CHANCE) {
        EnemyKind::Tough
    } else {
        EnemyKind::Weak
    };
    let fire_rate = kind.fire_rate_ms();

    let mut enemy = Enemy::new(
        kind,
        Vec2::new(uniform(rng, 0.0, arena.x - width), -height),
        Vec2::new(width, height),
        uniform(rng, base_speed, ENEMY_SPEED_JITTER) * speed_multiplier,
    );
    enemy.phase = uniform(rng, 0.0, TAU);
    enemy.amplitude = uniform(rng, ENEMY_MIN_AMPLITUDE, ENEMY_AMPLITUDE_JITTER);
    // Stagger the first volley so enemies don't fire in sync
    enemy.fire_cooldown_ms = uniform(rng, 0.0, fire_rate);
    enemy
}

/// Emit a radial burst of `count` particles at `pos`
///
/// When the store is at `cap`, the oldest particles make room.
pub fn emit_particles<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    cap: usize,
    pos: Vec2,
    count: usize,
    color: ParticleColor,
) {
    if cap == 0 {
        return;
    }
    // Only the newest `cap` of old + new survive
    let overflow = (particles.len() + count).saturating_sub(cap);
    let dropped = overflow.min(particles.len());
    particles.drain(..dropped);
    // Bursts larger than the cap still draw every particle to keep the RNG stream stable
    let skip = overflow - dropped;
    for i in 0..count {
        let angle = uniform(rng, 0.0, TAU);
        let speed = uniform(rng, 40.0, 140.0);
        let particle = Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: uniform(rng, 0.4, 0.4),
            radius: uniform(rng, 1.0, 3.0),
            color,
        };
        if i >= skip {
            particles.push(particle);
        }
    }
}

/// Scatter the initial star field across the arena
pub fn seed_stars<R: Rng>(rng: &mut R, arena: Vec2, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vec2::new(uniform(rng, 0.0, arena.x), uniform(rng, 0.0, arena.y)),
            radius: uniform(rng, 0.2, 1.8),
            speed: uniform(rng, 15.0, 35.0),
        })
        .collect()
}

/// Scroll a star down, wrapping it to a fresh spot on the top edge
pub fn advance_star<R: Rng>(star: &mut Star, rng: &mut R, arena: Vec2, dt: f32) {
    star.pos.y += star.speed * dt;
    if star.pos.y > arena.y {
        star.pos.y = 0.0;
        star.pos.x = uniform(rng, 0.0, arena.x);
        star.radius = uniform(rng, 0.2, 2.0);
    }
}
