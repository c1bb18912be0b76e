//! Builds the per-frame triangle list from a read-only game snapshot

use super::shapes;
use super::vertex::{Vertex, colors, particle_color, with_alpha};
use crate::sim::GameState;

const STAR_SEGMENTS: u32 = 6;
const PARTICLE_SEGMENTS: u32 = 8;

/// Star brightness grows with size
fn star_alpha(radius: f32) -> f32 {
    (0.6 + radius * 0.4).min(1.0)
}

/// Particles fade out over their last half second
fn particle_alpha(life: f32) -> f32 {
    (life * 2.0).clamp(0.0, 1.0)
}

/// Draw order: stars, bullets, enemy bullets, enemies, player, particles
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        state.stars.len() * 18
            + (state.bullets.len() + state.enemy_bullets.len()) * 6
            + state.enemies.len() * 9
            + 12
            + state.particles.len() * 24,
    );

    for star in &state.stars {
        let color = with_alpha(colors::STAR, star_alpha(star.radius));
        vertices.extend(shapes::circle(star.pos, star.radius, color, STAR_SEGMENTS));
    }

    for bullet in &state.bullets {
        vertices.extend(shapes::rect(bullet.pos, bullet.size, colors::BULLET));
    }

    for bullet in &state.enemy_bullets {
        vertices.extend(shapes::rect(bullet.pos, bullet.size, colors::ENEMY_BULLET));
    }

    for enemy in &state.enemies {
        vertices.extend(shapes::enemy_ship(enemy.pos, enemy.size));
    }

    vertices.extend(shapes::player_ship(state.player.pos, state.player.size));

    for p in &state.particles {
        let color = with_alpha(particle_color(p.color), particle_alpha(p.life));
        vertices.extend(shapes::circle(p.pos, p.radius.max(0.0), color, PARTICLE_SEGMENTS));
    }

    vertices
}
