//! Per-frame simulation step
//!
//! Sub-steps run in a fixed order; later ones see earlier mutations (bullets
//! fired this frame can already hit).

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::collision::{Bounded, first_overlap};
use super::input::InputState;
use super::spawn::{advance_star, emit_particles, spawn_enemy};
use super::state::{Bullet, GameEvent, GamePhase, GameState, ParticleColor};
use crate::consts::*;

/// Advance the game state by `dt` seconds; a no-op unless playing
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    step(state, input, dt);
    state.trim_events();
}

fn step(state: &mut GameState, input: &InputState, dt: f32) {
    state.time_ticks += 1;
    state.elapsed_ms += dt as f64 * 1000.0;

    update_stars(state, dt);
    update_player(state, input, dt);
    update_bullets(state, dt);
    update_enemy_bullets(state, dt);
    update_enemies(state, dt);
    update_particles(state, dt);

    check_player_collisions(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    let score = state.player.score;
    state.difficulty.advance(score, dt);

    state.spawn_timer_ms += dt * 1000.0;
    if state.spawn_timer_ms >= state.difficulty.spawn_interval_ms {
        spawn_enemy(state);
        state.spawn_timer_ms = 0.0;
    }
}

fn update_stars(state: &mut GameState, dt: f32) {
    let arena = state.arena;
    for star in &mut state.stars {
        advance_star(star, &mut state.rng, arena, dt);
    }
}

/// Unit-length (or zero) movement direction from held keys
pub fn movement_direction(input: &InputState) -> Vec2 {
    let (mut dx, mut dy) = input.axis();
    if dx != 0.0 && dy != 0.0 {
        dx *= FRAC_1_SQRT_2;
        dy *= FRAC_1_SQRT_2;
    }
    Vec2::new(dx, dy)
}

fn update_player(state: &mut GameState, input: &InputState, dt: f32) {
    let dir = movement_direction(input);
    state.player.pos += dir * state.config.player_speed * dt;
    state.player.clamp_to_zone(state.arena);

    if state.player.cooldown_ms > 0.0 {
        state.player.cooldown_ms -= dt * 1000.0;
    }

    if input.fire_held() && state.player.cooldown_ms <= 0.0 {
        let nose = state.player.nose();
        let speed = state.config.bullet_speed;
        state
            .bullets
            .push(Bullet::player(Vec2::new(nose.x - 4.0, nose.y - 10.0), speed));
        state
            .bullets
            .push(Bullet::player(Vec2::new(nose.x + 8.0, nose.y - 16.0), speed));

        let exhaust = Vec2::new(nose.x, state.player.pos.y + state.player.size.y);
        let cap = state.config.max_particles();
        emit_particles(&mut state.particles, &mut state.rng, cap, exhaust, 6, ParticleColor::Exhaust);

        state.player.cooldown_ms = state.config.bullet_cooldown_ms;
        state.events.push(GameEvent::Fired);
    }
}

fn update_bullets(state: &mut GameState, dt: f32) {
    state.bullets.retain_mut(|bullet| {
        bullet.advance(dt);
        bullet.pos.y + bullet.size.y >= 0.0
    });
}

fn update_enemy_bullets(state: &mut GameState, dt: f32) {
    let bottom = state.arena.y;
    state.enemy_bullets.retain_mut(|bullet| {
        bullet.advance(dt);
        bullet.pos.y <= bottom
    });
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let GameState {
        config,
        arena,
        player,
        bullets,
        enemy_bullets,
        enemies,
        particles,
        elapsed_ms,
        rng,
        events,
        ..
    } = state;
    let cap = config.max_particles();
    let enemy_bullet_speed = config.enemy_bullet_speed;

    enemies.retain_mut(|enemy| {
        enemy.advance(dt, *elapsed_ms);
        if enemy.ready_to_fire(dt) {
            enemy_bullets.push(Bullet::enemy(enemy.muzzle(), enemy_bullet_speed));
        }

        if enemy.pos.y > arena.y + enemy.size.y {
            return false;
        }

        // First bullet in collection order wins; one hit per enemy per frame
        let Some(hit) = first_overlap(bullets, &enemy.bounds()) else {
            return true;
        };
        let bullet = bullets.remove(hit);
        enemy.health = enemy.health.saturating_sub(1);
        emit_particles(particles, rng, cap, bullet.pos, 4, ParticleColor::Spark);

        if enemy.health == 0 {
            player.score += u64::from(enemy.points);
            emit_particles(particles, rng, cap, enemy.center(), 25, ParticleColor::Explosion);
            events.push(GameEvent::EnemyDestroyed {
                points: enemy.points,
            });
            false
        } else {
            events.push(GameEvent::EnemyHit);
            true
        }
    });
}

fn update_particles(state: &mut GameState, dt: f32) {
    state.particles.retain_mut(|p| {
        p.pos += p.vel * dt;
        p.life -= dt;
        p.radius *= PARTICLE_SHRINK;
        p.life > 0.0
    });
}

/// Resolve at most one hazard touching the player this frame
fn check_player_collisions(state: &mut GameState) {
    let hull = state.player.bounds();

    if let Some(i) = first_overlap(&state.enemy_bullets, &hull) {
        state.enemy_bullets.remove(i);
        damage_player(state);
        return;
    }

    if let Some(i) = first_overlap(&state.enemies, &hull) {
        let enemy = state.enemies.remove(i);
        let cap = state.config.max_particles();
        emit_particles(
            &mut state.particles,
            &mut state.rng,
            cap,
            enemy.center(),
            20,
            ParticleColor::Explosion,
        );
        damage_player(state);
    }
}

fn damage_player(state: &mut GameState) {
    let cap = state.config.max_particles();
    let center = state.player.center();
    emit_particles(&mut state.particles, &mut state.rng, cap, center, 40, ParticleColor::ShipBurst);

    state.player.lives = state.player.lives.saturating_sub(1);
    let lives = state.player.lives;
    state.events.push(GameEvent::PlayerHit { lives });
    log::debug!("Player hit, {} lives left", lives);

    if lives == 0 {
        state.phase = GamePhase::GameOver;
        let score = state.player.score;
        state.events.push(GameEvent::GameOver { score });
        log::info!("Game over with score {}", score);
    } else {
        state.player.recenter(state.arena);
    }
}
