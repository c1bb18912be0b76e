//! Property tests over arbitrary input sequences

use proptest::prelude::*;

use starfall::consts::*;
use starfall::sim::{
    FrameClock, GameEvent, GamePhase, GameState, InputState, bindings, movement_direction, tick,
};

#[derive(Debug, Clone)]
struct FrameInput {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire: bool,
    dt: f32,
}

fn frame_input() -> impl Strategy<Value = FrameInput> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0.0f32..=MAX_FRAME_DT,
    )
        .prop_map(|(left, right, up, down, fire, dt)| FrameInput {
            left,
            right,
            up,
            down,
            fire,
            dt,
        })
}

fn apply(input: &mut InputState, frame: &FrameInput) {
    input.release_all();
    if frame.left {
        input.press(bindings::LEFT[0]);
    }
    if frame.right {
        input.press(bindings::RIGHT[1]);
    }
    if frame.up {
        input.press(bindings::UP[0]);
    }
    if frame.down {
        input.press(bindings::DOWN[1]);
    }
    if frame.fire {
        input.press(bindings::FIRE);
    }
}

fn assert_in_zone(state: &GameState) {
    let p = &state.player;
    assert!(p.pos.x >= PLAYER_MARGIN);
    assert!(p.pos.x <= state.arena.x - p.size.x - PLAYER_MARGIN);
    assert!(p.pos.y >= state.arena.y * PLAYER_ZONE_TOP);
    assert!(p.pos.y <= state.arena.y - p.size.y - PLAYER_MARGIN);
}

proptest! {
    #[test]
    fn frame_delta_is_bounded(timestamps in prop::collection::vec(-1.0e6f64..1.0e7, 1..50)) {
        let mut clock = FrameClock::new();
        for (i, t) in timestamps.iter().enumerate() {
            let dt = clock.advance(*t);
            prop_assert!((0.0..=MAX_FRAME_DT).contains(&dt));
            if i == 0 {
                prop_assert_eq!(dt, 0.0);
            }
        }
    }

    #[test]
    fn player_stays_in_zone(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_input(), 1..200),
    ) {
        let mut state = GameState::with_seed(seed);
        let mut input = InputState::new();
        for frame in &frames {
            apply(&mut input, frame);
            tick(&mut state, &input, frame.dt);
            assert_in_zone(&state);
        }
    }

    #[test]
    fn pointer_positions_are_clamped(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
        let mut state = GameState::with_seed(7);
        state.move_player_to(x, y);
        assert_in_zone(&state);
    }

    #[test]
    fn diagonal_speed_matches_axial(horizontal in prop::sample::select(vec![-1.0f32, 1.0]),
                                    vertical in prop::sample::select(vec![-1.0f32, 1.0])) {
        let mut input = InputState::new();
        input.press(if horizontal < 0.0 { bindings::LEFT[0] } else { bindings::RIGHT[0] });
        input.press(if vertical < 0.0 { bindings::UP[0] } else { bindings::DOWN[0] });
        let diagonal = movement_direction(&input);
        prop_assert!((diagonal.length() - 1.0).abs() < 1e-6);
        prop_assert_eq!(diagonal.x.signum(), horizontal);
        prop_assert_eq!(diagonal.y.signum(), vertical);
    }

    #[test]
    fn score_and_lives_change_by_the_rules(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_input(), 1..400),
    ) {
        let mut state = GameState::with_seed(seed);
        let mut input = InputState::new();
        for frame in &frames {
            let score_before = state.player.score;
            let lives_before = state.player.lives;

            apply(&mut input, frame);
            tick(&mut state, &input, frame.dt);

            let awarded: u64 = state
                .drain_events()
                .iter()
                .filter_map(|event| match event {
                    GameEvent::EnemyDestroyed { points } => Some(*points as u64),
                    _ => None,
                })
                .inspect(|points| assert!(*points == 60 || *points == 150))
                .sum();

            prop_assert!(state.player.score >= score_before);
            prop_assert_eq!(state.player.score - score_before, awarded);
            prop_assert!(lives_before - state.player.lives <= 1);
            if state.player.lives == 0 {
                prop_assert_eq!(state.phase, GamePhase::GameOver);
            }
        }
    }

    #[test]
    fn reset_restores_initial_session(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_input(), 1..200),
    ) {
        let fresh = GameState::with_seed(seed);
        let mut state = GameState::with_seed(seed);
        let mut input = InputState::new();
        for frame in &frames {
            apply(&mut input, frame);
            tick(&mut state, &input, frame.dt);
        }

        state.reset();

        prop_assert_eq!(state.phase, GamePhase::Playing);
        prop_assert_eq!(state.player.score, 0);
        prop_assert_eq!(state.player.lives, STARTING_LIVES);
        prop_assert_eq!(state.player.pos, fresh.player.pos);
        prop_assert!(state.bullets.is_empty());
        prop_assert!(state.enemy_bullets.is_empty());
        prop_assert!(state.enemies.is_empty());
        prop_assert!(state.particles.is_empty());
        prop_assert_eq!(state.difficulty.speed_multiplier, 1.0);
        prop_assert_eq!(state.difficulty.spawn_interval_ms, ENEMY_SPAWN_BASE_MS);
        prop_assert_eq!(state.spawn_timer_ms, 0.0);
        prop_assert_eq!(state.stars.len(), fresh.stars.len());
    }

    #[test]
    fn same_seed_same_session(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_input(), 1..150),
    ) {
        let mut a = GameState::with_seed(seed);
        let mut b = GameState::with_seed(seed);
        let mut input = InputState::new();
        for frame in &frames {
            apply(&mut input, frame);
            tick(&mut a, &input, frame.dt);
            tick(&mut b, &input, frame.dt);
        }
        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        prop_assert_eq!(a_json, b_json);
    }
}
