//! Frame loop driver
//!
//! `Game` owns the session state, the held-input set and the frame clock.
//! The host calls [`Game::frame`] once per display refresh and re-arms its own
//! frame callback afterwards; nothing here blocks or recurses.

use crate::config::GameConfig;
use crate::sim::{FrameClock, GameEvent, GameState, InputState, tick};

/// Score/lives readout
pub trait Hud {
    fn update(&mut self, score: u64, lives: u8);
}

pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn lives_label(lives: u8) -> String {
    format!("Lives: {}", lives)
}

/// Modal message layer (game over)
pub trait Overlay {
    fn show(&mut self, title: &str, message: &str);
    fn hide(&mut self);
}

/// Draws a read-only snapshot of the session
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

pub struct Game {
    pub state: GameState,
    pub input: InputState,
    clock: FrameClock,
    /// Events dispatched by the most recent step or reset
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        log::info!("Starting session with seed {}", seed);
        Self {
            state: GameState::new(seed, config),
            input: InputState::new(),
            clock: FrameClock::new(),
            events: Vec::new(),
        }
    }

    /// Push the initial HUD values
    pub fn start<F: Hud>(&mut self, frontend: &mut F) {
        frontend.update(self.state.player.score, self.state.player.lives);
    }

    /// Run one display frame: simulate, notify, render, refresh the HUD
    ///
    /// Returns the simulated delta in seconds.
    pub fn frame<F>(&mut self, now_ms: f64, frontend: &mut F) -> f32
    where
        F: Hud + Overlay + Renderer,
    {
        let dt = self.clock.advance(now_ms);
        self.step(dt, frontend);
        dt
    }

    /// Simulate `dt` seconds without consulting the clock (fixed-step hosts)
    pub fn step<F>(&mut self, dt: f32, frontend: &mut F)
    where
        F: Hud + Overlay + Renderer,
    {
        tick(&mut self.state, &self.input, dt);
        self.dispatch_events(frontend);
        frontend.render(&self.state);
        frontend.update(self.state.player.score, self.state.player.lives);
    }

    /// Restart the session (external restart trigger)
    pub fn reset<F>(&mut self, frontend: &mut F)
    where
        F: Hud + Overlay,
    {
        self.state.reset();
        self.dispatch_events(frontend);
        frontend.update(self.state.player.score, self.state.player.lives);
    }

    /// Absolute pointer positioning (arena coordinates)
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.state.move_player_to(x, y);
    }

    pub fn key_down(&mut self, symbol: &str) {
        self.input.press(symbol);
    }

    pub fn key_up(&mut self, symbol: &str) {
        self.input.release(symbol);
    }

    pub fn pointer_down(&mut self) {
        self.input.pointer_down();
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    /// Events dispatched by the most recent step or reset
    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    fn dispatch_events<F>(&mut self, frontend: &mut F)
    where
        F: Hud + Overlay,
    {
        self.events = self.state.drain_events();
        for event in &self.events {
            match *event {
                GameEvent::PlayerHit { lives } => {
                    frontend.update(self.state.player.score, lives);
                }
                GameEvent::GameOver { score } => {
                    frontend.show("Game Over", &format!("Final score: {}", score));
                }
                GameEvent::Reset => frontend.hide(),
                GameEvent::Fired | GameEvent::EnemyHit | GameEvent::EnemyDestroyed { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bullet, GamePhase};

    /// Records every collaborator call
    #[derive(Default)]
    struct Recorder {
        hud: Vec<(u64, u8)>,
        shown: Vec<(String, String)>,
        hidden: usize,
        frames: usize,
    }

    impl Hud for Recorder {
        fn update(&mut self, score: u64, lives: u8) {
            self.hud.push((score, lives));
        }
    }

    impl Overlay for Recorder {
        fn show(&mut self, title: &str, message: &str) {
            self.shown.push((title.to_string(), message.to_string()));
        }

        fn hide(&mut self) {
            self.hidden += 1;
        }
    }

    impl Renderer for Recorder {
        fn render(&mut self, _state: &GameState) {
            self.frames += 1;
        }
    }

    #[test]
    fn test_frame_renders_and_updates_hud() {
        let mut game = Game::new(1, GameConfig::default());
        let mut ui = Recorder::default();
        game.start(&mut ui);

        assert_eq!(game.frame(1000.0, &mut ui), 0.0);
        let dt = game.frame(1016.0, &mut ui);
        assert!((dt - 0.016).abs() < 1e-6);

        assert_eq!(ui.frames, 2);
        assert_eq!(ui.hud, vec![(0, 3), (0, 3), (0, 3)]);
        assert!(ui.shown.is_empty());
    }

    #[test]
    fn test_game_over_notifies_once() {
        let mut game = Game::new(1, GameConfig::default());
        let mut ui = Recorder::default();
        game.state.player.lives = 1;
        game.state.player.score = 780;
        let c = game.state.player.pos;
        game.state.enemy_bullets.push(Bullet::enemy(c + 5.0, 0.0));

        game.frame(0.0, &mut ui);
        for i in 1..10 {
            game.frame(i as f64 * 16.0, &mut ui);
        }

        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(
            ui.shown,
            vec![("Game Over".to_string(), "Final score: 780".to_string())]
        );
        assert_eq!(ui.hud.last(), Some(&(780, 0)));
    }

    #[test]
    fn test_reset_hides_overlay_and_refreshes_hud() {
        let mut game = Game::new(1, GameConfig::default());
        let mut ui = Recorder::default();
        game.state.player.lives = 0;
        game.state.player.score = 300;
        game.state.phase = GamePhase::GameOver;
        game.key_down(" ");

        game.reset(&mut ui);

        assert_eq!(game.state.phase, GamePhase::Playing);
        assert_eq!(ui.hidden, 1);
        assert_eq!(ui.hud, vec![(0, 3)]);
        assert_eq!(game.last_events(), &[GameEvent::Reset]);
        // Held keys carry over into the new session
        assert!(game.input.fire_held());
    }

    #[test]
    fn test_hud_labels() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(1230), "Score: 1230");
        assert_eq!(lives_label(3), "Lives: 3");
    }

    #[test]
    fn test_pointer_controls() {
        let mut game = Game::new(1, GameConfig::default());
        game.pointer_move(240.0, 500.0);
        assert_eq!(game.state.player.pos.x, 240.0 - 21.0);
        game.pointer_down();
        assert!(game.input.fire_held());
        game.pointer_up();
        assert!(!game.input.fire_held());
    }
}
