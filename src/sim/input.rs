//! Held-input tracking
//!
//! The host forwards raw key symbols (`KeyboardEvent.key` values); the
//! simulation only ever reads this set.

use std::collections::HashSet;

/// Key symbols bound to each action
pub mod bindings {
    pub const LEFT: [&str; 2] = ["ArrowLeft", "a"];
    pub const RIGHT: [&str; 2] = ["ArrowRight", "d"];
    pub const UP: [&str; 2] = ["ArrowUp", "w"];
    pub const DOWN: [&str; 2] = ["ArrowDown", "s"];
    /// Space bar; pointer presses synthesize it too
    pub const FIRE: &str = " ";
}

/// Set of currently held input symbols
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, symbol: &str) {
        self.held.insert(symbol.to_string());
    }

    pub fn release(&mut self, symbol: &str) {
        self.held.remove(symbol);
    }

    pub fn is_held(&self, symbol: &str) -> bool {
        self.held.contains(symbol)
    }

    /// Drop every held symbol (window lost focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn pointer_down(&mut self) {
        self.press(bindings::FIRE);
    }

    pub fn pointer_up(&mut self) {
        self.release(bindings::FIRE);
    }

    fn any_held(&self, symbols: &[&str]) -> bool {
        symbols.iter().any(|s| self.is_held(s))
    }

    /// Raw movement direction, each axis in {-1, 0, 1} (y points down)
    pub fn axis(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.any_held(&bindings::LEFT) {
            dx -= 1.0;
        }
        if self.any_held(&bindings::RIGHT) {
            dx += 1.0;
        }
        if self.any_held(&bindings::UP) {
            dy -= 1.0;
        }
        if self.any_held(&bindings::DOWN) {
            dy += 1.0;
        }
        (dx, dy)
    }

    pub fn fire_held(&self) -> bool {
        self.is_held(bindings::FIRE)
    }
}
