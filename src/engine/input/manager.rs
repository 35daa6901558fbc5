// Input manager - maps key events to held actions and a movement vector

use super::action::{default_bindings, Action, InputSource};
use glam::Vec2;
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Tracks which actions are held for the single local player
#[derive(Debug)]
pub struct InputManager {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Input sources currently held down
    held_sources: HashSet<InputSource>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    pub fn with_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            held_sources: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);
            match event.state {
                ElementState::Pressed => {
                    if !event.repeat {
                        self.press(source);
                    }
                }
                ElementState::Released => self.release(source),
            }
        }
    }

    /// Register a source going down; unbound sources are ignored
    pub fn press(&mut self, source: InputSource) {
        if self.bindings.contains_key(&source) {
            self.held_sources.insert(source);
        }
    }

    /// Register a source going up
    pub fn release(&mut self, source: InputSource) {
        self.held_sources.remove(&source);
    }

    /// Check if any source bound to `action` is held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held_sources
            .iter()
            .any(|source| self.bindings.get(source) == Some(&action))
    }

    pub fn quit_requested(&self) -> bool {
        self.is_pressed(Action::Quit)
    }

    /// Movement direction in screen coordinates (+Y down)
    ///
    /// Opposing keys cancel out. Diagonals are normalized so they are no
    /// faster than straight movement.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            direction.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            direction.x += 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            direction.y -= 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            direction.y += 1.0;
        }

        direction.normalize_or_zero()
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_sources.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
