//! Keyboard state, key bindings, and the per-tick thrust accumulator.
//!
//! Event sources (a window loop, a test, another thread) write into a shared
//! [`KeyboardState`]. Once per tick the session reduces the pressed movement
//! bindings into a [`ThrustIntent`], which the integrator consumes exactly once.

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Per-tick sum of directional intents. Opposing inputs cancel.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ThrustIntent {
    sum: Vec2,
}

impl ThrustIntent {
    pub fn push(&mut self, direction: Vec2) {
        self.sum += direction;
    }

    pub fn peek(&self) -> Vec2 {
        self.sum
    }

    /// Returns the accumulated direction and clears it.
    pub fn take(&mut self) -> Vec2 {
        std::mem::take(&mut self.sum)
    }
}

/// Movement directions in screen orientation (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Edge-triggered actions fired on key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hotkey {
    TogglePause,
}

/// Keys bound to a single action. The binding is active if any key is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding<A> {
    pub action: A,
    pub keys: Vec<String>,
}

impl<A> Binding<A> {
    pub fn new(action: A, keys: &[&str]) -> Self {
        Self {
            action,
            keys: keys.iter().map(|key| key.to_string()).collect(),
        }
    }
}

/// Movement bindings and hotkeys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub movement: Vec<Binding<Direction>>,
    pub hotkeys: Vec<Binding<Hotkey>>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            movement: vec![
                Binding::new(Direction::Up, &["w"]),
                Binding::new(Direction::Down, &["s"]),
                Binding::new(Direction::Left, &["a"]),
                Binding::new(Direction::Right, &["d"]),
            ],
            hotkeys: vec![Binding::new(Hotkey::TogglePause, &["Escape", " "])],
        }
    }
}

impl Controls {
    /// Adds one unit vector per active movement binding.
    pub fn collect_thrust(&self, keyboard: &KeyboardState, intent: &mut ThrustIntent) {
        for binding in &self.movement {
            if keyboard.any_pressed(&binding.keys) {
                intent.push(binding.action.vector());
            }
        }
    }

    /// Hotkeys that have at least one key currently held.
    pub fn active_hotkeys(&self, keyboard: &KeyboardState) -> Vec<Hotkey> {
        self.hotkeys
            .iter()
            .filter(|binding| keyboard.any_pressed(&binding.keys))
            .map(|binding| binding.action)
            .collect()
    }
}

/// Shared key-held table, cheap to clone across event sources.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    keys: Arc<RwLock<HashMap<String, bool>>>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: &str) {
        self.keys.write().insert(key.to_string(), true);
    }

    pub fn release(&self, key: &str) {
        self.keys.write().insert(key.to_string(), false);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.read().get(key).copied().unwrap_or(false)
    }

    pub fn any_pressed(&self, keys: &[String]) -> bool {
        let held = self.keys.read();
        keys.iter()
            .any(|key| held.get(key.as_str()).copied().unwrap_or(false))
    }

    pub fn release_all(&self) {
        self.keys.write().values_mut().for_each(|held| *held = false);
    }
}
