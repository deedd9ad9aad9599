//! Keyboard, touch-button and swipe input mapping
//!
//! The host forwards raw events; this module tracks what is held and turns it
//! into a [`TickInput`] snapshot once per frame. Debouncing of held keys is
//! left to the simulation.

use std::collections::HashSet;

use crate::consts::SWIPE_THRESHOLD;
use crate::sim::{SteerDirection, TickInput, swipe_direction};

/// Continuous (held) actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SteerLeft,
    SteerRight,
    Brake,
}

/// One-shot lifecycle commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    TogglePause,
}

/// Held action for a key name (case-insensitive, browser `KeyboardEvent.key`)
pub fn action_for_key(key: &str) -> Option<Action> {
    match key.to_lowercase().as_str() {
        "arrowleft" | "a" => Some(Action::SteerLeft),
        "arrowright" | "d" => Some(Action::SteerRight),
        " " | "space" | "spacebar" => Some(Action::Brake),
        _ => None,
    }
}

/// Held action for an on-screen button (`data-action` name)
pub fn action_for_button(name: &str) -> Option<Action> {
    match name {
        "left" => Some(Action::SteerLeft),
        "right" => Some(Action::SteerRight),
        "brake" => Some(Action::Brake),
        _ => None,
    }
}

/// Lifecycle command for a key name, fired on key-down
pub fn command_for_key(key: &str) -> Option<Command> {
    match key.to_lowercase().as_str() {
        "r" => Some(Command::Restart),
        "p" | "escape" => Some(Command::TogglePause),
        _ => None,
    }
}

/// Accumulates raw input events between frames
#[derive(Debug, Clone)]
pub struct InputMapper {
    held_keys: HashSet<String>,
    held_buttons: HashSet<Action>,
    touch_start_x: Option<f32>,
    swipe_threshold: f32,
    pending_left: bool,
    pending_right: bool,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl InputMapper {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            held_keys: HashSet::new(),
            held_buttons: HashSet::new(),
            touch_start_x: None,
            swipe_threshold,
            pending_left: false,
            pending_right: false,
        }
    }

    /// Key pressed. Returns a command for the host to run, if any.
    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        let key = key.to_lowercase();
        let command = command_for_key(&key);
        self.held_keys.insert(key);
        command
    }

    pub fn key_up(&mut self, key: &str) {
        self.held_keys.remove(&key.to_lowercase());
    }

    /// On-screen steering/brake button pressed
    pub fn button_down(&mut self, action: Action) {
        self.held_buttons.insert(action);
    }

    pub fn button_up(&mut self, action: Action) {
        self.held_buttons.remove(&action);
    }

    /// Single finger touched the play field
    pub fn touch_start(&mut self, x: f32) {
        self.touch_start_x = Some(x);
    }

    /// Finger lifted; a long enough horizontal drag queues one lane change
    pub fn touch_end(&mut self, x: f32) {
        let Some(start) = self.touch_start_x.take() else {
            return;
        };
        match swipe_direction(x - start, self.swipe_threshold) {
            Some(SteerDirection::Left) => self.pending_left = true,
            Some(SteerDirection::Right) => self.pending_right = true,
            None => {}
        }
    }

    /// Whether `action` is currently held by any key or button
    pub fn is_held(&self, action: Action) -> bool {
        self.held_buttons.contains(&action)
            || self
                .held_keys
                .iter()
                .any(|k| action_for_key(k) == Some(action))
    }

    /// Build this frame's input and consume queued swipes
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            steer_left: self.is_held(Action::SteerLeft),
            steer_right: self.is_held(Action::SteerRight),
            brake: self.is_held(Action::Brake),
            steer_left_triggered: self.pending_left,
            steer_right_triggered: self.pending_right,
            idle_mode: false,
        };
        self.pending_left = false;
        self.pending_right = false;
        input
    }

    /// Forget everything held (window blur, tab hidden)
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.held_buttons.clear();
        self.touch_start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key("ArrowLeft"), Some(Action::SteerLeft));
        assert_eq!(action_for_key("a"), Some(Action::SteerLeft));
        assert_eq!(action_for_key("D"), Some(Action::SteerRight));
        assert_eq!(action_for_key(" "), Some(Action::Brake));
        assert_eq!(action_for_key("x"), None);
        assert_eq!(command_for_key("R"), Some(Command::Restart));
        assert_eq!(command_for_key("Escape"), Some(Command::TogglePause));
        assert_eq!(command_for_key("a"), None);
        assert_eq!(action_for_button("brake"), Some(Action::Brake));
        assert_eq!(action_for_button("Left"), None);
    }

    #[test]
    fn test_held_keys_in_snapshot() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("ArrowLeft"), None);
        input.key_down(" ");
        let snap = input.snapshot();
        assert!(snap.steer_left && snap.brake && !snap.steer_right);

        // Held state persists across frames until key-up
        assert!(input.snapshot().steer_left);
        input.key_up("arrowleft");
        assert!(!input.snapshot().steer_left);
    }

    #[test]
    fn test_either_binding_holds() {
        let mut input = InputMapper::default();
        input.key_down("a");
        input.key_down("ArrowLeft");
        input.key_up("a");
        assert!(input.snapshot().steer_left);
    }

    #[test]
    fn test_restart_key_returns_command() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("r"), Some(Command::Restart));
    }

    #[test]
    fn test_swipe_queues_single_trigger() {
        let mut input = InputMapper::default();
        input.touch_start(200.0);
        input.touch_end(120.0);
        let snap = input.snapshot();
        assert!(snap.steer_left_triggered);
        assert!(!snap.steer_right_triggered);
        // Consumed
        assert!(!input.snapshot().steer_left_triggered);

        // Short drag does nothing
        input.touch_start(200.0);
        input.touch_end(220.0);
        assert!(!input.snapshot().steer_right_triggered);

        // Touch end without a start is ignored
        input.touch_end(500.0);
        assert!(!input.snapshot().steer_right_triggered);
    }

    #[test]
    fn test_buttons_and_release_all() {
        let mut input = InputMapper::default();
        input.button_down(Action::SteerRight);
        assert!(input.snapshot().steer_right);
        input.button_up(Action::SteerRight);
        assert!(!input.snapshot().steer_right);

        input.button_down(Action::Brake);
        input.key_down("d");
        input.release_all();
        let snap = input.snapshot();
        assert!(!snap.brake && !snap.steer_right);
    }
}
