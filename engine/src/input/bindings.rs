//! Input Bindings Module
//!
//! Maps physical keys to logical actions, allowing keys to be remapped without
//! touching camera or steering code.

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Cycle to the next camera mode (default: Tab)
    NextCameraMode,
    /// Enable or disable the chase camera spring (default: C)
    ToggleSpring,
    /// Put the chase camera back behind the ship at rest (default: R)
    ResetCamera,
    /// Steer left (default: A)
    TurnLeft,
    /// Steer right (default: D)
    TurnRight,
    /// Full throttle while held (default: W)
    Thrust,
    /// Quit (default: Escape)
    Exit,
}

/// Maps physical keys to logical actions, one key per action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - Tab = NextCameraMode
    /// - C = ToggleSpring
    /// - R = ResetCamera
    /// - A = TurnLeft
    /// - D = TurnRight
    /// - W = Thrust
    /// - Escape = Exit
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::Tab, InputAction::NextCameraMode);
        bindings.bind(KeyCode::C, InputAction::ToggleSpring);
        bindings.bind(KeyCode::R, InputAction::ResetCamera);
        bindings.bind(KeyCode::A, InputAction::TurnLeft);
        bindings.bind(KeyCode::D, InputAction::TurnRight);
        bindings.bind(KeyCode::W, InputAction::Thrust);
        bindings.bind(KeyCode::Escape, InputAction::Exit);

        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// Any previous binding of either the key or the action is removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }
}
