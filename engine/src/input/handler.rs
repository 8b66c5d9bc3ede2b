//! Input State Handler
//!
//! Tracks key state across frames so camera commands fire once per press,
//! and folds keyboard or analog steering into a normalized [`ShipControls`].

use std::collections::{HashMap, HashSet};

use super::{InputAction, KeyBindings, KeyCode};
use crate::world::ShipControls;

/// State of a key or action (pressed or released)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl KeyState {
    /// Edges accumulate until cleared, so a press and release inside one
    /// frame still reports the press.
    fn update(&mut self, pressed: bool) {
        self.just_pressed |= pressed && !self.pressed;
        self.just_released |= !pressed && self.pressed;
        self.pressed = pressed;
    }
}

/// Everything the frame loop needs from input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Cycle camera mode (one event per press)
    pub advance_mode: bool,
    /// Toggle spring behaviour (one event per press)
    pub toggle_spring: bool,
    /// Reset the chase camera (one event per press)
    pub reset_camera: bool,
    /// Quit requested
    pub exit: bool,
    /// Normalized steering
    pub controls: ShipControls,
}

/// Current input state
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: KeyBindings,
    /// Keys currently held
    pressed_keys: HashSet<KeyCode>,
    /// Action states, including edges since the last `end_frame`
    actions: HashMap<InputAction, KeyState>,
    /// Analog stick X and trigger value, if a gamepad reported this frame
    analog: Option<ShipControls>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::new())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
            actions: HashMap::new(),
            analog: None,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Handle a key event. Repeated press events for a held key do not
    /// produce new edges.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }

        if let Some(action) = self.bindings.get_action(key) {
            self.actions.entry(action).or_default().update(pressed);
        }
    }

    /// Record analog steering: stick X in [-1, 1], trigger in [0, 1].
    /// Overrides the keyboard for this frame.
    pub fn handle_analog(&mut self, stick_x: f32, trigger: f32) {
        self.analog = Some(ShipControls::new(stick_x, trigger).clamped());
    }

    /// Check if a key is currently held, bound or not
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if an action is currently held
    pub fn action_pressed(&self, action: InputAction) -> bool {
        self.actions.get(&action).is_some_and(|s| s.pressed)
    }

    /// Check if an action was pressed since the last `end_frame`
    pub fn action_just_pressed(&self, action: InputAction) -> bool {
        self.actions.get(&action).is_some_and(|s| s.just_pressed)
    }

    /// Check if an action was released since the last `end_frame`
    pub fn action_just_released(&self, action: InputAction) -> bool {
        self.actions.get(&action).is_some_and(|s| s.just_released)
    }

    /// Steering from the analog stick when present, otherwise from keys.
    pub fn controls(&self) -> ShipControls {
        if let Some(analog) = self.analog {
            return analog;
        }

        let mut turn_rate = 0.0;
        if self.action_pressed(InputAction::TurnLeft) {
            turn_rate -= 1.0;
        }
        if self.action_pressed(InputAction::TurnRight) {
            turn_rate += 1.0;
        }
        let throttle = if self.action_pressed(InputAction::Thrust) {
            1.0
        } else {
            0.0
        };
        ShipControls::new(turn_rate, throttle)
    }

    /// Snapshot of this frame's commands and steering.
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            advance_mode: self.action_just_pressed(InputAction::NextCameraMode),
            toggle_spring: self.action_just_pressed(InputAction::ToggleSpring),
            reset_camera: self.action_just_pressed(InputAction::ResetCamera),
            exit: self.action_just_pressed(InputAction::Exit),
            controls: self.controls(),
        }
    }

    /// Clear per-frame state (call at end of frame)
    pub fn end_frame(&mut self) {
        for state in self.actions.values_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
        self.analog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once_while_held() {
        let mut input = InputState::new();

        input.handle_key(KeyCode::Tab, true);
        assert!(input.frame_input().advance_mode);
        input.end_frame();

        // Still held next frame, plus a key-repeat event
        input.handle_key(KeyCode::Tab, true);
        assert!(!input.frame_input().advance_mode);
        input.end_frame();
        assert!(!input.frame_input().advance_mode);

        input.handle_key(KeyCode::Tab, false);
        assert!(input.action_just_released(InputAction::NextCameraMode));
        input.end_frame();

        input.handle_key(KeyCode::Tab, true);
        assert!(input.frame_input().advance_mode);
    }

    #[test]
    fn test_key_repeat_within_frame_keeps_edge() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::C, true);
        input.handle_key(KeyCode::C, true);
        assert!(input.frame_input().toggle_spring);
    }

    #[test]
    fn test_keyboard_steering() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::D, true);
        input.handle_key(KeyCode::W, true);
        assert_eq!(input.controls(), ShipControls::new(1.0, 1.0));

        input.handle_key(KeyCode::A, true);
        assert_eq!(input.controls(), ShipControls::new(0.0, 1.0));
    }

    #[test]
    fn test_analog_overrides_keys_for_one_frame() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        input.handle_analog(-0.5, 3.0);
        assert_eq!(input.controls(), ShipControls::new(-0.5, 1.0));

        input.end_frame();
        assert_eq!(input.controls(), ShipControls::new(0.0, 1.0));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Unknown, true);
        assert!(input.key_pressed(KeyCode::Unknown));
        assert_eq!(input.frame_input(), FrameInput::default());
    }
}
