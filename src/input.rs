use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::camera::CameraMovement;

/// What a key does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(CameraMovement),
    ToggleProjection,
    Exit,
}

/// Maps a physical key to its scene action.
pub fn action_for_key(key: KeyCode) -> Option<KeyAction> {
    let action = match key {
        KeyCode::KeyW => KeyAction::Move(CameraMovement::Forward),
        KeyCode::KeyS => KeyAction::Move(CameraMovement::Backward),
        KeyCode::KeyA => KeyAction::Move(CameraMovement::Left),
        KeyCode::KeyD => KeyAction::Move(CameraMovement::Right),
        KeyCode::KeyE => KeyAction::Move(CameraMovement::Up),
        KeyCode::KeyQ => KeyAction::Move(CameraMovement::Down),
        KeyCode::KeyK => KeyAction::ToggleProjection,
        KeyCode::Escape => KeyAction::Exit,
        _ => return None,
    };
    Some(action)
}

/// Keyboard and mouse state collected between frames.
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    mouse_delta: Vec2,
    scroll_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key_down(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn set_key_up(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Movement directions whose keys are currently held.
    pub fn held_movements(&self) -> impl Iterator<Item = CameraMovement> + '_ {
        self.keys.iter().filter_map(|key| match action_for_key(*key) {
            Some(KeyAction::Move(direction)) => Some(direction),
            _ => None,
        })
    }

    /// Accumulates raw pointer motion. Screen `y` grows downwards.
    pub fn add_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse_delta += Vec2::new(dx as f32, dy as f32);
    }

    pub fn add_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
        };
    }

    /// Returns and clears the pointer motion gathered since the last call.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    /// Drops held keys, used when the window loses focus.
    pub fn clear_keys(&mut self) {
        self.keys.clear();
    }
}

const PIXELS_PER_LINE: f64 = 20.0;

/// Log line for a mouse button transition.
pub fn describe_mouse_button(button: MouseButton, state: ElementState) -> &'static str {
    match (button, state) {
        (MouseButton::Left, ElementState::Pressed) => "Left mouse button pressed",
        (MouseButton::Left, ElementState::Released) => "Left mouse button released",
        (MouseButton::Middle, ElementState::Pressed) => "Middle mouse button pressed",
        (MouseButton::Middle, ElementState::Released) => "Middle mouse button released",
        (MouseButton::Right, ElementState::Pressed) => "Right mouse button pressed",
        (MouseButton::Right, ElementState::Released) => "Right mouse button released",
        _ => "Unhandled mouse button event",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn maps_movement_and_control_keys() {
        assert_eq!(
            action_for_key(KeyCode::KeyW),
            Some(KeyAction::Move(CameraMovement::Forward))
        );
        assert_eq!(
            action_for_key(KeyCode::KeyQ),
            Some(KeyAction::Move(CameraMovement::Down))
        );
        assert_eq!(action_for_key(KeyCode::KeyK), Some(KeyAction::ToggleProjection));
        assert_eq!(action_for_key(KeyCode::Escape), Some(KeyAction::Exit));
        assert_eq!(action_for_key(KeyCode::Space), None);
    }

    #[test]
    fn input_state_tracks_keys() {
        let mut state = InputState::new();
        state.set_key_down(KeyCode::KeyA);
        state.set_key_down(KeyCode::KeyK);
        assert!(state.is_key_down(KeyCode::KeyA));

        let held: Vec<_> = state.held_movements().collect();
        assert_eq!(held, vec![CameraMovement::Left]);

        state.set_key_up(KeyCode::KeyA);
        assert!(!state.is_key_down(KeyCode::KeyA));
        assert_eq!(state.held_movements().count(), 0);
    }

    #[test]
    fn deltas_accumulate_until_taken() {
        let mut state = InputState::new();
        state.add_mouse_motion(3.0, -1.0);
        state.add_mouse_motion(2.0, 4.0);
        assert_eq!(state.take_mouse_delta(), Vec2::new(5.0, 3.0));
        assert_eq!(state.take_mouse_delta(), Vec2::ZERO);

        state.add_scroll(MouseScrollDelta::LineDelta(0.0, 2.0));
        state.add_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -20.0)));
        assert_eq!(state.take_scroll(), 1.0);
        assert_eq!(state.take_scroll(), 0.0);
    }

    #[test]
    fn mouse_buttons_are_described() {
        assert_eq!(
            describe_mouse_button(MouseButton::Left, ElementState::Pressed),
            "Left mouse button pressed"
        );
        assert_eq!(
            describe_mouse_button(MouseButton::Right, ElementState::Released),
            "Right mouse button released"
        );
        assert_eq!(
            describe_mouse_button(MouseButton::Back, ElementState::Pressed),
            "Unhandled mouse button event"
        );
    }
}
