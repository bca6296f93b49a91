// Per-player input state management

use super::action::Action;
use std::collections::{HashMap, HashSet};

/// Held buttons and axis values for a single player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Button actions currently held
    pressed: HashSet<Action>,

    /// Latest value of each axis action
    axes: HashMap<Action, f32>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an axis (0.0 if never set)
    pub fn axis(&self, action: Action) -> f32 {
        self.axes.get(&action).copied().unwrap_or(0.0)
    }

    /// Register a button press. Returns true on the initial press.
    pub fn press(&mut self, action: Action) -> bool {
        self.pressed.insert(action)
    }

    /// Register a button release. Returns true if the action was held.
    pub fn release(&mut self, action: Action) -> bool {
        self.pressed.remove(&action)
    }

    /// Set the value of an axis; a zero value clears it
    pub fn set_axis(&mut self, action: Action, value: f32) {
        if value == 0.0 {
            self.axes.remove(&action);
        } else {
            self.axes.insert(action, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_input_creation() {
        let mut input = PlayerInput::new();
        assert!(!input.release(Action::Jump));
        assert_eq!(input.axis(Action::MoveForward), 0.0);
    }

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        assert!(input.press(Action::Sprint));
        assert!(input.release(Action::Sprint));
    }

    #[test]
    fn test_repeated_press_is_not_initial() {
        let mut input = PlayerInput::new();
        assert!(input.press(Action::Jump));
        assert!(!input.press(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.release(Action::Jump));
        assert!(!input.release(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        assert!(!input.release(Action::Jump));
    }

    #[test]
    fn test_press_after_release_is_initial_again() {
        let mut input = PlayerInput::new();
        input.press(Action::LightAttack);
        input.release(Action::LightAttack);
        assert!(input.press(Action::LightAttack));
    }

    #[test]
    fn test_axis_values_persist_until_zeroed() {
        let mut input = PlayerInput::new();
        input.set_axis(Action::MoveForward, 0.5);
        assert_eq!(input.axis(Action::MoveForward), 0.5);
        assert_eq!(input.axis(Action::MoveRight), 0.0);

        input.set_axis(Action::MoveForward, 0.0);
        assert_eq!(input.axis(Action::MoveForward), 0.0);
    }
}
