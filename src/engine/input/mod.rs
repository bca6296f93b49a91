// Input handling system
//
// The host input layer reports named actions ("LightAttack", "MoveForward", ...).
// This module turns those names into typed actions and tracks which buttons
// each player holds and the latest value of each axis.
//
// ## Architecture
//
// - `action`: Game actions, their canonical names and default bindings
// - `config`: Name -> action binding table with remapping
// - `player`: Per-player held buttons and axis values
//
// ## Usage Example
//
// ```rust
// use rpg_roguelike::engine::input::{Action, InputConfig, PlayerInput};
//
// let config = InputConfig::default();
// let mut input = PlayerInput::new();
//
// if let Some(action) = config.get_action("LightAttack") {
//     // Only the initial press triggers the action
//     assert!(input.press(action));
//     assert!(!input.press(action));
// }
// assert!(input.release(Action::LightAttack));
//
// input.set_axis(Action::MoveForward, 1.0);
// assert_eq!(input.axis(Action::MoveForward), 1.0);
// ```

pub mod action;
pub mod config;
pub mod player;

// Re-export commonly used types
pub use action::{Action, ActionParseError};
pub use config::InputConfig;
pub use player::PlayerInput;
