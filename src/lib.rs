// Character status, combat gating and movement control for a third-person
// action roguelike. Physics, animation and rendering stay with the host
// engine; this crate owns the gameplay state it drives.

pub mod config;
pub mod core;
pub mod engine;
pub mod game;

pub use config::{ConfigError, GameConfig};
pub use game::characters::{AttackKind, Character, CharacterStats, CharacterStatus};
pub use game::{CombatEffect, GameEvent, Simulation};
