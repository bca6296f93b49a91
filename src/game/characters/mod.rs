// Character system
//
// This module contains everything related to the playable character:
// - Health/mana pools and attack/stun gating
// - Tunable stats
// - Movement and look input turned into intents for the host
// - Spring-arm follow camera

pub mod camera;
pub mod character;
pub mod stats;
pub mod status;

// Re-export commonly used types
pub use camera::{CameraBoom, ControlRotation};
pub use character::{Character, CharacterId, CharacterManager};
pub use stats::{CharacterStats, BASE_STATS};
pub use status::{AttackKind, CharacterStatus};
