// Character stats - tunable constants for the playable character

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Tunable character properties
///
/// Units follow the host engine: distances in centimetres, speeds in cm/s,
/// rotation rates in degrees per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    // Pools
    /// Maximum health points
    pub max_health: f32,
    /// Maximum mana points
    pub max_mana: f32,

    // Camera input
    /// Base turn rate for rate-based yaw input (deg/s)
    pub base_turn_rate: f32,
    /// Base look up/down rate for rate-based pitch input (deg/s)
    pub base_look_up_rate: f32,

    // Movement
    /// Max ground speed while walking
    pub walk_speed: f32,
    /// Max ground speed while sprinting
    pub sprint_speed: f32,
    /// Initial vertical velocity of a jump
    pub jump_z_velocity: f32,
    /// Air control multiplier (0.0 = no air control, 1.0 = full control)
    pub air_control: f32,
    /// Yaw rotation rate when turning toward the desired rotation (deg/s)
    pub rotation_rate_yaw: f32,

    // Dimensions (for the collision capsule)
    pub capsule_radius: f32,
    pub capsule_half_height: f32,

    /// Distance the follow camera sits behind the character
    pub camera_arm_length: f32,
}

/// Stats of the default third-person character
pub const BASE_STATS: CharacterStats = CharacterStats {
    max_health: 100.0,
    max_mana: 100.0,

    base_turn_rate: 45.0,
    base_look_up_rate: 45.0,

    walk_speed: 600.0,
    sprint_speed: 900.0,
    jump_z_velocity: 600.0,
    air_control: 0.2,
    rotation_rate_yaw: 540.0,

    capsule_radius: 42.0,
    capsule_half_height: 96.0,

    camera_arm_length: 300.0,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Get the standard character stats
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_health", self.max_health),
            ("max_mana", self.max_mana),
            ("base_turn_rate", self.base_turn_rate),
            ("base_look_up_rate", self.base_look_up_rate),
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("capsule_radius", self.capsule_radius),
            ("capsule_half_height", self.capsule_half_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidStat { field, value });
            }
        }

        let non_negative = [
            ("jump_z_velocity", self.jump_z_velocity),
            ("rotation_rate_yaw", self.rotation_rate_yaw),
            ("camera_arm_length", self.camera_arm_length),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidStat { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.air_control) {
            return Err(ConfigError::InvalidStat {
                field: "air_control",
                value: self.air_control,
            });
        }

        Ok(())
    }
}
