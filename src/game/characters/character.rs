// Character entity and management

use glam::Vec3;

use crate::core::math::{yaw_forward, yaw_right};

use super::camera::{CameraBoom, ControlRotation};
use super::stats::CharacterStats;
use super::status::CharacterStatus;

/// Unique identifier for a character
pub type CharacterId = u32;

/// A playable third-person character.
///
/// Physics, animation and rendering belong to the host. The character only
/// turns input into intents (accumulated movement input, desired speed,
/// jump, control rotation) that the host reads back every tick.
#[derive(Debug)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display)
    pub name: String,

    /// Character properties
    pub stats: CharacterStats,
    /// Health/mana pools and combat flags
    pub status: CharacterStatus,
    /// Follow camera arm
    pub camera_boom: CameraBoom,

    /// Rotation driven by look input; movement is relative to its yaw
    control_rotation: ControlRotation,
    /// Movement input accumulated since the host last consumed it
    pending_movement: Vec3,
    /// Current max ground speed
    max_walk_speed: f32,
    /// Whether jump is held
    jump_held: bool,
}

impl Character {
    /// Create a new character
    pub fn new(id: CharacterId, name: &str, stats: CharacterStats) -> Self {
        Self {
            id,
            name: name.to_string(),
            status: CharacterStatus::from_stats(&stats),
            camera_boom: CameraBoom::new(stats.camera_arm_length),
            control_rotation: ControlRotation::default(),
            pending_movement: Vec3::ZERO,
            max_walk_speed: stats.walk_speed,
            jump_held: false,
            stats,
        }
    }

    /// Add forward/backward movement relative to the control yaw
    pub fn move_forward(&mut self, value: f32) {
        if value != 0.0 && self.status.can_act() {
            self.pending_movement += yaw_forward(self.control_rotation.yaw) * value;
        }
    }

    /// Add side to side movement relative to the control yaw
    pub fn move_right(&mut self, value: f32) {
        if value != 0.0 && self.status.can_act() {
            self.pending_movement += yaw_right(self.control_rotation.yaw) * value;
        }
    }

    /// Turn at a normalised rate (1.0 = 100% of the base turn rate)
    pub fn turn_at_rate(&mut self, rate: f32, dt: f32) {
        self.add_yaw_input(rate * self.stats.base_turn_rate * dt);
    }

    /// Look up/down at a normalised rate (1.0 = 100% of the base look up rate)
    pub fn look_up_at_rate(&mut self, rate: f32, dt: f32) {
        self.add_pitch_input(rate * self.stats.base_look_up_rate * dt);
    }

    /// Add an absolute yaw delta in degrees
    pub fn add_yaw_input(&mut self, delta: f32) {
        self.control_rotation.add_yaw(delta);
    }

    /// Add an absolute pitch delta in degrees
    pub fn add_pitch_input(&mut self, delta: f32) {
        self.control_rotation.add_pitch(delta);
    }

    /// Start sprinting
    pub fn sprint(&mut self) {
        self.max_walk_speed = self.stats.sprint_speed;
    }

    /// Stop sprinting
    pub fn stop_sprinting(&mut self) {
        self.max_walk_speed = self.stats.walk_speed;
    }

    /// Request a jump
    pub fn jump(&mut self) {
        self.jump_held = true;
    }

    /// Release the jump request
    pub fn stop_jumping(&mut self) {
        self.jump_held = false;
    }

    /// Start a light attack
    pub fn attack_light(&mut self) -> bool {
        self.status.attack_light()
    }

    /// Start a heavy attack
    pub fn attack_heavy(&mut self) -> bool {
        self.status.attack_heavy()
    }

    /// Select the combo attack
    pub fn attack_combo(&mut self) -> bool {
        self.status.attack_combo()
    }

    /// Finish the current attack
    pub fn end_attack(&mut self) {
        self.status.end_attack();
    }

    /// Take the movement input accumulated since the last call
    pub fn consume_movement_input(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending_movement)
    }

    /// Movement input accumulated so far, without consuming it
    pub fn pending_movement(&self) -> Vec3 {
        self.pending_movement
    }

    /// Desired velocity for the host movement system
    pub fn desired_velocity(&self) -> Vec3 {
        self.pending_movement.clamp_length_max(1.0) * self.max_walk_speed
    }

    pub fn control_rotation(&self) -> ControlRotation {
        self.control_rotation
    }

    pub fn max_walk_speed(&self) -> f32 {
        self.max_walk_speed
    }

    pub fn is_sprinting(&self) -> bool {
        self.max_walk_speed == self.stats.sprint_speed
    }

    pub fn is_jump_held(&self) -> bool {
        self.jump_held
    }

    /// World location of the follow camera for a character at `origin`
    pub fn camera_location(&self, origin: Vec3) -> Vec3 {
        self.camera_boom.camera_location(origin, self.control_rotation)
    }

    /// Check if character is alive
    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }
}

/// Manages all characters in the game
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<Character>,
    next_id: CharacterId,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
        }
    }

    /// Spawn a new character
    pub fn spawn_character(&mut self, name: &str, stats: CharacterStats) -> CharacterId {
        let id = self.next_id;
        self.next_id += 1;

        self.characters.push(Character::new(id, name, stats));
        log::debug!("Spawned character {} ({})", id, name);

        id
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Get a mutable character by ID
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Get all characters
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    /// Get all characters mutably
    pub fn all_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    /// Remove a character by ID
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let pos = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(pos))
    }

    /// Get the number of characters
    pub fn count(&self) -> usize {
        self.characters.len()
    }

    /// Get the number of alive characters
    pub fn alive_count(&self) -> usize {
        self.characters.iter().filter(|c| c.is_alive()).count()
    }
}
