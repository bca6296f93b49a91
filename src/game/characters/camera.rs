// Follow camera on a spring arm behind the character

use glam::Vec3;

use crate::core::math::rotation_forward;

/// Control rotation shared by the character and its camera (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRotation {
    /// Heading around the up axis, kept in [0, 360)
    pub yaw: f32,
    /// Look up/down angle, kept in [-MAX_PITCH, MAX_PITCH]
    pub pitch: f32,
}

impl ControlRotation {
    /// Pitch limit so the camera never flips over the character
    pub const MAX_PITCH: f32 = 89.0;

    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut rotation = Self::default();
        rotation.add_yaw(yaw);
        rotation.add_pitch(pitch);
        rotation
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw = crate::core::math::normalize_degrees(self.yaw + delta);
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    /// View direction including pitch
    pub fn forward(&self) -> Vec3 {
        rotation_forward(self.yaw, self.pitch)
    }
}

/// Spring arm that keeps the follow camera a fixed distance behind its pivot.
///
/// The arm rotates with the control rotation; the camera itself never
/// rotates relative to the arm.
#[derive(Debug, Clone)]
pub struct CameraBoom {
    /// Distance from the pivot to the camera
    target_arm_length: f32,
    /// Offset of the pivot from the character origin
    pivot_offset: Vec3,
}

impl CameraBoom {
    /// Create a new camera boom
    pub fn new(target_arm_length: f32) -> Self {
        Self {
            target_arm_length: target_arm_length.max(0.0),
            pivot_offset: Vec3::ZERO,
        }
    }

    /// Set a pivot offset relative to the character origin
    pub fn with_pivot_offset(mut self, offset: Vec3) -> Self {
        self.pivot_offset = offset;
        self
    }

    pub fn target_arm_length(&self) -> f32 {
        self.target_arm_length
    }

    /// Set arm length (negative lengths collapse to 0)
    pub fn set_arm_length(&mut self, length: f32) {
        self.target_arm_length = length.max(0.0);
    }

    /// World location of the camera for a character at `origin`
    pub fn camera_location(&self, origin: Vec3, rotation: ControlRotation) -> Vec3 {
        let pivot = origin + self.pivot_offset;
        pivot - rotation.forward() * self.target_arm_length
    }
}

impl Default for CameraBoom {
    fn default() -> Self {
        Self::new(300.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_wraps_yaw() {
        let mut rotation = ControlRotation::default();
        rotation.add_yaw(-30.0);
        assert_relative_eq!(rotation.yaw, 330.0);
        rotation.add_yaw(45.0);
        assert_relative_eq!(rotation.yaw, 15.0);
    }

    #[test]
    fn test_rotation_clamps_pitch() {
        let mut rotation = ControlRotation::default();
        rotation.add_pitch(200.0);
        assert_eq!(rotation.pitch, ControlRotation::MAX_PITCH);
        rotation.add_pitch(-500.0);
        assert_eq!(rotation.pitch, -ControlRotation::MAX_PITCH);
    }

    #[test]
    fn test_camera_sits_behind_character() {
        let boom = CameraBoom::default();
        let location = boom.camera_location(Vec3::ZERO, ControlRotation::default());
        assert_relative_eq!(location.x, -300.0, epsilon = 1e-3);
        assert_relative_eq!(location.y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(location.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_camera_follows_yaw() {
        let boom = CameraBoom::new(100.0);
        let origin = Vec3::new(10.0, 20.0, 0.0);
        let location = boom.camera_location(origin, ControlRotation::new(90.0, 0.0));
        assert_relative_eq!(location.x, 10.0, epsilon = 1e-3);
        assert_relative_eq!(location.y, -80.0, epsilon = 1e-3);
    }

    #[test]
    fn test_camera_distance_matches_arm_length() {
        let boom = CameraBoom::new(250.0).with_pivot_offset(Vec3::new(0.0, 0.0, 60.0));
        let origin = Vec3::new(5.0, -3.0, 0.0);
        let location = boom.camera_location(origin, ControlRotation::new(200.0, -30.0));
        let pivot = origin + Vec3::new(0.0, 0.0, 60.0);
        assert_relative_eq!(location.distance(pivot), 250.0, epsilon = 1e-2);
    }

    #[test]
    fn test_negative_arm_length_collapses() {
        let mut boom = CameraBoom::default();
        boom.set_arm_length(-50.0);
        assert_eq!(boom.target_arm_length(), 0.0);
        assert_eq!(
            boom.camera_location(Vec3::ONE, ControlRotation::default()),
            Vec3::ONE
        );
    }
}
