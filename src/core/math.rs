// Math utilities and helper functions
//
// World axes follow the host engine: X forward, Y right, Z up.

use glam::Vec3;

/// Wrap an angle in degrees into [0, 360)
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Forward unit axis for a yaw-only rotation
pub fn yaw_forward(yaw_degrees: f32) -> Vec3 {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    Vec3::new(cos, sin, 0.0)
}

/// Right unit axis for a yaw-only rotation
pub fn yaw_right(yaw_degrees: f32) -> Vec3 {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    Vec3::new(-sin, cos, 0.0)
}

/// Forward unit vector for a yaw/pitch rotation (positive pitch looks up)
pub fn rotation_forward(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw_degrees.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch_degrees.to_radians().sin_cos();
    Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
}
