use glam::{Mat4, Vec3};

use crate::error::{Result, ViewerError};

/// Pitch is kept strictly inside +-90 degrees so the facing never flips over the pole
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Squared-length threshold below which a basis vector counts as degenerate
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Right-handed look-at matrix, rejecting inputs that cannot form a basis
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4> {
    let direction = target - eye;
    let degenerate = !(eye.is_finite() && target.is_finite() && up.is_finite())
        || direction.length_squared() < DEGENERATE_EPSILON
        || up.length_squared() < DEGENERATE_EPSILON
        || direction
            .normalize()
            .cross(up.normalize())
            .length_squared()
            < DEGENERATE_EPSILON;

    if degenerate {
        return Err(ViewerError::InvalidCameraBasis { eye, target, up });
    }

    Ok(Mat4::look_at_rh(eye, target, up))
}

/// Returns true when `front` and `up` span a plane
pub fn spans_plane(front: Vec3, up: Vec3) -> bool {
    front.cross(up).length_squared() >= DEGENERATE_EPSILON
}

/// Unit facing direction for yaw/pitch in degrees
///
/// Yaw 0 looks down +X, yaw -90 looks down -Z; positive pitch looks up.
pub fn front_from_angles(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_degrees.to_radians(), pitch_degrees.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Inverse of [`front_from_angles`], with pitch clamped to the pole limit
pub fn angles_from_front(front: Vec3) -> (f32, f32) {
    let front = front.normalize_or_zero();
    let yaw = front.z.atan2(front.x).to_degrees();
    let pitch = front
        .y
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees()
        .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    (yaw, pitch)
}
