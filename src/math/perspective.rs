use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Inputs of a perspective projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveParams {
    pub fov_y_degrees: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveParams {
    pub fn new(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            Some("aspect ratio must be positive")
        } else if !(self.near.is_finite() && self.near > 0.0) {
            Some("near plane must be positive")
        } else if !(self.far.is_finite() && self.far > self.near) {
            Some("far plane must lie beyond the near plane")
        } else if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            Some("vertical field of view must be within (0, 180) degrees")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ViewerError::InvalidProjectionParameters { reason }),
            None => Ok(()),
        }
    }

    /// OpenGL-style (`[-1, 1]` clip depth) right-handed perspective matrix
    pub fn to_matrix(&self) -> Result<Mat4> {
        self.validate()?;
        Ok(Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        ))
    }
}
