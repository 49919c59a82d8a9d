use glam::Vec3;
use thiserror::Error;

use crate::traits::ProgramHandle;

/// Errors raised while building or driving the transformation pipeline
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid projection parameters: {reason}")]
    InvalidProjectionParameters { reason: &'static str },

    #[error("degenerate camera basis: eye {eye:?}, target {target:?}, up {up:?}")]
    InvalidCameraBasis { eye: Vec3, target: Vec3, up: Vec3 },

    #[error("unknown program {program:?}")]
    UnknownProgram { program: ProgramHandle },

    #[error("uniform '{name}' is not active in the program")]
    UniformNotFound { name: String },

    #[error("rendering backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
