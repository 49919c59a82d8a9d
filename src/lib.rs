//! Model/view/projection pipeline and a first-person camera for a spinning cube.
//!
//! The rendering backend stays behind [`traits::UniformBackend`]: the crate
//! computes matrices and writes them into named uniform slots, the backend
//! owns programs, buffers and draw calls.

pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod input;
pub mod math;
pub mod scene;
pub mod traits;
pub mod transform;

pub use camera::{Camera, CameraSettings, MouseTracking};
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use input::{Button, InputState, Key, KeyAction, MoveAction};
pub use scene::{CubeScene, Spin};
pub use transform::{Model, Projection, Transformation, View};
