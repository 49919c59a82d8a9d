use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraSettings, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVE_SPEED};
use crate::error::{Result, ViewerError};
use crate::math::PerspectiveParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            title: "Cube Viewer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            move_speed: DEFAULT_MOVE_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub spin_axis: [f32; 3],
    /// Radians per second
    pub spin_rate: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            spin_axis: [0.0, 1.0, 0.0],
            spin_rate: 1.0,
        }
    }
}

/// Shader uniform names of the three matrices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniformNames {
    pub model: String,
    pub view: String,
    pub projection: String,
}

impl Default for UniformNames {
    fn default() -> Self {
        Self {
            model: "model".to_string(),
            view: "view".to_string(),
            projection: "projection".to_string(),
        }
    }
}

impl UniformNames {
    pub fn all(&self) -> [&str; 3] {
        [
            self.model.as_str(),
            self.view.as_str(),
            self.projection.as_str(),
        ]
    }
}

/// Startup constants of the viewer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub projection: ProjectionConfig,
    pub camera: CameraConfig,
    pub model: ModelConfig,
    pub uniforms: UniformNames,
}

impl ViewerConfig {
    /// Load a JSON config; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ViewerError::InvalidConfig(format!(
                "window size {}x{} has a zero dimension",
                self.window.width, self.window.height
            )));
        }
        self.projection_params().validate()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height as f32
    }

    pub fn projection_params(&self) -> PerspectiveParams {
        PerspectiveParams::new(
            self.projection.fov_y_degrees,
            self.aspect_ratio(),
            self.projection.near,
            self.projection.far,
        )
    }

    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            position: Vec3::from_array(self.camera.eye),
            target: Vec3::from_array(self.camera.target),
            up: Vec3::from_array(self.camera.up),
            move_speed: self.camera.move_speed,
            mouse_sensitivity: self.camera.mouse_sensitivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = ViewerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.camera.move_speed, 2.5);
        assert_eq!(config.camera.mouse_sensitivity, 0.2);
        assert_eq!(config.aspect_ratio(), 1.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ViewerConfig::from_json_str(
            r#"{ "window": { "width": 800, "height": 600 }, "camera": { "eye": [3, 3, 3] } }"#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Cube Viewer");
        assert!((config.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(config.camera.eye, [3.0, 3.0, 3.0]);
        assert_eq!(config.camera.up, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_height_is_rejected() {
        let mut config = ViewerConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ViewerError::InvalidConfig(_))));
    }

    #[test]
    fn inverted_clip_planes_are_rejected() {
        let mut config = ViewerConfig::default();
        config.projection.near = 50.0;
        config.projection.far = 5.0;
        assert!(matches!(
            config.validate(),
            Err(ViewerError::InvalidProjectionParameters { .. })
        ));
    }

    #[test]
    fn pretty_json_round_trips() {
        let config = ViewerConfig::default();
        let text = config.to_json_pretty().unwrap();
        assert_eq!(ViewerConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewerConfig::from_json_str("{ window: }").is_err());
    }
}
