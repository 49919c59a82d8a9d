use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::input::InputState;
use crate::traits::{ProgramHandle, UniformBackend};
use crate::transform::{Model, Projection};

/// Rotation that accumulates elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Vec3,
    /// Radians per second
    pub rate: f32,
    /// Accumulated angle in radians
    pub angle: f32,
}

impl Spin {
    pub fn new(axis: Vec3, rate: f32) -> Self {
        Self {
            axis,
            rate,
            angle: 0.0,
        }
    }

    pub fn advance(&mut self, delta_time: f32) -> f32 {
        self.angle += self.rate * delta_time.max(0.0);
        self.angle
    }
}

/// The spinning cube and the camera looking at it
///
/// Owns every matrix the draw call reads. The backend calls
/// [`advance`](Self::advance) once per frame after dispatching input.
pub struct CubeScene {
    model: Model,
    projection: Projection,
    camera: Camera,
    spin: Spin,
}

impl CubeScene {
    pub fn new<B: UniformBackend + ?Sized>(
        backend: &mut B,
        program: ProgramHandle,
        config: &ViewerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let names = &config.uniforms;

        let projection =
            Projection::new(backend, program, &names.projection, config.projection_params())?;
        let model = Model::new(backend, program, &names.model)?;
        let camera = Camera::new(
            backend,
            program,
            &names.view,
            config.camera_settings(),
            InputState::new(),
        )?;

        log::info!(
            "Scene ready: eye {:?}, fov {} deg, aspect {:.3}",
            camera.position(),
            config.projection.fov_y_degrees,
            config.aspect_ratio()
        );

        Ok(Self {
            model,
            projection,
            camera,
            spin: Spin::new(
                Vec3::from_array(config.model.spin_axis),
                config.model.spin_rate,
            ),
        })
    }

    /// Per-frame update: spin the model, then move the camera
    pub fn advance<B: UniformBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        delta_time: f32,
    ) -> Result<()> {
        let angle = self.spin.advance(delta_time);
        self.model.set_rotation(angle, self.spin.axis);
        self.model.push(backend);

        self.camera.update(delta_time, backend)
    }

    /// Combined clip-from-model matrix
    pub fn mvp(&self) -> Mat4 {
        self.projection.matrix() * self.camera.view().matrix() * self.model.matrix()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_accumulates_elapsed_time() {
        let mut spin = Spin::new(Vec3::Y, 2.0);
        spin.advance(0.25);
        spin.advance(0.5);
        assert!((spin.angle - 1.5).abs() < 1e-6);
    }

    #[test]
    fn spin_ignores_negative_delta() {
        let mut spin = Spin::new(Vec3::Y, 1.0);
        spin.advance(-3.0);
        assert_eq!(spin.angle, 0.0);
    }
}
