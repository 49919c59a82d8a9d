use glam::{Mat4, Vec3};

use super::Transformation;
use crate::error::Result;
use crate::traits::{ProgramHandle, UniformBackend};

/// Model space -> world space
#[derive(Debug, Clone)]
pub struct Model {
    transformation: Transformation,
}

impl Model {
    /// Identity model matrix, uploaded immediately
    pub fn new<B: UniformBackend + ?Sized>(
        backend: &mut B,
        program: ProgramHandle,
        name: &str,
    ) -> Result<Self> {
        let slot = backend.create_uniform_slot(program, name)?;

        let mut transformation = Transformation::new(slot, Mat4::IDENTITY);
        transformation.push(backend);

        Ok(Self { transformation })
    }

    pub fn update(&mut self, matrix: Mat4) {
        self.transformation.update(matrix);
    }

    /// Replace the matrix with a rotation of `angle` radians about `axis`
    pub fn set_rotation(&mut self, angle: f32, axis: Vec3) {
        let axis = axis.try_normalize().unwrap_or(Vec3::Y);
        self.transformation.update(Mat4::from_axis_angle(axis, angle));
    }

    pub fn matrix(&self) -> Mat4 {
        self.transformation.read()
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn is_dirty(&self) -> bool {
        self.transformation.is_dirty()
    }

    pub fn push<B: UniformBackend + ?Sized>(&mut self, backend: &mut B) {
        self.transformation.push(backend);
    }
}
