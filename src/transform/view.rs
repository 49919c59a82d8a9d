use glam::{Mat4, Vec3};

use super::Transformation;
use crate::error::Result;
use crate::math::look_at;
use crate::traits::{ProgramHandle, UniformBackend};

/// World space -> camera space
#[derive(Debug, Clone)]
pub struct View {
    transformation: Transformation,
}

impl View {
    pub fn new<B: UniformBackend + ?Sized>(
        backend: &mut B,
        program: ProgramHandle,
        name: &str,
        eye: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Result<Self> {
        let matrix = look_at(eye, target, up)?;
        let slot = backend.create_uniform_slot(program, name)?;

        let mut transformation = Transformation::new(slot, matrix);
        transformation.push(backend);

        Ok(Self { transformation })
    }

    /// Re-aim the view; a degenerate basis leaves the previous matrix in place
    pub fn set_camera_location(&mut self, eye: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        let matrix = look_at(eye, target, up)?;
        self.transformation.update(matrix);
        Ok(())
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
