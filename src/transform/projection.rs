use glam::Mat4;

use super::Transformation;
use crate::error::Result;
use crate::math::PerspectiveParams;
use crate::traits::{ProgramHandle, UniformBackend};

/// Camera space -> clip space
///
/// Built once; window resizes are not tracked.
#[derive(Debug, Clone)]
pub struct Projection {
    transformation: Transformation,
    params: PerspectiveParams,
}

impl Projection {
    pub fn new<B: UniformBackend + ?Sized>(
        backend: &mut B,
        program: ProgramHandle,
        name: &str,
        params: PerspectiveParams,
    ) -> Result<Self> {
        let matrix = params.to_matrix()?;
        let slot = backend.create_uniform_slot(program, name)?;

        let mut transformation = Transformation::new(slot, matrix);
        transformation.push(backend);

        Ok(Self {
            transformation,
            params,
        })
    }

    pub fn params(&self) -> PerspectiveParams {
        self.params
    }

    pub fn matrix(&self) -> Mat4 {
        self.transformation.read()
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn push<B: UniformBackend + ?Sized>(&mut self, backend: &mut B) {
        self.transformation.push(backend);
    }
}
