use glam::Mat4;

use crate::error::Result;

/// Opaque identifier of a linked shader program owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(u32);

impl ProgramHandle {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque address of a single matrix uniform inside a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotHandle {
    program: ProgramHandle,
    index: u32,
}

impl SlotHandle {
    pub const fn new(program: ProgramHandle, index: u32) -> Self {
        Self { program, index }
    }

    pub const fn program(self) -> ProgramHandle {
        self.program
    }

    pub const fn index(self) -> u32 {
        self.index
    }
}

/// Uniform sink - the only part of the rendering backend the transforms touch
pub trait UniformBackend {
    /// Resolve a named uniform in a linked program
    ///
    /// Fails if `name` is not an active uniform of `program`.
    fn create_uniform_slot(&mut self, program: ProgramHandle, name: &str) -> Result<SlotHandle>;

    /// Upload a 4x4 matrix to a previously resolved slot
    fn write_matrix4(&mut self, slot: SlotHandle, matrix: &Mat4);
}
