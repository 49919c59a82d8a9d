use glam::Mat4;

use super::gpu_context::GpuContext;
use crate::error::{Result, ViewerError};
use crate::traits::{ProgramHandle, SlotHandle, UniformBackend};

/// Bytes occupied by one mat4 uniform
pub const MATRIX_SLOT_SIZE: u64 = std::mem::size_of::<MatrixUniform>() as u64;

/// Column-major mat4 as laid out in a WGSL uniform block
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatrixUniform {
    pub cols: [[f32; 4]; 4],
}

impl From<Mat4> for MatrixUniform {
    fn from(matrix: Mat4) -> Self {
        Self {
            cols: matrix.to_cols_array_2d(),
        }
    }
}

struct UniformBlock {
    uniforms: Vec<String>,
    buffer: wgpu::Buffer,
}

/// Uniform backend writing into wgpu buffers
///
/// Each linked "program" gets one uniform buffer with a mat4 per declared
/// name, in declaration order. A renderer binds [`buffer`](Self::buffer)
/// and indexes it the same way; nothing in this crate binds it, so the
/// buffers only hold the latest matrices until a draw pipeline is attached.
pub struct GpuUniformBackend {
    context: GpuContext,
    blocks: Vec<UniformBlock>,
}

impl GpuUniformBackend {
    pub fn new(context: GpuContext) -> Self {
        Self {
            context,
            blocks: Vec::new(),
        }
    }

    pub fn link_program(&mut self, uniforms: &[&str]) -> ProgramHandle {
        let handle = ProgramHandle::new(self.blocks.len() as u32);
        let size = MATRIX_SLOT_SIZE * uniforms.len().max(1) as u64;

        let buffer = self.context.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Transform Uniforms"),
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.blocks.push(UniformBlock {
            uniforms: uniforms.iter().map(|name| name.to_string()).collect(),
            buffer,
        });
        handle
    }

    pub fn buffer(&self, program: ProgramHandle) -> Option<&wgpu::Buffer> {
        self.blocks
            .get(program.id() as usize)
            .map(|block| &block.buffer)
    }

    pub fn context(&self) -> &GpuContext {
        &self.context
    }
}

impl UniformBackend for GpuUniformBackend {
    fn create_uniform_slot(&mut self, program: ProgramHandle, name: &str) -> Result<SlotHandle> {
        let block = self
            .blocks
            .get(program.id() as usize)
            .ok_or(ViewerError::UnknownProgram { program })?;

        block
            .uniforms
            .iter()
            .position(|u| u == name)
            .map(|index| SlotHandle::new(program, index as u32))
            .ok_or_else(|| ViewerError::UniformNotFound {
                name: name.to_string(),
            })
    }

    fn write_matrix4(&mut self, slot: SlotHandle, matrix: &Mat4) {
        let Some(block) = self.blocks.get(slot.program().id() as usize) else {
            log::warn!("Dropping matrix write to unresolved slot {:?}", slot);
            return;
        };

        let data = MatrixUniform::from(*matrix);
        self.context.queue().write_buffer(
            &block.buffer,
            slot.index() as u64 * MATRIX_SLOT_SIZE,
            bytemuck::bytes_of(&data),
        );
    }
}
