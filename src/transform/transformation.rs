use glam::Mat4;

use crate::traits::{SlotHandle, UniformBackend};

/// A 4x4 matrix bound to one shader-visible slot
///
/// The stored matrix and the value last uploaded to the slot may differ
/// between [`update`](Self::update) and [`push`](Self::push); the dirty flag
/// tracks exactly that window.
#[derive(Debug, Clone)]
pub struct Transformation {
    slot: SlotHandle,
    matrix: Mat4,
    dirty: bool,
}

impl Transformation {
    /// Starts dirty: nothing has been uploaded yet
    pub fn new(slot: SlotHandle, matrix: Mat4) -> Self {
        Self {
            slot,
            matrix,
            dirty: true,
        }
    }

    /// Replace the matrix without touching the backend
    pub fn update(&mut self, matrix: Mat4) {
        self.matrix = matrix;
        self.dirty = true;
    }

    /// Upload the current matrix to the bound slot
    pub fn push<B: UniformBackend + ?Sized>(&mut self, backend: &mut B) {
        backend.write_matrix4(self.slot, &self.matrix);
        self.dirty = false;
    }

    /// Upload only if the matrix changed since the last push
    pub fn push_if_dirty<B: UniformBackend + ?Sized>(&mut self, backend: &mut B) -> bool {
        let stale = self.dirty;
        if stale {
            self.push(backend);
        }
        stale
    }

    pub fn read(&self) -> Mat4 {
        self.matrix
    }

    pub fn slot(&self) -> SlotHandle {
        self.slot
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
