use glam::Mat4;

use crate::error::{Result, ViewerError};
use crate::traits::{ProgramHandle, SlotHandle, UniformBackend};

#[derive(Debug, Clone)]
struct LinkedProgram {
    uniforms: Vec<String>,
    values: Vec<Option<Mat4>>,
}

/// CPU-side uniform storage
///
/// Mirrors what a linked GL program exposes: a fixed list of active matrix
/// uniforms per program, each holding the last value written to it. Used
/// when no GPU is available and as the observable backend in tests.
#[derive(Debug, Clone, Default)]
pub struct UniformTable {
    programs: Vec<LinkedProgram>,
    writes: u64,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a program whose active uniforms are `uniforms`
    pub fn link_program(&mut self, uniforms: &[&str]) -> ProgramHandle {
        let handle = ProgramHandle::new(self.programs.len() as u32);
        self.programs.push(LinkedProgram {
            uniforms: uniforms.iter().map(|name| name.to_string()).collect(),
            values: vec![None; uniforms.len()],
        });
        handle
    }

    /// Last matrix written to `slot`, if any
    pub fn value(&self, slot: SlotHandle) -> Option<Mat4> {
        self.programs
            .get(slot.program().id() as usize)?
            .values
            .get(slot.index() as usize)
            .copied()
            .flatten()
    }

    /// Last matrix written to the uniform called `name`
    pub fn value_by_name(&self, program: ProgramHandle, name: &str) -> Option<Mat4> {
        let linked = self.programs.get(program.id() as usize)?;
        let index = linked.uniforms.iter().position(|u| u == name)?;
        linked.values[index]
    }

    /// Total number of matrix uploads since creation
    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl UniformBackend for UniformTable {
    fn create_uniform_slot(&mut self, program: ProgramHandle, name: &str) -> Result<SlotHandle> {
        let linked = self
            .programs
            .get(program.id() as usize)
            .ok_or(ViewerError::UnknownProgram { program })?;

        linked
            .uniforms
            .iter()
            .position(|u| u == name)
            .map(|index| SlotHandle::new(program, index as u32))
            .ok_or_else(|| ViewerError::UniformNotFound {
                name: name.to_string(),
            })
    }

    fn write_matrix4(&mut self, slot: SlotHandle, matrix: &Mat4) {
        let target = self
            .programs
            .get_mut(slot.program().id() as usize)
            .and_then(|linked| linked.values.get_mut(slot.index() as usize));

        match target {
            Some(value) => {
                *value = Some(*matrix);
                self.writes += 1;
            }
            None => log::warn!("Dropping matrix write to unresolved slot {:?}", slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_declared_uniforms() {
        let mut table = UniformTable::new();
        let program = table.link_program(&["model", "view"]);

        let model = table.create_uniform_slot(program, "model").unwrap();
        let view = table.create_uniform_slot(program, "view").unwrap();

        assert_ne!(model, view);
        assert_eq!(table.create_uniform_slot(program, "view").unwrap(), view);
    }

    #[test]
    fn rejects_unknown_uniform() {
        let mut table = UniformTable::new();
        let program = table.link_program(&["model"]);

        let err = table.create_uniform_slot(program, "projection").unwrap_err();
        assert!(matches!(err, ViewerError::UniformNotFound { name } if name == "projection"));
    }

    #[test]
    fn rejects_unknown_program() {
        let mut table = UniformTable::new();
        let err = table
            .create_uniform_slot(ProgramHandle::new(7), "model")
            .unwrap_err();
        assert!(matches!(err, ViewerError::UnknownProgram { .. }));
    }

    #[test]
    fn records_last_write() {
        let mut table = UniformTable::new();
        let program = table.link_program(&["model"]);
        let slot = table.create_uniform_slot(program, "model").unwrap();

        assert_eq!(table.value(slot), None);

        let matrix = Mat4::from_translation(glam::Vec3::X);
        table.write_matrix4(slot, &Mat4::IDENTITY);
        table.write_matrix4(slot, &matrix);

        assert_eq!(table.value(slot), Some(matrix));
        assert_eq!(table.value_by_name(program, "model"), Some(matrix));
        assert_eq!(table.write_count(), 2);
    }

    #[test]
    fn ignores_writes_to_foreign_slots() {
        let mut table = UniformTable::new();
        table.link_program(&["model"]);

        table.write_matrix4(SlotHandle::new(ProgramHandle::new(3), 0), &Mat4::IDENTITY);
        assert_eq!(table.write_count(), 0);
    }
}
