pub mod clock;
pub mod gpu_context;
pub mod gpu_uniforms;
pub mod input_adapter;
pub mod uniform_table;

pub use clock::Clock;
pub use gpu_context::GpuContext;
pub use gpu_uniforms::{GpuUniformBackend, MatrixUniform};
pub use input_adapter::InputEvent;
pub use uniform_table::UniformTable;
