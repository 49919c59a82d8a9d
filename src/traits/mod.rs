pub mod backend;
pub mod clock;

pub use backend::*;
pub use clock::*;
