//! Model -> world -> camera -> clip matrices
//!
//! Each stage holds a [`Transformation`] by composition. Constructors resolve
//! the uniform slot and upload the initial matrix; later updates stay local
//! until pushed.

mod model;
mod projection;
mod transformation;
mod view;

pub use model::Model;
pub use projection::Projection;
pub use transformation::Transformation;
pub use view::View;
