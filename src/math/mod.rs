mod basis;
mod perspective;

pub use basis::{angles_from_front, front_from_angles, look_at, spans_plane, PITCH_LIMIT_DEGREES};
pub use perspective::PerspectiveParams;
