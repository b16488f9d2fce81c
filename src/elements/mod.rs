//! Model elements produced by the frame import

mod frame;
mod transform;

pub use frame::{FrameElement, FrameFormulation};
pub use transform::{GeomTransform, TransformKind};
