//! Mutable presentation writer components for PPTX.

pub mod shape;
pub mod shapes;
pub mod slide;

// Re-export main types
pub use shape::{ConnectorSp, FreeformSp, MutableShape, ShapeElement};
pub use shapes::SlideShapes;
pub use slide::MutableSlide;
