//! DrawingML (DML) support for OOXML documents.
//!
//! DrawingML defines the geometry shared by every shape in a presentation:
//! the `<a:xfrm>` transform that places a shape and the custom geometry
//! paths that describe a freeform outline.

pub mod geom;
pub mod xfrm;

pub use geom::{CustomGeometry, GeometryPath, PathCommand};
pub use xfrm::Transform2D;
