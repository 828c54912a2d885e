/// Shapes module for PowerPoint presentations.
///
/// This module provides types for working with shapes on slides:
/// - Freeform shapes built from pen-drawing operations
/// - Connectors (lines) described by their begin and end points
/// - Shapes read back from slide XML
///
/// The design follows the python-pptx library structure.
pub mod base;
pub mod connector;
pub mod freeform;

pub use base::{BaseShape, ShapeType, parse_shape_tree};
pub use connector::{Connector, ConnectorType};
pub use freeform::{DrawingOperation, FreeformBuilder, FreeformScale};
