//! Office Open XML (OOXML) format implementation.
//!
//! Only the presentation (`pptx`) document model is implemented, together
//! with the DrawingML pieces it needs.
//!
//! - `drawings`: DrawingML transforms and custom geometry
//! - `pptx`: slide shape tree, freeform and connector shapes
//! - `error`: error types shared by both
pub mod drawings;
pub mod error;
pub mod pptx;

// Re-export error types
pub use error::{OoxmlError, Result};
