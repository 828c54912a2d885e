//! pptx-dom - a document object model for PowerPoint presentations
//!
//! This library builds and reads the shape tree of slides in the Office
//! Open XML presentation format (.pptx).
//!
//! # Features
//!
//! - **Freeform shapes**: draw with pen operations in any local coordinate
//!   space and scale the result into slide units
//! - **Connectors**: lines stored as a rectangle plus flips, exposed as
//!   begin and end points
//! - **XML**: write `p:sld`/`p:spTree` markup and read shapes back
//!
//! All positions and sizes are English Metric Units (EMU), 914,400 per inch.
//!
//! # Example - Drawing a freeform
//!
//! ```rust
//! use pptx_dom::common::unit::inches_to_emu;
//! use pptx_dom::ooxml::pptx::writer::SlideShapes;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shapes = SlideShapes::new();
//!
//! // Local units are hundredths of an inch.
//! let mut builder = shapes.build_freeform(0.0, 0.0, 9144.0)?;
//! builder.add_line_segments(&[(200.0, 0.0), (100.0, 150.0)], true)?;
//! let shape = builder.convert_to_shape(inches_to_emu(1.0), inches_to_emu(1.0))?;
//!
//! assert_eq!(shape.width(), inches_to_emu(2.0));
//! assert_eq!(shape.height(), inches_to_emu(1.5));
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo features
//!
//! - `tracing`: emit debug events through the `tracing` crate

pub mod common;
pub mod log;

/// OOXML (Office Open XML) document model
///
/// This module contains the DrawingML geometry types and the presentation
/// shape tree.
pub mod ooxml;

pub use ooxml::error::{OoxmlError as Error, Result};
