//! PowerPoint (.pptx) presentation support.
//!
//! - [`writer`]: the mutable slide model. [`writer::SlideShapes`] is a
//!   slide's shape tree; freeforms and connectors are added through it.
//! - [`shapes`]: shape-kind logic (freeform builder, connector end-points)
//!   and the read side that parses shape XML back into [`shapes::BaseShape`].
//!
//! # Example
//!
//! ```rust
//! use pptx_dom::ooxml::pptx::shapes::ConnectorType;
//! use pptx_dom::ooxml::pptx::writer::MutableSlide;
//!
//! # fn main() -> pptx_dom::Result<()> {
//! let mut slide = MutableSlide::new(256);
//! let shapes = slide.shapes_mut();
//!
//! let mut builder = shapes.build_freeform(0.0, 0.0, 12_700.0)?;
//! builder.add_line_segments(&[(72.0, 0.0), (72.0, 72.0), (0.0, 72.0)], true)?;
//! builder.convert_to_shape(0, 0)?;
//!
//! let line = shapes.add_connector(ConnectorType::Straight, 0, 0, 914_400, 914_400)?;
//! if let Some(mut connector) = line.as_connector() {
//!     connector.set_begin_x(1_828_800)?;
//!     assert!(connector.flip_h());
//! }
//!
//! let xml = slide.to_xml()?;
//! assert!(xml.contains("<a:custGeom>"));
//! # Ok(())
//! # }
//! ```

pub mod shapes;
pub mod writer;
