/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;

use super::shapes::SlideShapes;

/// A mutable slide in a presentation.
#[derive(Debug, Clone, Default)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide
    pub(crate) shapes: SlideShapes,
    /// Whether the slide has been modified
    pub(crate) modified: bool,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: SlideShapes::new(),
            modified: false,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the shapes on this slide.
    pub fn shapes(&self) -> &SlideShapes {
        &self.shapes
    }

    /// Get the shapes on this slide for adding or editing.
    ///
    /// Marks the slide as modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pptx_dom::ooxml::pptx::shapes::ConnectorType;
    /// use pptx_dom::ooxml::pptx::writer::MutableSlide;
    ///
    /// # fn main() -> pptx_dom::Result<()> {
    /// let mut slide = MutableSlide::new(256);
    /// slide
    ///     .shapes_mut()
    ///     .add_connector(ConnectorType::Straight, 0, 0, 914_400, 457_200)?;
    /// assert_eq!(slide.shapes().len(), 1);
    /// assert!(slide.is_modified());
    /// # Ok(())
    /// # }
    /// ```
    pub fn shapes_mut(&mut self) -> &mut SlideShapes {
        self.modified = true;
        &mut self.shapes
    }

    /// Check if the slide has been modified.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Generate the slide part XML (`p:sld`).
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        xml.push_str("<p:cSld>");
        self.shapes.to_xml(&mut xml)?;
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
