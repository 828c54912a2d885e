/// Shape tree (`p:spTree`) of a slide.
use crate::common::unit::{MAX_COORDINATE, is_coordinate};
use crate::log::debug;
use crate::ooxml::drawings::xfrm::Transform2D;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::shapes::connector::ConnectorType;
use crate::ooxml::pptx::shapes::freeform::{FreeformBuilder, FreeformScale};

use super::shape::{ConnectorSp, MutableShape, ShapeElement};

/// Shape ID of the tree's own group node; shapes are numbered after it.
const SP_TREE_ID: u32 = 1;

/// The ordered collection of shapes on a slide.
///
/// Document order is z-order: later shapes are drawn on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideShapes {
    shapes: Vec<MutableShape>,
}

impl SlideShapes {
    /// Create an empty shape tree.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MutableShape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MutableShape> {
        self.shapes.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutableShape> {
        self.shapes.iter()
    }

    /// Find a shape by its ID.
    pub fn find_by_id(&self, shape_id: u32) -> Option<&MutableShape> {
        self.shapes.iter().find(|s| s.shape_id() == shape_id)
    }

    /// Find a shape by its ID for editing.
    pub fn find_by_id_mut(&mut self, shape_id: u32) -> Option<&mut MutableShape> {
        self.shapes.iter_mut().find(|s| s.shape_id() == shape_id)
    }

    /// ID for the next shape: one more than the largest ID in the tree.
    pub fn next_shape_id(&self) -> u32 {
        self.shapes
            .iter()
            .map(MutableShape::shape_id)
            .fold(SP_TREE_ID, u32::max)
            + 1
    }

    /// Start a freeform shape with the pen at `(start_x, start_y)`.
    ///
    /// `scale` converts local units to EMUs; pass one `f64` for both axes or
    /// an `(x, y)` pair. The shape is only added when the returned builder is
    /// converted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pptx_dom::ooxml::pptx::writer::SlideShapes;
    ///
    /// # fn main() -> pptx_dom::Result<()> {
    /// let mut shapes = SlideShapes::new();
    /// let mut builder = shapes.build_freeform(0.0, 0.0, (100.0, 50.0))?;
    /// builder.add_line_segments(&[(10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true)?;
    /// let shape = builder.convert_to_shape(0, 0)?;
    ///
    /// assert_eq!((shape.width(), shape.height()), (1000, 500));
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_freeform(
        &mut self,
        start_x: f64,
        start_y: f64,
        scale: impl Into<FreeformScale>,
    ) -> Result<FreeformBuilder<'_>> {
        let scale = scale.into();
        FreeformBuilder::new(self, start_x, start_y, scale.x, scale.y)
    }

    /// Add a connector running from the begin point to the end point.
    ///
    /// The bounding box spans both points; flips record which corner holds
    /// the begin point. Fails with [`OoxmlError::InvalidArgument`] when a
    /// point or the resulting extent falls outside ±[`MAX_COORDINATE`].
    pub fn add_connector(
        &mut self,
        kind: ConnectorType,
        begin_x: i64,
        begin_y: i64,
        end_x: i64,
        end_y: i64,
    ) -> Result<&mut MutableShape> {
        let in_range = [begin_x, begin_y, end_x, end_y].into_iter().all(is_coordinate)
            && is_coordinate(end_x - begin_x)
            && is_coordinate(end_y - begin_y);
        if !in_range {
            return Err(OoxmlError::InvalidArgument(format!(
                "connector ({}, {}) -> ({}, {}) is outside ±{} EMU",
                begin_x, begin_y, end_x, end_y, MAX_COORDINATE
            )));
        }

        let shape_id = self.next_shape_id();
        let flip_h = begin_x > end_x;
        let flip_v = begin_y > end_y;
        let xfrm = Transform2D::new(
            begin_x.min(end_x),
            begin_y.min(end_y),
            (end_x - begin_x).abs(),
            (end_y - begin_y).abs(),
        )
        .with_flips(flip_h, flip_v);

        debug!(shape_id, ?kind, begin_x, begin_y, end_x, end_y, "adding connector");

        let cxn_sp = ConnectorSp::new(shape_id, format!("Connector {}", shape_id - 1), kind, xfrm);
        Ok(self.shape_factory(ShapeElement::Connector(cxn_sp)))
    }

    /// Append a fully populated shape node and return its handle.
    pub(crate) fn shape_factory(&mut self, element: ShapeElement) -> &mut MutableShape {
        self.shapes.push(MutableShape::new(element));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Generate the `<p:spTree>` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr/>");
        for shape in &self.shapes {
            shape.to_xml(xml)?;
        }
        xml.push_str("</p:spTree>");
        Ok(())
    }
}
