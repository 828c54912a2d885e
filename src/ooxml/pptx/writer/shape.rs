/// Shape elements and the mutable shape handle for PPTX slides.
use crate::ooxml::drawings::geom::{CustomGeometry, GeometryPath};
use crate::ooxml::drawings::xfrm::Transform2D;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::shapes::connector::{Connector, ConnectorType};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Raw freeform node (`p:sp` with custom geometry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeformSp {
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) xfrm: Transform2D,
    pub(crate) geometry: CustomGeometry,
}

impl FreeformSp {
    /// Create a freeform node at the given position and extent with an
    /// empty path list.
    pub(crate) fn new(shape_id: u32, name: String, x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self {
            shape_id,
            name,
            xfrm: Transform2D::new(x, y, cx, cy),
            geometry: CustomGeometry::new(),
        }
    }

    pub(crate) fn add_path(&mut self, w: i64, h: i64) -> &mut GeometryPath {
        self.geometry.add_path(w, h)
    }

    #[inline]
    pub fn geometry(&self) -> &CustomGeometry {
        &self.geometry
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape(self.name.as_str())
        )?;
        xml.push_str("<p:cNvSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        self.xfrm.write_xml(xml)?;
        self.geometry.write_xml(xml)?;
        xml.push_str("</p:spPr>");

        xml.push_str("<p:style>");
        xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
        xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
        xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
        xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
        xml.push_str("</p:style>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
        xml.push_str("<a:lstStyle/>");
        xml.push_str(r#"<a:p><a:pPr algn="ctr"/></a:p>"#);
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");
        Ok(())
    }
}

/// Raw connector node (`p:cxnSp`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorSp {
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) kind: ConnectorType,
    pub(crate) xfrm: Transform2D,
}

impl ConnectorSp {
    pub(crate) fn new(shape_id: u32, name: String, kind: ConnectorType, xfrm: Transform2D) -> Self {
        Self {
            shape_id,
            name,
            kind,
            xfrm,
        }
    }

    #[inline]
    pub fn kind(&self) -> ConnectorType {
        self.kind
    }

    #[inline]
    pub fn xfrm(&self) -> &Transform2D {
        &self.xfrm
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:cxnSp>");
        xml.push_str("<p:nvCxnSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape(self.name.as_str())
        )?;
        xml.push_str("<p:cNvCxnSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvCxnSpPr>");

        xml.push_str("<p:spPr>");
        self.xfrm.write_xml(xml)?;
        write!(
            xml,
            r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
            self.kind.preset()
        )?;
        xml.push_str("</p:spPr>");

        xml.push_str("<p:style>");
        xml.push_str(r#"<a:lnRef idx="2"><a:schemeClr val="accent1"/></a:lnRef>"#);
        xml.push_str(r#"<a:fillRef idx="0"><a:schemeClr val="accent1"/></a:fillRef>"#);
        xml.push_str(r#"<a:effectRef idx="1"><a:schemeClr val="accent1"/></a:effectRef>"#);
        xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="tx1"/></a:fontRef>"#);
        xml.push_str("</p:style>");
        xml.push_str("</p:cxnSp>");
        Ok(())
    }
}

/// A raw shape node before it is wrapped into a [`MutableShape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeElement {
    Freeform(FreeformSp),
    Connector(ConnectorSp),
}

impl ShapeElement {
    pub(crate) fn shape_id(&self) -> u32 {
        match self {
            ShapeElement::Freeform(sp) => sp.shape_id,
            ShapeElement::Connector(sp) => sp.shape_id,
        }
    }
}

/// A shape on a slide.
///
/// Returned by the slide's shape collection when a shape is added; gives
/// access to the common position properties and to the kind-specific view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutableShape {
    pub(crate) element: ShapeElement,
}

impl MutableShape {
    pub(crate) fn new(element: ShapeElement) -> Self {
        Self { element }
    }

    /// Get the shape ID.
    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.element.shape_id()
    }

    /// Get the shape name.
    pub fn name(&self) -> &str {
        match &self.element {
            ShapeElement::Freeform(sp) => &sp.name,
            ShapeElement::Connector(sp) => &sp.name,
        }
    }

    fn xfrm(&self) -> &Transform2D {
        match &self.element {
            ShapeElement::Freeform(sp) => &sp.xfrm,
            ShapeElement::Connector(sp) => &sp.xfrm,
        }
    }

    /// X position of the bounding rectangle in EMUs.
    #[inline]
    pub fn left(&self) -> i64 {
        self.xfrm().x
    }

    /// Y position of the bounding rectangle in EMUs.
    #[inline]
    pub fn top(&self) -> i64 {
        self.xfrm().y
    }

    /// Width in EMUs.
    #[inline]
    pub fn width(&self) -> i64 {
        self.xfrm().cx
    }

    /// Height in EMUs.
    #[inline]
    pub fn height(&self) -> i64 {
        self.xfrm().cy
    }

    pub fn is_freeform(&self) -> bool {
        matches!(self.element, ShapeElement::Freeform(_))
    }

    pub fn is_connector(&self) -> bool {
        matches!(self.element, ShapeElement::Connector(_))
    }

    /// Get the freeform node if this shape is a freeform.
    pub fn as_freeform(&self) -> Option<&FreeformSp> {
        match &self.element {
            ShapeElement::Freeform(sp) => Some(sp),
            _ => None,
        }
    }

    /// Get a connector view if this shape is a connector.
    pub fn as_connector(&mut self) -> Option<Connector<'_>> {
        match &mut self.element {
            ShapeElement::Connector(sp) => Some(Connector::new(&mut sp.xfrm)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.element {
            ShapeElement::Freeform(sp) => sp.write_xml(xml),
            ShapeElement::Connector(sp) => sp.write_xml(xml),
        }
    }
}
