/// Shapes read back from slide XML.
use crate::log::warn;
use crate::ooxml::drawings::xfrm::{Transform2D, parse_coordinate};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::shapes::connector::{Connector, ConnectorType};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

/// Shape type enumeration.
///
/// Indicates what kind of shape this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    /// An autoshape or freeform (p:sp)
    Shape,
    /// A picture shape (p:pic)
    Picture,
    /// A graphic frame containing a table or chart (p:graphicFrame)
    GraphicFrame,
    /// A group shape (p:grpSp)
    GroupShape,
    /// A connector shape (p:cxnSp)
    Connector,
}

impl ShapeType {
    fn from_tag(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"sp" => Some(ShapeType::Shape),
            b"pic" => Some(ShapeType::Picture),
            b"graphicFrame" => Some(ShapeType::GraphicFrame),
            b"grpSp" => Some(ShapeType::GroupShape),
            b"cxnSp" => Some(ShapeType::Connector),
            _ => None,
        }
    }
}

/// A shape parsed from `p:spTree` markup.
///
/// Holds the non-visual identity, the transform and a summary of the
/// geometry. Group shapes are reported with their own transform; their
/// children are not descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseShape {
    shape_type: ShapeType,
    shape_id: u32,
    name: String,
    xfrm: Transform2D,
    preset: Option<String>,
    path_commands: usize,
}

impl BaseShape {
    fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            shape_id: 0,
            name: String::new(),
            xfrm: Transform2D::default(),
            preset: None,
            path_commands: 0,
        }
    }

    /// Parse the first shape element found in `xml`.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        parse_shape_tree(xml)?
            .into_iter()
            .next()
            .ok_or_else(|| OoxmlError::InvalidFormat("no shape element found".to_string()))
    }

    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn transform(&self) -> &Transform2D {
        &self.xfrm
    }

    /// Get the X position (left edge) in EMUs.
    #[inline]
    pub fn left(&self) -> i64 {
        self.xfrm.x
    }

    /// Get the Y position (top edge) in EMUs.
    #[inline]
    pub fn top(&self) -> i64 {
        self.xfrm.y
    }

    /// Get the width in EMUs.
    #[inline]
    pub fn width(&self) -> i64 {
        self.xfrm.cx
    }

    /// Get the height in EMUs.
    #[inline]
    pub fn height(&self) -> i64 {
        self.xfrm.cy
    }

    /// Preset geometry name (`prst`), absent for custom geometry.
    pub fn preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    /// Whether the shape carries a custom geometry path, i.e. is a freeform.
    pub fn is_freeform(&self) -> bool {
        self.shape_type == ShapeType::Shape && self.path_commands > 0
    }

    /// Number of moveTo/lnTo/close commands across all custom paths.
    #[inline]
    pub fn path_command_count(&self) -> usize {
        self.path_commands
    }

    /// Connector geometry, if this is a connector with a known preset.
    pub fn connector_type(&self) -> Option<ConnectorType> {
        if self.shape_type != ShapeType::Connector {
            return None;
        }
        self.preset.as_deref().and_then(ConnectorType::from_preset)
    }

    /// Begin/end point view, if this is a connector.
    pub fn connector(&mut self) -> Option<Connector<'_>> {
        match self.shape_type {
            ShapeType::Connector => Some(Connector::new(&mut self.xfrm)),
            _ => None,
        }
    }

    fn read_c_nv_pr(&mut self, e: &BytesStart<'_>) -> Result<()> {
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"id" => {
                    let id = parse_coordinate(&attr.value)?;
                    self.shape_id = u32::try_from(id).map_err(|_| {
                        OoxmlError::InvalidFormat(format!("shape id out of range: {}", id))
                    })?;
                },
                b"name" => {
                    let raw = std::str::from_utf8(&attr.value)
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                    self.name = unescape(raw)
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?
                        .into_owned();
                },
                _ => {},
            }
        }
        Ok(())
    }

    fn read_prst_geom(&mut self, e: &BytesStart<'_>) -> Result<()> {
        for attr in e.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"prst" {
                let preset = String::from_utf8_lossy(&attr.value).into_owned();
                if self.shape_type == ShapeType::Connector
                    && ConnectorType::from_preset(&preset).is_none()
                {
                    warn!(shape_id = self.shape_id, preset = %preset, "unknown connector preset");
                }
                self.preset = Some(preset);
            }
        }
        Ok(())
    }
}

/// Where the parser is inside the current top-level shape.
struct ShapeCursor {
    shape: BaseShape,
    /// Element depth of the shape's own start tag.
    depth: usize,
    seen_c_nv_pr: bool,
    seen_xfrm: bool,
    in_xfrm: bool,
    /// Set once a group's `grpSpPr` is done; what follows are its children.
    past_group_props: bool,
}

/// Parse every top-level shape in a `p:spTree` (or a bare shape fragment).
///
/// Shapes come back in document order.
pub fn parse_shape_tree(xml: &[u8]) -> Result<Vec<BaseShape>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut shapes = Vec::new();
    let mut cursor: Option<ShapeCursor> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                depth += 1;
                match cursor.as_mut() {
                    None => {
                        if let Some(shape_type) = ShapeType::from_tag(e.local_name().as_ref()) {
                            cursor = Some(ShapeCursor {
                                shape: BaseShape::new(shape_type),
                                depth,
                                seen_c_nv_pr: false,
                                seen_xfrm: false,
                                in_xfrm: false,
                                past_group_props: false,
                            });
                        }
                    },
                    Some(c) => visit_element(c, e, false)?,
                }
            },
            Event::Empty(ref e) => {
                if let Some(c) = cursor.as_mut() {
                    visit_element(c, e, true)?;
                }
            },
            Event::End(ref e) => {
                if let Some(c) = cursor.as_mut() {
                    match e.local_name().as_ref() {
                        b"xfrm" => c.in_xfrm = false,
                        b"grpSpPr" if depth == c.depth + 1 => c.past_group_props = true,
                        _ => {},
                    }
                    if depth == c.depth {
                        if let Some(done) = cursor.take() {
                            shapes.push(done.shape);
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            },
            Event::Eof => break,
            _ => {},
        }
    }

    if cursor.is_some() {
        return Err(OoxmlError::InvalidFormat("unterminated shape element".to_string()));
    }
    Ok(shapes)
}

fn visit_element(c: &mut ShapeCursor, e: &BytesStart<'_>, is_empty: bool) -> Result<()> {
    // Group children carry their own identity and transforms.
    if c.shape.shape_type == ShapeType::GroupShape && c.past_group_props {
        return Ok(());
    }

    match e.local_name().as_ref() {
        b"grpSpPr" if is_empty => c.past_group_props = true,
        b"cNvPr" if !c.seen_c_nv_pr => {
            c.seen_c_nv_pr = true;
            c.shape.read_c_nv_pr(e)?;
        },
        b"xfrm" if !c.seen_xfrm => {
            c.seen_xfrm = true;
            c.in_xfrm = !is_empty;
            c.shape.xfrm.read_flips(e)?;
        },
        b"off" if c.in_xfrm => c.shape.xfrm.read_off(e)?,
        b"ext" if c.in_xfrm => c.shape.xfrm.read_ext(e)?,
        b"prstGeom" => c.shape.read_prst_geom(e)?,
        b"moveTo" | b"lnTo" | b"close" => c.shape.path_commands += 1,
        _ => {},
    }
    Ok(())
}
