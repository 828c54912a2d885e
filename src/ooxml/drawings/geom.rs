//! Custom geometry (`<a:custGeom>`) for freeform shapes.
//!
//! Only the path list is modelled; the adjust-value, guide, handle and
//! connection-site lists are always written empty and the text rectangle
//! covers the whole shape.

use std::fmt;
use std::fmt::Write as _;

/// A single command inside an `<a:path>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    /// `<a:moveTo>`: lift the pen and start a new contour at the point.
    MoveTo { x: i64, y: i64 },
    /// `<a:lnTo>`: straight line from the current point.
    LineTo { x: i64, y: i64 },
    /// `<a:close/>`: connect back to the start of the current contour.
    Close,
}

impl PathCommand {
    fn write_xml(&self, xml: &mut String) -> fmt::Result {
        match *self {
            PathCommand::MoveTo { x, y } => {
                write!(xml, r#"<a:moveTo><a:pt x="{}" y="{}"/></a:moveTo>"#, x, y)
            },
            PathCommand::LineTo { x, y } => {
                write!(xml, r#"<a:lnTo><a:pt x="{}" y="{}"/></a:lnTo>"#, x, y)
            },
            PathCommand::Close => {
                xml.push_str("<a:close/>");
                Ok(())
            },
        }
    }
}

/// An `<a:path>` with its own coordinate space of `w` by `h`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryPath {
    pub w: i64,
    pub h: i64,
    commands: Vec<PathCommand>,
}

impl GeometryPath {
    pub fn new(w: i64, h: i64) -> Self {
        Self {
            w,
            h,
            commands: Vec::new(),
        }
    }

    pub fn add_move_to(&mut self, x: i64, y: i64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn add_ln_to(&mut self, x: i64, y: i64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    pub fn add_close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    fn write_xml(&self, xml: &mut String) -> fmt::Result {
        write!(xml, r#"<a:path w="{}" h="{}">"#, self.w, self.h)?;
        for command in &self.commands {
            command.write_xml(xml)?;
        }
        xml.push_str("</a:path>");
        Ok(())
    }
}

/// The `<a:custGeom>` element of a freeform shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomGeometry {
    paths: Vec<GeometryPath>,
}

impl CustomGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty path and return it for population.
    pub fn add_path(&mut self, w: i64, h: i64) -> &mut GeometryPath {
        self.paths.push(GeometryPath::new(w, h));
        let last = self.paths.len() - 1;
        &mut self.paths[last]
    }

    #[inline]
    pub fn paths(&self) -> &[GeometryPath] {
        &self.paths
    }

    pub fn write_xml(&self, xml: &mut String) -> fmt::Result {
        xml.push_str("<a:custGeom>");
        xml.push_str("<a:avLst/><a:gdLst/><a:ahLst/><a:cxnLst/>");
        xml.push_str(r#"<a:rect l="l" t="t" r="r" b="b"/>"#);
        xml.push_str("<a:pathLst>");
        for path in &self.paths {
            path.write_xml(xml)?;
        }
        xml.push_str("</a:pathLst>");
        xml.push_str("</a:custGeom>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_commands_keep_order() {
        let mut geom = CustomGeometry::new();
        geom.add_path(40, 20)
            .add_move_to(0, 0)
            .add_ln_to(40, 0)
            .add_ln_to(40, 20)
            .add_close();

        let path = &geom.paths()[0];
        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.commands()[0], PathCommand::MoveTo { x: 0, y: 0 });
        assert_eq!(path.commands()[3], PathCommand::Close);
    }

    #[test]
    fn test_custom_geometry_xml() {
        let mut geom = CustomGeometry::new();
        geom.add_path(10, 5).add_move_to(0, 5).add_ln_to(10, 0).add_close();

        let mut xml = String::new();
        geom.write_xml(&mut xml).unwrap();

        assert!(xml.starts_with("<a:custGeom><a:avLst/><a:gdLst/><a:ahLst/><a:cxnLst/>"));
        assert!(xml.contains(
            r#"<a:pathLst><a:path w="10" h="5"><a:moveTo><a:pt x="0" y="5"/></a:moveTo><a:lnTo><a:pt x="10" y="0"/></a:lnTo><a:close/></a:path></a:pathLst>"#
        ));
        assert!(xml.ends_with("</a:custGeom>"));
    }
}
