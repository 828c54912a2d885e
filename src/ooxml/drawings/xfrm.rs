//! `<a:xfrm>` shape transform: offset, extent and flips.

use crate::common::unit::is_coordinate;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::events::BytesStart;
use std::fmt;
use std::fmt::Write as _;

/// Position, size and mirroring of a shape in its parent's EMU space.
///
/// `x`/`y` is the top-left corner of the bounding rectangle, `cx`/`cy` its
/// extent. The flip flags mirror the shape inside that rectangle without
/// moving it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform2D {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Transform2D {
    pub fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self {
            x,
            y,
            cx,
            cy,
            flip_h: false,
            flip_v: false,
        }
    }

    pub fn with_flips(mut self, flip_h: bool, flip_v: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self
    }

    /// Write the `<a:xfrm>` element. Flip attributes are only emitted when set.
    pub fn write_xml(&self, xml: &mut String) -> fmt::Result {
        xml.push_str("<a:xfrm");
        if self.flip_h {
            xml.push_str(r#" flipH="1""#);
        }
        if self.flip_v {
            xml.push_str(r#" flipV="1""#);
        }
        xml.push('>');
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.cx, self.cy)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }

    /// Read `flipH`/`flipV` from an `<a:xfrm>` start tag.
    pub(crate) fn read_flips(&mut self, e: &BytesStart<'_>) -> Result<()> {
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"flipH" => self.flip_h = parse_bool(&attr.value)?,
                b"flipV" => self.flip_v = parse_bool(&attr.value)?,
                _ => {},
            }
        }
        Ok(())
    }

    /// Read `x`/`y` from an `<a:off>` element.
    pub(crate) fn read_off(&mut self, e: &BytesStart<'_>) -> Result<()> {
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"x" => self.x = parse_coordinate(&attr.value)?,
                b"y" => self.y = parse_coordinate(&attr.value)?,
                _ => {},
            }
        }
        Ok(())
    }

    /// Read `cx`/`cy` from an `<a:ext>` element.
    pub(crate) fn read_ext(&mut self, e: &BytesStart<'_>) -> Result<()> {
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"cx" => self.cx = parse_coordinate(&attr.value)?,
                b"cy" => self.cy = parse_coordinate(&attr.value)?,
                _ => {},
            }
        }
        Ok(())
    }
}

/// Parse an `ST_Coordinate` attribute value.
pub(crate) fn parse_coordinate(value: &[u8]) -> Result<i64> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .filter(|&v| is_coordinate(v))
        .ok_or_else(|| {
            OoxmlError::InvalidFormat(format!(
                "not a coordinate: {:?}",
                String::from_utf8_lossy(value)
            ))
        })
}

/// `xsd:boolean`: "1"/"true" or "0"/"false".
fn parse_bool(value: &[u8]) -> Result<bool> {
    match value {
        b"1" | b"true" => Ok(true),
        b"0" | b"false" => Ok(false),
        other => Err(OoxmlError::InvalidFormat(format!(
            "not a boolean: {:?}",
            String::from_utf8_lossy(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_without_flips() {
        let mut xml = String::new();
        Transform2D::new(1, 2, 3, 4).write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<a:xfrm><a:off x="1" y="2"/><a:ext cx="3" cy="4"/></a:xfrm>"#
        );
    }

    #[test]
    fn test_write_with_flips() {
        let mut xml = String::new();
        Transform2D::new(-5, 0, 10, 0)
            .with_flips(true, true)
            .write_xml(&mut xml)
            .unwrap();
        assert!(xml.starts_with(r#"<a:xfrm flipH="1" flipV="1">"#));
        assert!(xml.contains(r#"<a:off x="-5" y="0"/>"#));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool(b"1").unwrap());
        assert!(parse_bool(b"true").unwrap());
        assert!(!parse_bool(b"0").unwrap());
        assert!(parse_bool(b"yes").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(b"914400").unwrap(), 914_400);
        assert_eq!(parse_coordinate(b"-12").unwrap(), -12);
        assert!(parse_coordinate(b"1.5").is_err());
        assert_eq!(parse_coordinate(b"-27273042316900").unwrap(), -27_273_042_316_900);
        assert!(parse_coordinate(b"27273042316901").is_err());
        assert!(parse_coordinate(b"9223372036854775807").is_err());
    }
}
