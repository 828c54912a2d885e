//! Connector (line) shapes.
//!
//! A connector is a line whose two end-points are stored as a bounding
//! rectangle plus flip flags. Without flips the begin point is the top-left
//! corner and the end point the bottom-right; `flipH` swaps them on the X
//! axis and `flipV` on the Y axis.

use crate::common::unit::{MAX_COORDINATE, is_coordinate};
use crate::log::debug;
use crate::ooxml::drawings::xfrm::Transform2D;
use crate::ooxml::error::{OoxmlError, Result};

/// Preset geometry of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorType {
    /// Straight line (`line`)
    Straight,
    /// Single-elbow connector (`bentConnector3`)
    Elbow,
    /// Curved connector (`curvedConnector3`)
    Curve,
}

impl ConnectorType {
    /// The `prst` attribute value for `<a:prstGeom>`.
    pub fn preset(&self) -> &'static str {
        match self {
            ConnectorType::Straight => "line",
            ConnectorType::Elbow => "bentConnector3",
            ConnectorType::Curve => "curvedConnector3",
        }
    }

    /// Map a `prst` value back to a connector type.
    ///
    /// Straight-connector aliases used by PowerPoint map to `Straight`.
    pub fn from_preset(preset: &str) -> Option<Self> {
        match preset {
            "line" | "straightConnector1" => Some(ConnectorType::Straight),
            "bentConnector3" => Some(ConnectorType::Elbow),
            "curvedConnector3" => Some(ConnectorType::Curve),
            _ => None,
        }
    }
}

/// Begin/end point view over a connector's transform.
///
/// All values are EMUs. Nothing is cached: every read derives the point from
/// the current offset, extent and flip flags.
#[derive(Debug)]
pub struct Connector<'a> {
    xfrm: &'a mut Transform2D,
}

impl<'a> Connector<'a> {
    pub(crate) fn new(xfrm: &'a mut Transform2D) -> Self {
        Self { xfrm }
    }

    /// X position of the begin point.
    pub fn begin_x(&self) -> i64 {
        let Transform2D { x, cx, flip_h, .. } = *self.xfrm;
        if flip_h { x + cx } else { x }
    }

    /// Move the begin point horizontally, keeping the end point fixed.
    ///
    /// The offset, width and `flipH` are rewritten with the smallest change
    /// that puts the begin point at `value`. When the begin point crosses
    /// over the end point the connector flips.
    ///
    /// Fails with [`OoxmlError::InvalidArgument`] when `value` or the
    /// resulting rectangle falls outside ±[`MAX_COORDINATE`]; the transform
    /// is left untouched in that case.
    pub fn set_begin_x(&mut self, value: i64) -> Result<()> {
        let out_of_range = || {
            OoxmlError::InvalidArgument(format!(
                "connector begin x {} is outside ±{} EMU",
                value, MAX_COORDINATE
            ))
        };
        if !is_coordinate(value) {
            return Err(out_of_range());
        }

        let Transform2D { x, cx, flip_h, .. } = *self.xfrm;
        let new_x = value;

        let (x, cx, flip_h) = if flip_h {
            let old_x = x.checked_add(cx).ok_or_else(out_of_range)?;
            let dx = new_x
                .checked_sub(old_x)
                .and_then(i64::checked_abs)
                .ok_or_else(out_of_range)?;
            if new_x >= old_x {
                (x, cx.checked_add(dx).ok_or_else(out_of_range)?, true)
            } else if dx <= cx {
                (x, cx - dx, true)
            } else {
                debug!(new_x, end_x = x, "connector begin crossed end, clearing flipH");
                (new_x, dx.checked_sub(cx).ok_or_else(out_of_range)?, false)
            }
        } else {
            let dx = new_x
                .checked_sub(x)
                .and_then(i64::checked_abs)
                .ok_or_else(out_of_range)?;
            if new_x <= x {
                (new_x, cx.checked_add(dx).ok_or_else(out_of_range)?, false)
            } else if dx <= cx {
                (new_x, cx - dx, false)
            } else {
                let end_x = x.checked_add(cx).ok_or_else(out_of_range)?;
                debug!(new_x, end_x, "connector begin crossed end, setting flipH");
                (end_x, dx.checked_sub(cx).ok_or_else(out_of_range)?, true)
            }
        };

        if !(is_coordinate(x) && is_coordinate(cx)) {
            return Err(out_of_range());
        }
        self.xfrm.x = x;
        self.xfrm.cx = cx;
        self.xfrm.flip_h = flip_h;
        Ok(())
    }

    /// Y position of the begin point.
    pub fn begin_y(&self) -> i64 {
        let Transform2D { y, cy, flip_v, .. } = *self.xfrm;
        if flip_v { y + cy } else { y }
    }

    /// X position of the end point.
    pub fn end_x(&self) -> i64 {
        let Transform2D { x, cx, flip_h, .. } = *self.xfrm;
        if flip_h { x } else { x + cx }
    }

    /// Y position of the end point.
    pub fn end_y(&self) -> i64 {
        let Transform2D { y, cy, flip_v, .. } = *self.xfrm;
        if flip_v { y } else { y + cy }
    }

    #[inline]
    pub fn flip_h(&self) -> bool {
        self.xfrm.flip_h
    }

    #[inline]
    pub fn flip_v(&self) -> bool {
        self.xfrm.flip_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xfrm(x: i64, cx: i64, flip_h: bool) -> Transform2D {
        Transform2D::new(x, 0, cx, 0).with_flips(flip_h, false)
    }

    #[test]
    fn test_begin_and_end_points() {
        let mut t = Transform2D::new(10, 20, 30, 40);
        let c = Connector::new(&mut t);
        assert_eq!((c.begin_x(), c.begin_y()), (10, 20));
        assert_eq!((c.end_x(), c.end_y()), (40, 60));

        let mut t = Transform2D::new(10, 20, 30, 40).with_flips(true, true);
        let c = Connector::new(&mut t);
        assert_eq!((c.begin_x(), c.begin_y()), (40, 60));
        assert_eq!((c.end_x(), c.end_y()), (10, 20));
    }

    #[test]
    fn test_set_begin_x_unflipped() {
        // (x, cx, new_x) -> (x, cx, flipH)
        let cases = [
            ((10, 20, 5), (5, 25, false)),
            ((10, 20, 10), (10, 20, false)),
            ((10, 20, 15), (15, 15, false)),
            ((10, 20, 30), (30, 0, false)),
            ((10, 20, 42), (30, 12, true)),
        ];
        for ((x, cx, new_x), expected) in cases {
            let mut t = xfrm(x, cx, false);
            Connector::new(&mut t).set_begin_x(new_x).unwrap();
            assert_eq!((t.x, t.cx, t.flip_h), expected, "x={x} cx={cx} new_x={new_x}");
        }
    }

    #[test]
    fn test_set_begin_x_flipped() {
        let cases = [
            ((10, 20, 45), (10, 35, true)),
            ((10, 20, 30), (10, 20, true)),
            ((10, 20, 25), (10, 15, true)),
            ((10, 20, 10), (10, 0, true)),
            ((10, 20, 4), (4, 6, false)),
        ];
        for ((x, cx, new_x), expected) in cases {
            let mut t = xfrm(x, cx, true);
            Connector::new(&mut t).set_begin_x(new_x).unwrap();
            assert_eq!((t.x, t.cx, t.flip_h), expected, "x={x} cx={cx} new_x={new_x}");
        }
    }

    #[test]
    fn test_set_begin_x_leaves_y_alone() {
        let mut t = Transform2D::new(0, 7, 10, 3).with_flips(false, true);
        Connector::new(&mut t).set_begin_x(50).unwrap();
        assert_eq!((t.y, t.cy, t.flip_v), (7, 3, true));
    }

    #[test]
    fn test_set_begin_x_out_of_range() {
        for value in [MAX_COORDINATE + 1, -MAX_COORDINATE - 1, i64::MIN, i64::MAX] {
            let mut t = xfrm(10, 20, false);
            let err = Connector::new(&mut t).set_begin_x(value).unwrap_err();
            assert!(matches!(err, OoxmlError::InvalidArgument(_)), "{value}");
            assert_eq!(t, xfrm(10, 20, false));
        }

        // In range on its own, but the width to the far end point is not.
        let mut t = xfrm(MAX_COORDINATE - 10, 10, true);
        let err = Connector::new(&mut t).set_begin_x(-MAX_COORDINATE).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidArgument(_)));
        assert_eq!(t, xfrm(MAX_COORDINATE - 10, 10, true));

        let mut t = xfrm(i64::MAX - 5, 10, true);
        assert!(Connector::new(&mut t).set_begin_x(0).is_err());
        assert_eq!(t.x, i64::MAX - 5);
    }

    #[test]
    fn test_connector_type_presets() {
        for kind in [ConnectorType::Straight, ConnectorType::Elbow, ConnectorType::Curve] {
            assert_eq!(ConnectorType::from_preset(kind.preset()), Some(kind));
        }
        assert_eq!(
            ConnectorType::from_preset("straightConnector1"),
            Some(ConnectorType::Straight)
        );
        assert_eq!(ConnectorType::from_preset("rect"), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn prop_set_begin_x_preserves_end(
                x in -1_000_000i64..1_000_000,
                cx in 0i64..1_000_000,
                flip_h in any::<bool>(),
                new_x in -3_000_000i64..3_000_000,
            ) {
                let mut t = xfrm(x, cx, flip_h);
                let end_before = Connector::new(&mut t).end_x();

                let mut c = Connector::new(&mut t);
                c.set_begin_x(new_x).unwrap();

                prop_assert_eq!(c.begin_x(), new_x);
                prop_assert_eq!(c.end_x(), end_before);
                prop_assert!(t.cx >= 0);
            }
        }
    }
}
