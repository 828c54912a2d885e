//! Freeform shapes built from pen-drawing operations.
//!
//! A [`FreeformBuilder`] records pen moves in its own integer coordinate
//! space, starting from a pen position. Nothing about the final shape is
//! decided until [`FreeformBuilder::convert_to_shape`]: the bounding box,
//! position and extent are all derived from the full operation sequence at
//! that point, then every coordinate is scaled into EMUs and rounded on its
//! own.
//!
//! # Examples
//!
//! ```rust
//! use pptx_dom::ooxml::pptx::writer::SlideShapes;
//!
//! # fn main() -> pptx_dom::Result<()> {
//! let mut shapes = SlideShapes::new();
//!
//! // A triangle drawn on a 100-unit grid where one unit is 1/100 inch.
//! let mut builder = shapes.build_freeform(0.0, 100.0, 9144.0)?;
//! builder.add_line_segments(&[(50.0, 0.0), (100.0, 100.0)], true)?;
//! let shape = builder.convert_to_shape(914_400, 914_400)?;
//!
//! assert_eq!(shape.left(), 914_400);
//! assert_eq!(shape.width(), 914_400);
//! # Ok(())
//! # }
//! ```

use crate::common::unit::{MAX_COORDINATE, checked_scale_emu, is_coordinate, round_emu};
use crate::log::debug;
use crate::ooxml::drawings::geom::GeometryPath;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::writer::shape::{FreeformSp, MutableShape, ShapeElement};
use crate::ooxml::pptx::writer::shapes::SlideShapes;
use smallvec::SmallVec;
use std::iter;

/// One recorded pen action, in the builder's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingOperation {
    /// Lift the pen and put it down at the point, starting a new contour.
    MoveTo { x: i64, y: i64 },
    /// Draw a straight line from the current pen position to the point.
    LineSegment { x: i64, y: i64 },
    /// Close the current contour back to its first point.
    Close,
}

impl DrawingOperation {
    /// The target point, if this operation has one.
    #[inline]
    pub fn point(&self) -> Option<(i64, i64)> {
        match *self {
            DrawingOperation::MoveTo { x, y } | DrawingOperation::LineSegment { x, y } => {
                Some((x, y))
            },
            DrawingOperation::Close => None,
        }
    }

    #[inline]
    pub fn x(&self) -> Option<i64> {
        self.point().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<i64> {
        self.point().map(|(_, y)| y)
    }
}

/// Local-unit to EMU scale factors of a freeform.
///
/// A single `f64` scales both axes the same; an `(x, y)` pair scales each
/// axis on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeformScale {
    pub x: f64,
    pub y: f64,
}

impl From<f64> for FreeformScale {
    fn from(scale: f64) -> Self {
        Self { x: scale, y: scale }
    }
}

impl From<(f64, f64)> for FreeformScale {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Accumulates drawing operations and turns them into a freeform shape.
///
/// Obtained from [`SlideShapes::build_freeform`]. The builder borrows the
/// shape collection it will add the finished shape to; it is consumed by
/// [`convert_to_shape`](Self::convert_to_shape).
#[derive(Debug)]
pub struct FreeformBuilder<'a> {
    shapes: &'a mut SlideShapes,
    start_x: i64,
    start_y: i64,
    x_scale: f64,
    y_scale: f64,
    operations: SmallVec<[DrawingOperation; 8]>,
}

impl<'a> FreeformBuilder<'a> {
    /// Create a builder with the pen at `(start_x, start_y)`.
    ///
    /// The start point is rounded to integers and must lie within
    /// ±[`MAX_COORDINATE`]. Both scales must be finite and positive.
    pub fn new(
        shapes: &'a mut SlideShapes,
        start_x: f64,
        start_y: f64,
        x_scale: f64,
        y_scale: f64,
    ) -> Result<Self> {
        check_scale("x_scale", x_scale)?;
        check_scale("y_scale", y_scale)?;
        let (start_x, start_y) = round_point(start_x, start_y)?;
        Ok(Self {
            shapes,
            start_x,
            start_y,
            x_scale,
            y_scale,
            operations: SmallVec::new(),
        })
    }

    /// Add a straight line segment to each vertex in turn.
    ///
    /// With `close` set, a close operation follows the last segment so the
    /// contour returns to its first point. Vertices must be finite and within
    /// ±[`MAX_COORDINATE`] once rounded. They are checked before any is added;
    /// on error the builder is unchanged.
    pub fn add_line_segments(&mut self, vertices: &[(f64, f64)], close: bool) -> Result<&mut Self> {
        let points = vertices
            .iter()
            .map(|&(x, y)| round_point(x, y))
            .collect::<Result<SmallVec<[(i64, i64); 8]>>>()?;

        self.operations.extend(
            points
                .into_iter()
                .map(|(x, y)| DrawingOperation::LineSegment { x, y }),
        );
        if close {
            self.operations.push(DrawingOperation::Close);
        }
        Ok(self)
    }

    /// Add a single straight line segment ending at `(x, y)`.
    pub fn add_line_segment(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let (x, y) = round_point(x, y)?;
        self.operations.push(DrawingOperation::LineSegment { x, y });
        Ok(self)
    }

    /// Close the current contour.
    pub fn add_close(&mut self) -> &mut Self {
        self.operations.push(DrawingOperation::Close);
        self
    }

    /// Move the pen to `(x, y)` without drawing, starting a new contour.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        let (x, y) = round_point(x, y)?;
        self.operations.push(DrawingOperation::MoveTo { x, y });
        Ok(self)
    }

    /// Recorded operations in draw order.
    #[inline]
    pub fn operations(&self) -> &[DrawingOperation] {
        &self.operations
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    #[inline]
    pub fn start(&self) -> (i64, i64) {
        (self.start_x, self.start_y)
    }

    /// Add the freeform described so far to the shape collection.
    ///
    /// `origin_x`/`origin_y` is where the local point `(0, 0)` lands on the
    /// slide, in EMUs. The shape is placed at the scaled bounding box of all
    /// recorded points relative to that origin. Fails with
    /// [`OoxmlError::EmptyPath`] when nothing has been recorded, and with
    /// [`OoxmlError::InvalidArgument`] when the scaled shape does not fit the
    /// slide coordinate range. Nothing is added on failure.
    pub fn convert_to_shape(self, origin_x: i64, origin_y: i64) -> Result<&'a mut MutableShape> {
        if self.operations.is_empty() {
            return Err(OoxmlError::EmptyPath);
        }

        let mut sp = self.add_freeform_sp(origin_x, origin_y)?;
        let (cx, cy) = (sp.xfrm.cx, sp.xfrm.cy);
        let path = sp.add_path(cx, cy);
        self.write_path(path)?;

        debug!(
            shape_id = sp.shape_id,
            x = sp.xfrm.x,
            y = sp.xfrm.y,
            cx = sp.xfrm.cx,
            cy = sp.xfrm.cy,
            operations = self.operations.len(),
            "converted freeform to shape"
        );

        let shapes = self.shapes;
        Ok(shapes.shape_factory(ShapeElement::Freeform(sp)))
    }

    /// Leftmost local X over the start point and every operation with a point.
    pub fn shape_offset_x(&self) -> i64 {
        self.points().map(|(x, _)| x).fold(self.start_x, i64::min)
    }

    /// Topmost local Y over the start point and every operation with a point.
    pub fn shape_offset_y(&self) -> i64 {
        self.points().map(|(_, y)| y).fold(self.start_y, i64::min)
    }

    /// Horizontal extent in local units.
    pub fn dx(&self) -> i64 {
        let max_x = self.points().map(|(x, _)| x).fold(self.start_x, i64::max);
        max_x - self.shape_offset_x()
    }

    /// Vertical extent in local units.
    pub fn dy(&self) -> i64 {
        let max_y = self.points().map(|(_, y)| y).fold(self.start_y, i64::max);
        max_y - self.shape_offset_y()
    }

    /// Left edge relative to the conversion origin, in EMUs.
    ///
    /// Fails with [`OoxmlError::InvalidArgument`] when the scaled value leaves
    /// the coordinate range; the same holds for [`top`](Self::top),
    /// [`width`](Self::width) and [`height`](Self::height).
    pub fn left(&self) -> Result<i64> {
        scale_local(self.shape_offset_x(), self.x_scale)
    }

    /// Top edge relative to the conversion origin, in EMUs.
    pub fn top(&self) -> Result<i64> {
        scale_local(self.shape_offset_y(), self.y_scale)
    }

    /// Shape width in EMUs.
    pub fn width(&self) -> Result<i64> {
        scale_local(self.dx(), self.x_scale)
    }

    /// Shape height in EMUs.
    pub fn height(&self) -> Result<i64> {
        scale_local(self.dy(), self.y_scale)
    }

    fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        iter::once((self.start_x, self.start_y))
            .chain(self.operations.iter().filter_map(DrawingOperation::point))
    }

    fn add_freeform_sp(&self, origin_x: i64, origin_y: i64) -> Result<FreeformSp> {
        let x = place(origin_x, self.left()?)?;
        let y = place(origin_y, self.top()?)?;
        let shape_id = self.shapes.next_shape_id();
        Ok(FreeformSp::new(
            shape_id,
            format!("Freeform {}", shape_id - 1),
            x,
            y,
            self.width()?,
            self.height()?,
        ))
    }

    /// Emit the start point and every operation, in shape-local EMUs.
    fn write_path(&self, path: &mut GeometryPath) -> Result<()> {
        let offset_x = self.shape_offset_x();
        let offset_y = self.shape_offset_y();
        // Stored points are within ±MAX_COORDINATE, so the differences cannot overflow.
        let to_shape = |x: i64, y: i64| -> Result<(i64, i64)> {
            Ok((
                scale_local(x - offset_x, self.x_scale)?,
                scale_local(y - offset_y, self.y_scale)?,
            ))
        };

        let (x, y) = to_shape(self.start_x, self.start_y)?;
        path.add_move_to(x, y);

        for operation in &self.operations {
            match *operation {
                DrawingOperation::MoveTo { x, y } => {
                    let (x, y) = to_shape(x, y)?;
                    path.add_move_to(x, y);
                },
                DrawingOperation::LineSegment { x, y } => {
                    let (x, y) = to_shape(x, y)?;
                    path.add_ln_to(x, y);
                },
                DrawingOperation::Close => {
                    path.add_close();
                },
            }
        }
        Ok(())
    }
}

fn check_scale(name: &str, scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(OoxmlError::InvalidArgument(format!(
            "{} must be a finite positive number, got {}",
            name, scale
        )))
    }
}

fn round_point(x: f64, y: f64) -> Result<(i64, i64)> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(OoxmlError::InvalidArgument(format!(
            "coordinates must be finite, got ({}, {})",
            x, y
        )));
    }
    let limit = MAX_COORDINATE as f64;
    if x.abs() > limit || y.abs() > limit {
        return Err(OoxmlError::InvalidArgument(format!(
            "coordinates must be within ±{}, got ({}, {})",
            MAX_COORDINATE, x, y
        )));
    }
    Ok((round_emu(x), round_emu(y)))
}

fn scale_local(delta: i64, scale: f64) -> Result<i64> {
    checked_scale_emu(delta, scale).ok_or_else(|| {
        OoxmlError::InvalidArgument(format!(
            "{} scaled by {} is outside ±{} EMU",
            delta, scale, MAX_COORDINATE
        ))
    })
}

/// Offset a scaled edge by the conversion origin.
fn place(origin: i64, edge: i64) -> Result<i64> {
    origin
        .checked_add(edge)
        .filter(|&v| is_coordinate(v))
        .ok_or_else(|| {
            OoxmlError::InvalidArgument(format!(
                "shape edge {} + {} is outside ±{} EMU",
                origin, edge, MAX_COORDINATE
            ))
        })
}
