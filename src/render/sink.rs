//! The pixel sink seam between rasterizers and canvases.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Anything a rasterizer can plot into.
///
/// Implementations decide what out-of-range coordinates mean; rasterizers
/// never check bounds themselves.
pub trait PixelSink {
    /// Color value passed through unchanged from the caller.
    type Color: Copy;

    /// Plot one pixel.
    fn set_pixel(&mut self, x: i32, y: i32, color: Self::Color);
}

impl PixelSink for Framebuffer {
    type Color = Rgba;

    /// Negative and out-of-range coordinates are dropped.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            Framebuffer::set_pixel(self, x, y, color);
        }
    }
}

/// Records every plotted coordinate in call order, duplicates included.
///
/// Useful for inspecting exactly what a rasterizer emits, independent of any
/// canvas size.
#[derive(Debug, Clone)]
pub struct PointTrace<C = Rgba> {
    points: Vec<Point>,
    _color: PhantomData<fn(C)>,
}

impl<C> PointTrace<C> {
    /// Create an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            _color: PhantomData,
        }
    }

    /// Every plotted point in call order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The set of distinct plotted points.
    #[must_use]
    pub fn distinct(&self) -> BTreeSet<Point> {
        self.points.iter().copied().collect()
    }

    /// Number of `set_pixel` calls recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing has been plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when `point` was plotted at least once.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }
}

impl<C> Default for PointTrace<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> PixelSink for PointTrace<C> {
    type Color = C;

    fn set_pixel(&mut self, x: i32, y: i32, _color: C) {
        self.points.push(Point::new(x, y));
    }
}
