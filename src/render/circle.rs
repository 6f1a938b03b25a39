//! Circle outline rasterizers.
//!
//! Both variants walk the second octant with [`OctantWalk`], from `(0, r)`
//! while `x <= y`, and let [`plot_octants`] reflect each step into the other
//! seven.

use crate::geometry::{Circle, Point};

use super::sink::PixelSink;

/// Circle rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleAlgorithm {
    /// Bresenham's circle, `d = 3 - 2r`.
    Bresenham,
    /// Midpoint circle, `d = 1 - r`.
    Midpoint,
}

impl CircleAlgorithm {
    /// Every variant, in output order.
    pub const ALL: [Self; 2] = [Self::Bresenham, Self::Midpoint];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bresenham => "bresenham",
            Self::Midpoint => "midpoint",
        }
    }

    /// Output file name without extension.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Bresenham => "circleBresenham",
            Self::Midpoint => "circleMidpoint",
        }
    }

    /// Rasterize `circle` with this algorithm.
    pub fn draw<S: PixelSink + ?Sized>(self, sink: &mut S, circle: Circle, color: S::Color) {
        match self {
            Self::Bresenham => draw_circle_bresenham(sink, circle.center, circle.radius, color),
            Self::Midpoint => draw_circle_midpoint(sink, circle.center, circle.radius, color),
        }
    }
}

/// Plot the eight reflections of octant offset `(x, y)` around `center`.
///
/// When `x == 0` or `x == y` some reflections coincide and the same pixel is
/// plotted more than once. Offsets are wide so that `center ± r` is exact for
/// any radius; reflections that land outside the `i32` plane are skipped.
#[inline]
pub fn plot_octants<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: Point,
    x: i64,
    y: i64,
    color: S::Color,
) {
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    for (px, py) in [
        (cx + x, cy + y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx - x, cy + y),
        (cx - x, cy - y),
        (cx - y, cy - x),
        (cx + y, cy - x),
        (cx + x, cy - y),
    ] {
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            sink.set_pixel(px, py, color);
        }
    }
}

/// The octant walk of a circle: offsets `(x, y)` from `(0, r)` while `x <= y`.
///
/// The decision variable and offsets are `i64`, so every `i32` radius walks
/// to completion without overflow.
#[derive(Debug, Clone)]
pub struct OctantWalk {
    algorithm: CircleAlgorithm,
    x: i64,
    y: i64,
    d: i64,
}

impl OctantWalk {
    /// Start the walk for `radius` with the decision rule of `algorithm`.
    #[must_use]
    pub fn new(algorithm: CircleAlgorithm, radius: i32) -> Self {
        let r = i64::from(radius);
        let d = match algorithm {
            CircleAlgorithm::Bresenham => 3 - 2 * r,
            CircleAlgorithm::Midpoint => 1 - r,
        };
        Self { algorithm, x: 0, y: r, d }
    }
}

impl Iterator for OctantWalk {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.y {
            return None;
        }
        let step = (self.x, self.y);
        let (x, y) = step;

        match self.algorithm {
            CircleAlgorithm::Bresenham => {
                if self.d <= 0 {
                    self.d += 4 * x + 6;
                } else {
                    self.d += 4 * x - 4 * y + 10;
                    self.y -= 1;
                }
            }
            CircleAlgorithm::Midpoint => {
                if self.d < 0 {
                    self.d += 2 * x + 3;
                } else {
                    self.d += 2 * x - 2 * y + 5;
                    self.y -= 1;
                }
            }
        }
        self.x += 1;
        Some(step)
    }
}

impl std::iter::FusedIterator for OctantWalk {}

/// Draw a circle outline using Bresenham's algorithm.
///
/// The decision variable starts at `3 - 2r`. A non-positive `d` keeps `y`
/// (east step, `d += 4x + 6`); otherwise `y` drops by one (south-east step,
/// `d += 4x - 4y + 10`). `x` advances on every step.
///
/// A zero radius plots the center eight times; a negative radius plots
/// nothing.
///
/// # Arguments
///
/// * `sink` - Target canvas
/// * `center` - Center pixel
/// * `radius` - Radius in pixels
/// * `color` - Outline color
pub fn draw_circle_bresenham<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radius: i32,
    color: S::Color,
) {
    for (x, y) in OctantWalk::new(CircleAlgorithm::Bresenham, radius) {
        plot_octants(sink, center, x, y, color);
    }
}

/// Draw a circle outline using the midpoint algorithm.
///
/// Same walk as [`draw_circle_bresenham`] with the decision variable halved:
/// `d = 1 - r`, east step `d += 2x + 3` while `d < 0`, south-east step
/// `d += 2x - 2y + 5` otherwise. Bresenham's `d` is always odd and equal to
/// `2d + 1` here, so both produce the same pixels in the same order.
pub fn draw_circle_midpoint<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radius: i32,
    color: S::Color,
) {
    for (x, y) in OctantWalk::new(CircleAlgorithm::Midpoint, radius) {
        plot_octants(sink, center, x, y, color);
    }
}
