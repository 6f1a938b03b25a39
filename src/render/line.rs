//! Line segment rasterizers.
//!
//! Both rasterizers include both endpoints in their output. The final
//! endpoint is always plotted explicitly after the stepping loop, whose
//! condition excludes it.

use crate::geometry::{Point, Segment};

use super::sink::PixelSink;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Bresenham's integer line.
    Bresenham,
    /// Digital differential analyzer.
    Dda,
}

impl LineAlgorithm {
    /// Every variant, in output order.
    pub const ALL: [Self; 2] = [Self::Bresenham, Self::Dda];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bresenham => "bresenham",
            Self::Dda => "dda",
        }
    }

    /// Output file name without extension.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        self.name()
    }

    /// Rasterize `segment` with this algorithm.
    pub fn draw<S: PixelSink + ?Sized>(self, sink: &mut S, segment: Segment, color: S::Color) {
        match self {
            Self::Bresenham => draw_line_bresenham(sink, segment.start, segment.end, color),
            Self::Dda => draw_line_dda(sink, segment.start, segment.end, color),
        }
    }
}

/// Shape of a segment, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlopeClass {
    /// Both endpoints coincide.
    Point,
    /// Same row.
    Horizontal,
    /// Same column.
    Vertical,
    /// Slope of exactly +1 or -1.
    Diagonal,
    /// More columns than rows.
    Shallow,
    /// More rows than columns.
    Steep,
}

impl SlopeClass {
    /// Classify the segment from `start` to `end`. Direction does not matter.
    #[must_use]
    pub fn of(start: Point, end: Point) -> Self {
        let dx = span(start.x, end.x).abs();
        let dy = span(start.y, end.y).abs();

        if dx == 0 && dy == 0 {
            Self::Point
        } else if dy == 0 {
            Self::Horizontal
        } else if dx == 0 {
            Self::Vertical
        } else if dx == dy {
            Self::Diagonal
        } else if dx > dy {
            Self::Shallow
        } else {
            Self::Steep
        }
    }
}

/// Signed distance from `a` to `b`; any two `i32` values fit.
#[inline]
fn span(a: i32, b: i32) -> i64 {
    i64::from(b) - i64::from(a)
}

/// Draw a line segment using Bresenham's algorithm.
///
/// Endpoints are swapped if needed so the walk always runs left to right,
/// which makes `a -> b` and `b -> a` produce the same pixels. Axis-aligned and
/// 45° segments are emitted directly; the rest use an integer error term
/// stepping along the major axis.
///
/// # Arguments
///
/// * `sink` - Target canvas
/// * `start`, `end` - Endpoints, both plotted
/// * `color` - Line color
pub fn draw_line_bresenham<S: PixelSink + ?Sized>(
    sink: &mut S,
    start: Point,
    end: Point,
    color: S::Color,
) {
    let segment = Segment::new(start, end);
    let Segment { start, end } = if start.x > end.x { segment.reversed() } else { segment };

    match SlopeClass::of(start, end) {
        SlopeClass::Point => sink.set_pixel(start.x, start.y, color),
        SlopeClass::Horizontal => {
            for x in start.x..=end.x {
                sink.set_pixel(x, start.y, color);
            }
        }
        SlopeClass::Vertical => {
            let (y1, y2) = if start.y <= end.y { (start.y, end.y) } else { (end.y, start.y) };
            for y in y1..=y2 {
                sink.set_pixel(start.x, y, color);
            }
        }
        SlopeClass::Diagonal => {
            let sy = if end.y < start.y { -1 } else { 1 };
            let (mut x, mut y) = (start.x, start.y);
            loop {
                sink.set_pixel(x, y, color);
                if x == end.x {
                    break;
                }
                x += 1;
                y += sy;
            }
        }
        SlopeClass::Shallow | SlopeClass::Steep => {
            for p in ErrorWalk::new(start, end) {
                sink.set_pixel(p.x, p.y, color);
            }
        }
    }
}

/// Integer error walk along the major axis of a left-to-right segment.
///
/// Shallow segments (`dx > dy`) emit one pixel per column, steep ones one
/// pixel per row, stepping `y` toward `end`. The error term starts at
/// `2 * minor - major` and is kept in `i64`, so spans up to the full `i32`
/// range cannot overflow it. The last item is always `end` itself.
#[derive(Debug, Clone)]
struct ErrorWalk {
    at: Point,
    end: Point,
    steep: bool,
    sy: i32,
    major: i64,
    minor: i64,
    p: i64,
    done: bool,
}

impl ErrorWalk {
    /// Requires `start.x <= end.x`.
    fn new(start: Point, end: Point) -> Self {
        let dx = span(start.x, end.x);
        let dy = span(start.y, end.y).abs();
        let steep = dy > dx;
        let (major, minor) = if steep { (dy, dx) } else { (dx, dy) };

        Self {
            at: start,
            end,
            steep,
            sy: if end.y < start.y { -1 } else { 1 },
            major,
            minor,
            p: 2 * minor - major,
            done: false,
        }
    }
}

impl Iterator for ErrorWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let reached = if self.steep { self.at.y == self.end.y } else { self.at.x == self.end.x };
        if reached {
            self.done = true;
            return Some(self.end);
        }

        let here = self.at;
        let step_minor = self.p >= 0;
        if step_minor {
            self.p += 2 * self.minor - 2 * self.major;
        } else {
            self.p += 2 * self.minor;
        }

        if self.steep {
            if step_minor {
                self.at.x += 1;
            }
            self.at.y += self.sy;
        } else {
            if step_minor {
                self.at.y += self.sy;
            }
            self.at.x += 1;
        }
        Some(here)
    }
}

/// Draw a line segment using a digital differential analyzer.
///
/// Steps `max(|dx|, |dy|)` times from `start`, advancing both coordinates by
/// their floating-point increment and plotting the rounded position (halves
/// round away from zero). The exact `end` is plotted afterwards so rounding
/// drift can never drop it. A zero-length segment plots a single pixel.
pub fn draw_line_dda<S: PixelSink + ?Sized>(
    sink: &mut S,
    start: Point,
    end: Point,
    color: S::Color,
) {
    for p in DdaWalk::new(Segment::new(start, end)) {
        sink.set_pixel(p.x, p.y, color);
    }
}

/// DDA stepping state. Deltas and the step count are `i64`; positions are
/// `f64` and saturate when rounded back to pixels.
#[derive(Debug, Clone)]
struct DdaWalk {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: i64,
    end: Option<Point>,
}

impl DdaWalk {
    fn new(segment: Segment) -> Self {
        let Segment { start, end } = segment;
        let mut walk = Self {
            x: f64::from(start.x),
            y: f64::from(start.y),
            x_inc: 0.0,
            y_inc: 0.0,
            remaining: 0,
            end: Some(end),
        };
        if segment.is_degenerate() {
            return walk;
        }

        let dx = span(start.x, end.x);
        let dy = span(start.y, end.y);
        let steps = dx.abs().max(dy.abs());
        walk.x_inc = dx as f64 / steps as f64;
        walk.y_inc = dy as f64 / steps as f64;
        walk.remaining = steps;
        walk
    }
}

impl Iterator for DdaWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return self.end.take();
        }
        let here = Point::new(self.x.round() as i32, self.y.round() as i32);
        self.x += self.x_inc;
        self.y += self.y_inc;
        self.remaining -= 1;
        Some(here)
    }
}
