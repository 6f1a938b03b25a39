//! Rasterization of circle outlines and line segments.
//!
//! Every rasterizer is a pure function of its geometry and color whose only
//! effect is a sequence of [`PixelSink::set_pixel`] calls. None of them read
//! the canvas back or keep state between calls.
//!
//! # Algorithms
//!
//! - **Bresenham's Circle**: integer decision variable `d = 3 - 2r`
//! - **Midpoint Circle**: the same curve with `d = 1 - r`
//! - **Bresenham's Line**: integer error term, dispatched on slope class
//! - **DDA Line**: floating-point increments along the dominant axis
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display
//!   of circular arcs." *Communications of the ACM*, 20(2).

mod circle;
mod line;
mod sink;

pub use circle::{
    draw_circle_bresenham, draw_circle_midpoint, plot_octants, CircleAlgorithm, OctantWalk,
};
pub use line::{draw_line_bresenham, draw_line_dda, LineAlgorithm, SlopeClass};
pub use sink::{PixelSink, PointTrace};
