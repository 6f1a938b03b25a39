//! # Pixel-Raster
//!
//! Classic integer and floating-point rasterization of circle outlines and
//! line segments, with PNG output.
//!
//! Four algorithms are provided, two per shape:
//!
//! - **Circles**: Bresenham (`d = 3 - 2r`) and midpoint (`d = 1 - r`). Both
//!   walk a single octant and mirror it eight ways; they produce identical
//!   pixels for every radius.
//! - **Lines**: Bresenham with an explicit slope-class dispatch, and a digital
//!   differential analyzer (DDA) stepping in `f64`. Both always include both
//!   endpoints.
//!
//! Rasterizers write through the [`render::PixelSink`] trait, so the same code
//! draws into a [`framebuffer::Framebuffer`] or records into a
//! [`render::PointTrace`] for inspection.
//!
//! ## Quick Start
//!
//! ```
//! use pixel_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(200, 200)?;
//! CircleAlgorithm::Midpoint.draw(&mut fb, Circle::new(Point::new(100, 100), 60), Rgba::WHITE);
//! LineAlgorithm::Bresenham.draw(&mut fb, Segment::from_coords(10, 10, 190, 40), Rgba::RED);
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), pixel_raster::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type.
pub mod color;

/// RGBA framebuffer.
pub mod framebuffer;

/// Integer points, segments and circles.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Circle and line rasterizers.
pub mod render;

/// Output encoders (PNG).
pub mod output;

/// Fixed demo scenes and the driver that saves them.
pub mod demo;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixel-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use pixel_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Point, Segment};
    pub use crate::output::PngEncoder;
    pub use crate::render::{CircleAlgorithm, LineAlgorithm, PixelSink, PointTrace};
}
