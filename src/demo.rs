//! Fixed demo scenes and the driver that renders and saves them.
//!
//! Two scenes exist: a single circle, drawn once per circle algorithm, and the
//! letters "SWE" built from straight segments, drawn once per line algorithm.
//! Each rendering is saved as its own PNG.

use std::path::{Path, PathBuf};

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, Point, Segment};
use crate::output::PngEncoder;
use crate::render::{CircleAlgorithm, LineAlgorithm};

/// Canvas size of the circle scene.
pub const CIRCLE_CANVAS: (u32, u32) = (200, 200);

/// The circle drawn in the circle scene.
pub const CIRCLE: Circle = Circle::new(Point::new(100, 100), 60);

/// Canvas size of the glyph scene.
pub const GLYPH_CANVAS: (u32, u32) = (1000, 400);

/// Strokes of the letter S.
pub const GLYPH_S: [Segment; 5] = [
    Segment::from_coords(200, 100, 400, 100),
    Segment::from_coords(200, 100, 200, 200),
    Segment::from_coords(200, 200, 400, 200),
    Segment::from_coords(400, 200, 400, 300),
    Segment::from_coords(200, 300, 400, 300),
];

/// Strokes of the letter W.
pub const GLYPH_W: [Segment; 4] = [
    Segment::from_coords(500, 100, 550, 300),
    Segment::from_coords(550, 300, 600, 100),
    Segment::from_coords(600, 100, 650, 300),
    Segment::from_coords(650, 300, 700, 100),
];

/// Strokes of the letter E.
pub const GLYPH_E: [Segment; 4] = [
    Segment::from_coords(750, 100, 750, 300),
    Segment::from_coords(750, 100, 900, 100),
    Segment::from_coords(750, 200, 900, 200),
    Segment::from_coords(750, 300, 900, 300),
];

/// Every glyph with its strokes, in drawing order.
pub const GLYPHS: [(char, &[Segment]); 3] = [('S', &GLYPH_S), ('W', &GLYPH_W), ('E', &GLYPH_E)];

/// Demo settings.
///
/// The defaults draw white strokes on a transparent background and write to
/// the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    output_dir: PathBuf,
    foreground: Rgba,
    background: Rgba,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            foreground: Rgba::WHITE,
            background: Rgba::TRANSPARENT,
        }
    }
}

impl DemoConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory the PNG files are written to.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub fn foreground(mut self, color: Rgba) -> Self {
        self.foreground = color;
        self
    }

    /// Set the canvas fill color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.output_dir
    }

    /// Stroke color.
    #[must_use]
    pub fn stroke(&self) -> Rgba {
        self.foreground
    }

    /// Canvas fill color.
    #[must_use]
    pub fn fill(&self) -> Rgba {
        self.background
    }

    fn canvas(&self, (width, height): (u32, u32)) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(width, height)?;
        if self.background != Rgba::TRANSPARENT {
            fb.clear(self.background);
        }
        Ok(fb)
    }
}

/// Render the circle scene with one algorithm.
pub fn render_circle(algorithm: CircleAlgorithm, config: &DemoConfig) -> Result<Framebuffer> {
    let mut fb = config.canvas(CIRCLE_CANVAS)?;
    tracing::debug!(
        algorithm = algorithm.name(),
        cx = CIRCLE.center.x,
        cy = CIRCLE.center.y,
        radius = CIRCLE.radius,
        "drawing circle"
    );
    algorithm.draw(&mut fb, CIRCLE, config.foreground);
    Ok(fb)
}

/// Render the "SWE" glyph scene with one algorithm.
pub fn render_glyphs(algorithm: LineAlgorithm, config: &DemoConfig) -> Result<Framebuffer> {
    let mut fb = config.canvas(GLYPH_CANVAS)?;
    for (glyph, strokes) in GLYPHS {
        tracing::debug!(algorithm = algorithm.name(), %glyph, strokes = strokes.len(), "drawing glyph");
        for &segment in strokes {
            algorithm.draw(&mut fb, segment, config.foreground);
        }
    }
    Ok(fb)
}

/// Render every scene with every algorithm and write one PNG per rendering.
///
/// Returns the written paths in order: `circleBresenham.png`,
/// `circleMidpoint.png`, `bresenham.png`, `dda.png`. The first failure aborts
/// the run.
pub fn run(config: &DemoConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(CircleAlgorithm::ALL.len() + LineAlgorithm::ALL.len());

    for algorithm in CircleAlgorithm::ALL {
        let _span = tracing::debug_span!("circle", algorithm = algorithm.name()).entered();
        let fb = render_circle(algorithm, config)?;
        written.push(save(&fb, config, algorithm.file_stem())?);
    }

    for algorithm in LineAlgorithm::ALL {
        let _span = tracing::debug_span!("glyphs", algorithm = algorithm.name()).entered();
        let fb = render_glyphs(algorithm, config)?;
        written.push(save(&fb, config, algorithm.file_stem())?);
    }

    Ok(written)
}

fn save(fb: &Framebuffer, config: &DemoConfig, stem: &str) -> Result<PathBuf> {
    let path = config.output_dir.join(format!("{stem}.png"));
    PngEncoder::write_to_file(fb, &path)?;
    tracing::info!(
        path = %path.display(),
        width = fb.width(),
        height = fb.height(),
        stroked = fb.count_pixels(config.foreground),
        "wrote image"
    );
    Ok(path)
}
