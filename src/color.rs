//! Color type used by the framebuffer.
//!
//! Rasterizers never inspect colors; they pass whatever value the caller
//! supplies straight through to the pixel sink.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black. Fresh framebuffers start out this color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion() {
        let c = Rgba::new(10, 20, 30, 40);
        assert_eq!(c.to_array(), [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array([10, 20, 30, 40]), c);
        assert_eq!(Rgba::from([10, 20, 30, 40]), c);
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).a, 255);
        assert_eq!(Rgba::rgb(255, 255, 255), Rgba::WHITE);
    }

    #[test]
    fn test_default_is_transparent() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
