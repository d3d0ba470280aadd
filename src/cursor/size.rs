//! Cursor size in floating-point pixels

use std::fmt;

/// Width and height of a cursor glyph, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorSize {
    pub width: f32,
    pub height: f32,
}

impl CursorSize {
    pub fn new(width: f32, height: f32) -> Self {
        CursorSize { width, height }
    }

    /// Round both dimensions up to whole pixels
    ///
    /// Rendering surfaces need integer extents, so this is the last step
    /// applied to a measured size.
    pub fn ceil(self) -> Self {
        CursorSize {
            width: self.width.ceil(),
            height: self.height.ceil(),
        }
    }

    /// Apply the same function to both dimensions
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        CursorSize {
            width: f(self.width),
            height: f(self.height),
        }
    }
}

impl From<(f32, f32)> for CursorSize {
    fn from((width, height): (f32, f32)) -> Self {
        CursorSize::new(width, height)
    }
}

impl From<CursorSize> for (f32, f32) {
    fn from(size: CursorSize) -> Self {
        (size.width, size.height)
    }
}

impl fmt::Display for CursorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
