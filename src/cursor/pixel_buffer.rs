//! Decoded cursor bitmap storage
//!
//! A `PixelBuffer` holds one cursor frame as packed 32-bit words in
//! row-major order. Each word is laid out as `A<<24 | R<<16 | G<<8 | B`,
//! which is what a little-endian BGRA device-independent bitmap yields
//! when read as `u32` values.

use byteorder::{ByteOrder, LittleEndian};
use image::RgbaImage;

use crate::cursor::errors::{CursorError, CursorResult};

/// Bytes per packed pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// How the translucency/intensity signal is read from a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalMode {
    /// Alpha channel only
    #[default]
    Alpha,
    /// Sum of the four channel bytes
    ChannelSum,
}

impl SignalMode {
    /// Parse a mode from its CLI/config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "alpha" => Some(SignalMode::Alpha),
            "channel-sum" | "channel_sum" | "sum" => Some(SignalMode::ChannelSum),
            _ => None,
        }
    }

    /// Returns the canonical name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            SignalMode::Alpha => "alpha",
            SignalMode::ChannelSum => "channel-sum",
        }
    }

    /// Reads the signal of a packed pixel
    pub fn signal(&self, pixel: u32) -> u32 {
        match self {
            SignalMode::Alpha => (pixel >> 24) & 0xFF,
            SignalMode::ChannelSum => pixel.to_le_bytes().iter().map(|&b| b as u32).sum(),
        }
    }
}

/// Row-major buffer of packed ARGB pixels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer, validating that the pixel count matches the dimensions
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> CursorResult<Self> {
        let expected = width.checked_mul(height).ok_or(CursorError::BufferSizeMismatch {
            expected: usize::MAX,
            actual: pixels.len(),
        })?;

        if pixels.len() != expected {
            return Err(CursorError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(PixelBuffer { width, height, pixels })
    }

    /// Buffer with no pixels, as supplied when no cursor image is available
    pub fn empty() -> Self {
        PixelBuffer::default()
    }

    /// Decode a top-down BGRA byte stream (4 bytes per pixel, little-endian words)
    pub fn from_bgra_bytes(width: usize, height: usize, bytes: &[u8]) -> CursorResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(CursorError::BufferSizeMismatch {
                expected: usize::MAX,
                actual: bytes.len(),
            })?;

        if bytes.len() != expected {
            return Err(CursorError::BufferSizeMismatch {
                expected: expected / BYTES_PER_PIXEL,
                actual: bytes.len() / BYTES_PER_PIXEL,
            });
        }

        let mut pixels = vec![0u32; width * height];
        LittleEndian::read_u32_into(bytes, &mut pixels);

        PixelBuffer::new(width, height, pixels)
    }

    /// Pack an RGBA image into a buffer
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
            })
            .collect();

        PixelBuffer { width, height, pixels }
    }

    /// Returns a copy with the row order reversed (bottom-up bitmaps)
    pub fn flipped_vertically(&self) -> Self {
        let pixels = if self.width == 0 {
            Vec::new()
        } else {
            self.pixels
                .chunks_exact(self.width)
                .rev()
                .flatten()
                .copied()
                .collect()
        };

        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// True when there is nothing to scan
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty() || self.width == 0 || self.height == 0
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact panics on a zero chunk size
        let width = self.width.max(1);
        self.pixels.chunks_exact(width).take(if self.width == 0 { 0 } else { self.height })
    }
}
