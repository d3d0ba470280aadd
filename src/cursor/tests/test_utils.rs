use crate::cursor::pixel_buffer::PixelBuffer;
use crate::cursor::size::CursorSize;
use crate::settings::SystemSettings;
use crate::cursor::pixel_buffer::SignalMode;

/// Fully opaque black pixel
pub const OPAQUE: u32 = 0xFF00_0000;

/// Transparent canvas with an opaque rectangle covering the inclusive
/// row and column ranges
pub fn buffer_with_rect(
    width: usize,
    height: usize,
    rows: std::ops::RangeInclusive<usize>,
    cols: std::ops::RangeInclusive<usize>,
) -> PixelBuffer {
    let mut pixels = vec![0u32; width * height];
    for y in rows {
        for x in cols.clone() {
            pixels[y * width + x] = OPAQUE;
        }
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}

/// Transparent canvas with individual opaque pixels at `(x, y)`
pub fn buffer_with_pixels(width: usize, height: usize, points: &[(usize, usize)]) -> PixelBuffer {
    let mut pixels = vec![0u32; width * height];
    for &(x, y) in points {
        pixels[y * width + x] = OPAQUE;
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}

/// Fully transparent canvas
pub fn blank_buffer(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::new(width, height, vec![0u32; width * height]).unwrap()
}

pub fn settings(display_dpi: f32, cursor_scale: f32) -> SystemSettings {
    SystemSettings {
        display_dpi,
        cursor_scale,
        default_size: CursorSize::new(12.0, 18.0),
        cursor_base_size: None,
        signal: SignalMode::Alpha,
    }
}
