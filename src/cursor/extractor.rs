//! Bounding-box extraction over cursor pixel buffers
//!
//! One pass over the rows yields the leftmost and rightmost visible
//! columns across the whole glyph and the first and last rows that hold
//! any content at all.

use log::debug;

use crate::cursor::pixel_buffer::{PixelBuffer, SignalMode};
use crate::cursor::size::CursorSize;

/// Visible extent of a cursor glyph inside its bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphExtent {
    /// Leftmost visible column on any row
    pub first_col: usize,
    /// Rightmost visible column on any row
    pub last_col: usize,
    /// First row holding a visible pixel
    pub first_row: usize,
    /// Last row holding a visible pixel
    pub last_row: usize,
}

impl GlyphExtent {
    pub fn width(&self) -> usize {
        self.last_col - self.first_col + 1
    }

    pub fn height(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    /// Extent as a floating-point size
    pub fn size(&self) -> CursorSize {
        CursorSize::new(self.width() as f32, self.height() as f32)
    }
}

/// First and last visible column of one row, both inclusive
#[derive(Debug, Clone, Copy)]
struct RowSpan {
    first: usize,
    last: usize,
}

fn row_span(row: &[u32], mode: SignalMode) -> Option<RowSpan> {
    let first = row.iter().position(|&p| mode.signal(p) > 0)?;
    let last = row.iter().rposition(|&p| mode.signal(p) > 0)?;
    Some(RowSpan { first, last })
}

/// Scan a buffer for the extent of its non-transparent pixels
///
/// Returns `None` when the buffer is empty or no pixel has a signal
/// above zero.
pub fn scan_extent(buffer: &PixelBuffer, mode: SignalMode) -> Option<GlyphExtent> {
    if buffer.is_empty() {
        return None;
    }

    let mut extent: Option<GlyphExtent> = None;

    for (y, row) in buffer.rows().enumerate() {
        let Some(span) = row_span(row, mode) else {
            continue;
        };

        extent = Some(match extent {
            None => GlyphExtent {
                first_col: span.first,
                last_col: span.last,
                first_row: y,
                last_row: y,
            },
            Some(e) => GlyphExtent {
                first_col: e.first_col.min(span.first),
                last_col: e.last_col.max(span.last),
                first_row: e.first_row,
                last_row: y,
            },
        });
    }

    if let Some(e) = &extent {
        debug!(
            "Glyph extent: columns {}..={}, rows {}..={} in {}x{} buffer",
            e.first_col, e.last_col, e.first_row, e.last_row, buffer.width(), buffer.height()
        );
    }

    extent
}

/// Compute the unscaled cursor size, falling back to `default` when
/// the buffer holds no visible pixel
pub fn compute_cursor_size(buffer: &PixelBuffer, mode: SignalMode, default: CursorSize) -> CursorSize {
    match scan_extent(buffer, mode) {
        Some(extent) => extent.size(),
        None => {
            debug!("No visible pixels, using default size {}", default);
            default
        }
    }
}
