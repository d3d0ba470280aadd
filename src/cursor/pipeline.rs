//! End-to-end cursor size measurement
//!
//! Frames come from a `CursorSource`, settings from an explicit
//! `SystemSettings` value. Every failure on the way degrades to a
//! default, so measuring always yields a usable size.

use log::{debug, info};

use crate::cursor::extractor::scan_extent;
use crate::cursor::frame_select::{select_frame, FrameEntry, FrameMatch};
use crate::cursor::pixel_buffer::PixelBuffer;
use crate::cursor::scaling::{apply_chain, scale_chain};
use crate::cursor::size::CursorSize;
use crate::settings::SystemSettings;

/// Supplies the decoded frames of the current cursor image
///
/// An empty list means the image could not be obtained.
pub trait CursorSource {
    fn frames(&self) -> Vec<PixelBuffer>;
}

impl CursorSource for PixelBuffer {
    fn frames(&self) -> Vec<PixelBuffer> {
        vec![self.clone()]
    }
}

impl CursorSource for Vec<PixelBuffer> {
    fn frames(&self) -> Vec<PixelBuffer> {
        self.clone()
    }
}

/// Result of one measurement, with the intermediate values kept for inspection
#[derive(Debug, Clone, PartialEq)]
pub struct CursorMeasurement {
    /// Size before any scaling
    pub raw: CursorSize,
    /// Final scaled and rounded size
    pub size: CursorSize,
    /// Selected frame, if any frame was available
    pub frame: Option<FrameMatch>,
    /// The configured default stood in for a measured glyph
    pub used_default: bool,
}

/// Measure a single buffer
pub fn measure_buffer(buffer: &PixelBuffer, settings: &SystemSettings) -> CursorMeasurement {
    measure_frames(std::slice::from_ref(buffer), settings)
}

/// Measure the cursor supplied by `source`
pub fn measure(source: &dyn CursorSource, settings: &SystemSettings) -> CursorMeasurement {
    measure_frames(&source.frames(), settings)
}

fn measure_frames(frames: &[PixelBuffer], settings: &SystemSettings) -> CursorMeasurement {
    let entries: Vec<FrameEntry> = frames
        .iter()
        .map(|f| FrameEntry::new(f.width() as u32, f.height() as u32))
        .collect();

    let frame = select_frame(&entries, settings.cursor_base_size, settings.dpi_scale());
    let empty = PixelBuffer::empty();
    let buffer = frame.map(|m| &frames[m.index()]).unwrap_or(&empty);

    let extent = scan_extent(buffer, settings.signal);
    let used_default = extent.is_none();
    let raw = extent.map_or(settings.default_size, |e| e.size());

    // An exact frame is already drawn at physical size
    let scaled = if frame.map_or(false, |m| m.is_exact()) && !used_default {
        debug!("Exact frame match, skipping scaling");
        raw
    } else {
        apply_chain(raw, &scale_chain(settings))
    };

    let size = scaled.ceil();
    info!("Cursor size {} (raw {}, default: {})", size, raw, used_default);

    CursorMeasurement {
        raw,
        size,
        frame,
        used_default,
    }
}

/// Effective on-screen size of the cursor supplied by `source`
pub fn get_current_mouse_cursor_size(source: &dyn CursorSource, settings: &SystemSettings) -> CursorSize {
    measure(source, settings).size
}
