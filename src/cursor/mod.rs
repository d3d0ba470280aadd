//! Cursor measurement core
//!
//! This module turns a decoded cursor bitmap into the size the cursor
//! actually occupies on screen: bounding-box extraction, DPI and
//! accessibility scaling, and final rounding.

pub mod errors;
pub mod pixel_buffer;
pub mod extractor;
pub mod size;
pub mod scaling;
pub mod frame_select;
pub mod pipeline;
#[cfg(test)]
mod tests;

pub use errors::{CursorError, CursorResult};
pub use pixel_buffer::{PixelBuffer, SignalMode};
pub use extractor::{compute_cursor_size, scan_extent, GlyphExtent};
pub use size::CursorSize;
pub use scaling::{DpiScale, MouseScale, SizeTransform, REFERENCE_DPI};
pub use frame_select::{select_frame, FrameEntry, FrameMatch};
pub use pipeline::{get_current_mouse_cursor_size, measure, measure_buffer, CursorMeasurement, CursorSource};
