//! I/O collaborators for the measuring core
//!
//! This module provides cursor sources backed by files.

pub mod image_source;

pub use image_source::{load_pixel_buffer, ImageFileSource};
