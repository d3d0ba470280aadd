//! Cursor frames decoded from image files

use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::cursor::errors::CursorResult;
use crate::cursor::pipeline::CursorSource;
use crate::cursor::pixel_buffer::PixelBuffer;

/// Load one image file as a pixel buffer
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> CursorResult<PixelBuffer> {
    let path = path.as_ref();
    let image = image::open(path)?;
    let rgba = image.to_rgba8();
    debug!("Decoded {} ({}x{})", path.display(), rgba.width(), rgba.height());
    Ok(PixelBuffer::from_rgba_image(&rgba))
}

/// A cursor whose frames are stored as separate image files
///
/// Each file is one resolution of the same cursor. Files that cannot be
/// decoded are skipped with a warning.
#[derive(Debug, Clone, Default)]
pub struct ImageFileSource {
    paths: Vec<PathBuf>,
}

impl ImageFileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        ImageFileSource {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl CursorSource for ImageFileSource {
    fn frames(&self) -> Vec<PixelBuffer> {
        self.paths
            .iter()
            .filter_map(|path| match load_pixel_buffer(path) {
                Ok(buffer) => Some(buffer),
                Err(e) => {
                    warn!("Skipping cursor frame {}: {}", path.display(), e);
                    None
                }
            })
            .collect()
    }
}
