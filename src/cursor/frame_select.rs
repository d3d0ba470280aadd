//! Choosing one frame out of a multi-resolution cursor

use log::debug;

/// Declared dimensions of one frame of a cursor resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEntry {
    pub width: u32,
    pub height: u32,
}

impl FrameEntry {
    pub fn new(width: u32, height: u32) -> Self {
        FrameEntry { width, height }
    }

    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Which frame was chosen and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMatch {
    /// Frame already drawn at the desired physical size
    Exact(usize),
    /// No exact match, smallest frame by area
    Smallest(usize),
}

impl FrameMatch {
    pub fn index(&self) -> usize {
        match self {
            FrameMatch::Exact(i) | FrameMatch::Smallest(i) => *i,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, FrameMatch::Exact(_))
    }
}

/// Index of the frame with the smallest `width * height`, first on ties
pub fn smallest_frame(entries: &[FrameEntry]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .min_by_key(|(i, e)| (e.area(), *i))
        .map(|(i, _)| i)
}

/// Select the frame to measure
///
/// With a configured base size, a square frame of
/// `round(base_size * dpi_scale)` pixels is preferred. Otherwise, or
/// when no frame matches, the smallest frame is used.
pub fn select_frame(entries: &[FrameEntry], base_size: Option<f32>, dpi_scale: f32) -> Option<FrameMatch> {
    if let Some(base) = base_size {
        let desired = (base * dpi_scale).round();
        if desired.is_finite() && desired > 0.0 {
            let desired = desired as u32;
            if let Some(i) = entries
                .iter()
                .position(|e| e.width == desired && e.height == desired)
            {
                debug!("Frame {} matches desired size {}", i, desired);
                return Some(FrameMatch::Exact(i));
            }
            debug!("No frame of size {}, falling back to smallest", desired);
        }
    }

    smallest_frame(entries).map(FrameMatch::Smallest)
}
