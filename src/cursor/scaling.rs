//! Size transforms applied after extraction
//!
//! Each transform is a strategy implementing `SizeTransform`; the
//! pipeline applies them in the order returned by `scale_chain`.

use log::debug;

use crate::cursor::size::CursorSize;
use crate::settings::SystemSettings;

/// DPI that maps to a scale factor of 1.0
pub const REFERENCE_DPI: f32 = 96.0;

/// A pure transformation of a cursor size
pub trait SizeTransform {
    /// Short name used in logs and inspection output
    fn name(&self) -> &'static str;

    /// Apply the transform
    fn apply(&self, size: CursorSize) -> CursorSize;
}

/// Scales by the ratio of the system DPI to the 96 DPI reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpiScale {
    system_dpi: f32,
}

impl DpiScale {
    pub fn new(system_dpi: f32) -> Self {
        DpiScale { system_dpi }
    }

    pub fn factor(&self) -> f32 {
        self.system_dpi / REFERENCE_DPI
    }
}

impl SizeTransform for DpiScale {
    fn name(&self) -> &'static str {
        "dpi"
    }

    fn apply(&self, size: CursorSize) -> CursorSize {
        let factor = self.factor();
        size.map(|d| d * factor)
    }
}

/// Accessibility cursor-size multiplier
///
/// Each dimension becomes `d + (m - 1) * (d / 2)`, so a multiplier of 1
/// is a no-op and every step of the slider adds half the base size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScale {
    multiplier: f32,
}

impl MouseScale {
    pub fn new(multiplier: f32) -> Self {
        MouseScale { multiplier }
    }
}

impl SizeTransform for MouseScale {
    fn name(&self) -> &'static str {
        "mouse-scale"
    }

    fn apply(&self, size: CursorSize) -> CursorSize {
        let m = self.multiplier;
        size.map(|d| d + (m - 1.0) * (d / 2.0))
    }
}

/// Transforms to apply for the given settings, DPI first
pub fn scale_chain(settings: &SystemSettings) -> Vec<Box<dyn SizeTransform>> {
    vec![
        Box::new(DpiScale::new(settings.display_dpi)),
        Box::new(MouseScale::new(settings.cursor_scale)),
    ]
}

/// Run a size through every transform in order
pub fn apply_chain(size: CursorSize, chain: &[Box<dyn SizeTransform>]) -> CursorSize {
    chain.iter().fold(size, |acc, transform| {
        let scaled = transform.apply(acc);
        debug!("Applied {} scaling: {} -> {}", transform.name(), acc, scaled);
        scaled
    })
}
