//! System settings that drive cursor scaling
//!
//! Values come from a `SettingsReader` (a TOML file, a platform
//! collaborator, a test fixture) and are gathered into a plain
//! `SystemSettings` value that is passed into the measuring pipeline.
//! Anything a reader cannot supply falls back to the built-in defaults.

mod defaults;
pub mod reader;

use std::path::Path;
use log::warn;

use crate::cursor::errors::CursorResult;
use crate::cursor::pixel_buffer::SignalMode;
use crate::cursor::scaling::REFERENCE_DPI;
use crate::cursor::size::CursorSize;

pub use defaults::{DEFAULT_SETTINGS, FALLBACK_SETTINGS};
pub use reader::{SettingsReader, TomlSettingsReader};

/// Explicit snapshot of the system values the pipeline depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSettings {
    /// Display DPI, 96 meaning unscaled
    pub display_dpi: f32,
    /// Accessibility cursor-size multiplier, 1 meaning unscaled
    pub cursor_scale: f32,
    /// Size used when no glyph can be measured
    pub default_size: CursorSize,
    /// Nominal cursor size used to pick a frame from multi-resolution cursors
    pub cursor_base_size: Option<f32>,
    /// How pixel visibility is read
    pub signal: SignalMode,
}

impl Default for SystemSettings {
    fn default() -> Self {
        *DEFAULT_SETTINGS
    }
}

impl SystemSettings {
    /// Ratio of the display DPI to the 96 DPI reference
    pub fn dpi_scale(&self) -> f32 {
        self.display_dpi / REFERENCE_DPI
    }

    /// Gather settings from a reader, substituting defaults for missing or invalid values
    pub fn collect(reader: &dyn SettingsReader) -> Self {
        Self::collect_with(reader, &DEFAULT_SETTINGS)
    }

    pub(crate) fn collect_with(reader: &dyn SettingsReader, defaults: &SystemSettings) -> Self {
        let display_dpi = match reader.display_dpi() {
            Some(dpi) if dpi.is_finite() && dpi > 0.0 => dpi,
            Some(dpi) => {
                warn!("Ignoring invalid display DPI {}, using {}", dpi, defaults.display_dpi);
                defaults.display_dpi
            }
            None => defaults.display_dpi,
        };

        let cursor_scale = match reader.cursor_scale() {
            Some(scale) if scale.is_finite() && scale > 0.0 => scale,
            Some(scale) => {
                warn!("Ignoring invalid cursor scale {}, using {}", scale, defaults.cursor_scale);
                defaults.cursor_scale
            }
            None => defaults.cursor_scale,
        };

        let default_size = match reader.default_size() {
            Some(size) if is_valid_extent(size.width) && is_valid_extent(size.height) => size,
            Some(size) => {
                warn!("Ignoring invalid default size {}, using {}", size, defaults.default_size);
                defaults.default_size
            }
            None => defaults.default_size,
        };

        let cursor_base_size = match reader.cursor_base_size() {
            Some(base) if base.is_finite() && base > 0.0 => Some(base),
            Some(base) => {
                warn!("Ignoring invalid cursor base size {}", base);
                defaults.cursor_base_size
            }
            None => defaults.cursor_base_size,
        };

        let signal = reader.signal_mode().unwrap_or(defaults.signal);

        SystemSettings {
            display_dpi,
            cursor_scale,
            default_size,
            cursor_base_size,
            signal,
        }
    }

    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> CursorResult<Self> {
        let reader = TomlSettingsReader::from_file(path)?;
        Ok(Self::collect(&reader))
    }

    /// Load settings from a TOML file, using defaults if it cannot be read
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            warn!("Could not load settings from {}: {}", path.display(), e);
            Self::default()
        })
    }
}

fn is_valid_extent(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
