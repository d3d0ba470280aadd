//! Sources of system settings

use std::fs;
use std::path::Path;
use log::warn;

use crate::cursor::errors::{CursorError, CursorResult};
use crate::cursor::pixel_buffer::SignalMode;
use crate::cursor::size::CursorSize;

/// Reads individual system values
///
/// Every method returns `None` when the value is unavailable; the
/// caller decides the fallback.
pub trait SettingsReader {
    /// Display DPI (96 = 100%)
    fn display_dpi(&self) -> Option<f32>;

    /// Accessibility cursor-size multiplier
    fn cursor_scale(&self) -> Option<f32>;

    /// Size to report when no glyph can be measured
    fn default_size(&self) -> Option<CursorSize>;

    /// Nominal cursor size before DPI scaling
    fn cursor_base_size(&self) -> Option<f32>;

    /// Pixel visibility signal
    fn signal_mode(&self) -> Option<SignalMode>;
}

/// Settings stored in a TOML document
///
/// ```toml
/// [display]
/// dpi = 144
///
/// [accessibility]
/// cursor_scale = 2
///
/// [cursor]
/// default_width = 12
/// default_height = 18
/// base_size = 32
/// signal = "alpha"
/// ```
#[derive(Debug, Clone)]
pub struct TomlSettingsReader {
    value: toml::Value,
}

impl TomlSettingsReader {
    /// Parse settings from TOML text
    pub fn from_str(content: &str) -> CursorResult<Self> {
        let value: toml::Value = content
            .parse()
            .map_err(|e: toml::de::Error| CursorError::InvalidSettings(e.to_string()))?;
        Ok(TomlSettingsReader { value })
    }

    /// Read and parse a TOML settings file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CursorResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    fn number(&self, table: &str, key: &str) -> Option<f32> {
        let entry = self.value.get(table)?.get(key)?;
        match entry {
            toml::Value::Integer(i) => Some(*i as f32),
            toml::Value::Float(f) => Some(*f as f32),
            other => {
                warn!("Expected a number for {}.{}, found {}", table, key, other.type_str());
                None
            }
        }
    }
}

impl SettingsReader for TomlSettingsReader {
    fn display_dpi(&self) -> Option<f32> {
        self.number("display", "dpi")
    }

    fn cursor_scale(&self) -> Option<f32> {
        self.number("accessibility", "cursor_scale")
    }

    fn default_size(&self) -> Option<CursorSize> {
        let width = self.number("cursor", "default_width")?;
        let height = self.number("cursor", "default_height")?;
        Some(CursorSize::new(width, height))
    }

    fn cursor_base_size(&self) -> Option<f32> {
        self.number("cursor", "base_size")
    }

    fn signal_mode(&self) -> Option<SignalMode> {
        let name = self.value.get("cursor")?.get("signal")?.as_str()?;
        let mode = SignalMode::from_name(name);
        if mode.is_none() {
            warn!("Unknown signal mode '{}'", name);
        }
        mode
    }
}
