//! Built-in default settings
//!
//! The defaults live in `cursor_defaults.toml`, embedded at build time and
//! parsed once on first use.

use lazy_static::lazy_static;

use crate::cursor::pixel_buffer::SignalMode;
use crate::cursor::size::CursorSize;
use super::reader::TomlSettingsReader;
use super::SystemSettings;

/// Values used if the embedded defaults themselves are unusable
pub const FALLBACK_SETTINGS: SystemSettings = SystemSettings {
    display_dpi: 96.0,
    cursor_scale: 1.0,
    default_size: CursorSize { width: 12.0, height: 18.0 },
    cursor_base_size: None,
    signal: SignalMode::Alpha,
};

lazy_static! {
    pub static ref DEFAULT_SETTINGS: SystemSettings = {
        let content = include_str!("../../cursor_defaults.toml");
        match TomlSettingsReader::from_str(content) {
            Ok(reader) => SystemSettings::collect_with(&reader, &FALLBACK_SETTINGS),
            Err(e) => {
                eprintln!("Warning: Failed to parse built-in cursor defaults: {}", e);
                FALLBACK_SETTINGS
            }
        }
    };
}
