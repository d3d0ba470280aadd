pub mod cursor;
pub mod settings;
pub mod io;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CursorKit;

pub use cursor::{
    get_current_mouse_cursor_size, CursorError, CursorMeasurement, CursorResult, CursorSize, CursorSource,
    PixelBuffer, SignalMode,
};
pub use io::ImageFileSource;
pub use settings::{SettingsReader, SystemSettings, TomlSettingsReader};
