//! Parsing of size and scale values given on the command line

use lazy_static::lazy_static;
use regex::Regex;

use crate::cursor::errors::{CursorError, CursorResult};
use crate::cursor::size::CursorSize;

lazy_static! {
    // "12x18", "12 X 18", "12.5,19"
    static ref SIZE_PATTERN: Regex =
        Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*[xX,]\s*(\d+(?:\.\d+)?)\s*$").expect("valid size pattern");
}

/// Parse a `WIDTHxHEIGHT` string
pub fn parse_size(value: &str) -> CursorResult<CursorSize> {
    let caps = SIZE_PATTERN.captures(value).ok_or_else(|| {
        CursorError::InvalidArgument(format!("Expected WIDTHxHEIGHT, got '{}'", value))
    })?;

    let width = parse_component(&caps[1], "width")?;
    let height = parse_component(&caps[2], "height")?;
    Ok(CursorSize::new(width, height))
}

/// Parse a strictly positive finite number
pub fn parse_scale(value: &str, what: &str) -> CursorResult<f32> {
    let parsed = value
        .trim()
        .parse::<f32>()
        .map_err(|_| CursorError::InvalidArgument(format!("Invalid {}: '{}'", what, value)))?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(CursorError::InvalidArgument(format!("{} must be positive, got {}", what, value)));
    }
    Ok(parsed)
}

fn parse_component(value: &str, what: &str) -> CursorResult<f32> {
    value
        .parse::<f32>()
        .map_err(|_| CursorError::InvalidArgument(format!("Invalid {}: '{}'", what, value)))
}
