use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use super::*;
use crate::cursor::size::CursorSize;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cursorkit-cli-{}-{}", std::process::id(), name))
}

fn matches(args: &[&str]) -> ArgMatches {
    build_cli().try_get_matches_from(args.iter().copied()).unwrap()
}

#[test]
fn test_flag_overrides_settings_file() {
    let settings_path = temp_path("override.toml");
    std::fs::write(&settings_path, "[display]\ndpi = 120\n\n[accessibility]\ncursor_scale = 2\n").unwrap();
    let path = settings_path.to_string_lossy().to_string();

    let args = matches(&["cursorkit", "cursor.png", "--settings", &path, "--dpi", "144"]);
    let settings = resolve_settings(&args).unwrap();
    let _ = std::fs::remove_file(&settings_path);

    assert_eq!(settings.display_dpi, 144.0);
    assert_eq!(settings.cursor_scale, 2.0);
}

#[test]
fn test_settings_file_without_overrides() {
    let settings_path = temp_path("plain.toml");
    std::fs::write(&settings_path, "[display]\ndpi = 120\n").unwrap();
    let path = settings_path.to_string_lossy().to_string();

    let args = matches(&["cursorkit", "cursor.png", "--settings", &path]);
    let settings = resolve_settings(&args).unwrap();
    let _ = std::fs::remove_file(&settings_path);

    assert_eq!(settings.display_dpi, 120.0);
    assert_eq!(settings.cursor_scale, 1.0);
}

#[test]
fn test_size_and_signal_flags() {
    let args = matches(&[
        "cursorkit", "cursor.png", "--default-size", "12x19", "--base-size", "32", "--signal", "channel-sum",
    ]);
    let settings = resolve_settings(&args).unwrap();

    assert_eq!(settings.default_size, CursorSize::new(12.0, 19.0));
    assert_eq!(settings.cursor_base_size, Some(32.0));
    assert_eq!(settings.signal, SignalMode::ChannelSum);
}

#[test]
fn test_unknown_signal_is_rejected() {
    let args = matches(&["cursorkit", "cursor.png", "--signal", "luma"]);
    assert!(matches!(resolve_settings(&args), Err(CursorError::InvalidArgument(_))));
}

#[test]
fn test_invalid_dpi_is_rejected() {
    let args = matches(&["cursorkit", "cursor.png", "--dpi", "0"]);
    assert!(matches!(resolve_settings(&args), Err(CursorError::InvalidArgument(_))));
}

#[test]
fn test_command_routing() {
    assert_eq!(CommandKind::from_args(&matches(&["cursorkit", "a.png"])), CommandKind::Measure);
    assert_eq!(CommandKind::from_args(&matches(&["cursorkit", "a.png", "--each"])), CommandKind::Batch);
    assert_eq!(CommandKind::from_args(&matches(&["cursorkit", "a.png", "-i"])), CommandKind::Inspect);
    assert_eq!(
        CommandKind::from_args(&matches(&["cursorkit", "a.png", "--each", "--inspect"])),
        CommandKind::Inspect
    );
}

#[test]
fn test_factory_propagates_argument_errors() {
    let logger = Logger::disabled();
    let args = matches(&["cursorkit", "a.png", "--mouse-scale", "abc"]);
    assert!(CursorkitCommandFactory::new().create_command(&args, &logger).is_err());
}

#[test]
fn test_inspect_report() {
    let png = temp_path("inspect.png");
    let mut image = RgbaImage::new(32, 32);
    for y in 2..=5 {
        for x in 3..=10 {
            image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    image.save(&png).unwrap();
    let png_arg = png.to_string_lossy().to_string();

    let logger = Logger::disabled();
    let args = matches(&["cursorkit", &png_arg, "--inspect", "--dpi", "120"]);
    let report = InspectCommand::new(&args, &logger).unwrap().report();
    let _ = std::fs::remove_file(&png);

    assert!(report.contains("Frame #0: 32x32, glyph 8x4"));
    assert!(report.contains("Selected frame: #0 (smallest)"));
    assert!(report.contains("Raw size: 8x4\n"));
    assert!(report.contains("Final size: 10x5"));
}
