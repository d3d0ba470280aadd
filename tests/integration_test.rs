//! Integration tests for measuring cursor image files

use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use cursorkit::{CursorKit, CursorSize, ImageFileSource, PixelBuffer, SystemSettings, TomlSettingsReader};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cursorkit-{}-{}", std::process::id(), name))
}

/// Writes a 32x32 PNG with an opaque glyph in the given inclusive ranges
fn write_cursor_png(name: &str, size: u32, cols: (u32, u32), rows: (u32, u32)) -> PathBuf {
    let mut image = RgbaImage::new(size, size);
    for y in rows.0..=rows.1 {
        for x in cols.0..=cols.1 {
            image.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }

    let path = temp_path(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn test_measure_png_with_settings_file() {
    let png = write_cursor_png("arrow.png", 32, (0, 11), (0, 18));
    let settings_reader = TomlSettingsReader::from_str("[display]\ndpi = 120\n").unwrap();
    let kit = CursorKit::new(SystemSettings::collect(&settings_reader));

    let measurement = kit.measure_files(&[&png]);
    let _ = std::fs::remove_file(&png);

    // 12x19 at 125% -> 15x23.75 -> 15x24
    assert_eq!(measurement.raw, CursorSize::new(12.0, 19.0));
    assert_eq!(measurement.size, CursorSize::new(15.0, 24.0));
    assert!(!measurement.used_default);
}

#[test]
fn test_unreadable_file_yields_default() {
    let missing = temp_path("missing.png");
    let kit = CursorKit::default();

    let measurement = kit.measure_files(&[&missing]);

    assert!(measurement.used_default);
    assert_eq!(measurement.size, CursorSize::new(12.0, 18.0));
}

#[test]
fn test_multi_resolution_cursor_picks_exact_frame() {
    let small = write_cursor_png("frame32.png", 32, (0, 9), (0, 15));
    let large = write_cursor_png("frame48.png", 48, (0, 14), (0, 23));

    let mut settings = SystemSettings::default();
    settings.display_dpi = 144.0;
    settings.cursor_base_size = Some(32.0);
    let kit = CursorKit::new(settings);

    let measurement = kit.measure_files(&[&small, &large]);
    let _ = std::fs::remove_file(&small);
    let _ = std::fs::remove_file(&large);

    assert_eq!(measurement.frame.map(|f| f.index()), Some(1));
    assert_eq!(measurement.size, CursorSize::new(15.0, 24.0));
}

#[test]
fn test_image_source_and_buffer_agree() {
    let png = write_cursor_png("agree.png", 32, (4, 11), (2, 5));
    let source = ImageFileSource::new([&png]);
    let kit = CursorKit::default();

    let from_source = kit.cursor_size(&source);
    let buffer = cursorkit::io::load_pixel_buffer(&png).unwrap();
    let _ = std::fs::remove_file(&png);

    assert_eq!(from_source, CursorSize::new(8.0, 4.0));
    assert_eq!(kit.measure_buffer(&buffer).size, from_source);
    assert_eq!(kit.measure_buffer(&PixelBuffer::empty()).size, CursorSize::new(12.0, 18.0));
}

#[test]
fn test_measurements_are_logged() {
    let log_path = temp_path("measure.log");
    let kit = CursorKit::default().with_log_file(&log_path).unwrap();

    kit.measure_buffer(&PixelBuffer::empty());

    let content = std::fs::read_to_string(&log_path).unwrap();
    let _ = std::fs::remove_file(&log_path);
    assert!(content.contains("Final size: 12x18"));
    assert!(content.contains("Used default: true"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_log_write_failure_does_not_fail_measurement() {
    // Every write to /dev/full fails with ENOSPC
    let kit = CursorKit::default().with_log_file("/dev/full").unwrap();

    let measurement = kit.measure_buffer(&PixelBuffer::empty());

    assert_eq!(measurement.size, CursorSize::new(12.0, 18.0));
}
