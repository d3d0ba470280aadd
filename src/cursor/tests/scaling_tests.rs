use crate::cursor::scaling::{apply_chain, scale_chain, DpiScale, MouseScale, SizeTransform};
use crate::cursor::size::CursorSize;
use super::test_utils::settings;

#[test]
fn test_dpi_scale() {
    let scaled = DpiScale::new(144.0).apply(CursorSize::new(10.0, 20.0));
    assert_eq!(scaled, CursorSize::new(15.0, 30.0));
    assert_eq!(DpiScale::new(144.0).factor(), 1.5);
}

#[test]
fn test_mouse_scale() {
    let scaled = MouseScale::new(3.0).apply(CursorSize::new(10.0, 20.0));
    assert_eq!(scaled, CursorSize::new(20.0, 40.0));
}

#[test]
fn test_mouse_scale_below_one_shrinks() {
    let scaled = MouseScale::new(0.5).apply(CursorSize::new(8.0, 16.0));
    assert_eq!(scaled, CursorSize::new(6.0, 12.0));
}

#[test]
fn test_neutral_transforms_are_no_ops() {
    let size = CursorSize::new(7.3, 11.9);
    assert_eq!(DpiScale::new(96.0).apply(size), size);
    assert_eq!(MouseScale::new(1.0).apply(size), size);
    assert_eq!(apply_chain(size, &scale_chain(&settings(96.0, 1.0))), size);
}

#[test]
fn test_chain_applies_dpi_then_mouse_scale() {
    let chain = scale_chain(&settings(120.0, 1.0));
    let names: Vec<&str> = chain.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["dpi", "mouse-scale"]);

    let scaled = apply_chain(CursorSize::new(8.0, 4.0), &chain);
    assert_eq!(scaled, CursorSize::new(10.0, 5.0));
    assert_eq!(scaled.ceil(), CursorSize::new(10.0, 5.0));
}

#[test]
fn test_combined_scaling() {
    // 150% DPI then slider at 2: 12 -> 18 -> 27
    let scaled = apply_chain(CursorSize::new(12.0, 18.0), &scale_chain(&settings(144.0, 2.0)));
    assert_eq!(scaled, CursorSize::new(27.0, 40.5));
    assert_eq!(scaled.ceil(), CursorSize::new(27.0, 41.0));
}

#[test]
fn test_ceil_rounds_up() {
    assert_eq!(CursorSize::new(3.2, 10.01).ceil(), CursorSize::new(4.0, 11.0));
    assert_eq!(CursorSize::new(5.0, 0.0).ceil(), CursorSize::new(5.0, 0.0));
}

#[test]
fn test_size_display() {
    assert_eq!(CursorSize::new(10.0, 5.0).to_string(), "10x5");
    assert_eq!(CursorSize::new(2.5, 3.0).to_string(), "2.5x3");
}
