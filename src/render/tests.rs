use ndarray::Array3;

use crate::formats::FrameStack;
use crate::model::BandSpec;

use super::{RenderError, composite, parse_color};

fn two_frame_stack() -> FrameStack {
    // Frame 0 ramps up; frame 1 is all ones.
    let data = Array3::from_shape_vec(
        (2, 2, 2),
        vec![0.0, 0.25, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0],
    )
    .expect("shape");
    FrameStack::new(data).expect("stack")
}

#[test]
fn parse_color_accepts_short_and_long_hex() {
    assert_eq!(parse_color("#f00").expect("short"), [255, 0, 0]);
    assert_eq!(parse_color("#00ff00").expect("long"), [0, 255, 0]);
    assert_eq!(parse_color("#0ff").expect("cyan"), [0, 255, 255]);
}

#[test]
fn parse_color_rejects_malformed_input() {
    for input in ["red", "#12345", "#gg0000", "#", "f00"] {
        assert!(matches!(parse_color(input), Err(RenderError::BadColor(_))));
    }
}

#[test]
fn bare_band_renders_grayscale() {
    let stack = two_frame_stack();
    let image = composite(&stack, &[BandSpec::bare(0)]).expect("composite");
    assert_eq!(image.dimensions(), (2, 2));
    let pixel = image.get_pixel(1, 1);
    assert_eq!(pixel.0, [255, 255, 255, 255]);
    let pixel = image.get_pixel(1, 0);
    assert_eq!(pixel.0, [64, 64, 64, 255]);
}

#[test]
fn palette_band_tints_output() {
    let stack = two_frame_stack();
    let band = BandSpec {
        palette: Some("#f00".into()),
        ..BandSpec::bare(1)
    };
    let image = composite(&stack, &[band]).expect("composite");
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[test]
fn window_rescales_band_values() {
    let stack = two_frame_stack();
    let band = BandSpec {
        min: Some(0.5),
        max: Some(1.0),
        ..BandSpec::bare(0)
    };
    let image = composite(&stack, &[band]).expect("composite");
    // 0.25 falls below the window; 0.5 sits at its bottom.
    assert_eq!(image.get_pixel(1, 0).0, [0, 0, 0, 255]);
    assert_eq!(image.get_pixel(0, 1).0, [0, 0, 0, 255]);
    assert_eq!(image.get_pixel(1, 1).0, [255, 255, 255, 255]);
}

#[test]
fn bands_blend_additively_and_clamp() {
    let stack = two_frame_stack();
    let red = BandSpec {
        palette: Some("#f00".into()),
        ..BandSpec::bare(1)
    };
    let green = BandSpec {
        palette: Some("#0f0".into()),
        ..BandSpec::bare(1)
    };
    let white = BandSpec::bare(1);
    let image = composite(&stack, &[red.clone(), green]).expect("two bands");
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 0, 255]);

    let image = composite(&stack, &[red, white]).expect("saturating");
    assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn out_of_range_frame_is_rejected() {
    let stack = two_frame_stack();
    let error = composite(&stack, &[BandSpec::bare(2)]).expect_err("frame");
    assert!(matches!(
        error,
        RenderError::FrameOutOfRange { frame: 2, frames: 2 }
    ));
}

#[test]
fn empty_band_list_is_rejected() {
    let stack = two_frame_stack();
    assert!(matches!(
        composite(&stack, &[]),
        Err(RenderError::NoBands)
    ));
}
