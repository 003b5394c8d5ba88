use std::cell::RefCell;
use std::rc::Rc;

use super::{
    AxisDescriptor, AxisKind, ChannelInfo, FrameIndexModel, ModelError, ModelEvent, SelectionMode,
    StylePatch,
};

fn test_axes() -> Vec<AxisDescriptor> {
    vec![
        AxisDescriptor::new(AxisKind::Channel, 3, 1),
        AxisDescriptor::new(AxisKind::Z, 5, 3),
        AxisDescriptor::new(AxisKind::Time, 4, 15),
    ]
}

fn test_channels() -> Vec<ChannelInfo> {
    vec![
        ChannelInfo::new("DAPI", 0),
        ChannelInfo::new("GFP", 1),
        ChannelInfo::new("TRITC", 2),
    ]
}

fn test_model() -> FrameIndexModel {
    FrameIndexModel::new(test_axes(), test_channels()).expect("model")
}

fn currents(model: &FrameIndexModel) -> Vec<usize> {
    model.axes().iter().map(|axis| axis.current).collect()
}

#[test]
fn linear_frame_is_weighted_sum() {
    let mut model = test_model();
    assert_eq!(model.set_axis_current(AxisKind::Z, 2).expect("z"), 6);
    assert_eq!(model.set_axis_current(AxisKind::Time, 3).expect("t"), 51);
    assert_eq!(model.set_axis_current(AxisKind::Channel, 1).expect("c"), 52);
    assert_eq!(model.max_frame(), 59);
}

#[test]
fn set_linear_frame_inverts_weighted_sum() {
    let mut model = test_model();
    for frame in 0..=model.max_frame() {
        model.set_linear_frame(frame).expect("frame");
        assert_eq!(model.linear_frame(), frame);
    }
}

#[test]
fn axis_edit_then_frame_roundtrip_is_idempotent() {
    let mut model = test_model();
    let frame = model.set_axis_current(AxisKind::Z, 4).expect("z");
    let before = currents(&model);
    model.set_linear_frame(frame).expect("frame");
    assert_eq!(currents(&model), before);
}

#[test]
fn unknown_axis_is_rejected() {
    let mut model = test_model();
    let error = model.set_axis_current(AxisKind::Xy, 0).expect_err("unknown");
    assert!(matches!(error, ModelError::UnknownAxis { axis: AxisKind::Xy }));
}

#[test]
fn out_of_range_index_leaves_axis_unchanged() {
    let mut model = test_model();
    model.set_axis_current(AxisKind::Z, 2).expect("z");
    let error = model.set_axis_current(AxisKind::Z, 5).expect_err("range");
    assert!(matches!(
        error,
        ModelError::IndexOutOfRange { axis: AxisKind::Z, value: 5, range: 5 }
    ));
    assert_eq!(model.axis(AxisKind::Z).expect("axis").current, 2);
}

#[test]
fn out_of_range_frame_is_rejected() {
    let mut model = test_model();
    let error = model.set_linear_frame(60).expect_err("frame");
    assert!(matches!(error, ModelError::FrameOutOfRange { frame: 60, max: 59 }));
    assert_eq!(model.linear_frame(), 0);
}

#[test]
fn construction_enables_lowest_channel_when_none_enabled() {
    let model = test_model();
    let enabled = model
        .channels()
        .iter()
        .filter(|channel| channel.enabled)
        .map(|channel| channel.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(enabled, vec!["DAPI"]);
}

#[test]
fn construction_rejects_duplicate_axes() {
    let mut axes = test_axes();
    axes.push(AxisDescriptor::new(AxisKind::Z, 2, 60));
    assert!(matches!(
        FrameIndexModel::new(axes, Vec::new()),
        Err(ModelError::InvalidMetadata(_))
    ));
}

#[test]
fn construction_rejects_inconsistent_strides() {
    let axes = vec![
        AxisDescriptor::new(AxisKind::Channel, 3, 1),
        AxisDescriptor::new(AxisKind::Z, 5, 4),
    ];
    assert!(matches!(
        FrameIndexModel::new(axes, Vec::new()),
        Err(ModelError::InvalidMetadata(_))
    ));
}

#[test]
fn construction_rejects_zero_range() {
    let axes = vec![AxisDescriptor::new(AxisKind::Z, 0, 1)];
    assert!(FrameIndexModel::new(axes, Vec::new()).is_err());
}

#[test]
fn construction_rejects_channel_number_beyond_axis() {
    let channels = vec![ChannelInfo::new("DAPI", 0), ChannelInfo::new("FARRED", 3)];
    assert!(FrameIndexModel::new(test_axes(), channels).is_err());
}

#[test]
fn single_mode_enabling_is_exclusive() {
    let mut model = test_model();
    model.toggle_channel("GFP", true).expect("toggle");
    let enabled = model
        .channels()
        .iter()
        .filter(|channel| channel.enabled)
        .map(|channel| channel.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(enabled, vec!["GFP"]);
}

#[test]
fn disabling_last_channel_fails_and_preserves_state() {
    let mut model = test_model();
    let error = model.toggle_channel("DAPI", false).expect_err("last");
    assert!(matches!(error, ModelError::LastEnabledChannel(_)));
    assert!(model.channels()[0].enabled);
}

#[test]
fn composite_mode_allows_subsets() {
    let mut model = test_model();
    model.set_mode(SelectionMode::Composite);
    model.toggle_channel("GFP", true).expect("gfp");
    model.toggle_channel("TRITC", true).expect("tritc");
    model.toggle_channel("DAPI", false).expect("dapi off");
    let enabled = model
        .channels()
        .iter()
        .filter(|channel| channel.enabled)
        .count();
    assert_eq!(enabled, 2);
}

#[test]
fn switching_to_single_keeps_lowest_enabled_channel() {
    let mut model = test_model();
    model.set_mode(SelectionMode::Composite);
    model.toggle_channel("GFP", true).expect("gfp");
    model.toggle_channel("TRITC", true).expect("tritc");
    model.set_mode(SelectionMode::Single);
    let enabled = model
        .channels()
        .iter()
        .filter(|channel| channel.enabled)
        .map(|channel| channel.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(enabled, vec!["DAPI"]);
}

#[test]
fn band_specs_omit_default_windows() {
    let mut model = test_model();
    model.toggle_channel("GFP", true).expect("toggle");
    model
        .set_channel_style(
            "GFP",
            &StylePatch {
                false_color: Some("#f00".into()),
                ..StylePatch::default()
            },
        )
        .expect("style");
    let bands = model.band_specs();
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].frame, 1);
    assert_eq!(bands[0].palette.as_deref(), Some("#f00"));
    assert_eq!(bands[0].min, None);
    assert_eq!(bands[0].max, None);
}

#[test]
fn band_specs_follow_channel_numbers_and_other_axes() {
    let mut model = test_model();
    model.set_mode(SelectionMode::Composite);
    model.toggle_channel("TRITC", true).expect("tritc");
    model.set_axis_current(AxisKind::Z, 2).expect("z");
    let bands = model.band_specs();
    let frames = bands.iter().map(|band| band.frame).collect::<Vec<_>>();
    // DAPI (channel 0) and TRITC (channel 2) at Z=2.
    assert_eq!(frames, vec![6, 8]);
}

#[test]
fn non_default_window_is_included_in_band() {
    let mut model = test_model();
    model
        .set_channel_style(
            "DAPI",
            &StylePatch {
                min: Some(0.1),
                ..StylePatch::default()
            },
        )
        .expect("style");
    let bands = model.band_specs();
    assert_eq!(bands[0].min, Some(0.1));
    assert_eq!(bands[0].max, Some(1.0));
}

#[test]
fn invalid_window_applies_nothing() {
    let mut model = test_model();
    let error = model
        .set_channel_style(
            "DAPI",
            &StylePatch {
                min: Some(0.5),
                max: Some(0.2),
                ..StylePatch::default()
            },
        )
        .expect_err("window");
    assert!(matches!(error, ModelError::InvalidWindow { .. }));
    assert_eq!(model.channels()[0].min, 0.0);
    assert_eq!(model.channels()[0].max, 1.0);
}

#[test]
fn unknown_channel_is_rejected() {
    let mut model = test_model();
    assert!(matches!(
        model.toggle_channel("CY5", true),
        Err(ModelError::UnknownChannel(_))
    ));
}

#[test]
fn mutations_notify_subscribers_and_queue() {
    let mut model = test_model();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    model.events().subscribe(move |event| {
        sink.borrow_mut().push(event.clone());
    });

    model.set_axis_current(AxisKind::Z, 1).expect("z");
    model.toggle_channel("GFP", true).expect("toggle");

    let seen = seen.borrow();
    assert!(matches!(seen[0], ModelEvent::FrameChanged { frame: 3 }));
    assert!(matches!(seen[1], ModelEvent::StyleChanged { .. }));

    let polled = model.events().poll();
    assert_eq!(polled.len(), 2);
    assert!(model.events().poll().is_empty());
}

#[test]
fn style_spec_serializes_without_default_fields() {
    let mut model = test_model();
    model
        .set_channel_style(
            "DAPI",
            &StylePatch {
                false_color: Some("#00ff00".into()),
                ..StylePatch::default()
            },
        )
        .expect("style");
    let value = serde_json::to_value(model.style_spec()).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({"bands": [{"frame": 0, "palette": "#00ff00"}]})
    );
}
