use approx::assert_relative_eq;
use areachart_rs::api::{ChartEngine, ChartEngineConfig};
use areachart_rs::core::{ChartLayout, Dataset, Margins, Sample, Series};
use areachart_rs::render::NullRenderer;
use areachart_rs::synth::SyntheticConfig;

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init")
}

fn single_series_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    dataset.insert(
        "close",
        Series::from_samples(vec![
            Sample::new(0.0, 10.0),
            Sample::new(100.0, 20.0),
            Sample::new(250.0, 5.0),
            Sample::new(1_000.0, 12.0),
        ]),
    );
    dataset
}

#[test]
fn empty_engine_has_no_scales_or_data() {
    let engine = engine();
    assert!(!engine.has_data());
    assert!(engine.map_time_to_pixel(0.0).is_err());
    assert!(engine.map_value_to_pixel(0.0).is_err());
    assert!(engine.time_domain().is_err());
}

#[test]
fn empty_dataset_ignores_pointer_moves() {
    let mut engine = engine();
    engine.pointer_move(100.0, 50.0);

    let tooltip = engine.tooltip_state();
    assert!(!tooltip.visible);
    assert!(tooltip.snap.is_none());
}

#[test]
fn tooltip_snaps_to_nearest_sample() {
    let mut engine = engine();
    engine.set_dataset(single_series_dataset()).expect("set dataset");

    // Aim just right of the t=100 sample; it is still the nearest one.
    let px = engine.map_time_to_pixel(100.0).expect("map time") + 3.0;
    engine.pointer_move(px, 50.0);

    let tooltip = engine.tooltip_state();
    assert!(tooltip.visible);
    let snap = tooltip.snap.expect("snap present");
    assert_eq!(snap.time, 100.0);
    assert_eq!(snap.value, 20.0);
    assert_eq!(snap.series_index, 0);

    // t=100 holds the dataset maximum, so with zero headroom its snapped y
    // sits on the top edge.
    assert_relative_eq!(snap.y, 0.0, epsilon = 1e-9);
    let expected_x = engine.map_time_to_pixel(100.0).expect("map time");
    assert_relative_eq!(snap.x, expected_x, epsilon = 1e-9);
}

#[test]
fn boundary_pixels_snap_to_end_samples() {
    let mut engine = engine();
    engine.set_dataset(single_series_dataset()).expect("set dataset");
    let width = f64::from(engine.plot_viewport().width);

    engine.pointer_move(0.0, 0.0);
    let snap = engine.tooltip_state().snap.expect("left snap");
    assert_eq!(snap.time, 0.0);

    engine.pointer_move(width, 0.0);
    let snap = engine.tooltip_state().snap.expect("right snap");
    assert_eq!(snap.time, 1_000.0);
}

#[test]
fn out_of_plot_pixels_clamp_to_end_samples() {
    let mut engine = engine();
    engine.set_dataset(single_series_dataset()).expect("set dataset");
    let width = f64::from(engine.plot_viewport().width);

    engine.pointer_move(-50.0, 0.0);
    assert_eq!(engine.tooltip_state().snap.expect("snap").time, 0.0);

    engine.pointer_move(width + 50.0, 0.0);
    assert_eq!(engine.tooltip_state().snap.expect("snap").time, 1_000.0);
}

#[test]
fn pointer_leave_hides_tooltip() {
    let mut engine = engine();
    engine.set_dataset(single_series_dataset()).expect("set dataset");

    engine.pointer_move(200.0, 100.0);
    assert!(engine.tooltip_state().visible);

    engine.pointer_leave();
    let tooltip = engine.tooltip_state();
    assert!(!tooltip.visible);
    assert!(tooltip.snap.is_none());
}

#[test]
fn multi_series_tooltip_prefers_time_nearest_series() {
    let mut dataset = Dataset::new();
    dataset.insert(
        "sparse",
        Series::from_samples(vec![Sample::new(0.0, 10.0), Sample::new(1_000.0, 30.0)]),
    );
    dataset.insert(
        "dense",
        Series::from_samples(vec![Sample::new(500.0, 50.0)]),
    );

    let mut engine = engine();
    engine.set_dataset(dataset).expect("set dataset");

    let px = engine.map_time_to_pixel(490.0).expect("map time");
    engine.pointer_move(px, 0.0);

    let snap = engine.tooltip_state().snap.expect("snap present");
    assert_eq!(snap.series_index, 1);
    assert_eq!(snap.time, 500.0);
    assert_eq!(snap.value, 50.0);
}

#[test]
fn set_dataset_clears_stale_snap() {
    let mut engine = engine();
    engine.set_dataset(single_series_dataset()).expect("set dataset");
    engine.pointer_move(300.0, 80.0);
    assert!(engine.tooltip_state().snap.is_some());

    let mut replacement = Dataset::new();
    replacement.insert(
        "close",
        Series::from_samples(vec![Sample::new(5.0, 1.0), Sample::new(6.0, 2.0)]),
    );
    engine.set_dataset(replacement).expect("set dataset");
    assert!(engine.tooltip_state().snap.is_none());
}

#[test]
fn rejected_replacement_leaves_prior_state_intact() {
    let mut engine = engine();
    engine.set_dataset(single_series_dataset()).expect("set dataset");
    let time_domain = engine.time_domain().expect("time domain");
    let value_domain = engine.value_domain().expect("value domain");

    // An all-zero dataset cannot produce a value scale, so the swap must
    // be rejected without committing any of it.
    let mut flat = Dataset::new();
    flat.insert(
        "flat",
        Series::from_samples(vec![Sample::new(10.0, 0.0), Sample::new(11.0, 0.0)]),
    );
    assert!(engine.set_dataset(flat).is_err());

    assert!(engine.has_data());
    assert_eq!(engine.time_domain().expect("time domain"), time_domain);
    assert_eq!(engine.value_domain().expect("value domain"), value_domain);

    let (name, series) = engine.dataset().get_index(0).expect("series");
    assert_eq!(name, "close");
    assert_eq!(series.first(), Some(Sample::new(0.0, 10.0)));

    // Pointer interaction keeps resolving against the prior dataset.
    engine.pointer_move(0.0, 0.0);
    let snap = engine.tooltip_state().snap.expect("snap present");
    assert_eq!(snap.time, 0.0);
    assert_eq!(snap.value, 10.0);
}

#[test]
fn regenerate_replaces_dataset_wholesale() {
    let mut engine = engine();
    engine.regenerate_seeded(24, 1).expect("regenerate");
    let before = engine.dataset().clone();

    engine.regenerate_seeded(24, 2).expect("regenerate");
    let after = engine.dataset().clone();
    assert_ne!(before, after);

    // Every snap after regeneration comes from the new dataset.
    let width = engine.plot_viewport().width;
    let (_, series) = after.get_index(0).expect("series");
    for px in (0..=width).step_by(37) {
        engine.pointer_move(f64::from(px), 0.0);
        let snap = engine.tooltip_state().snap.expect("snap present");
        assert!(series.samples().contains(&Sample::new(snap.time, snap.value)));
    }
}

#[test]
fn regenerate_recomputes_scale_domains() {
    let mut engine = engine();
    engine.regenerate_seeded(24, 3).expect("regenerate");

    let (time_min, time_max) = engine.time_domain().expect("time domain");
    let expected_extent = engine.dataset().time_extent().expect("extent");
    assert_eq!((time_min, time_max), expected_extent);
    assert_eq!(time_max - time_min, 23.0 * 86_400.0);

    let (value_min, value_max) = engine.value_domain().expect("value domain");
    let expected_max = engine.dataset().value_max().expect("value max");
    assert_eq!(value_min, 0.0);
    assert_eq!(value_max, expected_max);
}

#[test]
fn regenerate_honors_synthetic_config() {
    let config = ChartEngineConfig::default().with_synthetic_config(SyntheticConfig {
        series_count: 2,
        value_min: 10.0,
        value_max: 20.0,
    });
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    engine.regenerate_seeded(12, 11).expect("regenerate");
    assert_eq!(engine.dataset().series_count(), 2);
    assert_eq!(engine.dataset().total_samples(), 24);

    let (_, value_max) = engine.value_domain().expect("value domain");
    assert!(value_max < 20.0);
}

#[test]
fn frame_contains_area_per_series_and_tooltip_primitives() {
    let mut dataset = single_series_dataset();
    dataset.insert(
        "second",
        Series::from_samples(vec![
            Sample::new(0.0, 3.0),
            Sample::new(500.0, 7.0),
            Sample::new(1_000.0, 4.0),
        ]),
    );

    let mut engine = engine();
    engine.set_dataset(dataset).expect("set dataset");

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.areas.len(), 2);
    assert_eq!(frame.lines.len(), 2);
    assert!(frame.markers.is_empty());
    assert!(frame.texts.is_empty());

    engine.pointer_move(200.0, 50.0);
    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 3);
    assert_eq!(frame.markers.len(), 1);
    assert_eq!(frame.texts.len(), 1);
}

#[test]
fn empty_dataset_renders_axes_only() {
    let mut engine = engine();
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_area_count, 0);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_marker_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn render_forwards_counts_to_renderer() {
    let mut engine = engine();
    engine.regenerate_seeded(24, 4).expect("regenerate");
    engine.pointer_move(100.0, 100.0);
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_area_count, 1);
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_marker_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn config_json_round_trip() {
    let config = ChartEngineConfig::new(ChartLayout::new(1280, 720))
        .with_headroom_ratio(0.15)
        .with_synthetic_config(SyntheticConfig {
            series_count: 2,
            value_min: 5.0,
            value_max: 50.0,
        });

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_configs_are_rejected_at_engine_init() {
    let consuming_margins = ChartEngineConfig::new(
        ChartLayout::new(100, 100).with_margins(Margins {
            top: 60,
            bottom: 60,
            left: 10,
            right: 10,
        }),
    );
    assert!(ChartEngine::new(NullRenderer::default(), consuming_margins).is_err());

    let negative_headroom = ChartEngineConfig::default().with_headroom_ratio(-0.5);
    assert!(ChartEngine::new(NullRenderer::default(), negative_headroom).is_err());
}

#[test]
fn zero_sample_regeneration_is_rejected() {
    let mut engine = engine();
    assert!(engine.regenerate_seeded(0, 0).is_err());
    assert!(!engine.has_data());
}
