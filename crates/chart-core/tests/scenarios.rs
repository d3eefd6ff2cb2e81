// File: crates/chart-core/tests/scenarios.rs
// Purpose: Reference layouts end to end: three months, empty input, single bar with a max override.

use chart_core::{
    Chart, ChartError, ChartOptions, Color, CommandRecorder, DrawCommand, Dataset, DrawOptions, SeededRandom, Size,
    Theme,
};

fn months() -> Dataset {
    Dataset::from_pairs([("Jan", 50.0), ("Feb", 150.0), ("Mar", 90.0)])
}

#[test]
fn three_months_on_900x600() {
    let chart = Chart::with_random_source(Size::new(900.0, 600.0), months(), ChartOptions::default(), &mut SeededRandom::new(1))
        .expect("valid chart");
    let l = chart.layout();
    assert_eq!(l.vertical_upper_bound, 150.0);
    assert_eq!(l.horizontal_label_freq, 240.0);

    let xs: Vec<f64> = chart.bars().iter().map(|b| b.x).collect();
    assert_eq!(xs, vec![138.0, 378.0, 618.0]);
    assert!(chart.bars().iter().all(|b| b.width == 144.0));
}

#[test]
fn empty_dataset_fails_before_drawing() {
    let err = Chart::new(900.0, 600.0, Dataset::default(), ChartOptions::default()).err();
    assert!(matches!(err, Some(ChartError::DegenerateDataset(_))));
}

#[test]
fn unlaid_out_container_is_rejected() {
    let err = Chart::in_container(Size::new(0.0, 0.0), None, None, months(), ChartOptions::default()).err();
    assert!(matches!(err, Some(ChartError::InvalidDimension { .. })));
}

#[test]
fn single_point_with_max_override() {
    let ds = Dataset::from_pairs([("X", 40.0)]);
    let opts = ChartOptions::default().with_max_value(100.0);
    let chart = Chart::new(900.0, 600.0, ds, opts).expect("valid chart");
    let l = *chart.layout();
    assert_eq!(l.vertical_upper_bound, 100.0);

    let bar = chart.bars()[0];
    assert!((bar.x - bar.slot_gutter() - l.horizontal_margin).abs() < 1e-9);
    assert!((bar.width + 2.0 * bar.slot_gutter() - l.horizontal_axis_width).abs() < 1e-9);
    assert!((bar.height + l.vertical_axis_width * 40.0 / 100.0).abs() < 1e-9);
}

#[test]
fn labels_follow_dataset_order() {
    let chart = Chart::new(900.0, 600.0, months(), ChartOptions::default()).expect("valid chart");
    let mut rec = CommandRecorder::new();
    chart.draw_bar_chart(&mut rec, DrawOptions::immediate());
    let texts: Vec<&str> = rec.texts().collect();
    assert_eq!(texts, vec!["150", "100", "50", "0", "Jan", "Feb", "Mar"]);
}

#[test]
fn min_above_max_is_a_configuration_error() {
    let opts = ChartOptions::default().with_min_value(10.0).with_max_value(5.0);
    let err = Chart::new(900.0, 600.0, months(), opts).err();
    assert!(matches!(err, Some(ChartError::Configuration(_))));
}

#[test]
fn min_override_above_data_is_a_configuration_error() {
    let opts = ChartOptions::default().with_min_value(500.0);
    let err = Chart::new(900.0, 600.0, months(), opts).err();
    assert!(matches!(err, Some(ChartError::Configuration(_))));
}

#[test]
fn negative_max_override_is_a_configuration_error() {
    let ds = Dataset::from_values(&[150.0]);
    let err = Chart::new(900.0, 600.0, ds, ChartOptions::default().with_max_value(-5.0)).err();
    assert!(matches!(err, Some(ChartError::Configuration(_))));
}

#[test]
fn nan_and_negative_heights_are_rejected() {
    for height in [f64::NAN, -600.0] {
        let err = Chart::new(900.0, height, months(), ChartOptions::default()).err();
        assert!(matches!(err, Some(ChartError::InvalidDimension { .. })), "height {height}");
    }
}

#[test]
fn markers_keep_label_color_under_series_color() {
    let red = Color::rgb(200, 0, 0);
    let chart = Chart::new(900.0, 600.0, months(), ChartOptions::default().with_color(red)).expect("valid chart");
    let mut rec = CommandRecorder::new();
    chart.draw_line_chart(&mut rec, DrawOptions::immediate());

    let label = chart.options().theme.label;
    let mut markers = 0;
    for cmd in &rec.commands {
        if let DrawCommand::Circle { color, .. } = cmd {
            assert_eq!(*color, label);
            markers += 1;
        }
    }
    assert_eq!(markers, 3);
    assert!(rec.commands.iter().any(|c| matches!(c, DrawCommand::Line { stroke, .. } if stroke.color == red)));
}

#[test]
fn dark_theme_paints_frame_and_labels() {
    let theme = Theme::dark();
    let chart = Chart::new(900.0, 600.0, months(), ChartOptions::default().with_theme(theme)).expect("valid chart");
    let mut rec = CommandRecorder::new();
    chart.draw_line_chart(&mut rec, DrawOptions::immediate());
    for cmd in &rec.commands {
        match cmd {
            DrawCommand::Text { style, .. } => assert_eq!(style.color, theme.label),
            DrawCommand::Circle { color, .. } => assert_eq!(*color, theme.label),
            _ => {}
        }
    }
    // default series color follows the theme
    assert!(rec.commands.iter().any(|c| matches!(c, DrawCommand::Line { stroke, .. } if stroke.color == theme.line_stroke)));
}
