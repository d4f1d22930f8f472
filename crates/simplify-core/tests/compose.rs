// File: crates/simplify-core/tests/compose.rs
// Purpose: Series composer contract: ordering, labels, colors, session-wide options, all-or-nothing failure.

mod common;

use common::random_walk;
use simplify_core::compose::SIMPLIFIED_SUFFIX;
use simplify_core::{
    simplify, ComposeOptions, ErrorKind, InvalidInput, Palette, Point, Series, SeriesComposer, SimplifyError,
    SimplifyOptions,
};

fn inputs() -> Vec<Series> {
    vec![
        Series::new("requests", random_walk(400, 1)),
        Series::new("errors", random_walk(300, 2)),
        Series::new("latency", random_walk(200, 3)),
    ]
}

#[test]
fn compose_preserves_order_and_applies_same_options() {
    let opts = SimplifyOptions::fast(0.8);
    let composer = SeriesComposer::new(ComposeOptions::simplified(opts));
    let out = composer.compose(inputs()).unwrap();

    assert_eq!(out.len(), 3);
    for (rendered, input) in out.iter().zip(inputs()) {
        assert_eq!(rendered.name, format!("{}{}", input.name, SIMPLIFIED_SUFFIX));
        assert_eq!(rendered.data, simplify(&input.points, &opts).unwrap());
    }
}

#[test]
fn colors_follow_the_palette_in_input_order() {
    let out = SeriesComposer::new(ComposeOptions::passthrough().with_scheme("spectrum14"))
        .compose(inputs())
        .unwrap();
    let mut palette = Palette::spectrum14();
    for rendered in &out {
        assert_eq!(rendered.color, palette.color());
    }
    // A new session starts the palette over.
    let again = SeriesComposer::new(ComposeOptions::passthrough().with_scheme("spectrum14"))
        .compose(inputs())
        .unwrap();
    assert_eq!(again[0].color, out[0].color);
}

#[test]
fn passthrough_forwards_points_verbatim() {
    let out = SeriesComposer::new(ComposeOptions::passthrough()).compose(inputs()).unwrap();
    for (rendered, input) in out.iter().zip(inputs()) {
        assert_eq!(rendered.name, input.name);
        assert_eq!(rendered.data, input.points);
    }
}

#[test]
fn one_bad_series_fails_the_whole_session() {
    let mut series = inputs();
    series[1].points[10] = Point::new(10.0, f64::INFINITY);
    let err = SeriesComposer::default().compose(series).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let unnamed = vec![Series::new("  ", vec![Point::new(0.0, 0.0)])];
    assert_eq!(
        SeriesComposer::default().compose(unnamed).unwrap_err(),
        SimplifyError::InvalidInput(InvalidInput::EmptySeriesName)
    );
}

#[test]
fn invalid_session_tolerance_is_rejected_up_front() {
    let composer = SeriesComposer::new(ComposeOptions::simplified(SimplifyOptions::new(-1.0)));
    assert!(composer.compose(Vec::new()).is_err());
}

#[test]
fn empty_and_tiny_series_pass_through_the_simplifier() {
    let series = vec![
        Series::new("empty", Vec::new()),
        Series::from_xy("single", &[(0.0, 1.0)]),
    ];
    let out = SeriesComposer::default().compose(series).unwrap();
    assert!(out[0].data.is_empty());
    assert_eq!(out[1].data_xy(), vec![(0.0, 1.0)]);
}
