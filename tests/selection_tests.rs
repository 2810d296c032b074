use approx::assert_abs_diff_eq;
use lightcurve_rs::ViewerError;
use lightcurve_rs::analysis::TransitCandidate;
use lightcurve_rs::api::{LightCurveViewer, ViewerConfig};
use lightcurve_rs::core::{Segment, Series, ViewRange, Viewport};
use lightcurve_rs::interaction::PointerMode;
use lightcurve_rs::render::NullRenderer;

fn viewer() -> LightCurveViewer<NullRenderer> {
    let time: Vec<f64> = (0..=100).map(f64::from).collect();
    let flux = vec![1.0; time.len()];
    let series = Series::new(time, flux);
    LightCurveViewer::with_curves(
        NullRenderer::default(),
        ViewerConfig::new(Viewport::new(668, 248)),
        series.clone(),
        series,
    )
    .expect("viewer init")
}

#[test]
fn selecting_candidate_frames_it_with_padding() {
    let mut viewer = viewer();
    viewer.set_external_candidates(vec![TransitCandidate::new(11.0, 10.0, 12.0, 0.02)]);

    viewer.select_candidate(Some(0)).expect("select");
    assert_eq!(viewer.selected_candidate(), Some(0));
    let range = viewer.visible_range().expect("range");
    assert_abs_diff_eq!(range.lo, 8.4, epsilon = 1e-9);
    assert_abs_diff_eq!(range.hi, 13.6, epsilon = 1e-9);
}

#[test]
fn framing_near_the_edge_is_clamped_to_extent() {
    let mut viewer = viewer();
    viewer.set_external_candidates(vec![TransitCandidate::new(1.0, 0.5, 1.5, 0.02)]);

    viewer.select_candidate(Some(0)).expect("select");
    let range = viewer.visible_range().expect("range");
    assert_eq!(range.lo, 0.0);
    assert_abs_diff_eq!(range.hi, 2.3, epsilon = 1e-9);
}

#[test]
fn zero_duration_candidate_uses_extent_based_pad() {
    let mut viewer = viewer();
    viewer.set_external_candidates(vec![TransitCandidate::new(50.0, 50.0, 50.0, 0.02)]);

    viewer.select_candidate(Some(0)).expect("select");
    let range = viewer.visible_range().expect("range");
    assert_abs_diff_eq!(range.lo, 48.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.hi, 52.0, epsilon = 1e-9);
}

#[test]
fn clearing_selection_keeps_viewport() {
    let mut viewer = viewer();
    viewer.set_external_candidates(vec![TransitCandidate::new(11.0, 10.0, 12.0, 0.02)]);
    viewer.select_candidate(Some(0)).expect("select");
    let framed = viewer.visible_range();

    viewer.select_candidate(None).expect("clear");
    assert_eq!(viewer.selected_candidate(), None);
    assert_eq!(viewer.visible_range(), framed);
}

#[test]
fn out_of_range_candidate_index_is_rejected() {
    let mut viewer = viewer();
    let err = viewer.select_candidate(Some(0)).expect_err("no candidates");
    assert!(matches!(err, ViewerError::InvalidData(_)));
    assert_eq!(viewer.selected_candidate(), None);
}

#[test]
fn selection_during_drag_cancels_the_pan() {
    let mut viewer = viewer();
    viewer.set_external_candidates(vec![TransitCandidate::new(11.0, 10.0, 12.0, 0.02)]);

    viewer.pointer_down(300.0, 100.0);
    assert_eq!(viewer.pointer_mode(), PointerMode::Panning);
    viewer.select_candidate(Some(0)).expect("select");
    assert_eq!(viewer.pointer_mode(), PointerMode::Hovering);

    let framed = viewer.visible_range();
    viewer.pointer_move(500.0, 100.0);
    assert_eq!(viewer.visible_range(), framed);
}

#[test]
fn shrinking_candidate_list_drops_stale_selection() {
    let mut viewer = viewer();
    viewer.set_external_candidates(vec![
        TransitCandidate::new(11.0, 10.0, 12.0, 0.05),
        TransitCandidate::new(61.0, 60.0, 62.0, 0.02),
    ]);
    viewer.select_candidate(Some(1)).expect("select");

    viewer.set_external_candidates(vec![TransitCandidate::new(11.0, 10.0, 12.0, 0.05)]);
    assert_eq!(viewer.selected_candidate(), None);
}

#[test]
fn explicit_segment_is_framed_without_padding() {
    let mut viewer = viewer();
    viewer.set_segments(Some(vec![
        Segment::new(0, 0.0, 30.0),
        Segment::new(1, 30.0, 75.0),
    ]));

    viewer.select_segment(1).expect("segment");
    assert_eq!(viewer.visible_range(), Some(ViewRange::new(30.0, 75.0)));
    assert_eq!(viewer.state().selected_segment(), Some(1));
    assert!(viewer.select_segment(2).is_err());
}

#[test]
fn synthesized_segments_cover_extent() {
    let viewer = viewer();
    let segments = viewer.effective_segments();
    // 101 samples at ~50 per segment.
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start, 0.0);
    assert_eq!(segments[0].end, 50.0);
    assert_eq!(segments[1].end, 100.0);
}

#[test]
fn forced_range_is_validated_and_clamped() {
    let mut viewer = viewer();
    assert!(viewer.set_forced_view_range(Some((40.0, 20.0))).is_err());
    assert!(viewer.set_forced_view_range(Some((f64::NAN, 20.0))).is_err());
    assert!(viewer.set_forced_view_range(Some((5.0, 5.0))).is_err());

    viewer.set_forced_view_range(Some((-50.0, 60.0))).expect("forced range");
    assert_eq!(viewer.visible_range(), Some(ViewRange::new(0.0, 60.0)));

    viewer.set_forced_view_range(None).expect("reset");
    assert_eq!(viewer.state().view_range(), None);
    assert_eq!(viewer.visible_range(), Some(ViewRange::new(0.0, 100.0)));
}

#[test]
fn reset_view_returns_to_full_extent() {
    let mut viewer = viewer();
    viewer.set_forced_view_range(Some((10.0, 20.0))).expect("forced range");
    viewer.reset_view();
    assert_eq!(viewer.visible_range(), Some(ViewRange::new(0.0, 100.0)));
}

#[test]
fn top_candidate_framing_uses_wider_pad() {
    let mut viewer = viewer();
    assert!(!viewer.frame_top_candidate());

    viewer.set_external_candidates(vec![
        TransitCandidate::new(71.0, 70.0, 72.0, 0.01).with_score(2.0),
        TransitCandidate::new(31.0, 30.0, 32.0, 0.01).with_score(6.0),
    ]);
    assert!(viewer.frame_top_candidate());
    let range = viewer.visible_range().expect("range");
    assert_abs_diff_eq!(range.lo, 28.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.hi, 34.0, epsilon = 1e-9);
    assert_eq!(viewer.selected_candidate(), None);
}

#[test]
fn new_curves_reset_viewport_and_segment_selection() {
    let mut viewer = viewer();
    viewer.select_segment(0).expect("segment");
    assert!(viewer.state().view_range().is_some());

    let series = Series::new(vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 1.0]);
    viewer.set_curves(series.clone(), series);
    assert_eq!(viewer.state().view_range(), None);
    assert_eq!(viewer.state().selected_segment(), None);
}
