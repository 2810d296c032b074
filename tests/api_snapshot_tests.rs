use lightcurve_rs::analysis::TransitCandidate;
use lightcurve_rs::api::{
    LightCurveViewer, VIEWER_SNAPSHOT_JSON_SCHEMA_V1, ViewerConfig, ViewerSnapshot,
    ViewerSnapshotJsonContractV1,
};
use lightcurve_rs::core::{CurveKind, CurveVisibility, Series, ViewRange, Viewport};
use lightcurve_rs::interaction::PointerMode;
use lightcurve_rs::render::NullRenderer;

fn ramp(len: u32) -> Series {
    let time: Vec<f64> = (0..len).map(f64::from).collect();
    let flux: Vec<f64> = (0..len).map(|i| 1.0 - 0.01 * f64::from(i % 4)).collect();
    Series::new(time, flux)
}

fn viewer() -> LightCurveViewer<NullRenderer> {
    let mut viewer = LightCurveViewer::with_curves(
        NullRenderer::default(),
        ViewerConfig::new(Viewport::new(668, 248)),
        ramp(101),
        ramp(101),
    )
    .expect("viewer init");
    viewer.set_external_candidates(vec![
        TransitCandidate::new(20.0, 18.75, 21.25, 0.03).with_score(4.0),
        TransitCandidate::new(70.0, 68.75, 71.25, 0.02).with_score(2.0),
    ]);
    viewer
}

#[test]
fn snapshot_reflects_viewer_state() {
    let mut viewer = viewer();
    viewer
        .set_forced_view_range(Some((10.0, 60.0)))
        .expect("forced range");
    viewer.pointer_move(356.0, 100.0);

    let snapshot = viewer.snapshot();
    assert_eq!(snapshot.viewport, Viewport::new(668, 248));
    assert_eq!(snapshot.view_mode, CurveKind::Processed);
    assert_eq!(snapshot.full_extent, Some((0.0, 100.0)));
    assert_eq!(snapshot.view_range, Some(ViewRange::new(10.0, 60.0)));
    assert_eq!(snapshot.pointer_mode, PointerMode::Hovering);
    assert_eq!(snapshot.hover.map(|hover| hover.time), Some(35.0));
    assert_eq!(snapshot.candidates.len(), 2);
    assert_eq!(snapshot.segments.len(), 2);
    assert_eq!(snapshot.raw_len, 101);
    assert_eq!(snapshot.processed_len, 101);
    assert_eq!(snapshot.binned_len, 101);
}

#[test]
fn contract_v1_round_trips_through_compat_parser() {
    let mut viewer = viewer();
    viewer.select_candidate(Some(1)).expect("select");

    let json = viewer
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let payload: ViewerSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("parse contract");
    assert_eq!(payload.schema_version, VIEWER_SNAPSHOT_JSON_SCHEMA_V1);

    let parsed = ViewerSnapshot::from_json_compat_str(&json).expect("compat parse");
    assert_eq!(parsed, viewer.snapshot());
    assert_eq!(parsed.view_range, Some(ViewRange::new(66.75, 73.25)));
}

#[test]
fn compat_parser_accepts_bare_snapshot() {
    let viewer = viewer();
    let bare = viewer.snapshot().to_json_pretty().expect("serialize");
    let parsed = ViewerSnapshot::from_json_compat_str(&bare).expect("compat parse");
    assert_eq!(parsed.candidates, viewer.snapshot().candidates);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let viewer = viewer();
    let json = viewer
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let bumped = json.replacen("\"schema_version\": 1", "\"schema_version\": 2", 1);
    assert!(ViewerSnapshot::from_json_compat_str(&bumped).is_err());
    assert!(ViewerSnapshot::from_json_compat_str("{ not json").is_err());
}

#[test]
fn restore_reapplies_persisted_view() {
    let mut source = viewer();
    source.set_visibility(CurveVisibility {
        raw: true,
        processed: false,
        binned: true,
    });
    source
        .set_forced_view_range(Some((30.0, 50.0)))
        .expect("forced range");
    source.select_candidate(Some(0)).expect("select");
    let json = source
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");

    let mut target = viewer();
    target.restore_view_from_json(&json).expect("restore");
    assert_eq!(target.visibility(), source.visibility());
    assert_eq!(target.view_mode(), CurveKind::Raw);
    assert_eq!(target.visible_range(), source.visible_range());
    assert_eq!(target.selected_candidate(), Some(0));
}

#[test]
fn restore_drops_selection_past_candidate_list() {
    let mut source = viewer();
    source.select_candidate(Some(1)).expect("select");
    let json = source
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");

    let mut target = LightCurveViewer::with_curves(
        NullRenderer::default(),
        ViewerConfig::new(Viewport::new(668, 248)),
        ramp(101),
        ramp(101),
    )
    .expect("viewer init");
    target.restore_view_from_json(&json).expect("restore");
    assert_eq!(target.selected_candidate(), None);
}
