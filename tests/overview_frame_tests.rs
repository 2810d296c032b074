use lightcurve_rs::api::{LightCurveViewer, ViewerConfig};
use lightcurve_rs::core::{Series, Viewport};
use lightcurve_rs::render::{DrawLayer, FrameStatus, NoDataReason, NullRenderer};

fn viewer(series: Series) -> LightCurveViewer<NullRenderer> {
    LightCurveViewer::with_curves(
        NullRenderer::default(),
        ViewerConfig::new(Viewport::new(668, 248)),
        series.clone(),
        series,
    )
    .expect("viewer init")
}

fn ramp() -> Series {
    let time: Vec<f64> = (0..=100).map(f64::from).collect();
    let flux: Vec<f64> = (0..=100).map(|i| 1.0 - 0.001 * f64::from(i % 3)).collect();
    Series::new(time, flux)
}

#[test]
fn overview_spans_full_surface_without_window() {
    let viewer = viewer(ramp());
    let frame = viewer
        .build_overview_frame(Viewport::new(400, 40))
        .expect("overview");

    assert_eq!(frame.status, FrameStatus::Rendered);
    assert_eq!(frame.layer_order(), vec![DrawLayer::Overview]);
    let polyline = frame.polylines().next().expect("overview line");
    assert_eq!(polyline.points.len(), 101);
    assert_eq!(polyline.points[0].0, 0.0);
    assert_eq!(polyline.points[100].0, 400.0);
    assert_eq!(frame.rects().count(), 0);
}

#[test]
fn overview_marks_current_window() {
    let mut viewer = viewer(ramp());
    viewer
        .set_forced_view_range(Some((25.0, 50.0)))
        .expect("forced range");

    let frame = viewer
        .build_overview_frame(Viewport::new(400, 40))
        .expect("overview");
    let window = frame.rects().next().expect("window rect");
    assert_eq!(window.x, 100.0);
    assert_eq!(window.width, 100.0);
    assert_eq!(window.height, 40.0);
    assert_eq!(window.border_width, 1.0);
    frame.validate().expect("valid overview");
}

#[test]
fn overview_of_empty_curves_is_empty_no_data_frame() {
    let viewer = viewer(Series::default());
    let frame = viewer
        .build_overview_frame(Viewport::new(400, 40))
        .expect("overview");
    assert_eq!(frame.status, FrameStatus::NoData(NoDataReason::EmptySeries));
    assert!(frame.is_empty());
}

#[test]
fn overview_rejects_zero_sized_surface() {
    let viewer = viewer(ramp());
    assert!(viewer.build_overview_frame(Viewport::new(0, 40)).is_err());
}
