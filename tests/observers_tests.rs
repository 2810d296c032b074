use std::cell::RefCell;
use std::rc::Rc;

use lightcurve_rs::ViewerError;
use lightcurve_rs::api::{LightCurveViewer, ViewerConfig};
use lightcurve_rs::core::{CurveKind, CurveVisibility, Series, Viewport};
use lightcurve_rs::extensions::{ViewerContext, ViewerEvent, ViewerObserver};
use lightcurve_rs::render::{FrameStatus, NullRenderer};

struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<ViewerEvent>>>,
    contexts: Rc<RefCell<Vec<ViewerContext>>>,
}

impl RecordingObserver {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<ViewerEvent>>>) -> Self {
        Self {
            id: id.into(),
            events,
            contexts: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ViewerObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &ViewerEvent, context: &ViewerContext) {
        self.events.borrow_mut().push(event.clone());
        self.contexts.borrow_mut().push(*context);
    }
}

fn event_kind(event: &ViewerEvent) -> &'static str {
    match event {
        ViewerEvent::CurvesLoaded { .. } => "curves",
        ViewerEvent::ViewModeChanged { .. } => "mode",
        ViewerEvent::VisibilityChanged { .. } => "visibility",
        ViewerEvent::ViewRangeChanged { .. } => "range",
        ViewerEvent::CandidatesChanged { .. } => "candidates",
        ViewerEvent::CandidateSelected { .. } => "candidate_selected",
        ViewerEvent::SegmentSelected { .. } => "segment_selected",
        ViewerEvent::LocalDetectionCompleted { .. } => "local_detection",
        ViewerEvent::PointerMoved { .. } => "pointer_move",
        ViewerEvent::PointerLeft => "pointer_leave",
        ViewerEvent::PanStarted => "pan_start",
        ViewerEvent::PanEnded => "pan_end",
        ViewerEvent::Rendered { .. } => "rendered",
    }
}

fn flat(len: u32) -> Series {
    Series::new((0..len).map(f64::from).collect(), vec![1.0; len as usize])
}

fn viewer() -> LightCurveViewer<NullRenderer> {
    LightCurveViewer::new(
        NullRenderer::default(),
        ViewerConfig::new(Viewport::new(668, 248)),
    )
    .expect("viewer init")
}

#[test]
fn observer_receives_deterministic_event_sequence() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = viewer();
    viewer
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register");

    viewer.set_curves(flat(101), flat(101));
    viewer.set_view_mode(CurveKind::Raw).expect("view mode");
    viewer.set_visibility(CurveVisibility {
        raw: true,
        processed: true,
        binned: false,
    });
    viewer.pointer_move(300.0, 100.0);
    viewer.pointer_down(300.0, 100.0);
    viewer.pointer_move(200.0, 100.0);
    viewer.pointer_up();
    viewer.pointer_leave();
    viewer.render().expect("render");

    let kinds: Vec<&str> = events.borrow().iter().map(event_kind).collect();
    assert_eq!(
        kinds,
        vec![
            "curves",
            "candidates",
            "mode",
            "visibility",
            "mode",
            "pointer_move",
            "pan_start",
            "pointer_move",
            "pan_end",
            "pointer_leave",
            "rendered",
        ]
    );
    assert_eq!(
        events.borrow().last(),
        Some(&ViewerEvent::Rendered {
            status: FrameStatus::Rendered
        })
    );
}

#[test]
fn local_detection_is_reported_to_observers() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = viewer();
    viewer
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register");

    let mut flux = vec![1.0; 3000];
    for value in &mut flux[1490..=1510] {
        *value = 0.9;
    }
    let series = Series::new((0..3000).map(f64::from).collect(), flux);
    viewer.set_curves(series.clone(), series);
    events.borrow_mut().clear();

    let found = viewer.run_local_detection();
    assert_eq!(found.len(), 1);
    assert_eq!(viewer.candidates().len(), 1);
    assert_eq!(viewer.local_candidates(), found.as_slice());
    assert!(viewer.last_detection_diagnostics().is_some());

    let recorded = events.borrow();
    assert_eq!(
        recorded.iter().map(event_kind).collect::<Vec<_>>(),
        vec!["candidates", "local_detection"]
    );
    assert_eq!(
        recorded[1],
        ViewerEvent::LocalDetectionCompleted { candidates: found }
    );
}

#[test]
fn observer_ids_must_be_unique_and_non_empty() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut viewer = viewer();
    viewer
        .register_observer(Box::new(RecordingObserver::new("a", events.clone())))
        .expect("register a");

    let duplicate =
        viewer.register_observer(Box::new(RecordingObserver::new("a", events.clone())));
    assert!(matches!(duplicate, Err(ViewerError::InvalidData(_))));
    let empty = viewer.register_observer(Box::new(RecordingObserver::new("", events.clone())));
    assert!(matches!(empty, Err(ViewerError::InvalidData(_))));

    assert_eq!(viewer.observer_count(), 1);
    assert!(viewer.has_observer("a"));
    assert!(viewer.unregister_observer("a"));
    assert!(!viewer.unregister_observer("a"));
    assert_eq!(viewer.observer_count(), 0);
}

#[test]
fn observers_are_notified_in_registration_order() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let order = Rc::new(RefCell::new(Vec::new()));

    struct Tagged {
        id: &'static str,
        order: Rc<RefCell<Vec<&'static str>>>,
    }
    impl ViewerObserver for Tagged {
        fn id(&self) -> &str {
            self.id
        }
        fn on_event(&mut self, _event: &ViewerEvent, _context: &ViewerContext) {
            self.order.borrow_mut().push(self.id);
        }
    }

    let mut viewer = viewer();
    for id in ["second", "first", "third"] {
        viewer
            .register_observer(Box::new(Tagged {
                id,
                order: order.clone(),
            }))
            .expect("register");
    }
    viewer
        .register_observer(Box::new(RecordingObserver::new("recorder", events)))
        .expect("register recorder");

    viewer.pointer_leave();
    assert_eq!(*order.borrow(), vec!["second", "first", "third"]);
}

#[test]
fn context_reflects_state_after_transition() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let observer = RecordingObserver::new("recorder", events);
    let contexts = observer.contexts.clone();
    let mut viewer = viewer();
    viewer.register_observer(Box::new(observer)).expect("register");

    viewer.set_curves(flat(101), flat(101));
    viewer
        .set_forced_view_range(Some((10.0, 20.0)))
        .expect("forced range");

    let last = *contexts.borrow().last().expect("context");
    assert_eq!(last.full_extent, Some((0.0, 100.0)));
    assert_eq!(last.view_range.map(|range| (range.lo, range.hi)), Some((10.0, 20.0)));
    assert_eq!(last.view_mode, CurveKind::Processed);
}
