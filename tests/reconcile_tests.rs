use lightcurve_rs::analysis::{ReconcileConfig, TransitCandidate, reconcile_candidates};

fn scored(center: f64, start: f64, end: f64, score: f64) -> TransitCandidate {
    TransitCandidate::new(center, start, end, 0.01).with_score(score)
}

#[test]
fn near_duplicate_keeps_higher_score() {
    let a = scored(5.0, 4.9, 5.1, 3.0);
    let b = scored(5.002, 4.9, 5.1, 5.0);

    let merged = reconcile_candidates(&[a], &[b], &ReconcileConfig::default());
    assert_eq!(merged, vec![b]);

    let swapped = reconcile_candidates(&[b], &[a], &ReconcileConfig::default());
    assert_eq!(swapped, vec![b]);
}

#[test]
fn distant_candidates_are_kept_and_ranked() {
    let external = [scored(1.0, 0.9, 1.1, 2.0), scored(8.0, 7.9, 8.1, 9.0)];
    let local = [scored(4.0, 3.9, 4.1, 5.0)];

    let merged = reconcile_candidates(&external, &local, &ReconcileConfig::default());
    let centers: Vec<f64> = merged.iter().map(|c| c.center_time).collect();
    assert_eq!(centers, vec![8.0, 4.0, 1.0]);
}

#[test]
fn equal_rank_duplicate_keeps_first_seen() {
    let external = scored(3.0, 2.9, 3.1, 4.0);
    let local = TransitCandidate {
        depth: 0.5,
        ..scored(3.0005, 2.9, 3.1, 4.0)
    };
    let merged = reconcile_candidates(&[external], &[local], &ReconcileConfig::default());
    assert_eq!(merged, vec![external]);
}

#[test]
fn unscored_candidates_rank_by_depth() {
    let shallow = TransitCandidate::new(1.0, 0.9, 1.1, 0.01);
    let deep = TransitCandidate::new(2.0, 1.9, 2.1, 0.04);
    let merged = reconcile_candidates(&[shallow], &[deep], &ReconcileConfig::default());
    assert_eq!(merged, vec![deep, shallow]);
}

#[test]
fn wider_proximity_ratio_merges_more() {
    let a = scored(5.0, 4.5, 5.5, 1.0);
    let b = scored(5.3, 4.8, 5.8, 2.0);
    let strict = reconcile_candidates(&[a], &[b], &ReconcileConfig::default());
    assert_eq!(strict.len(), 2);

    let loose = ReconcileConfig {
        proximity_ratio: 0.5,
        ..ReconcileConfig::default()
    };
    assert_eq!(reconcile_candidates(&[a], &[b], &loose), vec![b]);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ReconcileConfig {
        proximity_ratio: f64::NAN,
        ..ReconcileConfig::default()
    };
    assert!(config.validate().is_err());
}
