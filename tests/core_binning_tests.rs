use lightcurve_rs::core::{DEFAULT_BIN_TARGET, Series, SeriesStore, bin_block_size, bin_series};

fn linear_ramp(len: usize) -> Series {
    Series::new(
        (0..len).map(|i| i as f64).collect(),
        (0..len).map(|i| i as f64).collect(),
    )
}

#[test]
fn short_series_is_returned_unchanged() {
    let series = Series::new(vec![0.0, 1.0, 2.5], vec![1.0, 0.9, 1.1]);
    assert_eq!(bin_series(&series, DEFAULT_BIN_TARGET), series);

    let exact = linear_ramp(DEFAULT_BIN_TARGET);
    assert_eq!(bin_series(&exact, DEFAULT_BIN_TARGET), exact);
}

#[test]
fn ramp_blocks_average_exactly() {
    let series = linear_ramp(1000);
    assert_eq!(bin_block_size(1000, 600), 2);

    let binned = bin_series(&series, 600);
    assert_eq!(binned.len(), 500);
    assert!(binned.len() <= 600);
    for (block, (&time, &flux)) in binned.time.iter().zip(&binned.flux).enumerate() {
        let expected = 2.0 * block as f64 + 0.5;
        assert_eq!(time, expected);
        assert_eq!(flux, expected);
    }
}

#[test]
fn trailing_partial_block_averages_what_it_has() {
    let series = linear_ramp(7);
    let binned = bin_series(&series, 3);
    assert_eq!(bin_block_size(7, 3), 3);
    assert_eq!(binned.time, vec![1.0, 4.0, 6.0]);
    assert_eq!(binned.flux, vec![1.0, 4.0, 6.0]);
}

#[test]
fn binning_is_idempotent_once_below_target() {
    let once = bin_series(&linear_ramp(5000), 600);
    let twice = bin_series(&once, 600);
    assert_eq!(once, twice);
}

#[test]
fn store_recomputes_binned_curve_when_processed_changes() {
    let mut store = SeriesStore::new(Series::default(), linear_ramp(1200), 600);
    assert_eq!(store.binned().len(), 600);

    store.set_processed(linear_ramp(10));
    assert_eq!(store.binned(), &linear_ramp(10));

    store.set_bin_target(5);
    assert_eq!(store.binned().len(), 5);
}
