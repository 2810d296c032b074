use lightcurve_rs::core::{Series, bin_block_size, bin_series};
use proptest::prelude::*;

fn series_from(values: &[f64]) -> Series {
    Series::new((0..values.len()).map(|i| i as f64).collect(), values.to_vec())
}

proptest! {
    #[test]
    fn binning_never_exceeds_target(
        values in prop::collection::vec(-10.0f64..10.0, 0..3_000),
        target in 1usize..800
    ) {
        let series = series_from(&values);
        let binned = bin_series(&series, target);

        prop_assert!(binned.len() <= target);
        prop_assert!(binned.has_matching_lengths());
        if series.len() <= target {
            prop_assert_eq!(&binned, &series);
        }
    }

    #[test]
    fn binned_points_are_block_means(
        values in prop::collection::vec(-10.0f64..10.0, 1..2_000),
        target in 1usize..400
    ) {
        let series = series_from(&values);
        let binned = bin_series(&series, target);
        if series.len() > target {
            let block = bin_block_size(series.len(), target);
            for (index, (&time, &flux)) in binned.time.iter().zip(&binned.flux).enumerate() {
                let chunk = &values[index * block..((index + 1) * block).min(values.len())];
                let mean_flux = chunk.iter().sum::<f64>() / chunk.len() as f64;
                let first = (index * block) as f64;
                let mean_time = first + (chunk.len() as f64 - 1.0) / 2.0;
                prop_assert!((flux - mean_flux).abs() <= 1e-9);
                prop_assert!((time - mean_time).abs() <= 1e-9 * (1.0 + mean_time));
            }
        }
    }

    #[test]
    fn binned_times_are_monotonic(
        values in prop::collection::vec(0.5f64..1.5, 601..3_000)
    ) {
        let binned = bin_series(&series_from(&values), 600);
        prop_assert!(binned.time.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
