use lightcurve_rs::core::{TimeExtent, ViewRange};
use proptest::prelude::*;

const MIN_SPAN_RATIO: f64 = 1e-9;

proptest! {
    #[test]
    fn clamp_stays_inside_extent_with_minimum_span(
        min in -1_000.0f64..1_000.0,
        span in 0.01f64..5_000.0,
        lo in -10_000.0f64..10_000.0,
        width in -5_000.0f64..5_000.0
    ) {
        let extent = TimeExtent::new(min, min + span).expect("extent");
        let clamped = extent.clamp(ViewRange::new(lo, lo + width), MIN_SPAN_RATIO);

        let tolerance = 1e-9 * (1.0 + extent.span() + min.abs());
        prop_assert!(clamped.lo >= extent.min() - tolerance);
        prop_assert!(clamped.hi <= extent.max() + tolerance);
        prop_assert!(clamped.lo <= clamped.hi);
        prop_assert!(clamped.span() >= extent.min_span(MIN_SPAN_RATIO) * (1.0 - 1e-6) - tolerance);
    }

    #[test]
    fn clamp_preserving_span_keeps_narrow_windows_intact(
        min in -1_000.0f64..1_000.0,
        span in 1.0f64..5_000.0,
        width_ratio in 0.01f64..0.99,
        offset in -20_000.0f64..20_000.0
    ) {
        let extent = TimeExtent::new(min, min + span).expect("extent");
        let width = span * width_ratio;
        let shifted = extent.clamp_preserving_span(ViewRange::new(offset, offset + width), MIN_SPAN_RATIO);

        let tolerance = 1e-9 * (1.0 + span + min.abs() + offset.abs());
        prop_assert!((shifted.span() - width).abs() <= tolerance);
        prop_assert!(shifted.lo >= extent.min() - tolerance);
        prop_assert!(shifted.hi <= extent.max() + tolerance);
    }

    #[test]
    fn wide_windows_collapse_to_full_extent(
        min in -1_000.0f64..1_000.0,
        span in 0.5f64..5_000.0,
        extra in 0.001f64..5_000.0,
        offset in -5_000.0f64..5_000.0
    ) {
        let extent = TimeExtent::new(min, min + span).expect("extent");
        let wide = ViewRange::new(offset, offset + extent.span() + extra);
        prop_assert_eq!(extent.clamp_preserving_span(wide, MIN_SPAN_RATIO), extent.full_range());
    }

    #[test]
    fn zoom_keeps_anchor_fixed(
        lo in -1_000.0f64..1_000.0,
        span in 0.1f64..1_000.0,
        anchor_ratio in 0.0f64..1.0,
        factor in 0.1f64..3.0
    ) {
        let range = ViewRange::new(lo, lo + span);
        let anchor = lo + anchor_ratio * span;
        let zoomed = range.zoomed_around(anchor, factor);

        let before = (anchor - range.lo) / range.span();
        let after = (anchor - zoomed.lo) / zoomed.span();
        prop_assert!((before - after).abs() <= 1e-6);
        prop_assert!((zoomed.span() - span * factor).abs() <= 1e-6 * (1.0 + span));
    }
}
