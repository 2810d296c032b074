use crate::core::series::Series;

/// Default number of points the binned overlay aims for.
pub const DEFAULT_BIN_TARGET: usize = 600;

/// Block size used to shrink `len` samples to at most `target` points.
#[must_use]
pub fn bin_block_size(len: usize, target: usize) -> usize {
    if target == 0 {
        return 1;
    }
    len.div_ceil(target).max(1)
}

/// Block-averages `series` down to at most `target` points.
///
/// Series already at or below the target come back unchanged. Otherwise the
/// samples are split into contiguous blocks of `ceil(len / target)` and each
/// block contributes the mean time and mean flux of its finite pairs. Blocks
/// without any finite pair are dropped.
#[must_use]
pub fn bin_series(series: &Series, target: usize) -> Series {
    let len = series.len();
    if target == 0 || len <= target {
        return series.clone();
    }

    let block = bin_block_size(len, target);
    let blocks = len.div_ceil(block);
    let mut time = Vec::with_capacity(blocks);
    let mut flux = Vec::with_capacity(blocks);

    for (time_block, flux_block) in series.time[..len]
        .chunks(block)
        .zip(series.flux[..len].chunks(block))
    {
        let mut sum_t = 0.0;
        let mut sum_f = 0.0;
        let mut count = 0usize;
        for (&t, &f) in time_block.iter().zip(flux_block) {
            if t.is_finite() && f.is_finite() {
                sum_t += t;
                sum_f += f;
                count += 1;
            }
        }
        if count > 0 {
            time.push(sum_t / count as f64);
            flux.push(sum_f / count as f64);
        }
    }

    Series::new(time, flux)
}
