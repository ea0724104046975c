//! Downsampling of raw price series into chart-ready data.

use crate::models::Timeframe;
use crate::models::series::{ChartPoint, ChartSeries, RawSeries, ValueRange};

/// Builds the fixed-length chart series for `timeframe` from one raw
/// payload series.
///
/// Point `i` lands at `now - (samples + 1 - i) * spacing` and reads raw
/// slot `i + 1`; slot 0 is the reserved preamble of the wire format.
/// The value range is folded in the same pass. A payload shorter than
/// the sample count fills the tail with 0.0 samples, which drag the
/// range down with them; short payloads are not detected or rejected.
pub fn build_series(raw: &RawSeries, timeframe: Timeframe, now: i64) -> ChartSeries {
    let samples = timeframe.samples();
    let spacing = timeframe.spacing_secs();
    let base = samples as i64 + 1;

    let mut range = ValueRange::empty();
    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let price = raw.sample(i + 1);
        range.observe(price);
        points.push(ChartPoint {
            at: now - (base - i as i64) * spacing,
            price,
        });
    }

    ChartSeries { points, range }
}
