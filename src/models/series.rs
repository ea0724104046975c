//! Raw and chart-ready price series models.

use serde::{Deserialize, Serialize};

use super::{Market, Timeframe};

/// The series tokenization of one price-service payload.
///
/// Slot 0 is the preamble before the first series marker and is never
/// charted. Tokens that failed numeric conversion are kept as `None` so
/// the missing-token case stays distinguishable internally; every read
/// substitutes `0.0`, matching what the dashboard has always displayed.
/// Not retained beyond one fetch cycle.
#[derive(Clone, Debug, Default)]
pub struct RawSeries {
    tokens: Vec<Option<f64>>,
}

impl RawSeries {
    pub fn new(tokens: Vec<Option<f64>>) -> Self {
        Self { tokens }
    }

    /// Number of raw slots, preamble included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Value at raw slot `i`; unparseable or out-of-range slots read 0.0.
    pub fn sample(&self, i: usize) -> f64 {
        self.tokens.get(i).copied().flatten().unwrap_or(0.0)
    }
}

/// One downsampled chart point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Unix timestamp of the sample.
    pub at: i64,
    pub price: f64,
}

/// Value range of a chart series.
///
/// Starts at the degenerate `(min=1, max=0)` so that any observed data
/// point overwrites both bounds. Consumers must treat an inverted range
/// as "no data", never as a valid axis range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// The degenerate starting range.
    pub fn empty() -> Self {
        Self { min: 1.0, max: 0.0 }
    }

    /// Folds one sample into the range.
    pub fn observe(&mut self, y: f64) {
        if self.max < y {
            self.max = y;
        }
        if self.min > y {
            self.min = y;
        }
    }

    /// Whether at least one sample has been observed.
    pub fn has_data(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::empty()
    }
}

/// A chart-ready series: fixed-length points plus their value range.
///
/// Rebuilt wholesale on every fetch; there is no incremental update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub range: ValueRange,
}

/// Axis metadata handed to the chart sink alongside the series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AxisSpec {
    /// y-axis label, e.g. `HTH/EUR`.
    pub pair_label: &'static str,
    /// x-axis window as (start, end) unix timestamps.
    pub window: (i64, i64),
    /// Tick label format understood by the chart widget.
    pub tick_format: &'static str,
}

impl AxisSpec {
    pub fn new(market: Market, timeframe: Timeframe, now: i64) -> Self {
        Self {
            pair_label: market.axis_label(),
            window: (now - timeframe.window_secs(), now),
            tick_format: timeframe.tick_format(),
        }
    }
}
