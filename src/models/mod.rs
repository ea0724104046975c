//! Shared models for the dashboard core.
//!
//! Contains the market/timeframe selection enums, trend classification,
//! and the per-concern model modules (quotes, chart series, balances,
//! recent activity).

pub mod activity;
pub mod balance;
pub mod quote;
pub mod series;

use serde::{Deserialize, Serialize};

/// Ticker symbol of the wallet's native coin.
pub const COIN_TICKER: &str = "HTH";

/// Fiat markets the price service quotes the coin against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[default]
    Eur,
    Usd,
}

impl Market {
    /// Returns the `mkt` query index expected by the price service.
    pub fn query_index(&self) -> u8 {
        match self {
            Market::Eur => 0,
            Market::Usd => 1,
        }
    }

    /// Returns the y-axis label for the chart.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Market::Eur => "HTH/EUR",
            Market::Usd => "HTH/USD",
        }
    }
}

/// Chart timeframes offered by the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    Day,
    Week,
    Month,
}

impl Timeframe {
    /// Returns the `int` query index expected by the price service.
    pub fn query_index(&self) -> u8 {
        match self {
            Timeframe::Day => 0,
            Timeframe::Week => 1,
            Timeframe::Month => 2,
        }
    }

    /// Number of points in a downsampled chart series.
    pub fn samples(&self) -> usize {
        match self {
            Timeframe::Day => 719,
            Timeframe::Week | Timeframe::Month => 499,
        }
    }

    /// Seconds between consecutive chart points.
    pub fn spacing_secs(&self) -> i64 {
        match self {
            Timeframe::Day => 120,
            Timeframe::Week => 1200,
            Timeframe::Month => 2400,
        }
    }

    /// Width of the x-axis window, in seconds.
    pub fn window_secs(&self) -> i64 {
        match self {
            Timeframe::Day => 86_400,
            Timeframe::Week => 600_000,
            Timeframe::Month => 1_200_000,
        }
    }

    /// Axis tick label format understood by the chart widget.
    pub fn tick_format(&self) -> &'static str {
        match self {
            Timeframe::Day => "hh:mm (ddd)",
            Timeframe::Week | Timeframe::Month => "dd/MMM",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Day => "1d",
            Timeframe::Week => "7d",
            Timeframe::Month => "30d",
        }
    }
}

/// Price movement between the previous and current quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    /// Equal quotes; renderers leave the current color untouched.
    Unchanged,
}

impl Trend {
    /// Classifies the movement from `previous` to `current`.
    ///
    /// Exactly one variant holds for any pair of quotes, and
    /// `Unchanged` holds iff they are equal.
    pub fn classify(previous: f64, current: f64) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Unchanged
        }
    }
}
