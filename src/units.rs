//! Coin display-unit formatting.
//!
//! Balance lines are formatted by the core so every renderer shows the
//! same text. The display unit only changes formatting; all arithmetic
//! elsewhere stays in smallest units.

use serde::{Deserialize, Serialize};

use crate::models::COIN_TICKER;

/// Display units for coin amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Coin,
    MilliCoin,
    MicroCoin,
}

impl Unit {
    /// Smallest units per one displayed unit.
    pub fn factor(&self) -> i64 {
        match self {
            Unit::Coin => 100_000_000,
            Unit::MilliCoin => 100_000,
            Unit::MicroCoin => 100,
        }
    }

    /// Decimal places shown for this unit.
    pub fn decimals(&self) -> usize {
        match self {
            Unit::Coin => 8,
            Unit::MilliCoin => 5,
            Unit::MicroCoin => 2,
        }
    }

    /// Unit suffix, e.g. `mHTH`.
    pub fn suffix(&self) -> String {
        match self {
            Unit::Coin => COIN_TICKER.to_string(),
            Unit::MilliCoin => format!("m{COIN_TICKER}"),
            Unit::MicroCoin => format!("µ{COIN_TICKER}"),
        }
    }

    /// Formats an amount of smallest units in this display unit,
    /// without the suffix, e.g. `-1.50000000`.
    pub fn format(&self, amount: i64) -> String {
        let factor = self.factor() as u64;
        let sign = if amount < 0 { "-" } else { "" };
        let magnitude = amount.unsigned_abs();
        let whole = magnitude / factor;
        let frac = magnitude % factor;
        format!("{sign}{whole}.{frac:0width$}", width = self.decimals())
    }

    /// Formats an amount with the unit suffix, e.g. `1.50000000 HTH`.
    pub fn format_with_suffix(&self, amount: i64) -> String {
        format!("{} {}", self.format(amount), self.suffix())
    }
}
