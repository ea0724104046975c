//! Wallet balance models.

use serde::{Deserialize, Serialize};

/// Smallest units per whole coin.
pub const COIN: i64 = 100_000_000;

/// A wallet balance report, in smallest units.
///
/// Immutable per update; a newer snapshot supersedes the old one.
/// The confirmed balance may be negative per wallet accounting and is
/// never clamped here; unconfirmed and immature are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub confirmed: i64,
    pub unconfirmed: i64,
    pub immature: i64,
}

/// Fiat values derived from the confirmed balance and the latest quotes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FiatQuotes {
    pub eur: f64,
    pub usd: f64,
    /// Whether the immature-balance line should be visible.
    pub show_immature: bool,
}

impl FiatQuotes {
    /// Renders the combined fiat label, e.g. `12.34€/$13.57`.
    pub fn label(&self) -> String {
        format!("{:.2}€/${:.2}", self.eur, self.usd)
    }
}
