//! Fiat reconciliation of the wallet balance.

use crate::models::balance::{BalanceSnapshot, COIN, FiatQuotes};

/// Recomputes display-ready fiat values whenever the balance or the
/// exchange rate moves.
///
/// The confirmed balance is truncated to whole coins *before* the fiat
/// multiply, so sub-coin fractions never contribute to the fiat value.
/// The wallet has always displayed it this way; keep the truncation.
#[derive(Debug, Default)]
pub struct BalanceReconciler {
    snapshot: Option<BalanceSnapshot>,
    euro: f64,
    usd: f64,
}

impl BalanceReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, if the wallet has reported one.
    pub fn snapshot(&self) -> Option<&BalanceSnapshot> {
        self.snapshot.as_ref()
    }

    /// Applies a new balance snapshot and recomputes the fiat pair.
    pub fn on_balance(&mut self, snapshot: BalanceSnapshot) -> FiatQuotes {
        self.snapshot = Some(snapshot);
        self.quotes()
    }

    /// Applies a new exchange-rate pair and recomputes the fiat pair.
    pub fn on_quote(&mut self, euro: f64, usd: f64) -> FiatQuotes {
        self.euro = euro;
        self.usd = usd;
        self.quotes()
    }

    fn quotes(&self) -> FiatQuotes {
        let snapshot = self.snapshot.unwrap_or_default();
        // i64 division truncates toward zero: 1.5 coins count as 1.
        let whole = (snapshot.confirmed / COIN) as f64;
        FiatQuotes {
            eur: whole * self.euro,
            usd: whole * self.usd,
            show_immature: snapshot.immature != 0,
        }
    }
}
