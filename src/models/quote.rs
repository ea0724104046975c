//! Exchange-rate quote models.

use serde::{Deserialize, Serialize};

use super::{Market, Timeframe, Trend};

/// A single exchange-rate observation from the price service.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub market: Market,
    pub timeframe: Timeframe,
    pub price: f64,
    /// Unix timestamp of the fetch completion that produced this quote.
    pub fetched_at: i64,
}

/// The previous/current quote pair tracked per market.
///
/// [`roll`](Self::roll) runs when a fetch is dispatched and
/// [`accept`](Self::accept) when one completes, so the pair always
/// describes an explicit before/after delta even when a fast
/// double-fetch overlaps. A failed fetch touches neither slot.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct QuoteRing {
    previous: Option<Quote>,
    current: Option<Quote>,
}

impl QuoteRing {
    /// Captures the current quote as the comparison baseline.
    pub fn roll(&mut self) {
        self.previous = self.current;
    }

    /// Installs a freshly fetched quote as current.
    pub fn accept(&mut self, quote: Quote) {
        self.current = Some(quote);
    }

    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Quote> {
        self.previous.as_ref()
    }

    /// Price of the current quote, or 0.0 before the first fetch lands.
    pub fn current_price(&self) -> f64 {
        self.current.map_or(0.0, |q| q.price)
    }

    /// Price of the previous quote, or 0.0 when there is none yet.
    pub fn previous_price(&self) -> f64 {
        self.previous.map_or(0.0, |q| q.price)
    }

    /// Classifies the movement between the two slots.
    pub fn trend(&self) -> Trend {
        Trend::classify(self.previous_price(), self.current_price())
    }
}
