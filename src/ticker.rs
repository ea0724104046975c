//! Price fetch supervision and trend state.
//!
//! [`TickerClient`] owns the (previous, current) quote pair per market
//! and turns selection changes and timer ticks into single fetch
//! requests against the price service. Completions are applied back on
//! the event loop's thread. Overlapping fetches are tolerated and
//! resolved last-completed-wins, which can briefly show stale data when
//! an older, slower request finishes after a newer one; the
//! `discard_stale` gate detects that case by generation and drops the
//! outdated completion instead.

use tracing::debug;

use crate::models::quote::{Quote, QuoteRing};
use crate::models::{Market, Timeframe, Trend};
use crate::parser::{self, ParsedPayload};

/// Seconds between periodic refreshes.
pub const POLL_PERIOD_SECS: u64 = 300;

/// One fetch the event loop must dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub market: Market,
    pub timeframe: Timeframe,
    /// Issue order of this request; later requests carry larger values.
    pub generation: u64,
    pub url: String,
}

/// The outcome of one applied fetch completion.
#[derive(Clone, Debug)]
pub struct TickerUpdate {
    pub market: Market,
    pub timeframe: Timeframe,
    pub payload: ParsedPayload,
    /// Movement of the fetched market's quote versus before the fetch.
    pub trend: Trend,
}

/// Supervises price fetches and tracks quote history per market.
pub struct TickerClient {
    base_url: String,
    market: Market,
    timeframe: Timeframe,
    eur_ring: QuoteRing,
    usd_ring: QuoteRing,
    generation: u64,
    discard_stale: bool,
}

impl TickerClient {
    pub fn new(base_url: String, discard_stale: bool) -> Self {
        Self {
            base_url,
            market: Market::default(),
            timeframe: Timeframe::default(),
            eur_ring: QuoteRing::default(),
            usd_ring: QuoteRing::default(),
            generation: 0,
            discard_stale,
        }
    }

    pub fn market(&self) -> Market {
        self.market
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Selects a market and starts a refresh.
    pub fn select_market(&mut self, market: Market) -> FetchRequest {
        self.market = market;
        self.request()
    }

    /// Selects a timeframe and starts a refresh.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> FetchRequest {
        self.timeframe = timeframe;
        self.request()
    }

    /// Periodic refresh of the current selection.
    pub fn tick(&mut self) -> FetchRequest {
        self.request()
    }

    /// Rolls the quote rings and issues the next request.
    ///
    /// The previous quotes are captured here, before the fetch
    /// resolves, so even a fast double-fetch yields a meaningful
    /// before/after delta.
    fn request(&mut self) -> FetchRequest {
        self.eur_ring.roll();
        self.usd_ring.roll();
        self.generation += 1;

        FetchRequest {
            market: self.market,
            timeframe: self.timeframe,
            generation: self.generation,
            url: format!(
                "{}?mkt={}&int={}",
                self.base_url,
                self.market.query_index(),
                self.timeframe.query_index()
            ),
        }
    }

    /// Applies a successfully fetched body.
    ///
    /// Updates both quote rings from the payload summary and classifies
    /// the fetched market's trend. Returns `None` when the stale gate
    /// rejects a completion older than the newest issued request.
    pub fn complete(
        &mut self,
        market: Market,
        timeframe: Timeframe,
        generation: u64,
        body: &str,
        fetched_at: i64,
    ) -> Option<TickerUpdate> {
        if self.discard_stale && generation < self.generation {
            debug!(
                generation,
                latest = self.generation,
                "Discarding stale fetch completion"
            );
            return None;
        }

        let payload = parser::parse_payload(body);
        self.eur_ring.accept(Quote {
            market: Market::Eur,
            timeframe,
            price: payload.euro,
            fetched_at,
        });
        self.usd_ring.accept(Quote {
            market: Market::Usd,
            timeframe,
            price: payload.usd,
            fetched_at,
        });

        let trend = self.ring(market).trend();
        Some(TickerUpdate {
            market,
            timeframe,
            payload,
            trend,
        })
    }

    /// Latest (EUR, USD) prices, 0.0 before the first successful fetch.
    pub fn prices(&self) -> (f64, f64) {
        (self.eur_ring.current_price(), self.usd_ring.current_price())
    }

    fn ring(&self, market: Market) -> &QuoteRing {
        match market {
            Market::Eur => &self.eur_ring,
            Market::Usd => &self.usd_ring,
        }
    }
}
