//! Single-threaded dashboard event loop.
//!
//! All state mutation happens in [`HomeView::handle`], which the async
//! [`run`](HomeView::run) loop drives from one mpsc receiver: timer
//! firings, fetch completions, and wallet notifications arrive as
//! messages and are handled strictly in delivery order. Fetches run on
//! spawned tasks that only ever send a completion message back, so no
//! state needs a lock. Nothing here cancels an outstanding fetch; a
//! hung fetch never delays the timer.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::activity::RecentActivityAdapter;
use crate::balance::BalanceReconciler;
use crate::chart;
use crate::config::AppConfig;
use crate::models::activity::{RecentEntry, TransactionRecord, TxId};
use crate::models::balance::BalanceSnapshot;
use crate::models::series::{AxisSpec, ChartSeries};
use crate::models::{Market, Timeframe, Trend};
use crate::ticker::{FetchRequest, POLL_PERIOD_SECS, TickerClient};
use crate::units::Unit;

/// Paints the dashboard's textual widgets.
pub trait Renderer {
    /// Confirmed/unconfirmed/immature balance lines, pre-formatted in
    /// the active display unit.
    fn show_balances(&mut self, confirmed: &str, unconfirmed: &str, immature: &str);
    /// Combined fiat label plus the trend of the fetched market.
    /// [`Trend::Unchanged`] means: leave the current color alone.
    fn show_fiat(&mut self, label: &str, trend: Trend);
    /// Immature-balance line visibility.
    fn show_immature(&mut self, visible: bool);
    /// Recent-activity rows, already sorted and capped.
    fn show_recent(&mut self, entries: &[RecentEntry]);
    /// Out-of-sync warning visibility.
    fn show_out_of_sync(&mut self, visible: bool);
}

/// Receives chart-ready series data.
pub trait ChartSink {
    fn show_series(&mut self, series: &ChartSeries, axis: &AxisSpec);
}

/// The wallet backend's transaction table.
pub trait WalletSource {
    /// Full table in its natural order. The activity adapter re-queries
    /// this on every table-change notification and keeps no copy.
    fn transactions(&self) -> Vec<TransactionRecord>;
}

/// Messages consumed by the event loop.
#[derive(Debug)]
pub enum HomeMessage {
    /// The periodic refresh timer fired.
    Tick,
    /// A market button was activated.
    MarketSelected(Market),
    /// A timeframe button was activated.
    TimeframeSelected(Timeframe),
    /// A fetch finished, successfully or not.
    FetchCompleted {
        market: Market,
        timeframe: Timeframe,
        generation: u64,
        outcome: crate::Result<String>,
    },
    /// The wallet reported new balances.
    BalanceChanged(BalanceSnapshot),
    /// The wallet's transaction table changed (no payload; re-query).
    TransactionsChanged,
    /// The user picked a different display unit.
    DisplayUnitChanged(Unit),
    /// The wallet's sync state changed.
    SyncStateChanged { synced: bool },
}

/// Dashboard state container wiring the components to the collaborators.
pub struct HomeView<R, C, W> {
    ticker: TickerClient,
    reconciler: BalanceReconciler,
    activity: RecentActivityAdapter,
    unit: Unit,
    renderer: R,
    chart_sink: C,
    wallet: W,
}

impl<R: Renderer, C: ChartSink, W: WalletSource> HomeView<R, C, W> {
    pub fn new(config: &AppConfig, renderer: R, chart_sink: C, wallet: W) -> Self {
        let mut view = Self {
            ticker: TickerClient::new(config.price.url.clone(), config.price.discard_stale),
            reconciler: BalanceReconciler::new(),
            activity: RecentActivityAdapter::new(config.recent_limit),
            unit: Unit::default(),
            renderer,
            chart_sink,
            wallet,
        };
        // Start with the out-of-sync warning until the wallet reports.
        view.renderer.show_out_of_sync(true);
        view
    }

    /// Handles one message.
    ///
    /// Returns the fetch the caller must dispatch when the message
    /// started one; everything else is applied synchronously.
    pub fn handle(&mut self, message: HomeMessage) -> Option<FetchRequest> {
        match message {
            HomeMessage::Tick => Some(self.ticker.tick()),
            HomeMessage::MarketSelected(market) => Some(self.ticker.select_market(market)),
            HomeMessage::TimeframeSelected(timeframe) => {
                Some(self.ticker.select_timeframe(timeframe))
            }
            HomeMessage::FetchCompleted {
                market,
                timeframe,
                generation,
                outcome,
            } => {
                self.on_fetch_completed(market, timeframe, generation, outcome);
                None
            }
            HomeMessage::BalanceChanged(snapshot) => {
                self.on_balance(snapshot);
                None
            }
            HomeMessage::TransactionsChanged => {
                let table = self.wallet.transactions();
                self.renderer.show_recent(self.activity.refresh(&table));
                None
            }
            HomeMessage::DisplayUnitChanged(unit) => {
                self.unit = unit;
                // Formatting only; the fiat math is unaffected.
                if let Some(snapshot) = self.reconciler.snapshot().copied() {
                    self.show_balance_lines(&snapshot);
                }
                None
            }
            HomeMessage::SyncStateChanged { synced } => {
                self.renderer.show_out_of_sync(!synced);
                None
            }
        }
    }

    /// Maps a clicked recent-activity row back to its table identity.
    pub fn resolve_activity(&self, view_index: usize) -> Option<TxId> {
        self.activity.resolve(view_index)
    }

    fn on_fetch_completed(
        &mut self,
        market: Market,
        timeframe: Timeframe,
        generation: u64,
        outcome: crate::Result<String>,
    ) {
        let body = match outcome {
            Ok(body) => body,
            Err(err) => {
                // Degrades the fiat label only; the next tick retries.
                warn!(%err, "Price fetch failed");
                self.renderer.show_fiat("Error", Trend::Unchanged);
                return;
            }
        };

        let now = unix_now();
        let Some(update) = self
            .ticker
            .complete(market, timeframe, generation, &body, now)
        else {
            return;
        };

        let fiat = self
            .reconciler
            .on_quote(update.payload.euro, update.payload.usd);
        self.renderer.show_fiat(&fiat.label(), update.trend);
        self.renderer.show_immature(fiat.show_immature);

        let series = chart::build_series(&update.payload.series, timeframe, now);
        self.chart_sink
            .show_series(&series, &AxisSpec::new(market, timeframe, now));
    }

    fn on_balance(&mut self, snapshot: BalanceSnapshot) {
        let fiat = self.reconciler.on_balance(snapshot);
        self.show_balance_lines(&snapshot);
        self.renderer.show_fiat(&fiat.label(), Trend::Unchanged);
        self.renderer.show_immature(fiat.show_immature);
    }

    fn show_balance_lines(&mut self, snapshot: &BalanceSnapshot) {
        self.renderer.show_balances(
            &self.unit.format_with_suffix(snapshot.confirmed),
            &self.unit.format_with_suffix(snapshot.unconfirmed),
            &self.unit.format_with_suffix(snapshot.immature),
        );
    }

    /// Runs the event loop until the channel closes.
    ///
    /// Spawns the poll timer (whose first firing populates the
    /// dashboard) and dispatches every fetch request on its own task;
    /// completions come back through `tx` and are applied in arrival
    /// order.
    pub async fn run(
        mut self,
        tx: mpsc::UnboundedSender<HomeMessage>,
        mut rx: mpsc::UnboundedReceiver<HomeMessage>,
    ) -> crate::Result<()> {
        let http = reqwest::Client::builder().build()?;

        spawn_poll_timer(tx.clone());

        while let Some(message) = rx.recv().await {
            if let Some(request) = self.handle(message) {
                dispatch_fetch(&http, &tx, request);
            }
        }

        info!("Home view channel closed, shutting down");
        Ok(())
    }
}

/// Spawns the periodic refresh timer.
///
/// The first firing is immediate, covering the initial fetch. The timer
/// is wall-clock periodic and independent of fetch completion, so
/// overlapping fetches can occur and must be tolerated downstream.
fn spawn_poll_timer(tx: mpsc::UnboundedSender<HomeMessage>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(POLL_PERIOD_SECS));
        loop {
            interval.tick().await;
            if tx.send(HomeMessage::Tick).is_err() {
                break;
            }
        }
    });
}

/// Issues one GET against the price service and reports the outcome
/// back to the loop. Fire-and-forget: nothing awaits or cancels this.
fn dispatch_fetch(
    http: &reqwest::Client,
    tx: &mpsc::UnboundedSender<HomeMessage>,
    request: FetchRequest,
) {
    let http = http.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = fetch_body(&http, &request.url).await;
        let _ = tx.send(HomeMessage::FetchCompleted {
            market: request.market,
            timeframe: request.timeframe,
            generation: request.generation,
            outcome,
        });
    });
}

/// One GET, folded down to the body text or a fetch error (non-success
/// statuses included).
async fn fetch_body(http: &reqwest::Client, url: &str) -> crate::Result<String> {
    let response = http
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| crate::HearthError::Fetch(e.to_string()))?;
    response
        .text()
        .await
        .map_err(|e| crate::HearthError::Fetch(e.to_string()))
}

/// Current unix time in seconds.
fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs() as i64
}
