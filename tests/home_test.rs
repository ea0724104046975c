//! End-to-end message-driven tests for the dashboard event loop.
//!
//! The handlers run synchronously, so these tests drive [`HomeView`]
//! by handing it messages directly and injecting fetch completions in
//! chosen orders, with no network involved.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::payload;
use hearth::config::{AppConfig, PriceConfig};
use hearth::home::{ChartSink, HomeMessage, HomeView, Renderer, WalletSource};
use hearth::models::activity::{RecentEntry, TransactionRecord, TxId, TxStatus};
use hearth::models::balance::BalanceSnapshot;
use hearth::models::series::{AxisSpec, ChartSeries};
use hearth::models::{Market, Timeframe, Trend};
use hearth::ticker::FetchRequest;

#[derive(Default)]
struct Recorded {
    balances: Vec<(String, String, String)>,
    fiat: Vec<(String, Trend)>,
    immature: Vec<bool>,
    recent: Vec<Vec<RecentEntry>>,
    out_of_sync: Vec<bool>,
}

#[derive(Clone, Default)]
struct RecordingRenderer(Rc<RefCell<Recorded>>);

impl Renderer for RecordingRenderer {
    fn show_balances(&mut self, confirmed: &str, unconfirmed: &str, immature: &str) {
        self.0.borrow_mut().balances.push((
            confirmed.to_string(),
            unconfirmed.to_string(),
            immature.to_string(),
        ));
    }

    fn show_fiat(&mut self, label: &str, trend: Trend) {
        self.0.borrow_mut().fiat.push((label.to_string(), trend));
    }

    fn show_immature(&mut self, visible: bool) {
        self.0.borrow_mut().immature.push(visible);
    }

    fn show_recent(&mut self, entries: &[RecentEntry]) {
        self.0.borrow_mut().recent.push(entries.to_vec());
    }

    fn show_out_of_sync(&mut self, visible: bool) {
        self.0.borrow_mut().out_of_sync.push(visible);
    }
}

#[derive(Clone, Default)]
struct RecordingChart(Rc<RefCell<Vec<(ChartSeries, AxisSpec)>>>);

impl ChartSink for RecordingChart {
    fn show_series(&mut self, series: &ChartSeries, axis: &AxisSpec) {
        self.0.borrow_mut().push((series.clone(), *axis));
    }
}

struct FixedWallet(Vec<TransactionRecord>);

impl WalletSource for FixedWallet {
    fn transactions(&self) -> Vec<TransactionRecord> {
        self.0.clone()
    }
}

fn config(discard_stale: bool) -> AppConfig {
    AppConfig {
        price: PriceConfig {
            url: "http://localhost/prices".to_string(),
            discard_stale,
        },
        recent_limit: 3,
    }
}

fn view(
    discard_stale: bool,
    wallet: Vec<TransactionRecord>,
) -> (
    HomeView<RecordingRenderer, RecordingChart, FixedWallet>,
    Rc<RefCell<Recorded>>,
    Rc<RefCell<Vec<(ChartSeries, AxisSpec)>>>,
) {
    let renderer = RecordingRenderer::default();
    let chart = RecordingChart::default();
    let recorded = renderer.0.clone();
    let plotted = chart.0.clone();
    let home = HomeView::new(&config(discard_stale), renderer, chart, FixedWallet(wallet));
    (home, recorded, plotted)
}

fn completed(request: &FetchRequest, body: String) -> HomeMessage {
    HomeMessage::FetchCompleted {
        market: request.market,
        timeframe: request.timeframe,
        generation: request.generation,
        outcome: Ok(body),
    }
}

fn tx_row(id: u64, status: TxStatus) -> TransactionRecord {
    TransactionRecord {
        id: TxId(id),
        label: format!("addr-{id}"),
        at: 1_700_000_000,
        amount: 5_000,
        status,
        confirmed: status == TxStatus::Confirmed,
    }
}

#[test]
fn starts_with_the_out_of_sync_warning() {
    let (_home, recorded, _plotted) = view(false, Vec::new());
    assert_eq!(recorded.borrow().out_of_sync, vec![true]);
}

#[test]
fn day_fetch_end_to_end() {
    let (mut home, recorded, plotted) = view(false, Vec::new());

    // One whole coin confirmed, so the fiat pair mirrors the quotes.
    home.handle(HomeMessage::BalanceChanged(BalanceSnapshot {
        confirmed: 100_000_000,
        unconfirmed: 0,
        immature: 0,
    }));

    let request = home
        .handle(HomeMessage::MarketSelected(Market::Eur))
        .expect("selection must start a fetch");
    assert!(request.url.ends_with("?mkt=0&int=0"));

    home.handle(completed(&request, payload(719, 1.23, 4.56)));

    let recorded = recorded.borrow();
    let (label, trend) = recorded.fiat.last().unwrap();
    assert_eq!(label, "1.23€/$4.56");
    assert_eq!(*trend, Trend::Up);

    let plotted = plotted.borrow();
    let (series, axis) = plotted.last().unwrap();
    assert_eq!(series.points.len(), 719);
    for pair in series.points.windows(2) {
        assert_eq!(pair[1].at - pair[0].at, 120);
    }
    assert_eq!(axis.pair_label, "HTH/EUR");
    assert_eq!(axis.window.1 - axis.window.0, 86_400);
    assert_eq!(axis.tick_format, "hh:mm (ddd)");
}

#[test]
fn trend_follows_successive_quotes() {
    let (mut home, recorded, _plotted) = view(false, Vec::new());

    let first = home.handle(HomeMessage::Tick).unwrap();
    home.handle(completed(&first, payload(719, 2.0, 2.0)));

    let second = home.handle(HomeMessage::Tick).unwrap();
    home.handle(completed(&second, payload(719, 1.0, 1.0)));

    let third = home.handle(HomeMessage::Tick).unwrap();
    home.handle(completed(&third, payload(719, 1.0, 1.0)));

    let trends: Vec<Trend> = recorded.borrow().fiat.iter().map(|(_, t)| *t).collect();
    assert_eq!(trends, vec![Trend::Up, Trend::Down, Trend::Unchanged]);
}

#[test]
fn last_completed_fetch_wins() {
    let (mut home, _recorded, plotted) = view(false, Vec::new());

    let day = home.handle(HomeMessage::TimeframeSelected(Timeframe::Day)).unwrap();
    let week = home.handle(HomeMessage::TimeframeSelected(Timeframe::Week)).unwrap();
    assert!(week.generation > day.generation);

    // The newer week fetch completes first and renders.
    home.handle(completed(&week, payload(499, 1.0, 1.0)));
    assert_eq!(plotted.borrow().last().unwrap().0.points.len(), 499);

    // The older day fetch straggles in afterwards and overwrites the
    // chart. Stale, but exactly how the dashboard behaves.
    home.handle(completed(&day, payload(719, 1.0, 1.0)));
    assert_eq!(plotted.borrow().last().unwrap().0.points.len(), 719);
}

#[test]
fn stale_gate_discards_the_straggler() {
    let (mut home, _recorded, plotted) = view(true, Vec::new());

    let day = home.handle(HomeMessage::TimeframeSelected(Timeframe::Day)).unwrap();
    let week = home.handle(HomeMessage::TimeframeSelected(Timeframe::Week)).unwrap();

    home.handle(completed(&week, payload(499, 1.0, 1.0)));
    home.handle(completed(&day, payload(719, 1.0, 1.0)));

    let plotted = plotted.borrow();
    assert_eq!(plotted.len(), 1);
    assert_eq!(plotted.last().unwrap().0.points.len(), 499);
}

#[test]
fn transport_error_shows_error_label() {
    let (mut home, recorded, plotted) = view(false, Vec::new());

    let request = home.handle(HomeMessage::Tick).unwrap();
    home.handle(HomeMessage::FetchCompleted {
        market: request.market,
        timeframe: request.timeframe,
        generation: request.generation,
        outcome: Err(hearth::HearthError::Fetch("connection refused".into())),
    });

    let recorded = recorded.borrow();
    let (label, trend) = recorded.fiat.last().unwrap();
    assert_eq!(label, "Error");
    assert_eq!(*trend, Trend::Unchanged);
    assert!(plotted.borrow().is_empty());
}

#[test]
fn failed_fetch_leaves_trend_state_untouched() {
    let (mut home, recorded, _plotted) = view(false, Vec::new());

    let first = home.handle(HomeMessage::Tick).unwrap();
    home.handle(completed(&first, payload(719, 2.0, 2.0)));

    let second = home.handle(HomeMessage::Tick).unwrap();
    home.handle(HomeMessage::FetchCompleted {
        market: second.market,
        timeframe: second.timeframe,
        generation: second.generation,
        outcome: Err(hearth::HearthError::Fetch("timed out".into())),
    });

    // The next successful fetch at the same price compares against the
    // rolled-forward 2.0 and reads unchanged.
    let third = home.handle(HomeMessage::Tick).unwrap();
    home.handle(completed(&third, payload(719, 2.0, 2.0)));

    let trends: Vec<Trend> = recorded.borrow().fiat.iter().map(|(_, t)| *t).collect();
    assert_eq!(trends, vec![Trend::Up, Trend::Unchanged, Trend::Unchanged]);
}

#[test]
fn transactions_changed_projects_recent_rows() {
    let table = vec![
        tx_row(1, TxStatus::Unconfirmed),
        tx_row(2, TxStatus::Confirmed),
        tx_row(3, TxStatus::Conflicted),
        tx_row(4, TxStatus::Confirmed),
        tx_row(5, TxStatus::Confirming),
    ];
    let (mut home, recorded, _plotted) = view(false, table);

    home.handle(HomeMessage::TransactionsChanged);

    let recorded = recorded.borrow();
    let rows = recorded.recent.last().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].source, TxId(2));
    assert_eq!(rows[1].source, TxId(4));
    assert_eq!(rows[2].source, TxId(5));
    drop(recorded);

    assert_eq!(home.resolve_activity(0), Some(TxId(2)));
    assert_eq!(home.resolve_activity(3), None);
}

#[test]
fn balance_change_renders_all_three_lines() {
    let (mut home, recorded, _plotted) = view(false, Vec::new());

    home.handle(HomeMessage::BalanceChanged(BalanceSnapshot {
        confirmed: 150_000_000,
        unconfirmed: 25_000_000,
        immature: 1_000,
    }));

    let recorded = recorded.borrow();
    let (confirmed, unconfirmed, immature) = recorded.balances.last().unwrap();
    assert_eq!(confirmed, "1.50000000 HTH");
    assert_eq!(unconfirmed, "0.25000000 HTH");
    assert_eq!(immature, "0.00001000 HTH");
    assert_eq!(recorded.immature.last(), Some(&true));
}

#[test]
fn display_unit_change_reformats_without_new_math() {
    let (mut home, recorded, _plotted) = view(false, Vec::new());

    home.handle(HomeMessage::BalanceChanged(BalanceSnapshot {
        confirmed: 150_000_000,
        unconfirmed: 0,
        immature: 0,
    }));
    let fiat_before = recorded.borrow().fiat.len();

    home.handle(HomeMessage::DisplayUnitChanged(hearth::units::Unit::MilliCoin));

    let recorded = recorded.borrow();
    let (confirmed, _, _) = recorded.balances.last().unwrap();
    assert_eq!(confirmed, "1500.00000 mHTH");
    // Formatting only: no fiat recompute happened.
    assert_eq!(recorded.fiat.len(), fiat_before);
}

#[test]
fn sync_state_toggles_the_warning() {
    let (mut home, recorded, _plotted) = view(false, Vec::new());

    home.handle(HomeMessage::SyncStateChanged { synced: true });
    home.handle(HomeMessage::SyncStateChanged { synced: false });

    assert_eq!(recorded.borrow().out_of_sync, vec![true, false, true]);
}
