use hearth::HearthError;
use hearth::config::fetch_config;
use hearth::home::{ChartSink, HomeView, Renderer, WalletSource};
use hearth::models::Trend;
use hearth::models::activity::{RecentEntry, TransactionRecord};
use hearth::models::series::{AxisSpec, ChartSeries};
use tokio::sync::mpsc;
use tracing::info;

/// Renderer that logs every display update; stands in for a real UI.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn show_balances(&mut self, confirmed: &str, unconfirmed: &str, immature: &str) {
        info!(confirmed, unconfirmed, immature, "Balances");
    }

    fn show_fiat(&mut self, label: &str, trend: Trend) {
        info!(label, ?trend, "Fiat value");
    }

    fn show_immature(&mut self, visible: bool) {
        info!(visible, "Immature line");
    }

    fn show_recent(&mut self, entries: &[RecentEntry]) {
        info!(rows = entries.len(), "Recent activity");
    }

    fn show_out_of_sync(&mut self, visible: bool) {
        info!(visible, "Out-of-sync warning");
    }
}

/// Chart sink that logs series shape instead of drawing.
struct LogChartSink;

impl ChartSink for LogChartSink {
    fn show_series(&mut self, series: &ChartSeries, axis: &AxisSpec) {
        info!(
            points = series.points.len(),
            min = series.range.min,
            max = series.range.max,
            label = axis.pair_label,
            "Chart updated"
        );
    }
}

/// Wallet stub with no transactions; a real embedder wires the wallet
/// backend here.
struct EmptyWallet;

impl WalletSource for EmptyWallet {
    fn transactions(&self) -> Vec<TransactionRecord> {
        Vec::new()
    }
}

#[tokio::main]
async fn main() -> Result<(), HearthError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let config = fetch_config()?;
    let (tx, rx) = mpsc::unbounded_channel();

    let view = HomeView::new(&config, LogRenderer, LogChartSink, EmptyWallet);
    view.run(tx, rx).await
}
