//! Application configuration loaded from environment variables.
//!
//! - `HEARTH_PRICE_URL` — overrides the default price-service endpoint
//! - `HEARTH_RECENT_LIMIT` — rows kept in the recent-activity view
//! - `HEARTH_DISCARD_STALE` — set to `1` (or `true`) to drop fetch
//!   results that complete after a newer request was already issued
//!
//! The 300 second poll period is fixed and not configurable.

/// Default price-service endpoint.
const DEFAULT_PRICE_URL: &str = "http://prices.hearthwallet.net/graph-wallet.php";

/// Default number of rows in the recent-activity view.
const DEFAULT_RECENT_LIMIT: usize = 3;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub price: PriceConfig,
    /// Maximum rows in the recent-activity view.
    pub recent_limit: usize,
}

/// Price-service specific configuration values.
#[derive(Debug)]
pub struct PriceConfig {
    pub url: String,
    /// Drop fetch completions older than the newest issued request
    /// instead of applying them last-completed-wins.
    pub discard_stale: bool,
}

/// Loads the application configuration from environment variables.
///
/// The price-service URL defaults to the public endpoint and can be
/// overridden with `HEARTH_PRICE_URL`.
///
/// # Errors
///
/// Returns [`HearthError::Config`](crate::HearthError::Config) if
/// `HEARTH_RECENT_LIMIT` is set but is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let url =
        non_empty_var("HEARTH_PRICE_URL").unwrap_or_else(|| DEFAULT_PRICE_URL.to_string());

    let discard_stale = matches!(
        non_empty_var("HEARTH_DISCARD_STALE").as_deref(),
        Some("1") | Some("true")
    );

    let recent_limit = match non_empty_var("HEARTH_RECENT_LIMIT") {
        Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
            crate::HearthError::Config(format!(
                "HEARTH_RECENT_LIMIT must be a positive integer, got {raw:?}"
            ))
        })?,
        None => DEFAULT_RECENT_LIMIT,
    };

    Ok(AppConfig {
        price: PriceConfig { url, discard_stale },
        recent_limit,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
