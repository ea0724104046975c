//! Price-service payload parsing.
//!
//! The service answers with a flat text blob carrying two
//! marker-delimited sections: the price series (tokens between `[]`
//! markers) and a summary whose second and third fields after splitting
//! on `[v]` are the latest EUR and USD prices. The two sections are
//! tokenized independently from the same text.

use crate::models::series::RawSeries;

/// Delimiter of the price-series section.
pub const SERIES_MARKER: &str = "[]";

/// Delimiter of the summary section.
pub const VALUE_MARKER: &str = "[v]";

/// Everything extracted from one price-service response body.
#[derive(Clone, Debug, Default)]
pub struct ParsedPayload {
    pub series: RawSeries,
    /// Latest EUR price (second `[v]` field), 0.0 when absent.
    pub euro: f64,
    /// Latest USD price (third `[v]` field), 0.0 when absent.
    pub usd: f64,
}

/// Parses one response body.
///
/// Tokens that fail numeric conversion degrade to 0.0 instead of
/// failing the payload; transport-level errors are surfaced before this
/// function is ever reached. Parsing itself cannot fail.
pub fn parse_payload(text: &str) -> ParsedPayload {
    let tokens: Vec<Option<f64>> = text.split(SERIES_MARKER).map(parse_token).collect();

    let summary: Vec<&str> = text.split(VALUE_MARKER).collect();
    let euro = summary.get(1).copied().and_then(parse_token).unwrap_or(0.0);
    let usd = summary.get(2).copied().and_then(parse_token).unwrap_or(0.0);

    ParsedPayload {
        series: RawSeries::new(tokens),
        euro,
        usd,
    }
}

/// Numeric conversion of one token; whitespace is tolerated, anything
/// else is reported as missing.
fn parse_token(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}
