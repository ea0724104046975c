//! Shared helpers for building price-service payloads.

/// Builds a well-formed response body: a preamble slot, `tokens` numeric
/// series tokens (`0.001 * n` for token `n`), and the `[v]` summary
/// section carrying the EUR and USD prices.
///
/// Split on `[]`, slots 1..=tokens are numeric and the trailing summary
/// lands in its own non-numeric slot; split on `[v]`, fields 1 and 2 are
/// the two prices.
pub fn payload(tokens: usize, euro: f64, usd: f64) -> String {
    let mut body = String::from("ok");
    for n in 1..=tokens {
        body.push_str("[]");
        body.push_str(&format!("{}", 0.001 * n as f64));
    }
    body.push_str("[]");
    body.push_str(&format!("[v]{euro}[v]{usd}"));
    body
}
