use std::sync::Arc;

use porthist::HistorySource;
use porthist_http::{GatewayConfig, GatewaySource};

/// 2024-03-01 00:00:00 UTC in epoch millis, the start of the mock fixtures.
pub const DAY_START: i64 = 1_709_251_200_000;
/// One minute in millis.
pub const MINUTE: i64 = 60_000;
/// One hour in millis.
pub const HOUR: i64 = 60 * MINUTE;

/// Return a history source for demos.
///
/// Uses the mock when `PORTHIST_DEMOS_USE_MOCK` is set, otherwise the gateway
/// at `PORTHIST_GATEWAY_URL` (default `http://127.0.0.1:8080`) with an optional
/// `PORTHIST_GATEWAY_TOKEN`.
///
/// # Panics
/// Panics if the gateway URL is not a valid base URL.
#[must_use]
pub fn get_source() -> Arc<dyn HistorySource> {
    if std::env::var("PORTHIST_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Arc::new(porthist_mock::MockSource::new())
    } else {
        let url = std::env::var("PORTHIST_GATEWAY_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let mut cfg = GatewayConfig::new(url);
        if let Ok(token) = std::env::var("PORTHIST_GATEWAY_TOKEN") {
            cfg = cfg.with_token(token);
        }
        Arc::new(GatewaySource::new(&cfg).expect("invalid PORTHIST_GATEWAY_URL"))
    }
}

/// Format an epoch-millis timestamp as minutes since [`DAY_START`].
#[must_use]
pub fn clock(ts: i64) -> String {
    let minutes = (ts - DAY_START) / MINUTE;
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}
