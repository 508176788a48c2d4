//! Probe endpoints used to exercise external monitoring: a health snapshot,
//! a forced server error, and an artificially slow response.

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use core_types::StoreStatus;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Delay used when `delay` is absent or unparsable.
pub const DEFAULT_DELAY_MS: u64 = 3_000;
/// Upper bound for a requested delay.
pub const MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `"healthy"`; store trouble is reported in `database` only.
    pub status: String,
    pub database: StoreStatus,
    /// RFC 3339, UTC.
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlowResponse {
    pub message: String,
    pub delay_ms: u64,
}

/// # GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = state.store.status().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        database,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// # GET /api/error
/// Always fails, so alerting pipelines have something to fire on.
pub async fn forced_error() -> (StatusCode, Json<Value>) {
    tracing::warn!("Error endpoint called - returning 500");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal Server Error",
            "message": "This is a test error for monitoring",
        })),
    )
}

/// # GET /api/slow?delay=<ms>
/// Suspends only this request's task; other requests keep being served.
///
/// The query is taken as raw pairs so a repeated `delay` uses the first value
/// instead of rejecting the request.
pub async fn slow(Query(params): Query<Vec<(String, String)>>) -> Json<SlowResponse> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "delay")
        .map(|(_, value)| value.as_str());
    let delay_ms = resolve_delay(raw);
    tracing::info!(delay_ms, "Slow endpoint called.");

    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    Json(SlowResponse {
        message: "Slow response completed".to_string(),
        delay_ms,
    })
}

/// Turns the raw `delay` parameter into a delay in milliseconds.
///
/// The leading integer is used (`"12abc"` is 12), after optional leading
/// whitespace and sign. No leading integer, or one that overflows an `i64`,
/// gives [`DEFAULT_DELAY_MS`]. The result is clamped to `0..=MAX_DELAY_MS`.
pub fn resolve_delay(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_DELAY_MS;
    };

    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return DEFAULT_DELAY_MS;
    }

    match raw[..sign_len + digits_len].parse::<i64>() {
        Ok(ms) => ms.clamp(0, MAX_DELAY_MS as i64) as u64,
        Err(_) => DEFAULT_DELAY_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_delay_uses_the_default() {
        assert_eq!(resolve_delay(None), 3_000);
    }

    #[test]
    fn unparsable_delay_uses_the_default() {
        assert_eq!(resolve_delay(Some("abc")), 3_000);
        assert_eq!(resolve_delay(Some("")), 3_000);
        assert_eq!(resolve_delay(Some("-")), 3_000);
        assert_eq!(resolve_delay(Some("x12")), 3_000);
    }

    #[test]
    fn leading_integer_is_used_when_followed_by_junk() {
        assert_eq!(resolve_delay(Some("12abc")), 12);
        assert_eq!(resolve_delay(Some("1.5")), 1);
        assert_eq!(resolve_delay(Some("+40ms")), 40);
    }

    #[test]
    fn delay_is_clamped_to_the_maximum() {
        assert_eq!(resolve_delay(Some("999999")), 30_000);
        assert_eq!(resolve_delay(Some("30000")), 30_000);
    }

    #[test]
    fn overflowing_delay_uses_the_default() {
        assert_eq!(resolve_delay(Some("99999999999999999999999")), 3_000);
        assert_eq!(resolve_delay(Some("-99999999999999999999999")), 3_000);
    }

    #[test]
    fn in_range_delays_pass_through() {
        assert_eq!(resolve_delay(Some("0")), 0);
        assert_eq!(resolve_delay(Some(" 250 ")), 250);
        assert_eq!(resolve_delay(Some("29999")), 29_999);
    }

    #[test]
    fn negative_delays_clamp_to_zero() {
        assert_eq!(resolve_delay(Some("-5")), 0);
    }
}
