//! Stats page fetch behaviour

mod common;

use common::{link, state, Call, FakeApi, FakeBrowser};
use tinylink_core::views::code_stats::{COPIED, NOT_FOUND_FALLBACK};
use tinylink_core::views::{copy_field, load_stats, CodeStatsState, StatsStatus};
use tinylink_core::{format_timestamp, ApiError, AppRoute, NEVER};

#[tokio::test]
async fn test_loaded_link() {
    let api = FakeApi::new();
    let mut stored = link("abcde", "https://example.com");
    stored.total_clicks = Some(3);
    api.push_stats(Ok(stored.clone()));
    let stats = state(CodeStatsState::new("abcde"));

    load_stats(&api, &stats, "abcde").await;

    assert_eq!(api.calls(), vec![Call::Stats("abcde".to_string())]);
    assert_eq!(stats.borrow().status, StatsStatus::Loaded(stored));
}

#[tokio::test]
async fn test_missing_last_click_renders_never() {
    let api = FakeApi::new();
    api.push_stats(Ok(link("abcde", "https://example.com")));
    let stats = state(CodeStatsState::new("abcde"));

    load_stats(&api, &stats, "abcde").await;

    let s = stats.borrow();
    let loaded = s.link().unwrap();
    assert_eq!(format_timestamp(loaded.last_clicked_at.as_deref()), NEVER);
    assert_eq!(loaded.clicks(), 0);
}

#[tokio::test]
async fn test_not_found_uses_backend_message() {
    let api = FakeApi::new();
    api.push_stats(Err(ApiError::status(404, Some("Link not found".to_string()))));
    let stats = state(CodeStatsState::new("zzzzz"));

    load_stats(&api, &stats, "zzzzz").await;

    assert_eq!(stats.borrow().status, StatsStatus::NotFound("Link not found".to_string()));
    // The not-found panel links back to the dashboard
    assert_eq!(AppRoute::Dashboard.href(), "/");
}

#[tokio::test]
async fn test_network_failure_uses_generic_message() {
    let api = FakeApi::new();
    api.push_stats(Err(ApiError::network("Failed to fetch")));
    let stats = state(CodeStatsState::new("abcde"));

    load_stats(&api, &stats, "abcde").await;

    assert_eq!(
        stats.borrow().status,
        StatsStatus::NotFound(NOT_FOUND_FALLBACK.to_string())
    );
}

#[tokio::test]
async fn test_stale_response_is_dropped() {
    let api = FakeApi::new();
    api.push_stats(Ok(link("old01", "https://old.example.com")));
    let stats = state(CodeStatsState::new("old01"));

    // The route moves on before the first response is applied
    stats.borrow_mut().set_code("new02");
    load_stats(&api, &stats, "old01").await;

    assert_eq!(stats.borrow().code, "new02");
    assert_eq!(stats.borrow().status, StatsStatus::Loading);
}

#[test]
fn test_copy_field() {
    let browser = FakeBrowser::new();
    let stats = state(CodeStatsState::new("abcde"));

    let notice = copy_field(&browser, &stats, "https://example.com");

    assert_eq!(notice.as_deref(), Some(COPIED));
    assert_eq!(*browser.clipboard.borrow(), vec!["https://example.com".to_string()]);
    stats.borrow_mut().clear_notice(COPIED);
    assert_eq!(stats.borrow().notice, None);
}
