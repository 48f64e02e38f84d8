//! Liveness polling and teardown

mod common;

use std::rc::Rc;

use common::{state, Call, FakeApi, Mounted};
use futures::channel::mpsc;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use tinylink_core::views::healthz::HEALTH_FAILED;
use tinylink_core::views::{check_health, health_poll, run_health_poll, HealthState};
use tinylink_core::{ApiError, HealthStatus};

fn healthy(version: Option<&str>) -> HealthStatus {
    HealthStatus {
        ok: true,
        version: version.map(String::from),
    }
}

#[tokio::test]
async fn test_single_check_states() {
    let api = FakeApi::new();
    api.push_health(Ok(healthy(Some("1.2.0"))));
    api.push_health(Err(ApiError::status(503, None)));
    let health = state(HealthState::default());
    assert_eq!(*health.borrow(), HealthState::Checking);

    check_health(&api, &health).await;
    assert_eq!(*health.borrow(), HealthState::Healthy(healthy(Some("1.2.0"))));

    check_health(&api, &health).await;
    assert_eq!(*health.borrow(), HealthState::Unhealthy(HEALTH_FAILED.to_string()));
}

#[tokio::test]
async fn test_poll_runs_once_per_tick() {
    let api = FakeApi::new();
    let health = state(HealthState::default());

    run_health_poll(&api, &health, futures::stream::iter(vec![(), ()])).await;

    assert_eq!(api.calls(), vec![Call::Health, Call::Health, Call::Health]);
    assert!(health.borrow().is_healthy());
}

#[tokio::test]
async fn test_poll_stops_when_view_is_gone() {
    let api = FakeApi::new();
    let health = Mounted::new(HealthState::default());
    health.unmount();

    run_health_poll(&api, &health, futures::stream::iter(vec![(), (), ()])).await;

    assert_eq!(api.call_count(), 1);
    assert_eq!(health.snapshot(), HealthState::Checking);
}

#[test]
fn test_poll_flips_between_states_and_stops_on_drop() {
    let api = Rc::new(FakeApi::new());
    api.push_health(Ok(healthy(None)));
    api.push_health(Err(ApiError::network("Failed to fetch")));
    api.push_health(Ok(healthy(Some("2.0.1"))));
    let health = state(HealthState::default());

    let (tick, ticks) = mpsc::unbounded::<()>();
    let (guard, poll) = health_poll(api.clone(), health.clone(), ticks);

    let mut pool = LocalPool::new();
    pool.spawner().spawn_local(poll).unwrap();

    pool.run_until_stalled();
    assert_eq!(api.call_count(), 1);
    assert!(health.borrow().is_healthy());

    tick.unbounded_send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(api.call_count(), 2);
    assert_eq!(*health.borrow(), HealthState::Unhealthy(HEALTH_FAILED.to_string()));

    tick.unbounded_send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(api.call_count(), 3);
    assert_eq!(*health.borrow(), HealthState::Healthy(healthy(Some("2.0.1"))));

    drop(guard);
    tick.unbounded_send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(api.call_count(), 3);
}

#[test]
fn test_guard_reports_stopped() {
    let api = Rc::new(FakeApi::new());
    let health = state(HealthState::default());
    let (_tick, ticks) = mpsc::unbounded::<()>();

    let (guard, _poll) = health_poll(api, health, ticks);
    assert!(!guard.is_stopped());
}
