//! Liveness polling
//!
//! The health page reads `/healthz` once on mount and again on every tick of
//! a timer stream. The poll future is wrapped in `Abortable`; the returned
//! `PollGuard` aborts it when dropped, so tearing the page down stops polling
//! at a known point.

use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use futures::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::api::LinkApi;
use crate::model::HealthStatus;
use crate::state::ViewState;

pub const HEALTH_FAILED: &str = "Health check failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HealthState {
    #[default]
    Checking,
    Healthy(HealthStatus),
    Unhealthy(String),
}

impl HealthState {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthState::Healthy(_))
    }
}

/// One liveness read. Returns `None` once the view is gone.
pub async fn check_health<A, S>(api: &A, state: &S) -> Option<()>
where
    A: LinkApi + ?Sized,
    S: ViewState<HealthState>,
{
    let next = match api.health().await {
        Ok(status) => HealthState::Healthy(status),
        Err(e) => {
            warn!("Health check failed: {}", e);
            HealthState::Unhealthy(e.user_message(HEALTH_FAILED))
        }
    };
    state.update_with(|s| *s = next)
}

/// Checks immediately, then once per tick until the ticks end or the view
/// goes away.
pub async fn run_health_poll<A, S, T>(api: &A, state: &S, ticks: T)
where
    A: LinkApi + ?Sized,
    S: ViewState<HealthState>,
    T: Stream<Item = ()>,
{
    let mut ticks = std::pin::pin!(ticks);

    if check_health(api, state).await.is_none() {
        return;
    }
    while ticks.next().await.is_some() {
        if check_health(api, state).await.is_none() {
            break;
        }
    }
    debug!("Health polling stopped");
}

/// Cancels the poll it was created with when dropped.
#[derive(Debug)]
pub struct PollGuard {
    handle: AbortHandle,
}

impl PollGuard {
    pub fn is_stopped(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Builds the poll future and its guard. The caller spawns the future on the
/// local executor and keeps the guard for as long as the view is mounted.
pub fn health_poll<A, S, T>(api: Rc<A>, state: S, ticks: T) -> (PollGuard, impl Future<Output = ()>)
where
    A: LinkApi + ?Sized + 'static,
    S: ViewState<HealthState> + 'static,
    T: Stream<Item = ()> + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    let poll = Abortable::new(
        async move { run_health_poll(&*api, &state, ticks).await },
        registration,
    );

    (PollGuard { handle }, async move {
        let _ = poll.await;
    })
}
