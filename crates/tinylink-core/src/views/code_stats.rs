//! Statistics for one short code

use tracing::{debug, warn};

use crate::api::LinkApi;
use crate::env::BrowserEnv;
use crate::model::Link;
use crate::state::ViewState;

/// Shown when the backend gave no reason for the failure
pub const NOT_FOUND_FALLBACK: &str = "The link you are looking for does not exist.";
pub const COPIED: &str = "Copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsStatus {
    Loading,
    Loaded(Link),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStatsState {
    pub code: String,
    pub status: StatsStatus,
    pub notice: Option<String>,
}

impl CodeStatsState {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            status: StatsStatus::Loading,
            notice: None,
        }
    }

    /// Switches to another code and back to loading. Returns false when the
    /// code is unchanged.
    pub fn set_code(&mut self, code: &str) -> bool {
        if self.code == code {
            return false;
        }
        *self = Self::new(code);
        true
    }

    pub fn link(&self) -> Option<&Link> {
        match &self.status {
            StatsStatus::Loaded(link) => Some(link),
            _ => None,
        }
    }

    pub fn clear_notice(&mut self, notice: &str) {
        if self.notice.as_deref() == Some(notice) {
            self.notice = None;
        }
    }
}

/// Fetches stats for `code`. A response for a code the view has since moved
/// away from is dropped.
pub async fn load_stats<A, S>(api: &A, state: &S, code: &str)
where
    A: LinkApi + ?Sized,
    S: ViewState<CodeStatsState>,
{
    if state.update_with(|s| s.status = StatsStatus::Loading).is_none() {
        return;
    }

    debug!("Loading stats for {}", code);
    let result = api.link_stats(code).await;

    state.update_with(|s| {
        if s.code != code {
            debug!("Dropping stale stats for {}", code);
            return;
        }
        s.status = match result {
            Ok(link) => StatsStatus::Loaded(link),
            Err(e) => {
                warn!("Failed to load stats for {}: {}", code, e);
                StatsStatus::NotFound(e.user_message(NOT_FOUND_FALLBACK))
            }
        };
    });
}

/// Copies one field of the stats card and posts the copied notice.
pub fn copy_field<E, S>(env: &E, state: &S, text: &str) -> Option<String>
where
    E: BrowserEnv + ?Sized,
    S: ViewState<CodeStatsState>,
{
    env.write_clipboard(text);
    state.update_with(|s| {
        s.notice = Some(COPIED.to_string());
        COPIED.to_string()
    })
}
