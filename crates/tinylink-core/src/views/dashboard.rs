//! Dashboard: link table, create form, search and delete

use tracing::{debug, info, warn};

use crate::api::LinkApi;
use crate::env::BrowserEnv;
use crate::format::short_url;
use crate::model::{CreateLinkRequest, Link};
use crate::state::ViewState;

pub const LOAD_FAILED: &str = "Failed to load links";
pub const CREATE_FAILED: &str = "Failed to create link";
pub const DELETE_FAILED: &str = "Failed to delete link";
pub const MISSING_URL: &str = "Please enter a URL";
pub const CREATED: &str = "Link created successfully!";
pub const DELETED: &str = "Link deleted successfully!";
pub const COPIED: &str = "Short URL copied to clipboard!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this link?";
pub const NO_LINKS: &str = "No links yet. Create your first link above!";
pub const NO_MATCHES: &str = "No links found matching your search";

/// Create-form fields, kept as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub target_url: String,
    pub code: String,
}

impl LinkForm {
    pub fn clear(&mut self) {
        self.target_url.clear();
        self.code.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub links: Vec<Link>,
    pub loading: bool,
    pub form: LinkForm,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub search: String,
}

impl DashboardState {
    /// Starts in the loading state; the first list read runs on mount.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            loading: true,
            form: LinkForm::default(),
            submitting: false,
            error: None,
            success: None,
            search: String::new(),
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn filtered_links(&self) -> Vec<Link> {
        filter_links(&self.links, &self.search).into_iter().cloned().collect()
    }

    /// Text for an empty table, depending on whether a search is active
    pub fn empty_message(&self) -> &'static str {
        if self.is_searching() {
            NO_MATCHES
        } else {
            NO_LINKS
        }
    }

    /// Drops the success notice if it is still `notice`.
    pub fn clear_success(&mut self, notice: &str) {
        if self.success.as_deref() == Some(notice) {
            self.success = None;
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Links whose code or target URL contains `term`, ignoring case
pub fn filter_links<'a>(links: &'a [Link], term: &str) -> Vec<&'a Link> {
    links.iter().filter(|link| link.matches(term)).collect()
}

/// Replaces the table with the backend's list. On failure the current list
/// stays as it is (empty until a read has succeeded).
pub async fn load_links<A, S>(api: &A, state: &S)
where
    A: LinkApi + ?Sized,
    S: ViewState<DashboardState>,
{
    if state.update_with(|s| s.loading = true).is_none() {
        return;
    }

    debug!("Loading links");
    let result = api.list_links().await;

    state.update_with(|s| {
        match result {
            Ok(links) => {
                debug!("Loaded {} links", links.len());
                s.links = links;
                s.error = None;
            }
            Err(e) => {
                warn!("Failed to load links: {}", e);
                s.error = Some(e.user_message(LOAD_FAILED));
            }
        }
        s.loading = false;
    });
}

/// Submits the create form, then reloads the table once the create response
/// is in. Form fields survive a failed submission.
pub async fn create_link<A, S>(api: &A, state: &S)
where
    A: LinkApi + ?Sized,
    S: ViewState<DashboardState>,
{
    let request = state.update_with(|s| {
        s.error = None;
        s.success = None;

        if s.form.target_url.trim().is_empty() {
            s.error = Some(MISSING_URL.to_string());
            return None;
        }

        s.submitting = true;
        Some(CreateLinkRequest::new(&s.form.target_url, &s.form.code))
    });
    let Some(Some(request)) = request else {
        return;
    };

    debug!("Creating link for {}", request.target_url);
    let result = api.create_link(&request).await;

    let created = state.update_with(|s| {
        s.submitting = false;
        match result {
            Ok(link) => {
                info!(
                    "Created link {}",
                    link.as_ref().map(|l| l.code.as_str()).unwrap_or("(generated)")
                );
                s.success = Some(CREATED.to_string());
                s.form.clear();
                true
            }
            Err(e) => {
                warn!("Failed to create link: {}", e);
                s.error = Some(e.user_message(CREATE_FAILED));
                false
            }
        }
    });

    if created == Some(true) {
        load_links(api, state).await;
    }
}

/// Deletes `code` after the user confirms, then reloads the table.
/// Declining sends nothing.
pub async fn delete_link<A, E, S>(api: &A, env: &E, state: &S, code: &str)
where
    A: LinkApi + ?Sized,
    E: BrowserEnv + ?Sized,
    S: ViewState<DashboardState>,
{
    if !env.confirm(CONFIRM_DELETE) {
        debug!("Delete of {} cancelled", code);
        return;
    }

    let result = api.delete_link(code).await;

    let deleted = state.update_with(|s| match result {
        Ok(()) => {
            info!("Deleted link {}", code);
            s.success = Some(DELETED.to_string());
            true
        }
        Err(e) => {
            warn!("Failed to delete link {}: {}", code, e);
            s.error = Some(e.user_message(DELETE_FAILED));
            false
        }
    });

    if deleted == Some(true) {
        load_links(api, state).await;
    }
}

/// Copies `<origin>/<code>` and posts the copied notice. Returns the notice so
/// the caller can clear it after `NOTICE_TIMEOUT`.
pub fn copy_short_url<E, S>(env: &E, state: &S, code: &str) -> Option<String>
where
    E: BrowserEnv + ?Sized,
    S: ViewState<DashboardState>,
{
    let url = short_url(&env.origin(), code);
    env.write_clipboard(&url);
    debug!("Copied {}", url);

    state.update_with(|s| {
        s.success = Some(COPIED.to_string());
        COPIED.to_string()
    })
}
