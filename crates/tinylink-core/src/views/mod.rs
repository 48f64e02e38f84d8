//! Per-view state containers
//!
//! Every view owns its state and reloads what it needs on mount; nothing is
//! shared across views.

pub mod code_stats;
pub mod dashboard;
pub mod healthz;
pub mod redirect;

pub use code_stats::{copy_field, load_stats, CodeStatsState, StatsStatus};
pub use dashboard::{
    copy_short_url, create_link, delete_link, filter_links, load_links, DashboardState, LinkForm,
};
pub use healthz::{check_health, health_poll, run_health_poll, HealthState, PollGuard};
pub use redirect::follow_redirect;
