//! Core types and view logic for the TinyLink front-end
//!
//! Everything here is independent of the browser so it can be exercised on
//! the native target. The WebAssembly crate supplies the HTTP client, the
//! browser environment and reactive state cells.
//!
//! # Modules
//!
//! - `api`: Backend contract (`LinkApi`)
//! - `config`: API base resolution and timing constants
//! - `env`: Browser side effects (`BrowserEnv`)
//! - `error`: Error types and Result alias
//! - `format`: Date and short URL formatting
//! - `model`: Link and payload types
//! - `route`: Client path matching
//! - `state`: State cell seam (`ViewState`)
//! - `views`: Per-view state containers and operations

pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod model;
pub mod route;
pub mod state;
pub mod views;

// Re-exports
pub use api::LinkApi;
pub use config::{ApiConfig, Endpoints, HEALTH_POLL_INTERVAL, NOTICE_TIMEOUT};
pub use env::BrowserEnv;
pub use error::{ApiError, Result};
pub use format::{format_timestamp, short_url, NEVER};
pub use model::{CreateLinkRequest, HealthStatus, Link, LinkList, MessageBody};
pub use route::{AppRoute, Page};
pub use state::ViewState;
