//! Backend origin resolution
//!
//! The client talks to one of two fixed backend origins, picked from the host
//! the page was served from. Both origins can be replaced at build time:
//!
//! ```text
//! TINYLINK_LOCAL_API=http://localhost:9000 trunk build
//! TINYLINK_PRODUCTION_API=https://links.example.com trunk build --release
//! ```
//!
//! Nothing is read from the environment at run time.

use std::time::Duration;

/// Backend used while developing against `localhost`
pub const DEFAULT_LOCAL_ORIGIN: &str = "http://localhost:8001";

/// Backend used from any other host
pub const DEFAULT_PRODUCTION_ORIGIN: &str = "https://url-shortner-backend-0aqe.onrender.com";

/// Host name that selects the local backend
pub const LOCAL_HOSTNAME: &str = "localhost";

/// Delay between liveness reads on the health page
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long a transient notice stays on screen
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// The pair of backend origins the resolver chooses between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub local_origin: String,
    pub production_origin: String,
}

impl ApiConfig {
    pub fn new(local_origin: impl Into<String>, production_origin: impl Into<String>) -> Self {
        Self {
            local_origin: local_origin.into(),
            production_origin: production_origin.into(),
        }
    }

    /// Defaults, overridden by `TINYLINK_LOCAL_API` / `TINYLINK_PRODUCTION_API`
    /// when they were set at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("TINYLINK_LOCAL_API").unwrap_or(DEFAULT_LOCAL_ORIGIN),
            option_env!("TINYLINK_PRODUCTION_API").unwrap_or(DEFAULT_PRODUCTION_ORIGIN),
        )
    }

    /// Backend origin for a page served from `hostname`.
    pub fn resolve(&self, hostname: &str) -> &str {
        if hostname == LOCAL_HOSTNAME {
            &self.local_origin
        } else {
            &self.production_origin
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_ORIGIN, DEFAULT_PRODUCTION_ORIGIN)
    }
}

/// Backend URLs built from one resolved origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    origin: String,
}

impl Endpoints {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn for_host(config: &ApiConfig, hostname: &str) -> Self {
        Self::new(config.resolve(hostname))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `GET`/`POST /api/links`
    pub fn links(&self) -> String {
        format!("{}/api/links", self.origin)
    }

    /// `GET`/`DELETE /api/links/:code`
    pub fn link(&self, code: &str) -> String {
        format!("{}/api/links/{}", self.origin, code)
    }

    pub fn healthz(&self) -> String {
        format!("{}/healthz", self.origin)
    }

    /// Full-page navigation target; the backend counts the click and redirects.
    pub fn redirect(&self, code: &str) -> String {
        format!("{}/{}", self.origin, code)
    }
}
