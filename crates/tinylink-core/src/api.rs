//! Backend contract consumed by the views

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{CreateLinkRequest, HealthStatus, Link};

/// REST surface of the link backend.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait LinkApi {
    /// `GET /api/links`, returning the `data` array (empty when absent)
    async fn list_links(&self) -> Result<Vec<Link>>;

    /// `POST /api/links`. The created link is returned when the body carries one.
    async fn create_link(&self, request: &CreateLinkRequest) -> Result<Option<Link>>;

    /// `GET /api/links/:code`
    async fn link_stats(&self, code: &str) -> Result<Link>;

    /// `DELETE /api/links/:code`
    async fn delete_link(&self, code: &str) -> Result<()>;

    /// `GET /healthz`
    async fn health(&self) -> Result<HealthStatus>;
}
