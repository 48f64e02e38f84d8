//! HTTP client for the link backend

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tinylink_core::{
    ApiConfig, ApiError, BrowserEnv, CreateLinkRequest, Endpoints, HealthStatus, Link, LinkApi,
    LinkList, MessageBody, Result,
};
use tracing::debug;

use crate::browser::WebBrowser;

/// API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    /// Client for the backend that matches the page's host
    pub fn for_current_host() -> Self {
        Self::new(Endpoints::for_host(
            &ApiConfig::from_build_env(),
            &WebBrowser.hostname(),
        ))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::for_current_host()
    }
}

/// Turns a non-2xx response into `ApiError::Status`, keeping the backend's
/// `message` when the body has one.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::status(status, message)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(status_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(e.to_string()))
}

#[async_trait(?Send)]
impl LinkApi for ApiClient {
    async fn list_links(&self) -> Result<Vec<Link>> {
        let response = Request::get(&self.endpoints.links())
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        read_json::<LinkList>(response).await.map(LinkList::into_links)
    }

    async fn create_link(&self, request: &CreateLinkRequest) -> Result<Option<Link>> {
        let response = Request::post(&self.endpoints.links())
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ApiError::encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        // The body is either the new link or just a message
        Ok(response.json::<Link>().await.ok())
    }

    async fn link_stats(&self, code: &str) -> Result<Link> {
        let response = Request::get(&self.endpoints.link(code))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        read_json::<Link>(response).await
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        let response = Request::delete(&self.endpoints.link(code))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        debug!("Deleted {} (HTTP {})", code, response.status());
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = Request::get(&self.endpoints.healthz())
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        read_json::<HealthStatus>(response).await
    }
}
