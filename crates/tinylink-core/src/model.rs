//! Payload types exchanged with the backend

use serde::{Deserialize, Serialize};

/// A short link as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    #[serde(default)]
    pub target_url: String,
    #[serde(default)]
    pub total_clicks: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_clicked_at: Option<String>,
}

impl Link {
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            target_url: target_url.into(),
            total_clicks: None,
            created_at: None,
            last_clicked_at: None,
        }
    }

    /// Rendering key: backend id, or the code when the id is missing
    pub fn key(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.code.clone())
    }

    pub fn clicks(&self) -> u64 {
        self.total_clicks.unwrap_or(0)
    }

    /// Case-insensitive substring match against code or target URL
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.code.to_lowercase().contains(&term) || self.target_url.to_lowercase().contains(&term)
    }
}

/// `GET /api/links` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkList {
    #[serde(default)]
    pub data: Option<Vec<Link>>,
}

impl LinkList {
    pub fn into_links(self) -> Vec<Link> {
        self.data.unwrap_or_default()
    }
}

/// `POST /api/links` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateLinkRequest {
    pub target_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Trims both fields; an empty custom code is left for the backend to generate.
    pub fn new(target_url: &str, code: &str) -> Self {
        let code = code.trim();
        Self {
            target_url: target_url.trim().to_string(),
            code: (!code.is_empty()).then(|| code.to_string()),
        }
    }
}

/// `GET /healthz` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn status_label(&self) -> &'static str {
        if self.ok {
            "OK"
        } else {
            "Unknown"
        }
    }
}

/// `{ message? }` body carried by mutations and failures
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}
