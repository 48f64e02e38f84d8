//! Client path matching

/// Page kinds; a change of kind mounts a new page, a change of code within
/// the same kind does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    CodeStats,
    Healthz,
    Redirect,
    NotFound,
}

/// Page selected by the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`
    Dashboard,
    /// `/code/:code`
    CodeStats { code: String },
    /// `/healthz`
    Healthz,
    /// `/:code`
    Redirect { code: String },
    /// anything else
    NotFound,
}

impl AppRoute {
    /// Matches a pathname. Arms are tried top to bottom: the stats and health
    /// paths must come before the single-segment redirect path.
    pub fn resolve(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppRoute::Dashboard,
            ["code", code] => AppRoute::CodeStats {
                code: (*code).to_string(),
            },
            ["healthz"] => AppRoute::Healthz,
            [code] => AppRoute::Redirect {
                code: (*code).to_string(),
            },
            _ => AppRoute::NotFound,
        }
    }

    /// Which page renders this route, without its parameters
    pub fn page(&self) -> Page {
        match self {
            AppRoute::Dashboard => Page::Dashboard,
            AppRoute::CodeStats { .. } => Page::CodeStats,
            AppRoute::Healthz => Page::Healthz,
            AppRoute::Redirect { .. } => Page::Redirect,
            AppRoute::NotFound => Page::NotFound,
        }
    }

    /// Short code carried by the path, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            AppRoute::CodeStats { code } | AppRoute::Redirect { code } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Client-side path for this route; `NotFound` has none and maps to `/`.
    pub fn href(&self) -> String {
        match self {
            AppRoute::Dashboard | AppRoute::NotFound => "/".to_string(),
            AppRoute::CodeStats { code } => format!("/code/{}", code),
            AppRoute::Healthz => "/healthz".to_string(),
            AppRoute::Redirect { code } => format!("/{}", code),
        }
    }
}
