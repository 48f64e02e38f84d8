//! Hands a short code visit to the backend

use tracing::debug;

use crate::config::Endpoints;
use crate::env::BrowserEnv;

/// Navigates the whole page to `<backend>/<code>`. The backend counts the
/// click and issues the redirect; nothing is fetched here.
pub fn follow_redirect<E>(env: &E, endpoints: &Endpoints, code: &str) -> String
where
    E: BrowserEnv + ?Sized,
{
    let target = endpoints.redirect(code);
    debug!("Forwarding {} to {}", code, target);
    env.navigate(&target);
    target
}
