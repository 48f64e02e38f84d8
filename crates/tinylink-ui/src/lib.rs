//! Pure Rust WebAssembly Frontend for TinyLink
//!
//! This is a Leptos-based frontend that:
//! - Compiles to WebAssembly
//! - Talks to the TinyLink backend over its REST API
//! - Lets users create, search, inspect and delete short links
//! - Hands short code visits to the backend, which counts and redirects

use leptos::*;
use leptos_router::*;
use tinylink_core::{AppRoute, Page};

mod api;
mod browser;
mod components;
mod pages;
mod state;

pub use api::*;
pub use browser::*;
pub use components::*;
pub use pages::*;
pub use state::*;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app-container">
                <AppRoutes/>
            </main>
        </Router>
    }
}

/// Picks the page for the current path. The page only remounts when the kind
/// of route changes; a new code is passed down through the `code` signal.
#[component]
fn AppRoutes() -> impl IntoView {
    let location = use_location();
    let route = create_memo(move |_| AppRoute::resolve(&location.pathname.get()));
    let page = create_memo(move |_| route.with(AppRoute::page));
    let code = Signal::derive(move || route.with(|r| r.code().unwrap_or_default().to_string()));

    move || match page.get() {
        Page::Dashboard => view! { <DashboardPage/> }.into_view(),
        Page::CodeStats => view! { <CodeStatsPage code=code/> }.into_view(),
        Page::Healthz => view! { <HealthzPage/> }.into_view(),
        Page::Redirect => view! { <RedirectPage code=code/> }.into_view(),
        Page::NotFound => view! { <NotFoundPage/> }.into_view(),
    }
}

/// Application entry point for WASM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
