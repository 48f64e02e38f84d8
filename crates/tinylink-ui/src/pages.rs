//! Page Components
//!
//! One component per route. Each page owns its state signal and fetches what
//! it needs when mounted.

use std::rc::Rc;

use gloo_timers::future::IntervalStream;
use leptos::*;
use tinylink_core::views::{
    copy_field, copy_short_url, create_link, delete_link, follow_redirect, health_poll,
    load_links, load_stats, CodeStatsState, DashboardState, HealthState, StatsStatus,
};
use tinylink_core::{
    format_timestamp, short_url, BrowserEnv, Link, ViewState, HEALTH_POLL_INTERVAL,
    NOTICE_TIMEOUT,
};

use crate::api::ApiClient;
use crate::browser::WebBrowser;
use crate::components::*;
use crate::state::SignalState;

/// Dashboard - create, search and manage links
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = SignalState::new(DashboardState::new());
    let dashboard = state.signal();

    // Load links on mount
    create_effect(move |_| {
        spawn_local(async move {
            load_links(&ApiClient::default(), &state).await;
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            create_link(&ApiClient::default(), &state).await;
        });
    };

    let on_copy = move |code: String| {
        if let Some(notice) = copy_short_url(&WebBrowser, &state, &code) {
            set_timeout(
                move || {
                    state.update_with(|s| s.clear_success(&notice));
                },
                NOTICE_TIMEOUT,
            );
        }
    };

    let on_delete = move |code: String| {
        spawn_local(async move {
            delete_link(&ApiClient::default(), &WebBrowser, &state, &code).await;
        });
    };

    let submitting = create_memo(move |_| dashboard.with(|s| s.submitting));
    let loading = create_memo(move |_| dashboard.with(|s| s.loading));
    let visible = create_memo(move |_| dashboard.with(|s| s.filtered_links()));
    let empty_message = create_memo(move |_| dashboard.with(|s| s.empty_message()));

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"TinyLink Dashboard"</h1>
                <p class="subtitle">"Create and manage your short links"</p>
            </header>

            {move || dashboard.with(|s| s.success.clone()).map(|m| view! { <SuccessDisplay message=m/> })}
            {move || dashboard.with(|s| s.error.clone()).map(|e| view! { <ErrorDisplay message=e/> })}

            <section class="card create-link">
                <h2>"Create New Short Link"</h2>
                <form on:submit=on_submit>
                    <div class="form-field">
                        <label for="target-url">"Target URL *"</label>
                        <input
                            id="target-url"
                            type="url"
                            placeholder="https://example.com"
                            required=true
                            prop:value=move || dashboard.with(|s| s.form.target_url.clone())
                            on:input=move |ev| dashboard.update(|s| s.form.target_url = event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </div>
                    <div class="form-field">
                        <label for="custom-code">"Custom Code (optional)"</label>
                        <input
                            id="custom-code"
                            type="text"
                            placeholder="Leave empty for auto-generated"
                            pattern="[A-Za-z0-9]{5}"
                            prop:value=move || dashboard.with(|s| s.form.code.clone())
                            on:input=move |ev| dashboard.update(|s| s.form.code = event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                        <p class="hint">"Must be exactly 5 characters (A-Z, a-z, 0-9)"</p>
                    </div>
                    <button type="submit" class="submit-button" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Create Link" }}
                    </button>
                </form>
            </section>

            <div class="search-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by code or URL..."
                    prop:value=move || dashboard.with(|s| s.search.clone())
                    on:input=move |ev| dashboard.update(|s| s.search = event_target_value(&ev))
                />
            </div>

            <section class="card links-table">
                <h2>"All Links"</h2>
                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner/> }.into_view()
                    } else if visible.with(|links| links.is_empty()) {
                        view! { <p class="empty-state">{move || empty_message.get()}</p> }.into_view()
                    } else {
                        view! {
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Short Code"</th>
                                        <th>"Target URL"</th>
                                        <th>"Total Clicks"</th>
                                        <th>"Last Clicked"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || visible.get()
                                        key=|link| link.key()
                                        children=move |link: Link| view! {
                                            <LinkRow link=link on_copy=on_copy on_delete=on_delete/>
                                        }
                                    />
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Details card for a loaded link
#[component]
fn LinkDetails(link: Link, #[prop(into)] on_copy: Callback<String>) -> impl IntoView {
    let short = short_url(&WebBrowser.origin(), &link.code);
    let copy_code = link.code.clone();
    let copy_short = short.clone();
    let copy_target = link.target_url.clone();

    view! {
        <section class="card link-details">
            <h2>"Link Details"</h2>

            <div class="stat-field">
                <label>"Short Code"</label>
                <div class="stat-value">
                    <span class="code">{link.code.clone()}</span>
                    <CopyButton on_copy=move |_: ()| on_copy.call(copy_code.clone())/>
                </div>
            </div>

            <div class="stat-field">
                <label>"Short URL"</label>
                <div class="stat-value">
                    <span class="short-url">{short.clone()}</span>
                    <CopyButton on_copy=move |_: ()| on_copy.call(copy_short.clone())/>
                </div>
            </div>

            <div class="stat-field">
                <label>"Target URL"</label>
                <div class="stat-value">
                    <a href=link.target_url.clone() target="_blank" rel="noopener noreferrer">
                        {link.target_url.clone()}
                    </a>
                    <CopyButton on_copy=move |_: ()| on_copy.call(copy_target.clone())/>
                </div>
            </div>

            <div class="stat-field">
                <label>"Total Clicks"</label>
                <span class="stat-number">{link.clicks()}</span>
            </div>

            <div class="stat-field">
                <label>"Created At"</label>
                <span>{format_timestamp(link.created_at.as_deref())}</span>
            </div>

            <div class="stat-field">
                <label>"Last Clicked"</label>
                <span>{format_timestamp(link.last_clicked_at.as_deref())}</span>
            </div>
        </section>

        <section class="card test-link">
            <p><strong>"Test your link:"</strong></p>
            <a href=short.clone() target="_blank" rel="noopener noreferrer">{short}</a>
        </section>
    }
}

/// Statistics for one short code
#[component]
pub fn CodeStatsPage(#[prop(into)] code: Signal<String>) -> impl IntoView {
    let state = SignalState::new(CodeStatsState::new(code.get_untracked()));
    let stats = state.signal();

    // Fetch on mount and whenever the code changes
    create_effect(move |_| {
        let code = code.get();
        if code.is_empty() {
            return;
        }
        state.update_with(|s| s.set_code(&code));
        spawn_local(async move {
            load_stats(&ApiClient::default(), &state, &code).await;
        });
    });

    let on_copy = move |text: String| {
        if let Some(notice) = copy_field(&WebBrowser, &state, &text) {
            set_timeout(
                move || {
                    state.update_with(|s| s.clear_notice(&notice));
                },
                NOTICE_TIMEOUT,
            );
        }
    };

    let status = create_memo(move |_| stats.with(|s| s.status.clone()));

    view! {
        <div class="code-stats-page">
            {move || match status.get() {
                StatsStatus::Loading => view! { <LoadingSpinner/> }.into_view(),
                StatsStatus::NotFound(message) => view! {
                    <div class="not-found">
                        <h1>"Link Not Found"</h1>
                        <p>{message}</p>
                        <BackLink/>
                    </div>
                }.into_view(),
                StatsStatus::Loaded(link) => view! {
                    <header class="page-header">
                        <BackLink/>
                        <h1>"Link Statistics"</h1>
                    </header>
                    {move || stats.with(|s| s.notice.clone()).map(|m| view! { <SuccessDisplay message=m/> })}
                    <LinkDetails link=link on_copy=on_copy/>
                }.into_view(),
            }}
        </div>
    }
}

/// Health page - polls the backend liveness endpoint
#[component]
pub fn HealthzPage() -> impl IntoView {
    let state = SignalState::new(HealthState::default());
    let health = state.signal();

    let ticks = IntervalStream::new(HEALTH_POLL_INTERVAL.as_millis() as u32);
    let (guard, poll) = health_poll(Rc::new(ApiClient::default()), state, ticks);
    spawn_local(poll);
    on_cleanup(move || drop(guard));

    view! {
        <div class="healthz-page">
            <h1>"Health Check"</h1>

            {move || match health.get() {
                HealthState::Checking => view! {
                    <div class="card">
                        <p class="checking">"Checking health..."</p>
                    </div>
                }.into_view(),
                HealthState::Healthy(status) => view! {
                    <div class="card healthy">
                        <div class="status-row">
                            <span class="status-dot"></span>
                            <h2>"System Healthy"</h2>
                        </div>
                        <div>
                            <span class="field-label">"Status: "</span>
                            <span>{status.status_label()}</span>
                        </div>
                        {status.version.map(|v| view! {
                            <div>
                                <span class="field-label">"Version: "</span>
                                <span>{v}</span>
                            </div>
                        })}
                    </div>
                }.into_view(),
                HealthState::Unhealthy(message) => view! {
                    <div class="card unhealthy">
                        <h2>"System Unhealthy"</h2>
                        <p>{message}</p>
                    </div>
                }.into_view(),
            }}

            <BackLink/>
        </div>
    }
}

/// Forwards a short code visit to the backend
#[component]
pub fn RedirectPage(#[prop(into)] code: Signal<String>) -> impl IntoView {
    create_effect(move |_| {
        let code = code.get();
        if !code.is_empty() {
            follow_redirect(&WebBrowser, ApiClient::default().endpoints(), &code);
        }
    });

    view! {
        <div class="redirect-page">
            <LoadingSpinner label="Redirecting..."/>
        </div>
    }
}

/// Fallback for unknown paths
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <BackLink/>
        </div>
    }
}
