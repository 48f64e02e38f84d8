//! Reusable UI Components
//!
//! Leptos components shared by the link pages.

use leptos::*;
use leptos_router::*;
use tinylink_core::{format_timestamp, AppRoute, Link};

/// Loading spinner
#[component]
pub fn LoadingSpinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <span>{label}</span>
        </div>
    }
}

/// Error display
#[component]
pub fn ErrorDisplay(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-error">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}

/// Success notice
#[component]
pub fn SuccessDisplay(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-success">
            <span class="success-message">{message}</span>
        </div>
    }
}

/// Link back to the dashboard
#[component]
pub fn BackLink() -> impl IntoView {
    view! {
        <A href=AppRoute::Dashboard.href() class="back-link">"← Back to Dashboard"</A>
    }
}

/// Small copy-to-clipboard button
#[component]
pub fn CopyButton(
    #[prop(into)] on_copy: Callback<()>,
    #[prop(default = "Copy")] title: &'static str,
) -> impl IntoView {
    view! {
        <button type="button" class="copy-button" title=title on:click=move |_| on_copy.call(())>
            "📋"
        </button>
    }
}

/// One row of the links table
#[component]
pub fn LinkRow(
    link: Link,
    #[prop(into)] on_copy: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let copy_code = link.code.clone();
    let delete_code = link.code.clone();
    let stats_href = AppRoute::CodeStats {
        code: link.code.clone(),
    }
    .href();
    let last_clicked = format_timestamp(link.last_clicked_at.as_deref());

    view! {
        <tr class="link-row">
            <td class="link-code">
                <span class="code">{link.code.clone()}</span>
                <CopyButton title="Copy URL" on_copy=move |_: ()| on_copy.call(copy_code.clone())/>
            </td>
            <td class="link-target">
                <div class="truncate" title=link.target_url.clone()>{link.target_url.clone()}</div>
            </td>
            <td class="link-clicks">{link.clicks()}</td>
            <td class="link-last-clicked">{last_clicked}</td>
            <td class="link-actions">
                <A href=stats_href class="stats-link">"📊 Stats"</A>
                <button
                    type="button"
                    class="delete-button"
                    on:click=move |_| on_delete.call(delete_code.clone())
                >
                    "🗑️ Delete"
                </button>
            </td>
        </tr>
    }
}
