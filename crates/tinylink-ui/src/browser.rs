//! `BrowserEnv` backed by the real window

use leptos::{spawn_local, window};
use tinylink_core::BrowserEnv;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

/// `navigator.clipboard.writeText(text)`, looked up dynamically so the
/// clipboard bindings need no unstable `web-sys` APIs.
fn clipboard_write(text: &str) -> Result<js_sys::Promise, JsValue> {
    let navigator = window().navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()
}

impl BrowserEnv for WebBrowser {
    fn hostname(&self) -> String {
        window().location().hostname().unwrap_or_default()
    }

    fn origin(&self) -> String {
        window().location().origin().unwrap_or_default()
    }

    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn write_clipboard(&self, text: &str) {
        match clipboard_write(text) {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    warn!("Clipboard write rejected: {:?}", e);
                }
            }),
            Err(e) => warn!("Clipboard unavailable: {:?}", e),
        }
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = window().location().set_href(url) {
            warn!("Navigation to {} failed: {:?}", url, e);
        }
    }
}
