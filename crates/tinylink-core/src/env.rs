//! Browser side effects used by the views

/// Window-level capabilities the views need besides the backend.
pub trait BrowserEnv {
    /// Host name of the page, used to pick the backend origin
    fn hostname(&self) -> String;

    /// Origin the page was served from, used to build short URLs
    fn origin(&self) -> String;

    /// Blocking yes/no prompt
    fn confirm(&self, message: &str) -> bool;

    /// Fire-and-forget clipboard write
    fn write_clipboard(&self, text: &str);

    /// Full page navigation
    fn navigate(&self, url: &str);
}
