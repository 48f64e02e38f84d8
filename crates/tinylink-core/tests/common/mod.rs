//! Fakes shared by the view tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use tinylink_core::{ApiError, BrowserEnv, CreateLinkRequest, HealthStatus, Link, LinkApi, Result, ViewState};

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(CreateLinkRequest),
    Stats(String),
    Delete(String),
    Health,
}

/// Backend that records calls and replays scripted responses.
/// Unscripted calls succeed with an empty/default payload.
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<Call>>,
    lists: RefCell<VecDeque<Result<Vec<Link>>>>,
    creates: RefCell<VecDeque<Result<Option<Link>>>>,
    stats: RefCell<VecDeque<Result<Link>>>,
    deletes: RefCell<VecDeque<Result<()>>>,
    health: RefCell<VecDeque<Result<HealthStatus>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn push_list(&self, response: Result<Vec<Link>>) {
        self.lists.borrow_mut().push_back(response);
    }

    pub fn push_create(&self, response: Result<Option<Link>>) {
        self.creates.borrow_mut().push_back(response);
    }

    pub fn push_stats(&self, response: Result<Link>) {
        self.stats.borrow_mut().push_back(response);
    }

    pub fn push_delete(&self, response: Result<()>) {
        self.deletes.borrow_mut().push_back(response);
    }

    pub fn push_health(&self, response: Result<HealthStatus>) {
        self.health.borrow_mut().push_back(response);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl LinkApi for FakeApi {
    async fn list_links(&self) -> Result<Vec<Link>> {
        self.record(Call::List);
        self.lists.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create_link(&self, request: &CreateLinkRequest) -> Result<Option<Link>> {
        self.record(Call::Create(request.clone()));
        self.creates.borrow_mut().pop_front().unwrap_or(Ok(None))
    }

    async fn link_stats(&self, code: &str) -> Result<Link> {
        self.record(Call::Stats(code.to_string()));
        self.stats
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::status(404, Some("Link not found".to_string()))))
    }

    async fn delete_link(&self, code: &str) -> Result<()> {
        self.record(Call::Delete(code.to_string()));
        self.deletes.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record(Call::Health);
        self.health.borrow_mut().pop_front().unwrap_or(Ok(HealthStatus {
            ok: true,
            version: None,
        }))
    }
}

/// Browser with a scripted confirm answer that captures side effects
pub struct FakeBrowser {
    pub hostname: String,
    pub origin: String,
    pub confirm_answer: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
    pub clipboard: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self {
            hostname: "tiny.link".to_string(),
            origin: "https://tiny.link".to_string(),
            confirm_answer: Cell::new(true),
            prompts: RefCell::new(Vec::new()),
            clipboard: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        let browser = Self::new();
        browser.confirm_answer.set(false);
        browser
    }
}

impl BrowserEnv for FakeBrowser {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn write_clipboard(&self, text: &str) {
        self.clipboard.borrow_mut().push(text.to_string());
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}

/// State cell that can be unmounted, after which it refuses writes
pub struct Mounted<T> {
    pub inner: Rc<RefCell<T>>,
    mounted: Rc<Cell<bool>>,
}

impl<T> Clone for Mounted<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            mounted: self.mounted.clone(),
        }
    }
}

impl<T: Clone> Mounted<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    pub fn snapshot(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> ViewState<T> for Mounted<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.mounted.get().then(|| f(&mut *self.inner.borrow_mut()))
    }
}

pub fn link(code: &str, target_url: &str) -> Link {
    Link::new(code, target_url)
}

pub fn state<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}
