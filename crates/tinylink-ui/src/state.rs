//! Reactive state cells
//!
//! Each page keeps its state in one `RwSignal`. `SignalState` lets the core
//! view operations drive that signal; once the page is disposed the signal
//! refuses access and the operations stop.

use leptos::*;
use tinylink_core::ViewState;

pub struct SignalState<T: 'static>(RwSignal<T>);

impl<T: 'static> SignalState<T> {
    pub fn new(value: T) -> Self {
        Self(create_rw_signal(value))
    }

    pub fn signal(&self) -> RwSignal<T> {
        self.0
    }
}

impl<T: 'static> Clone for SignalState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalState<T> {}

impl<T: 'static> ViewState<T> for SignalState<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
