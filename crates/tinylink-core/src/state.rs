//! State cell seam
//!
//! Each view owns one state value. Operations reach it through `ViewState`,
//! which the UI implements over a reactive signal. A cell whose view has been
//! torn down returns `None`, and operations stop at that point instead of
//! writing into a dead view.

use std::cell::RefCell;
use std::rc::Rc;

pub trait ViewState<T> {
    /// Mutate the state; `None` once the owning view is gone.
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> ViewState<T> for Rc<RefCell<T>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}
