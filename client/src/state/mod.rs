//! Client state containers.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods. Async actions
//! mutate them through [`Store`], which the UI backs with an `RwSignal` and
//! tests back with a `RefCell`, so action logic runs without a reactive owner.

pub mod auth;
pub mod login;
pub mod workspace;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Shared mutable access to a state value.
pub trait Store<S> {
    fn mutate(&self, f: impl FnOnce(&mut S));
}

impl<S: Send + Sync + 'static> Store<S> for RwSignal<S> {
    fn mutate(&self, f: impl FnOnce(&mut S)) {
        self.update(f);
    }
}

impl<S> Store<S> for RefCell<S> {
    fn mutate(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut());
    }
}

impl<S, T: Store<S>> Store<S> for Rc<T> {
    fn mutate(&self, f: impl FnOnce(&mut S)) {
        (**self).mutate(f);
    }
}
