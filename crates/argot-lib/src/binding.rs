//! Shared destination variables.

use std::cell::RefCell;
use std::rc::Rc;

/// A destination a parser writes into, readable by the caller afterwards.
///
/// Sharing is explicit: every clone of a `Binding` (and every clone of a
/// parser bound to it) refers to the same slot, and the last write wins.
#[derive(Debug, Default)]
pub struct Binding<T>(Rc<RefCell<T>>);

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// True when both handles refer to the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: Default> Binding<T> {
    pub fn take(&self) -> T {
        self.0.take()
    }
}
