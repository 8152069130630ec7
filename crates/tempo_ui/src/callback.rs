//! Callback abstraction for stepper notifications
//!
//! The stepper notifies its host synchronously, from inside whatever event or
//! timer firing caused the change. Instead of spelling out
//! `Option<Box<dyn FnMut(T)>>` for every notification, the engine stores a
//! `Callback<T>`.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tempo_ui::Callback;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let mut on_change: Callback<f64> = Callback::new(move |v| sink.borrow_mut().push(v));
//!
//! on_change.emit(3.0);
//! assert_eq!(*seen.borrow(), vec![3.0]);
//! ```

use std::fmt;

/// An optional, side-effecting notification handler.
pub struct Callback<T> {
    f: Option<Box<dyn FnMut(T)>>,
}

impl<T> Callback<T> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the handler, if one is set.
    pub fn emit(&mut self, value: T) {
        if let Some(f) = self.f.as_mut() {
            f(value);
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
