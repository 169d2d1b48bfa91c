//! Shared-state access used by the async flows.
//!
//! The flows in this crate (session redirects, form submission) must never
//! hold a borrow across an `.await`. They only touch state through short
//! [`StateCell::with_mut`] calls, which lets the same code run against a
//! plain `Rc<RefCell<T>>` in tests and against UI signals in the app.

use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded shared state with scoped access.
pub trait StateCell<T> {
    /// Runs `f` with shared access to the value.
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Runs `f` with exclusive access to the value.
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Clones the current value out.
    fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T, C: StateCell<T>> StateCell<T> for &C {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        (**self).with(f)
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        (**self).with_mut(f)
    }
}

/// Wraps a value in the `Rc<RefCell<_>>` cell used outside the UI.
pub fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mut_updates_value() {
        let cell = shared(1);
        cell.with_mut(|v| *v += 41);
        assert_eq!(cell.snapshot(), 42);
    }

    #[test]
    fn test_reference_forwards() {
        let cell = shared(String::from("a"));
        let by_ref = &cell;
        by_ref.with_mut(|s| s.push('b'));
        assert_eq!(by_ref.with(|s| s.len()), 2);
    }
}
