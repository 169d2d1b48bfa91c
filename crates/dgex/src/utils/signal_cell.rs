//! Dioxus signal adapters.
//!
//! The async flows in `dgex_core` reach state through
//! [`StateCell`]. [`SignalCell`] lets them run directly against a signal,
//! and [`SignalExt`] covers the in-place edits event handlers make.
//!
//! ```ignore
//! let form = use_signal(FormState::<CommunityFlow>::new);
//! spawn(async move {
//!     submit(&SignalCell(form), &*backend).await;
//! });
//! ```

use dgex_core::state::StateCell;
use dioxus::prelude::*;

/// A signal seen through the core [`StateCell`] interface.
pub struct SignalCell<T: 'static>(pub Signal<T>);

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: 'static> StateCell<T> for SignalCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.read())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.0;
        let mut value = signal.write();
        f(&mut value)
    }
}

/// In-place mutation for signals.
///
/// Replaces the read-clone-set pattern:
///
/// ```ignore
/// form.mutate(|state| state.values.email = value);
/// ```
pub trait SignalExt<T: 'static> {
    /// Mutates the value in place and notifies subscribers once.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.write());
    }
}
