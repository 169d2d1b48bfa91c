//! Session change fan-out shared by backend implementations.

use super::Session;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::stream::{Stream, StreamExt};
use std::cell::RefCell;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Registry of session-change subscribers.
///
/// Closed subscribers (dropped [`Subscription`]s) are pruned on the next
/// broadcast, so unsubscribing is just dropping the handle.
#[derive(Default)]
pub struct SessionListeners {
    senders: RefCell<Vec<UnboundedSender<Option<Session>>>>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = unbounded();
        self.senders.borrow_mut().push(tx);
        Subscription { receiver: rx }
    }

    /// Sends the new session state to every live subscriber.
    pub fn broadcast(&self, session: Option<Session>) {
        let mut senders = self.senders.borrow_mut();
        senders.retain(|tx| tx.unbounded_send(session.clone()).is_ok());
        tracing::debug!(
            listeners = senders.len(),
            present = session.is_some(),
            "session change broadcast"
        );
    }

    /// Number of subscribers still listening.
    pub fn live_count(&self) -> usize {
        let mut senders = self.senders.borrow_mut();
        senders.retain(|tx| !tx.is_closed());
        senders.len()
    }

    /// Ends every subscriber's stream.
    pub fn close_all(&self) {
        for tx in self.senders.borrow_mut().drain(..) {
            tx.close_channel();
        }
    }
}

/// Stream of session states. Each item is the session after the change.
pub struct Subscription {
    receiver: UnboundedReceiver<Option<Session>>,
}

impl Stream for Subscription {
    type Item = Option<Session>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_next_unpin(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_broadcast_reaches_every_subscriber() {
        let listeners = SessionListeners::new();
        let mut a = listeners.subscribe();
        let mut b = listeners.subscribe();

        listeners.broadcast(Some(Session::with_token("t")));
        listeners.close_all();

        assert_eq!(block_on(a.next()), Some(Some(Session::with_token("t"))));
        assert_eq!(block_on(b.next()), Some(Some(Session::with_token("t"))));
        assert_eq!(block_on(a.next()), None);
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let listeners = SessionListeners::new();
        let kept = listeners.subscribe();
        let dropped = listeners.subscribe();
        assert_eq!(listeners.live_count(), 2);

        drop(dropped);
        listeners.broadcast(None);
        assert_eq!(listeners.live_count(), 1);

        drop(kept);
        assert_eq!(listeners.live_count(), 0);
    }
}
