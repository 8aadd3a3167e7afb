//! Load-state notifications between the store side and the presenter.
//!
//! A [`LoadNotifier`] is an explicit publish/subscribe channel owned by whoever
//! wires the plugin together. The presenter holds a [`Subscription`] while it is
//! visible; dropping the subscription unsubscribes it, so there is no global
//! observer registry to clean up.
//!
//! # Example
//!
//! ```rust
//! use eventdeck::app::notifier::{LoadNotifier, LoadSignal};
//!
//! let notifier = LoadNotifier::new();
//! let subscription = notifier.subscribe();
//!
//! notifier.publish(LoadSignal::Started);
//! notifier.publish(LoadSignal::Finished);
//! assert_eq!(subscription.drain(), vec![LoadSignal::Started, LoadSignal::Finished]);
//!
//! drop(subscription);
//! assert_eq!(notifier.subscriber_count(), 0);
//! ```

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, Weak};

/// Payload-free load signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSignal {
    /// A load has started; show the busy indicator.
    Started,
    /// A load has finished and the store data may have changed.
    Finished,
}

type Registry = Mutex<BTreeMap<u64, Sender<LoadSignal>>>;

#[derive(Debug, Default)]
struct Shared {
    next_id: Mutex<u64>,
    subscribers: Registry,
}

/// Publish/subscribe channel for [`LoadSignal`]s.
///
/// Cloning a notifier shares its subscriber registry.
#[derive(Debug, Clone, Default)]
pub struct LoadNotifier {
    shared: Arc<Shared>,
}

impl LoadNotifier {
    /// Creates a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber. Signals published afterwards are queued on it.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::channel();

        let id = {
            let mut next = lock(&self.shared.next_id);
            let id = *next;
            *next += 1;
            id
        };
        lock(&self.shared.subscribers).insert(id, sender);

        tracing::debug!(subscription_id = id, "load notifier subscription added");

        Subscription {
            id,
            receiver,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Delivers `signal` to every live subscriber.
    ///
    /// Subscribers whose receiving side is gone are pruned.
    pub fn publish(&self, signal: LoadSignal) {
        let mut subscribers = lock(&self.shared.subscribers);
        subscribers.retain(|_, sender| sender.send(signal).is_ok());

        tracing::debug!(signal = ?signal, subscribers = subscribers.len(), "load signal published");
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared.subscribers).len()
    }
}

/// A live registration with a [`LoadNotifier`].
///
/// Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    receiver: Receiver<LoadSignal>,
    shared: Weak<Shared>,
}

impl Subscription {
    /// Takes every signal queued since the last drain, in publish order.
    #[must_use]
    pub fn drain(&self) -> Vec<LoadSignal> {
        self.receiver.try_iter().collect()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            lock(&shared.subscribers).remove(&self.id);
            tracing::debug!(subscription_id = self.id, "load notifier subscription removed");
        }
    }
}

/// Locks a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
