//! Callback registration for component events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback invoked with an event payload.
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named event with any number of subscribed callbacks.
///
/// Callbacks run synchronously, in subscription order, on every `emit`.
pub struct EventEmitter<T> {
    name: &'static str,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> EventEmitter<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            callbacks: Vec::new(),
        }
    }

    /// The event name (`"change"`, `"input"`, ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.callbacks.push((id, Arc::new(f)));
        id
    }

    /// Remove a callback. Returns false if it was not subscribed here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub fn emit(&self, payload: &T) {
        for (_, callback) in &self.callbacks {
            callback(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> std::fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("name", &self.name)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
