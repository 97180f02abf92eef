//! Cancellable event subscriptions.
//!
//! Handlers run in registration order. A handler registered with
//! `subscribe_once` is removed right after its first invocation, which is how
//! the deferred first-interaction music start unregisters itself.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// Handle returned by `subscribe`; pass it to `unsubscribe` to cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription<E> {
    id: SubscriptionId,
    once: bool,
    handler: Box<dyn FnMut(&E)>,
}

pub struct EventBus<E> {
    next_id: u64,
    subscriptions: Vec<Subscription<E>>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self { next_id: 0, subscriptions: Vec::new() }
    }
}

impl<E> EventBus<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> SubscriptionId {
        self.register(false, Box::new(handler))
    }

    /// Register a handler that fires on the next event only.
    pub fn subscribe_once(&mut self, handler: impl FnMut(&E) + 'static) -> SubscriptionId {
        self.register(true, Box::new(handler))
    }

    /// Cancel a subscription. Returns `false` if it already fired or was
    /// cancelled.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to every subscriber and return how many were invoked.
    pub fn emit(&mut self, event: &E) -> usize {
        for subscription in &mut self.subscriptions {
            (subscription.handler)(event);
        }
        let invoked = self.subscriptions.len();
        self.subscriptions.retain(|s| !s.once);
        invoked
    }

    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.iter().any(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    fn register(&mut self, once: bool, handler: Box<dyn FnMut(&E)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, once, handler });
        id
    }
}
