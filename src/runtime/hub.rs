//! This module defines the `StatusHub`, which delivers status change
//! notifications to subscribers on the panel thread.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use super::status::{StatusChange, StatusTopic};

/// A callback invoked with each change on the topic it subscribed to.
pub type StatusHandler = Rc<dyn Fn(&StatusChange)>;

/// Identifies a subscription so it can be released later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    topic: StatusTopic,
    handler: StatusHandler,
}

/// A single-threaded publish/subscribe hub for status changes.
///
/// Handlers run synchronously inside `publish`, in the order they were
/// registered. The hub is cheap to clone; clones share the same subscriber
/// list.
#[derive(Clone, Default)]
pub struct StatusHub {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    next_id: Rc<Cell<u64>>,
}

impl StatusHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every change published on `topic`.
    pub fn subscribe<F>(&self, topic: StatusTopic, handler: F) -> SubscriptionId
    where
        F: Fn(&StatusChange) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.subscribers.borrow_mut().push(Subscriber {
            id,
            topic,
            handler: Rc::new(handler),
        });
        trace!("Subscribed {:?} to {:?}", id, topic);
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Delivers `change` to every handler subscribed to its topic.
    pub fn publish(&self, change: StatusChange) {
        let topic = change.topic();

        // Handlers may subscribe or publish themselves, so the list must not
        // stay borrowed while they run.
        let handlers: Vec<StatusHandler> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| s.handler.clone())
            .collect();

        trace!("Publishing {:?} to {} handler(s)", change, handlers.len());
        for handler in handlers {
            handler(&change);
        }
    }

    pub fn subscriber_count(&self, topic: StatusTopic) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}
