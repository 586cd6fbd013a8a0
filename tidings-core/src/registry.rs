//! Registry of event bindings.
//!
//! Maps event names to their registrations in insertion order. An event name
//! is present only while it has at least one registration.

use crate::{handler::Handler, selector::Selector};
use std::collections::HashMap;

/// One handler bound to one event, tagged with its namespace.
pub struct Registration<C, A> {
    namespace: String,
    handler: Handler<C, A>,
}

impl<C, A> Registration<C, A> {
    /// Create a new registration.
    pub fn new(namespace: impl Into<String>, handler: Handler<C, A>) -> Self {
        Self {
            namespace: namespace.into(),
            handler,
        }
    }

    /// The namespace, `""` when none.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The bound handler.
    pub fn handler(&self) -> &Handler<C, A> {
        &self.handler
    }
}

impl<C, A> Clone for Registration<C, A> {
    fn clone(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<C, A> std::fmt::Debug for Registration<C, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("namespace", &self.namespace)
            .field("handler", &self.handler)
            .finish()
    }
}

/// Event name → ordered registrations.
pub struct Registry<C, A> {
    events: HashMap<String, Vec<Registration<C, A>>>,
}

impl<C, A> Default for Registry<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> Registry<C, A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Append a registration to the end of `event`'s sequence.
    pub fn insert(&mut self, event: &str, registration: Registration<C, A>) {
        self.events
            .entry(event.to_owned())
            .or_default()
            .push(registration);
    }

    /// The registrations bound to `event`, in insertion order.
    pub fn get(&self, event: &str) -> &[Registration<C, A>] {
        self.events.get(event).map(Vec::as_slice).unwrap_or_default()
    }

    /// A copy of `event`'s handlers, in insertion order.
    ///
    /// Dispatch runs over this snapshot so that handlers may mutate the
    /// registry while it is in progress.
    pub fn snapshot(&self, event: &str) -> Vec<Handler<C, A>> {
        self.get(event)
            .iter()
            .map(|r| r.handler.clone())
            .collect()
    }

    /// Remove every registration the selector matches, returning how many were removed.
    ///
    /// Surviving registrations keep their relative order. Event names left
    /// without registrations are dropped.
    pub fn remove(&mut self, selector: &Selector<'_, C, A>) -> usize {
        let before = self.len();
        match selector.event_name() {
            Some(event) => {
                if let Some(regs) = self.events.get_mut(event) {
                    regs.retain(|r| !selector.matches(event, &r.namespace, &r.handler));
                    if regs.is_empty() {
                        self.events.remove(event);
                    }
                }
            }
            None => {
                self.events.retain(|event, regs| {
                    regs.retain(|r| !selector.matches(event, &r.namespace, &r.handler));
                    !regs.is_empty()
                });
            }
        }
        before - self.len()
    }

    /// Whether `event` has at least one registration.
    pub fn contains(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Bound event names, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Total number of registrations across all events.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Whether no event has any registration.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove every registration.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
