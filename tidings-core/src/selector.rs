//! Unbind selectors.
//!
//! A [`Selector`] names which registrations an unbind removes. Every
//! component present in the selector must match; an absent or empty
//! component matches anything.

use crate::{event_spec::EventSpec, handler::Handler};
use std::fmt;

/// The three unbind call shapes.
pub enum Selector<'a, C, A> {
    /// Every registration of this handler, across all events and namespaces.
    Handler(&'a Handler<C, A>),
    /// Registrations selected by an event spec:
    ///
    /// - `"a"` - everything bound to `a`
    /// - `".foo"` - everything in namespace `foo`, across all events
    /// - `"a.foo"` - `a` registrations in namespace `foo`
    Event(&'a str),
    /// Registrations selected by an event spec that also bind this handler.
    EventHandler(&'a str, &'a Handler<C, A>),
}

impl<C, A> Clone for Selector<'_, C, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, A> Copy for Selector<'_, C, A> {}

impl<C, A> fmt::Debug for Selector<'_, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(h) => f.debug_tuple("Handler").field(h).finish(),
            Self::Event(spec) => f.debug_tuple("Event").field(spec).finish(),
            Self::EventHandler(spec, h) => {
                f.debug_tuple("EventHandler").field(spec).field(h).finish()
            }
        }
    }
}

impl<'a, C, A> Selector<'a, C, A> {
    /// The event name this selector is confined to, if any.
    pub fn event_name(&self) -> Option<&'a str> {
        self.spec().map(|s| s.name()).filter(|name| !name.is_empty())
    }

    /// The namespace this selector is confined to, if any.
    pub fn namespace(&self) -> Option<&'a str> {
        self.spec()
            .map(|s| s.namespace())
            .filter(|ns| !ns.is_empty())
    }

    /// The handler this selector is confined to, if any.
    pub fn handler(&self) -> Option<&'a Handler<C, A>> {
        match *self {
            Self::Handler(h) | Self::EventHandler(_, h) => Some(h),
            Self::Event(_) => None,
        }
    }

    /// Whether a registration under `event` with `namespace` and `handler` is selected.
    pub fn matches(&self, event: &str, namespace: &str, handler: &Handler<C, A>) -> bool {
        self.event_name().is_none_or(|name| name == event)
            && self.namespace().is_none_or(|ns| ns == namespace)
            && self.handler().is_none_or(|h| h.same_as(handler))
    }

    fn spec(&self) -> Option<EventSpec<'a>> {
        match *self {
            Self::Event(spec) | Self::EventHandler(spec, _) => Some(EventSpec::parse(spec)),
            Self::Handler(_) => None,
        }
    }
}
