//! The event bus.
//!
//! [`EventBus`] binds handlers to event names, triggers them synchronously in
//! registration order, and unbinds them by handler, event, namespace, or a
//! combination.
//!
//! # Re-entrancy
//!
//! `trigger` copies the event's handler list while holding the registry lock
//! and invokes the copy after releasing it. Handlers may call `bind`,
//! `unbind` or `trigger` on the same bus. Such changes apply to later
//! dispatches only: a handler bound mid-dispatch is not invoked by that
//! dispatch, and a handler unbound mid-dispatch still runs if it was in the
//! copy.
//!
//! # Failure
//!
//! Dispatch is fail-fast. The first handler error is returned as-is and the
//! remaining handlers of that `trigger` call are skipped.

use crate::config::BusConfig;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tidings_core::{
    BoxError, EventSpec, Handler, InvalidArgument, Registration, Registry, Selector,
};

/// A synchronous, namespaced publish/subscribe dispatcher.
///
/// `C` is the receiver context passed to every handler and `A` the type of
/// the positional arguments.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use tidings::{EventBus, Handler};
///
/// let bus: EventBus<(), String> = EventBus::new();
/// let seen: Arc<Mutex<Vec<String>>> = Arc::default();
///
/// let sink = seen.clone();
/// let h = Handler::new(move |_: &(), args: &[String]| {
///     sink.lock().unwrap().extend_from_slice(args);
/// });
///
/// bus.bind("save.editor", h).unwrap();
/// bus.trigger("save", &(), &["a.txt".to_string()]).unwrap();
/// bus.unbind_event(".editor");
/// bus.trigger("save", &(), &["b.txt".to_string()]).unwrap();
///
/// assert_eq!(*seen.lock().unwrap(), ["a.txt"]);
/// ```
pub struct EventBus<C, A> {
    registry: Mutex<Registry<C, A>>,
    config: BusConfig,
}

impl<C, A> Default for EventBus<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> EventBus<C, A> {
    /// Create an empty bus with default settings.
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Create an empty bus with the given settings.
    pub fn with_config(config: BusConfig) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            config,
        }
    }

    /// The active settings.
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Bind `handler` to the event named in `spec`.
    ///
    /// `spec` is `"name"` or `"name.namespace"`. The namespace is everything
    /// after the first dot. Binding the same handler twice registers it twice.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`] if `spec` is empty or names no event (e.g. `".foo"`).
    pub fn bind(&self, spec: &str, handler: Handler<C, A>) -> Result<(), InvalidArgument> {
        if spec.is_empty() {
            return Err(InvalidArgument::MissingEvent);
        }
        let parsed = EventSpec::parse(spec);
        if parsed.name().is_empty() {
            return Err(InvalidArgument::EmptyName {
                spec: spec.to_owned(),
            });
        }

        self.registry()
            .insert(parsed.name(), Registration::new(parsed.namespace(), handler));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            bus = %self.config.label,
            event = parsed.name(),
            namespace = parsed.namespace(),
            "bound handler"
        );
        Ok(())
    }

    /// Invoke every handler bound to `name`, in registration order.
    ///
    /// Namespaces do not filter dispatch: `"a.foo"` handlers run on `"a"`.
    /// Triggering an unbound name does nothing.
    ///
    /// # Errors
    ///
    /// The first handler error, unmodified. Later handlers are not invoked.
    pub fn trigger(&self, name: &str, ctx: &C, args: &[A]) -> Result<(), BoxError> {
        let handlers = self.registry().snapshot(name);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            bus = %self.config.label,
            event = name,
            handlers = handlers.len(),
            "dispatching"
        );

        for (index, handler) in handlers.iter().enumerate() {
            if let Err(err) = handler.call(ctx, args) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    bus = %self.config.label,
                    event = name,
                    index,
                    error = %err,
                    "handler failed, dispatch aborted"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = index;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Remove the registrations `selector` matches. Unmatched selectors do nothing.
    pub fn unbind(&self, selector: Selector<'_, C, A>) {
        let removed = self.registry().remove(&selector);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            bus = %self.config.label,
            ?selector,
            removed,
            "unbound handlers"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = removed;
    }

    /// Remove every registration of `handler`, across all events.
    pub fn unbind_handler(&self, handler: &Handler<C, A>) {
        self.unbind(Selector::Handler(handler));
    }

    /// Remove registrations by event spec.
    ///
    /// - `"a"` removes everything bound to `a`
    /// - `".foo"` removes namespace `foo` from every event
    /// - `"a.foo"` removes `a` registrations in namespace `foo`
    pub fn unbind_event(&self, spec: &str) {
        self.unbind(Selector::Event(spec));
    }

    /// Remove the registrations of `handler` selected by `spec`.
    pub fn unbind_event_handler(&self, spec: &str, handler: &Handler<C, A>) {
        self.unbind(Selector::EventHandler(spec, handler));
    }

    /// Whether `name` has at least one registration.
    pub fn is_bound(&self, name: &str) -> bool {
        self.registry().contains(name)
    }

    /// Number of registrations bound to `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.registry().get(name).len()
    }

    /// Namespaces of `name`'s registrations in registration order, `""` for none.
    pub fn namespaces(&self, name: &str) -> Vec<String> {
        self.registry()
            .get(name)
            .iter()
            .map(|r| r.namespace().to_owned())
            .collect()
    }

    /// Bound event names, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.registry().event_names()
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.registry().len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    /// Remove every registration.
    pub fn clear(&self) {
        self.registry().clear();

        #[cfg(feature = "tracing")]
        tracing::debug!(bus = %self.config.label, "cleared");
    }

    // Handlers never run under the lock, so a poisoned registry is still consistent.
    fn registry(&self) -> MutexGuard<'_, Registry<C, A>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C, A> std::fmt::Debug for EventBus<C, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("config", &self.config)
            .field("events", &self.event_names())
            .finish()
    }
}
