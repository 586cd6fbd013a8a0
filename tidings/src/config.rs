//! Event bus configuration.

use crate::bus::EventBus;
use std::borrow::Cow;

/// Settings of an [`EventBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusConfig {
    /// Name attached to every log event as the `bus` field.
    pub label: Cow<'static, str>,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("tidings"),
        }
    }
}

impl BusConfig {
    /// Set the label.
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

/// Builder for constructing an [`EventBus`].
///
/// # Example
/// ```
/// use tidings::{EventBus, EventBusBuilder};
///
/// let bus: EventBus<(), String> = EventBusBuilder::new().label("toolbar").build();
/// assert_eq!(bus.config().label, "toolbar");
/// ```
pub struct EventBusBuilder {
    config: BusConfig,
}

impl EventBusBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            config: BusConfig::default(),
        }
    }

    /// Set the label used in log events.
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.config = self.config.with_label(label);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: BusConfig) -> Self {
        self.config = config;
        self
    }

    /// Build an empty event bus.
    pub fn build<C, A>(self) -> EventBus<C, A> {
        EventBus::with_config(self.config)
    }
}

impl Default for EventBusBuilder {
    fn default() -> Self {
        Self::new()
    }
}
