//! # tidings - Namespaced Event Dispatcher
//!
//! `tidings` is a synchronous publish/subscribe dispatcher for components
//! living in the same process. Handlers are bound to event names, optionally
//! tagged with a namespace, and run in registration order when the event is
//! triggered.
//!
//! ## Quick Start
//!
//! ```rust
//! use tidings::{EventBus, Handler};
//!
//! let bus: EventBus<String, i32> = EventBus::new();
//!
//! let print = Handler::new(|ctx: &String, args: &[i32]| {
//!     println!("{ctx} got {args:?}");
//! });
//!
//! bus.bind("resize", print.clone()).unwrap();
//! bus.bind("resize.layout", print.clone()).unwrap();
//! bus.trigger("resize", &"window".to_string(), &[800, 600]).unwrap();
//!
//! // Drop only the namespaced binding.
//! bus.unbind_event("resize.layout");
//! assert_eq!(bus.handler_count("resize"), 1);
//!
//! // Drop every binding of the handler.
//! bus.unbind_handler(&print);
//! assert!(bus.is_empty());
//! ```
//!
//! ## Namespaces
//!
//! `"name.namespace"` tags a binding. Namespaces never filter `trigger`; they
//! only narrow `unbind`:
//!
//! | selector | removes |
//! |---|---|
//! | `"a"` | every binding of `a` |
//! | `".foo"` | every binding in namespace `foo`, all events |
//! | `"a.foo"` | bindings of `a` in namespace `foo` |
//! | handler | every binding of that handler |
//! | `"a"` + handler | that handler's bindings of `a` |
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events for bind, trigger and unbind.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use tidings_core::{
    // Error types
    BoxError,
    // Primitives
    EventSpec,
    Handler,
    IntoOutcome,
    InvalidArgument,
    Registration,
    Registry,
    Selector,
    TidingsError,
};

mod bus;
mod config;
pub mod testing;

pub use bus::EventBus;
pub use config::{BusConfig, EventBusBuilder};
