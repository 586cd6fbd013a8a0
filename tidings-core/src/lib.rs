//! # tidings-core
//!
//! Core types for the tidings namespaced event dispatcher.
//!
//! This crate has minimal dependencies and is meant for components that hand
//! handlers or selectors around without owning an event bus themselves.
//!
//! # Building Blocks
//!
//! - [`Handler`] - an identity-compared callable receiving a context and arguments
//! - [`EventSpec`] - the `"name"` / `"name.namespace"` string form
//! - [`Selector`] - which registrations an unbind removes
//! - [`Registry`] - event name → ordered [`Registration`]s
//!
//! # Error Types
//!
//! - [`TidingsError`] - Top-level error type
//! - [`InvalidArgument`] - Rejected `bind` arguments
//! - [`BoxError`] - Handler failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event_spec;
mod handler;
mod outcome;
mod registry;
mod selector;

// Re-exports
pub use error::{BoxError, InvalidArgument, TidingsError};
pub use event_spec::EventSpec;
pub use handler::Handler;
pub use outcome::IntoOutcome;
pub use registry::{Registration, Registry};
pub use selector::Selector;
