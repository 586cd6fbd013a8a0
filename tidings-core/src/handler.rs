//! # Handler
//!
//! The callable bound to an event. A handler receives the receiver context
//! passed to `trigger` and the positional argument slice.
//!
//! # Identity
//!
//! Handlers are compared by identity, never by behavior. Cloning a
//! [`Handler`] yields another reference to the same callable, so the clone
//! can later be used to unbind every registration of the original. Two
//! handlers built from identical closures are still distinct.

use crate::{error::BoxError, outcome::IntoOutcome};
use std::{fmt, sync::Arc};

type HandlerFn<C, A> = dyn Fn(&C, &[A]) -> Result<(), BoxError> + Send + Sync;

/// An identity-compared callable taking a receiver context `C` and arguments `A`.
///
/// # Example
///
/// ```
/// use tidings_core::Handler;
///
/// let log = Handler::new(|ctx: &String, args: &[u32]| {
///     println!("{ctx}: {args:?}");
/// });
/// let same = log.clone();
/// assert!(log.same_as(&same));
/// ```
pub struct Handler<C, A> {
    inner: Arc<HandlerFn<C, A>>,
}

impl<C: 'static, A: 'static> Handler<C, A> {
    /// Wrap a closure. It may return `()` or `Result<(), E>`.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&C, &[A]) -> R + Send + Sync + 'static,
        R: IntoOutcome + 'static,
    {
        Self {
            inner: Arc::new(move |ctx: &C, args: &[A]| f(ctx, args).into_outcome()),
        }
    }
}

impl<C, A> Handler<C, A> {
    /// Invoke the handler.
    pub fn call(&self, ctx: &C, args: &[A]) -> Result<(), BoxError> {
        (self.inner)(ctx, args)
    }

    /// Whether `self` and `other` refer to the same callable.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C, A> Clone for Handler<C, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, A> PartialEq for Handler<C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<C, A> Eq for Handler<C, A> {}

impl<C, A> fmt::Debug for Handler<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
