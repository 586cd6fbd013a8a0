//! Testing utilities for tidings.
//!
//! - [`CallCounter`]: counts how often its handler ran
//! - [`CallRecorder`]: records the context and arguments of every call

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tidings_core::Handler;

// ============================================================================
// Call Counter
// ============================================================================

/// Counts invocations of the handler it hands out.
///
/// Every call to [`handler`](CallCounter::handler) returns the same handler
/// identity, so it can be bound repeatedly and unbound in one go.
///
/// # Example
///
/// ```
/// use tidings::{EventBus, testing::CallCounter};
///
/// let bus: EventBus<(), ()> = EventBus::new();
/// let counter = CallCounter::new();
/// bus.bind("a", counter.handler()).unwrap();
/// bus.trigger("a", &(), &[]).unwrap();
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CallCounter<C, A> {
    count: Arc<AtomicUsize>,
    handler: Handler<C, A>,
}

impl<C: 'static, A: 'static> CallCounter<C, A> {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = count.clone();
        let handler = Handler::new(move |_: &C, _: &[A]| {
            hits.fetch_add(1, Ordering::SeqCst);
        });
        Self { count, handler }
    }
}

impl<C, A> CallCounter<C, A> {
    /// The counting handler.
    pub fn handler(&self) -> Handler<C, A> {
        self.handler.clone()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<C: 'static, A: 'static> Default for CallCounter<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Call Recorder
// ============================================================================

/// One recorded handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call<C, A> {
    /// The receiver context.
    pub ctx: C,
    /// The positional arguments.
    pub args: Vec<A>,
}

/// Records the context and arguments of every invocation of its handler.
pub struct CallRecorder<C, A> {
    calls: Arc<Mutex<Vec<Call<C, A>>>>,
    handler: Handler<C, A>,
}

impl<C, A> CallRecorder<C, A>
where
    C: Clone + Send + 'static,
    A: Clone + Send + 'static,
{
    /// Create a new recorder.
    pub fn new() -> Self {
        let calls: Arc<Mutex<Vec<Call<C, A>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let handler = Handler::new(move |ctx: &C, args: &[A]| {
            sink.lock().unwrap().push(Call {
                ctx: ctx.clone(),
                args: args.to_vec(),
            });
        });
        Self { calls, handler }
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<Call<C, A>> {
        self.calls.lock().unwrap().clone()
    }
}

impl<C, A> CallRecorder<C, A> {
    /// The recording handler.
    pub fn handler(&self) -> Handler<C, A> {
        self.handler.clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<C, A> Default for CallRecorder<C, A>
where
    C: Clone + Send + 'static,
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
