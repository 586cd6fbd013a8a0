#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tidings::{BoxError, EventBus, Handler};

// ============================================================================
// Test Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    pub id: u32,
}

pub type TestBus = EventBus<Window, String>;
pub type TestHandler = Handler<Window, String>;

pub fn window() -> Window {
    Window { id: 7 }
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// Test Handlers
// ============================================================================

/// Pushes `id` onto `order` every time it runs.
pub fn order_recording(id: usize, order: &Arc<Mutex<Vec<usize>>>) -> TestHandler {
    let order = order.clone();
    Handler::new(move |_: &Window, _: &[String]| {
        order.lock().unwrap().push(id);
    })
}

/// Pushes `id` onto `order`, then fails with `message`.
pub fn failing(id: usize, order: &Arc<Mutex<Vec<usize>>>, message: &'static str) -> TestHandler {
    let order = order.clone();
    Handler::new(move |_: &Window, _: &[String]| -> Result<(), BoxError> {
        order.lock().unwrap().push(id);
        Err(message.into())
    })
}

#[derive(Debug)]
pub struct QuotaExceeded {
    pub limit: u32,
}

impl std::fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "quota of {} exceeded", self.limit)
    }
}

impl std::error::Error for QuotaExceeded {}
