//! Bind and trigger behavior.

use std::sync::{Arc, Mutex};
use tidings::{
    EventBus, TidingsError,
    testing::{CallCounter, CallRecorder},
};

mod common;
use common::{QuotaExceeded, TestBus, Window, args, failing, order_recording, window};

#[test]
fn test_simple_handler() {
    let bus = TestBus::new();
    let counter = CallCounter::new();

    bus.bind("a", counter.handler()).unwrap();
    assert_eq!(counter.count(), 0);

    bus.trigger("a", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 1);

    bus.trigger("a", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 2);
}

#[test]
fn test_multiple_handlers_run_in_bind_order() {
    let bus = TestBus::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    bus.bind("a", order_recording(1, &order)).unwrap();
    bus.bind("a", order_recording(2, &order)).unwrap();
    bus.bind("a", order_recording(3, &order)).unwrap();

    bus.trigger("a", &window(), &[]).unwrap();
    bus.trigger("a", &window(), &[]).unwrap();

    assert_eq!(*order.lock().unwrap(), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn test_same_handler_bound_twice_runs_twice() {
    let bus = TestBus::new();
    let counter = CallCounter::new();

    for _ in 0..3 {
        bus.bind("a", counter.handler()).unwrap();
    }
    bus.trigger("a", &window(), &[]).unwrap();

    assert_eq!(counter.count(), 3);
    assert_eq!(bus.handler_count("a"), 3);
}

#[test]
fn test_multiple_events_share_a_handler() {
    let bus = TestBus::new();
    let counter = CallCounter::new();

    bus.bind("a", counter.handler()).unwrap();
    bus.bind("b", counter.handler()).unwrap();

    bus.trigger("a", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 1);

    bus.trigger("b", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 2);
}

#[test]
fn test_trigger_only_reaches_named_event() {
    let bus = TestBus::new();
    let first = CallCounter::new();
    let second = CallCounter::new();

    bus.bind("a", first.handler()).unwrap();
    bus.bind("b", second.handler()).unwrap();

    bus.trigger("a", &window(), &[]).unwrap();
    assert_eq!((first.count(), second.count()), (1, 0));

    bus.trigger("b", &window(), &[]).unwrap();
    assert_eq!((first.count(), second.count()), (1, 1));
}

#[test]
fn test_namespace_does_not_gate_trigger() {
    let bus = TestBus::new();
    let counter = CallCounter::new();

    bus.bind("a.foo", counter.handler()).unwrap();
    bus.bind("b.foo", counter.handler()).unwrap();

    bus.trigger("a", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 1);

    bus.trigger("b", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 2);

    // The full spec is not an event name.
    bus.trigger("a.foo", &window(), &[]).unwrap();
    assert_eq!(counter.count(), 2);
}

#[test]
fn test_context_and_arguments_are_passed() {
    let bus = TestBus::new();
    let first = CallRecorder::new();
    let second = CallRecorder::new();

    bus.bind("a", first.handler()).unwrap();
    bus.bind("a", second.handler()).unwrap();
    assert_eq!(first.count(), 0);

    bus.trigger("a", &Window { id: 42 }, &args(&["x", "y"]))
        .unwrap();

    for recorder in [&first, &second] {
        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].ctx, Window { id: 42 });
        assert_eq!(calls[0].args, ["x", "y"]);
    }
}

#[test]
fn test_trigger_unbound_event_is_noop() {
    let bus = TestBus::new();
    assert!(bus.trigger("a", &window(), &args(&["x", "y"])).is_ok());
    assert!(bus.is_empty());
}

#[test]
fn test_failing_handler_stops_dispatch() {
    let bus = TestBus::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    bus.bind("a", order_recording(1, &order)).unwrap();
    bus.bind("a", failing(2, &order, "boom")).unwrap();
    bus.bind("a", order_recording(3, &order)).unwrap();

    let err = bus.trigger("a", &window(), &[]).unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert_eq!(*order.lock().unwrap(), vec![1, 2]);

    // Registrations survive a failed dispatch.
    assert_eq!(bus.handler_count("a"), 3);
}

#[test]
fn test_handler_error_is_returned_unmodified() {
    let bus = TestBus::new();
    bus.bind(
        "upload",
        tidings::Handler::new(|_: &Window, _: &[String]| Err::<(), _>(QuotaExceeded { limit: 5 })),
    )
    .unwrap();

    let err = bus.trigger("upload", &window(), &[]).unwrap_err();
    let quota = err
        .downcast_ref::<QuotaExceeded>()
        .expect("original error type");
    assert_eq!(quota.limit, 5);

    let wrapped = TidingsError::from(err);
    assert!(matches!(wrapped, TidingsError::Handler(_)));
    assert_eq!(wrapped.to_string(), "quota of 5 exceeded");
}

#[test]
fn test_bind_errors_convert_to_top_level_error() {
    let bus = TestBus::new();
    let counter = CallCounter::new();

    let err: TidingsError = bus.bind("", counter.handler()).unwrap_err().into();
    assert!(matches!(err, TidingsError::InvalidArgument(_)));

    let err = bus.bind(".foo", counter.handler()).unwrap_err();
    assert!(err.to_string().contains(".foo"));
    assert!(bus.is_empty());
}

#[test]
fn test_event_name_is_removed_when_empty() {
    let bus = TestBus::new();
    let counter = CallCounter::new();

    bus.bind("a", counter.handler()).unwrap();
    assert!(bus.is_bound("a"));

    bus.unbind_handler(&counter.handler());
    assert!(!bus.is_bound("a"));
    assert!(bus.event_names().is_empty());
}

#[test]
fn test_instances_are_independent() {
    let first = TestBus::new();
    let second: EventBus<Window, String> = EventBus::default();
    let counter = CallCounter::new();

    first.bind("a", counter.handler()).unwrap();
    second.trigger("a", &window(), &[]).unwrap();

    assert_eq!(counter.count(), 0);
    assert!(second.is_empty());
}

#[test]
fn test_shared_across_threads() {
    let bus = Arc::new(TestBus::new());
    let counter = CallCounter::new();
    bus.bind("tick", counter.handler()).unwrap();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let bus = bus.clone();
            std::thread::spawn(move || {
                for _ in 0..10 {
                    bus.trigger("tick", &window(), &[]).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(counter.count(), 40);
}
