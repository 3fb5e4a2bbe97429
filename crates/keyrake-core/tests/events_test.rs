//! Event dispatcher tests: registration, delivery, panic isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keyrake_core::events::{
    EventDispatcher, KeyrakeEventHandler, MatchProgressEvent, StepCompletedEvent,
};

#[derive(Default)]
struct CountingHandler {
    progress: AtomicUsize,
    steps: AtomicUsize,
}

impl KeyrakeEventHandler for CountingHandler {
    fn on_match_progress(&self, _event: &MatchProgressEvent) {
        self.progress.fetch_add(1, Ordering::SeqCst);
    }

    fn on_step_completed(&self, _event: &StepCompletedEvent) {
        self.steps.fetch_add(1, Ordering::SeqCst);
    }
}

struct PanickingHandler;

impl KeyrakeEventHandler for PanickingHandler {
    fn on_match_progress(&self, _event: &MatchProgressEvent) {
        panic!("handler blew up");
    }
}

#[test]
fn empty_dispatcher_is_a_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_match_progress(&MatchProgressEvent {
        compared: 1,
        total: 10,
    });
}

#[test]
fn events_reach_all_registered_handlers() {
    let handler = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(handler.clone());
    dispatcher.register(Arc::new(CountingHandler::default()));
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_match_progress(&MatchProgressEvent {
        compared: 5,
        total: 10,
    });
    dispatcher.emit_step_completed(&StepCompletedEvent {
        index: 0,
        description: "normalize phrase text".to_string(),
        before: 10,
        after: 10,
    });

    assert_eq!(handler.progress.load(Ordering::SeqCst), 1);
    assert_eq!(handler.steps.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_handler_does_not_starve_later_handlers() {
    let counting = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counting.clone());

    dispatcher.emit_match_progress(&MatchProgressEvent {
        compared: 1,
        total: 2,
    });

    assert_eq!(counting.progress.load(Ordering::SeqCst), 1);
}
