use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Delivery
// =============================================================

#[test]
fn handlers_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut bus = EventBus::<u32>::new();
    let first = log.clone();
    bus.subscribe(move |n| first.borrow_mut().push(format!("a{n}")));
    let second = log.clone();
    bus.subscribe(move |n| second.borrow_mut().push(format!("b{n}")));

    assert_eq!(bus.emit(&1), 2);
    assert_eq!(*log.borrow(), vec!["a1", "b1"]);
}

#[test]
fn emit_without_subscribers_invokes_nothing() {
    let mut bus = EventBus::<()>::new();
    assert_eq!(bus.emit(&()), 0);
}

// =============================================================
// Fire-once
// =============================================================

#[test]
fn once_handler_fires_exactly_once() {
    let count = Rc::new(RefCell::new(0));
    let mut bus = EventBus::<()>::new();
    let counter = count.clone();
    let id = bus.subscribe_once(move |()| *counter.borrow_mut() += 1);

    bus.emit(&());
    bus.emit(&());

    assert_eq!(*count.borrow(), 1);
    assert!(!bus.is_subscribed(id));
    assert!(bus.is_empty());
}

#[test]
fn persistent_handlers_survive_once_removal() {
    let count = Rc::new(RefCell::new(0));
    let mut bus = EventBus::<()>::new();
    bus.subscribe_once(|()| {});
    let counter = count.clone();
    bus.subscribe(move |()| *counter.borrow_mut() += 1);

    bus.emit(&());
    bus.emit(&());

    assert_eq!(*count.borrow(), 2);
    assert_eq!(bus.len(), 1);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn unsubscribe_before_emit_prevents_delivery() {
    let count = Rc::new(RefCell::new(0));
    let mut bus = EventBus::<()>::new();
    let counter = count.clone();
    let id = bus.subscribe_once(move |()| *counter.borrow_mut() += 1);

    assert!(bus.unsubscribe(id));
    bus.emit(&());

    assert_eq!(*count.borrow(), 0);
    assert!(!bus.unsubscribe(id));
}

#[test]
fn subscription_ids_are_unique() {
    let mut bus = EventBus::<()>::new();
    let a = bus.subscribe(|()| {});
    let b = bus.subscribe(|()| {});
    assert_ne!(a, b);
}
