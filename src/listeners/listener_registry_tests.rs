//! Tests for listener_registry

use super::*;
use std::cell::Cell;

fn counter(registry: &ListenerRegistry) -> (ListenerGuard, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    let guard = registry.subscribe(move |_| seen.set(seen.get() + 1));
    (guard, count)
}

const ESCAPE: GlobalEvent = GlobalEvent::KeyUp(KeyCode::Esc);

#[test]
fn test_new_registry_is_empty() {
    let registry = ListenerRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_subscribe_and_dispatch() {
    let registry = ListenerRegistry::new();
    let (_guard, count) = counter(&registry);

    registry.dispatch(&ESCAPE);
    registry.dispatch(&GlobalEvent::Click { column: 1, row: 1 });

    assert_eq!(count.get(), 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_listener_receives_event() {
    let registry = ListenerRegistry::new();
    let last = Rc::new(Cell::new(None));
    let seen = Rc::clone(&last);
    let _guard = registry.subscribe(move |event| seen.set(Some(*event)));

    registry.dispatch(&GlobalEvent::Click { column: 4, row: 9 });
    assert_eq!(last.get(), Some(GlobalEvent::Click { column: 4, row: 9 }));
}

#[test]
fn test_ids_are_unique() {
    let registry = ListenerRegistry::new();
    let first = registry.subscribe(|_| {});
    let second = registry.subscribe(|_| {});
    assert_ne!(first.id(), second.id());
    assert!(second.id() > first.id());
}

#[test]
fn test_drop_guard_unsubscribes() {
    let registry = ListenerRegistry::new();
    let (guard, count) = counter(&registry);
    let id = guard.id();

    drop(guard);

    assert!(!registry.is_registered(id));
    registry.dispatch(&ESCAPE);
    assert_eq!(count.get(), 0);
}

#[test]
fn test_release_is_idempotent() {
    let registry = ListenerRegistry::new();
    let (mut guard, _count) = counter(&registry);
    let (_other, other_count) = counter(&registry);

    guard.release();
    guard.release();
    assert!(guard.is_released());
    assert_eq!(registry.len(), 1);

    drop(guard);
    assert_eq!(registry.len(), 1);

    registry.dispatch(&ESCAPE);
    assert_eq!(other_count.get(), 1);
}

#[test]
fn test_guard_outlives_registry() {
    let registry = ListenerRegistry::new();
    let (mut guard, _count) = counter(&registry);

    drop(registry);
    guard.release();
    assert!(guard.is_released());
}

#[test]
fn test_listener_released_during_dispatch_is_skipped() {
    let registry = ListenerRegistry::new();

    let victim: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&victim);
    let _killer = registry.subscribe(move |_| {
        slot.borrow_mut().take();
    });

    let (guard, count) = counter(&registry);
    *victim.borrow_mut() = Some(guard);

    registry.dispatch(&ESCAPE);

    assert_eq!(count.get(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_listener_can_release_itself() {
    let registry = ListenerRegistry::new();
    let own: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&own);
    let guard = registry.subscribe(move |_| {
        slot.borrow_mut().take();
    });
    *own.borrow_mut() = Some(guard);

    registry.dispatch(&ESCAPE);
    registry.dispatch(&ESCAPE);

    assert!(registry.is_empty());
}

#[test]
fn test_subscribe_during_dispatch_takes_effect_next_event() {
    let registry = ListenerRegistry::new();
    let late_count = Rc::new(Cell::new(0));
    let late_guards: Rc<RefCell<Vec<ListenerGuard>>> = Rc::new(RefCell::new(Vec::new()));

    let handle = registry.clone();
    let guards = Rc::clone(&late_guards);
    let counted = Rc::clone(&late_count);
    let _spawner = registry.subscribe(move |_| {
        if guards.borrow().is_empty() {
            let seen = Rc::clone(&counted);
            let guard = handle.subscribe(move |_| seen.set(seen.get() + 1));
            guards.borrow_mut().push(guard);
        }
    });

    registry.dispatch(&ESCAPE);
    assert_eq!(late_count.get(), 0);

    registry.dispatch(&ESCAPE);
    assert_eq!(late_count.get(), 1);
}

#[test]
fn test_debug_shows_count() {
    let registry = ListenerRegistry::new();
    let _guard = registry.subscribe(|_| {});
    assert_eq!(
        format!("{:?}", registry),
        "ListenerRegistry { listeners: 1 }"
    );
}
