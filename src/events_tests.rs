//! Tests for EventEmitter

use super::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&'static str) -> Box<dyn FnMut(&WidgetEvent)>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let make = {
        let log = Rc::clone(&log);
        move |name: &'static str| -> Box<dyn FnMut(&WidgetEvent)> {
            let log = Rc::clone(&log);
            Box::new(move |event: &WidgetEvent| {
                log.borrow_mut().push(format!("{}:{}", name, event.kind()));
            })
        }
    };
    (log, make)
}

#[test]
fn test_event_kind_display() {
    assert_eq!(EventKind::Open.to_string(), "open");
    assert_eq!(EventKind::Close.to_string(), "close");
    assert_eq!(EventKind::Select.to_string(), "select");
}

#[test]
fn test_widget_event_kind() {
    assert_eq!(WidgetEvent::Open.kind(), EventKind::Open);
    assert_eq!(WidgetEvent::Close.kind(), EventKind::Close);
    let select = WidgetEvent::Select {
        trigger: SelectTrigger::Enter,
        npi: "1".to_string(),
        record: None,
    };
    assert_eq!(select.kind(), EventKind::Select);
}

#[test]
fn test_emit_without_listeners_is_noop() {
    let mut emitter = EventEmitter::new();
    emitter.emit(&WidgetEvent::Open);
    assert_eq!(emitter.listener_count(EventKind::Open), 0);
}

#[test]
fn test_listeners_called_in_registration_order() {
    let (log, make) = recorder();
    let mut emitter = EventEmitter::new();
    emitter.on(EventKind::Open, make("first"));
    emitter.on(EventKind::Open, make("second"));
    emitter.on(EventKind::Open, make("third"));

    emitter.emit(&WidgetEvent::Open);

    assert_eq!(*log.borrow(), vec!["first:open", "second:open", "third:open"]);
}

#[test]
fn test_listeners_only_receive_their_kind() {
    let (log, make) = recorder();
    let mut emitter = EventEmitter::new();
    emitter.on(EventKind::Open, make("opener"));
    emitter.on(EventKind::Close, make("closer"));

    emitter.emit(&WidgetEvent::Close);

    assert_eq!(*log.borrow(), vec!["closer:close"]);
}

#[test]
fn test_late_listener_gets_no_replay() {
    let (log, make) = recorder();
    let mut emitter = EventEmitter::new();

    emitter.emit(&WidgetEvent::Open);
    emitter.on(EventKind::Open, make("late"));

    assert!(log.borrow().is_empty());

    emitter.emit(&WidgetEvent::Open);
    assert_eq!(*log.borrow(), vec!["late:open"]);
}

#[test]
fn test_off_removes_only_that_listener() {
    let (log, make) = recorder();
    let mut emitter = EventEmitter::new();
    emitter.on(EventKind::Open, make("keep"));
    let removed = emitter.on(EventKind::Open, make("drop"));

    assert!(emitter.off(EventKind::Open, removed));
    emitter.emit(&WidgetEvent::Open);

    assert_eq!(*log.borrow(), vec!["keep:open"]);
    assert_eq!(emitter.listener_count(EventKind::Open), 1);
}

#[test]
fn test_off_with_wrong_kind_returns_false() {
    let (_log, make) = recorder();
    let mut emitter = EventEmitter::new();
    let id = emitter.on(EventKind::Open, make("a"));

    assert!(!emitter.off(EventKind::Close, id));
    assert!(!emitter.off(EventKind::Select, id));
    assert_eq!(emitter.listener_count(EventKind::Open), 1);
}

#[test]
fn test_off_twice_returns_false_second_time() {
    let (_log, make) = recorder();
    let mut emitter = EventEmitter::new();
    let id = emitter.on(EventKind::Close, make("a"));

    assert!(emitter.off(EventKind::Close, id));
    assert!(!emitter.off(EventKind::Close, id));
}

#[test]
fn test_select_payload_reaches_listener() {
    let received = Rc::new(RefCell::new(None));
    let mut emitter = EventEmitter::new();
    {
        let received = Rc::clone(&received);
        emitter.on(EventKind::Select, move |event| {
            *received.borrow_mut() = Some(event.clone());
        });
    }

    let event = WidgetEvent::Select {
        trigger: SelectTrigger::Click,
        npi: "123".to_string(),
        record: Some(json!({"npi": "123"})),
    };
    emitter.emit(&event);

    assert_eq!(received.borrow().as_ref(), Some(&event));
}

#[test]
fn test_debug_reports_listener_counts() {
    let mut emitter = EventEmitter::new();
    emitter.on(EventKind::Select, |_| {});
    let debug = format!("{:?}", emitter);
    assert!(debug.contains("select: 1"));
}
