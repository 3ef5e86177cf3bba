#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_sets_fields() {
    let p = Point::new(3.0, -4.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, -4.5);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn start_event_fields() {
    let ev = ContactEvent::start(7, 1, 10.0, 20.0);
    assert_eq!(ev.kind, ContactKind::Start);
    assert_eq!(ev.id, 7);
    assert_eq!(ev.slot, 1);
    assert_eq!(ev.position, Point::new(10.0, 20.0));
    assert!(ev.batch.is_empty());
}

#[test]
fn move_batch_takes_primary_from_first_sample() {
    let ev = ContactEvent::move_batch(vec![ContactSample::new(4, 0, 1.0, 2.0), ContactSample::new(9, 1, 3.0, 4.0)]);
    assert_eq!(ev.kind, ContactKind::Move);
    assert_eq!(ev.id, 4);
    assert_eq!(ev.slot, 0);
    assert_eq!(ev.position, Point::new(1.0, 2.0));
    assert_eq!(ev.batch.len(), 2);
}

#[test]
fn empty_move_batch_has_zero_primary() {
    let ev = ContactEvent::move_batch(Vec::new());
    assert_eq!(ev.id, 0);
    assert!(ev.batch.is_empty());
}

#[test]
fn cancel_event_kind() {
    let ev = ContactEvent::cancel(3, 2);
    assert_eq!(ev.kind, ContactKind::Cancel);
    assert_eq!(ev.id, 3);
    assert_eq!(ev.slot, 2);
}

// =============================================================
// Samples
// =============================================================

#[test]
fn samples_returns_batch_when_present() {
    let batch = vec![ContactSample::new(1, 0, 5.0, 5.0), ContactSample::new(2, 1, 6.0, 6.0)];
    let ev = ContactEvent::move_batch(batch.clone());
    assert_eq!(ev.samples().as_ref(), batch.as_slice());
}

#[test]
fn samples_falls_back_to_primary_contact() {
    let ev = ContactEvent {
        kind: ContactKind::Move,
        id: 5,
        slot: 0,
        position: Point::new(8.0, 9.0),
        batch: Vec::new(),
    };
    assert_eq!(ev.samples().as_ref(), &[ContactSample::new(5, 0, 8.0, 9.0)]);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ContactKind::Cancel).unwrap(), "\"cancel\"");
}

#[test]
fn event_deserializes_with_defaults() {
    let ev: ContactEvent = serde_json::from_str(r#"{"kind": "end", "id": 2}"#).unwrap();
    assert_eq!(ev, ContactEvent { kind: ContactKind::End, id: 2, slot: 0, position: Point::default(), batch: Vec::new() });
}

#[test]
fn move_event_deserializes_batch() {
    let json = r#"{
        "kind": "move",
        "id": 1,
        "batch": [
            {"id": 1, "slot": 0, "position": {"x": 1.5, "y": 2.5}},
            {"id": 3, "slot": 1, "position": {"x": 7.0, "y": 8.0}}
        ]
    }"#;
    let ev: ContactEvent = serde_json::from_str(json).unwrap();
    assert_eq!(ev.kind, ContactKind::Move);
    assert_eq!(ev.batch[1], ContactSample::new(3, 1, 7.0, 8.0));
}

#[test]
fn unknown_kind_rejected() {
    let parsed = serde_json::from_str::<ContactEvent>(r#"{"kind": "hover", "id": 1}"#);
    assert!(parsed.is_err());
}
