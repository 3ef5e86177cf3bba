//! Input model: contact identifiers, positions, and normalized contact events.
//!
//! The host translates its platform events (DOM pointer events, Android motion
//! events, a recorded trace) into [`ContactEvent`]s before handing them to the
//! engine. Every position is surface-local. A `move` carries a batch with one
//! [`ContactSample`] per live slot, and each sample names the identifier the
//! host resolved for that slot, so the tracker never has to guess which
//! contact a slot belongs to.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Stable identifier of one contact for its whole lifetime.
pub type PointerId = i32;

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What happened to a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// A finger or pointer touched down.
    Start,
    /// One or more live contacts changed position.
    Move,
    /// A contact lifted.
    End,
    /// The platform aborted a contact. Handled exactly like `End`.
    Cancel,
}

/// Position of one live contact within a move batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactSample {
    /// Identifier the host resolved for `slot`.
    pub id: PointerId,
    /// Index of this contact within the batch, as reported by the input source.
    pub slot: usize,
    pub position: Point,
}

impl ContactSample {
    #[must_use]
    pub fn new(id: PointerId, slot: usize, x: f64, y: f64) -> Self {
        Self { id, slot, position: Point::new(x, y) }
    }
}

/// One normalized input event.
///
/// `id`, `slot` and `position` describe the contact that caused the event.
/// `batch` is only meaningful for [`ContactKind::Move`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub kind: ContactKind,
    pub id: PointerId,
    #[serde(default)]
    pub slot: usize,
    #[serde(default)]
    pub position: Point,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub batch: Vec<ContactSample>,
}

impl ContactEvent {
    #[must_use]
    pub fn start(id: PointerId, slot: usize, x: f64, y: f64) -> Self {
        Self { kind: ContactKind::Start, id, slot, position: Point::new(x, y), batch: Vec::new() }
    }

    /// A move event. The primary contact is the first sample in the batch.
    #[must_use]
    pub fn move_batch(batch: Vec<ContactSample>) -> Self {
        let (id, slot, position) = batch
            .first()
            .map_or((0, 0, Point::default()), |s| (s.id, s.slot, s.position));
        Self { kind: ContactKind::Move, id, slot, position, batch }
    }

    #[must_use]
    pub fn end(id: PointerId, slot: usize, x: f64, y: f64) -> Self {
        Self { kind: ContactKind::End, id, slot, position: Point::new(x, y), batch: Vec::new() }
    }

    #[must_use]
    pub fn cancel(id: PointerId, slot: usize) -> Self {
        Self { kind: ContactKind::Cancel, id, slot, position: Point::default(), batch: Vec::new() }
    }

    /// Samples to apply for this event. A move without an explicit batch
    /// falls back to its primary contact alone.
    #[must_use]
    pub fn samples(&self) -> Cow<'_, [ContactSample]> {
        if self.batch.is_empty() {
            Cow::Owned(vec![ContactSample { id: self.id, slot: self.slot, position: self.position }])
        } else {
            Cow::Borrowed(&self.batch)
        }
    }
}
