//! Pointer tracking: the set of live contacts and their last-known positions.
//!
//! `PointerTracker` owns an insertion-ordered map from [`PointerId`] to
//! [`Point`]. Each contact moves through `absent -> active -> absent`: a start
//! inserts it, moves update it in place, and an end or cancel removes it.
//! Removal preserves the relative order of the remaining contacts, so a
//! contact's palette color is simply its current position in that order.
//!
//! Nothing here fails. Input that does not fit the state machine (a second
//! start, a move or end for an unknown identifier) is logged and absorbed.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use indexmap::IndexMap;

use crate::consts::PALETTE_SIZE;
use crate::input::{ContactSample, Point, PointerId};

/// Outcome of a tracker mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A new contact became active.
    Inserted,
    /// A start arrived for a contact that was already active; its position was replaced.
    Overwritten,
    /// This many active contacts received a new position.
    Moved(usize),
    /// An active contact ended.
    Removed,
    /// The event referred to no active contact.
    Ignored,
}

/// One marker to draw: where, and which palette slot colors it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotEntry {
    pub position: Point,
    /// Always in `0..PALETTE_SIZE`.
    pub palette_index: usize,
}

/// Point-in-time copy of every active contact, in iteration order.
pub type Snapshot = Vec<SnapshotEntry>;

/// The set of currently active contacts.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    active: IndexMap<PointerId, Point>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking `id` at `position`.
    pub fn on_contact_start(&mut self, id: PointerId, position: Point) -> Change {
        if let Some(existing) = self.active.get_mut(&id) {
            tracing::warn!(id, x = position.x, y = position.y, "duplicate contact start; overwriting position");
            *existing = position;
            return Change::Overwritten;
        }
        tracing::debug!(id, x = position.x, y = position.y, "contact start");
        self.active.insert(id, position);
        Change::Inserted
    }

    /// Apply a move batch, matching each sample to its contact by identifier.
    ///
    /// Batch order and slot indices are irrelevant; samples for identifiers
    /// that are not active are skipped.
    pub fn on_contact_move(&mut self, samples: &[ContactSample]) -> Change {
        let mut moved = 0;
        for sample in samples {
            match self.active.get_mut(&sample.id) {
                Some(position) => {
                    *position = sample.position;
                    moved += 1;
                }
                None => {
                    tracing::warn!(id = sample.id, slot = sample.slot, "move for untracked contact");
                }
            }
        }
        if moved == 0 { Change::Ignored } else { Change::Moved(moved) }
    }

    /// Stop tracking `id`. Ending an unknown contact is a no-op.
    pub fn on_contact_end(&mut self, id: PointerId) -> Change {
        if self.active.shift_remove(&id).is_some() {
            tracing::debug!(id, "contact end");
            Change::Removed
        } else {
            tracing::warn!(id, "end for untracked contact");
            Change::Ignored
        }
    }

    /// End every active contact at once, as when the surface is detached.
    pub fn clear(&mut self) -> usize {
        let ended = self.active.len();
        self.active.clear();
        if ended > 0 {
            tracing::debug!(ended, "all contacts cleared");
        }
        ended
    }

    /// Copy out every active contact with its palette slot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.active
            .values()
            .enumerate()
            .map(|(i, &position)| SnapshotEntry { position, palette_index: i % PALETTE_SIZE })
            .collect()
    }

    /// Number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.active.contains_key(&id)
    }

    /// Last-known position of `id`, if it is active.
    #[must_use]
    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.active.get(&id).copied()
    }

    /// Active identifiers in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.active.keys().copied()
    }
}
