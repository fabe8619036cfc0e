// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned contact tracking for the pointer capability.
//!
//! Each physical contact keeps a stable identifier from its start event
//! until release. The set stores owned [`Contact`] values keyed by that
//! identifier — never aliases of transient native events — with explicit
//! insert/update/remove operations, ordered by ascending identifier so the
//! "two lowest-ordered contacts" query is trivial.

use kurbo::Point;
use smallvec::SmallVec;

/// One tracked contact: a stable identifier and its last-known position in
/// viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Identifier stable for the lifetime of the physical contact.
    pub id: u64,
    /// Last-known position, viewport-relative.
    pub position: Point,
}

/// A set of active contacts ordered by ascending identifier.
#[derive(Clone, Debug, Default)]
pub struct ContactSet {
    entries: SmallVec<[Contact; 4]>,
}

impl ContactSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no contacts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a contact, or updates its position if the identifier is
    /// already tracked. A start event for a tracked identifier is an update,
    /// not an error.
    pub fn insert(&mut self, contact: Contact) {
        match self.entries.binary_search_by_key(&contact.id, |c| c.id) {
            Ok(i) => self.entries[i].position = contact.position,
            Err(i) => self.entries.insert(i, contact),
        }
    }

    /// Updates the position of a tracked contact. Returns `false` when the
    /// identifier is not tracked (the update is dropped).
    pub fn update_position(&mut self, id: u64, position: Point) -> bool {
        match self.entries.binary_search_by_key(&id, |c| c.id) {
            Ok(i) => {
                self.entries[i].position = position;
                true
            }
            Err(_) => false,
        }
    }

    /// Removes and returns the contact with the given identifier.
    pub fn remove(&mut self, id: u64) -> Option<Contact> {
        match self.entries.binary_search_by_key(&id, |c| c.id) {
            Ok(i) => Some(self.entries.remove(i)),
            Err(_) => None,
        }
    }

    /// The contact with the given identifier, if tracked.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Contact> {
        match self.entries.binary_search_by_key(&id, |c| c.id) {
            Ok(i) => Some(&self.entries[i]),
            Err(_) => None,
        }
    }

    /// The two lowest-ordered active contacts, when at least two are active.
    #[must_use]
    pub fn first_two(&self) -> Option<(&Contact, &Contact)> {
        if self.entries.len() >= 2 {
            Some((&self.entries[0], &self.entries[1]))
        } else {
            None
        }
    }

    /// Iterates over contacts in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    /// Removes all contacts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
