// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side raw events, translated from native input before normalization.
//!
//! The host owns the actual native event subscription (DOM listeners, window
//! callbacks, a test harness) and translates each native event into one
//! [`RawEvent`] with viewport-relative coordinates. The normalizer decides —
//! from its negotiated listener registry — whether the event is listened
//! for at all, and if so what canonical event it produces.

use kurbo::Point;
use smallvec::SmallVec;

use crate::contact::Contact;
use crate::event::SourceKind;

/// Phase of a raw pointing event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawPhase {
    /// Contact or button went down.
    Start,
    /// Contact or cursor moved.
    Move,
    /// Contact or button was released.
    End,
    /// Contact was cancelled by the system; treated as an end.
    Cancel,
}

/// Contact list carried by a raw touch frame.
///
/// Inline capacity covers the common one- and two-finger cases.
pub type TouchList = SmallVec<[Contact; 2]>;

/// One translated native input event in viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEvent {
    /// A pointer-capability event for a single contact.
    Pointer {
        /// Event phase.
        phase: RawPhase,
        /// The contact this event describes.
        contact: Contact,
        /// Device classification reported by the host (`pointerType`).
        source: SourceKind,
    },
    /// A touch-capability frame.
    Touch {
        /// Event phase.
        phase: RawPhase,
        /// Contacts currently on the surface, in native order. Empty on
        /// end/cancel frames once the last finger lifted.
        active: TouchList,
        /// Contacts that changed in this frame, in native order; the
        /// fallback source of coordinates when `active` is empty.
        changed: TouchList,
    },
    /// A mouse-capability event.
    Mouse {
        /// Event phase.
        phase: RawPhase,
        /// Cursor position.
        position: Point,
    },
    /// A wheel tick.
    Wheel {
        /// Cursor position at the time of the tick.
        position: Point,
        /// Signed vertical scroll magnitude, native sign preserved.
        delta: f64,
    },
}
