// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical gesture event emitted by the normalizer.

use kurbo::Point;

/// The kind of a canonical [`GestureEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// A contact went down (press, touch start, pointer down).
    Start,
    /// A tracked contact moved.
    Move,
    /// The last reported contact went up or was cancelled.
    End,
    /// A wheel tick; carries a signed delta in [`GestureEvent::delta`].
    Zoom,
}

/// Advisory classification of the physical device behind an event.
///
/// Downstream policy may consult this (for example to restrict a compound
/// gesture to touch-like input); it carries no invariants of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Mouse or mouse-like input (including wheel ticks).
    Mouse,
    /// Touch or touch-like (stylus) input.
    Touch,
}

/// The canonical, capability-independent event the normalizer emits.
///
/// One `GestureEvent` is constructed fresh per native event and has no
/// persisted identity; consumers are expected to handle it to completion
/// synchronously.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// What happened.
    pub kind: GestureKind,
    /// The representative point of the event, relative to the surface's
    /// top-left corner. For two or more active contacts this is the midpoint
    /// of the two lowest-ordered contacts.
    pub target_point: Point,
    /// Separation of the two lowest-ordered active contacts, in the same
    /// units as `target_point`. Always `>= 1`; exactly `1.0` for
    /// single-contact input. Only meaningful as a ratio against the distance
    /// captured at gesture start.
    pub distance: f64,
    /// Signed wheel magnitude for [`GestureKind::Zoom`] events; `0.0`
    /// otherwise.
    pub delta: f64,
    /// Advisory source classification.
    pub source: SourceKind,
}

impl GestureEvent {
    /// Creates a single-contact event of the given kind.
    #[must_use]
    pub fn single(kind: GestureKind, target_point: Point, source: SourceKind) -> Self {
        Self {
            kind,
            target_point,
            distance: 1.0,
            delta: 0.0,
            source,
        }
    }

    /// Creates a two-contact event with the given midpoint and separation.
    ///
    /// The separation is clamped to the `>= 1` invariant.
    #[must_use]
    pub fn multi(
        kind: GestureKind,
        target_point: Point,
        distance: f64,
        source: SourceKind,
    ) -> Self {
        Self {
            kind,
            target_point,
            distance: distance.max(1.0),
            delta: 0.0,
            source,
        }
    }

    /// Creates a wheel zoom event with the given signed delta.
    #[must_use]
    pub fn zoom(target_point: Point, delta: f64) -> Self {
        Self {
            kind: GestureKind::Zoom,
            target_point,
            distance: 1.0,
            delta,
            source: SourceKind::Mouse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_clamps_distance_to_one() {
        let ev = GestureEvent::multi(
            GestureKind::Move,
            Point::new(10.0, 10.0),
            0.25,
            SourceKind::Touch,
        );
        assert_eq!(ev.distance, 1.0);

        let ev = GestureEvent::multi(
            GestureKind::Move,
            Point::new(10.0, 10.0),
            80.0,
            SourceKind::Touch,
        );
        assert_eq!(ev.distance, 80.0);
    }

    #[test]
    fn zoom_carries_delta_and_unit_distance() {
        let ev = GestureEvent::zoom(Point::new(3.0, 4.0), -120.0);
        assert_eq!(ev.kind, GestureKind::Zoom);
        assert_eq!(ev.delta, -120.0);
        assert_eq!(ev.distance, 1.0);
        assert_eq!(ev.source, SourceKind::Mouse);
    }
}
