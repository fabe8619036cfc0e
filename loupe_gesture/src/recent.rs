// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded, time-windowed log of recent event kinds.
//!
//! Compound gestures (double-tap, touch-then-drag-to-zoom) are recognized
//! from short ordered runs of primitive event kinds. The log keeps a
//! bounded queue of kinds and an expiry measured from the *first* kind
//! recorded since the last clear; the expiry is checked on each new record,
//! never by a background timer.
//!
//! Because the window is anchored to the first kind of a burst — not
//! restarted per event — four taps spread across the window boundary can
//! fail to combine into a double-tap. This is deliberate, documented
//! timing-sensitive behavior.

use loupe_input::GestureKind;

const CAPACITY: usize = 8;

/// Ordered log of recent [`GestureKind`]s with a quiet-window expiry.
#[derive(Clone, Copy, Debug)]
pub struct RecentKinds {
    kinds: [GestureKind; CAPACITY],
    len: usize,
    window_ms: u64,
    started_at: Option<u64>,
}

impl RecentKinds {
    /// Creates an empty log with the given quiet window.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            kinds: [GestureKind::Start; CAPACITY],
            len: 0,
            window_ms,
            started_at: None,
        }
    }

    /// Records a kind at `now_ms`, expiring the log first if the quiet
    /// window since its first recorded kind has elapsed. When the queue is
    /// full the oldest kind is dropped.
    pub fn record(&mut self, kind: GestureKind, now_ms: u64) {
        if let Some(started_at) = self.started_at
            && now_ms.saturating_sub(started_at) >= self.window_ms
        {
            self.clear();
        }
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
        if self.len == CAPACITY {
            self.kinds.copy_within(1.., 0);
            self.len -= 1;
        }
        self.kinds[self.len] = kind;
        self.len += 1;
    }

    /// Whether the log contains `pattern` as a contiguous ordered run.
    #[must_use]
    pub fn contains(&self, pattern: &[GestureKind]) -> bool {
        if pattern.is_empty() || pattern.len() > self.len {
            return pattern.is_empty();
        }
        self.kinds[..self.len]
            .windows(pattern.len())
            .any(|run| run == pattern)
    }

    /// The recorded kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> &[GestureKind] {
        &self.kinds[..self.len]
    }

    /// Empties the log and forgets the window anchor.
    pub fn clear(&mut self) {
        self.len = 0;
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GestureKind::{End, Move, Start, Zoom};

    #[test]
    fn matches_contiguous_runs_only() {
        let mut log = RecentKinds::new(500);
        for kind in [Start, End, Zoom, Start, End] {
            log.record(kind, 0);
        }
        // `start end start end` exists only as a gapped subsequence here.
        assert!(!log.contains(&[Start, End, Start, End]));
        assert!(log.contains(&[Zoom, Start, End]));
    }

    #[test]
    fn double_tap_run_matches() {
        let mut log = RecentKinds::new(500);
        for (kind, t) in [(Start, 0), (End, 80), (Start, 200), (End, 260)] {
            log.record(kind, t);
        }
        assert!(log.contains(&[Start, End, Start, End]));
    }

    #[test]
    fn window_is_anchored_to_the_first_kind_of_a_burst() {
        let mut log = RecentKinds::new(500);
        log.record(Start, 0);
        log.record(End, 100);
        // The second tap lands past the 500ms boundary of the first kind:
        // the log expires and the pattern cannot complete.
        log.record(Start, 520);
        assert_eq!(log.kinds(), &[Start]);
        log.record(End, 560);
        assert!(!log.contains(&[Start, End, Start, End]));
    }

    #[test]
    fn expiry_anchor_resets_with_the_log() {
        let mut log = RecentKinds::new(500);
        log.record(Start, 0);
        log.record(Start, 700);
        // The clear at 700 re-anchors the window there.
        log.record(End, 1100);
        assert_eq!(log.kinds(), &[Start, End]);
    }

    #[test]
    fn overflow_drops_the_oldest_kind() {
        let mut log = RecentKinds::new(500);
        log.record(Zoom, 0);
        for _ in 0..CAPACITY {
            log.record(Move, 1);
        }
        assert_eq!(log.kinds().len(), CAPACITY);
        assert!(!log.contains(&[Zoom]));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut log = RecentKinds::new(500);
        log.record(Start, 0);
        log.clear();
        assert!(log.kinds().is_empty());
        assert!(!log.contains(&[Start]));
        assert!(log.contains(&[]));
    }
}
