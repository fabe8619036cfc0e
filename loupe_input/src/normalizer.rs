// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input normalizer: one coherent canonical event stream regardless of
//! which input capabilities the host surface advertises.

use kurbo::Point;

use crate::capability::{Capability, HostCaps, NormalizerConfig};
use crate::contact::{Contact, ContactSet};
use crate::event::{GestureEvent, GestureKind, SourceKind};
use crate::raw::{RawEvent, RawPhase};
use crate::surface::Surface;

bitflags::bitflags! {
    /// The registry of listener sets currently attached by a normalizer.
    ///
    /// This is the headless model of native `addEventListener` state: a raw
    /// event whose listener bit is not set never reaches the normalizer's
    /// output. Global (`*_GLOBAL`) bits model document-wide listeners that
    /// exist only while a gesture begun on the surface is in progress, so
    /// drags continuing outside the surface bounds are still tracked.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Listeners: u16 {
        /// Surface-scope mouse press listener (primary mouse).
        const MOUSE_PRESS = 1 << 0;
        /// Global mouse move/release listeners, attached while pressed.
        const MOUSE_GLOBAL = 1 << 1;
        /// Prevent-default-only listeners for mouse press/release.
        const MOUSE_SUPPRESS = 1 << 2;
        /// Surface-scope touch start/move/end/cancel listeners (primary touch).
        const TOUCH = 1 << 3;
        /// Prevent-default-only listeners for touch start/end.
        const TOUCH_SUPPRESS = 1 << 4;
        /// Surface-scope pointer down listener (primary pointer).
        const POINTER_DOWN = 1 << 5;
        /// Global pointer move/up/cancel listeners, attached while any
        /// contact is tracked.
        const POINTER_GLOBAL = 1 << 6;
        /// Prevent-default-only listeners for pointer down/up.
        const POINTER_SUPPRESS = 1 << 7;
        /// Surface-scope wheel listener.
        const WHEEL = 1 << 8;
    }
}

impl Capability {
    fn primary_set(self) -> Listeners {
        match self {
            Self::Pointer => Listeners::POINTER_DOWN,
            Self::Touch => Listeners::TOUCH,
            Self::Mouse => Listeners::MOUSE_PRESS,
        }
    }

    fn suppress_set(self) -> Listeners {
        match self {
            Self::Pointer => Listeners::POINTER_SUPPRESS,
            Self::Touch => Listeners::TOUCH_SUPPRESS,
            Self::Mouse => Listeners::MOUSE_SUPPRESS,
        }
    }
}

/// What the host should do with the native event's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// Let the native default behavior (selection, synthetic scrolling)
    /// proceed.
    Allow,
    /// Suppress the native default behavior.
    Prevent,
}

/// The outcome of dispatching one raw event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dispatch {
    /// The canonical event produced, if the raw event was listened for and
    /// well formed.
    pub event: Option<GestureEvent>,
    /// Whether the host should suppress the native default action.
    pub default_action: DefaultAction,
}

impl Dispatch {
    const IGNORED: Self = Self {
        event: None,
        default_action: DefaultAction::Allow,
    };

    const SUPPRESSED: Self = Self {
        event: None,
        default_action: DefaultAction::Prevent,
    };

    fn emit(event: GestureEvent) -> Self {
        Self {
            event: Some(event),
            default_action: DefaultAction::Prevent,
        }
    }
}

/// Debug snapshot of a normalizer's negotiated and transient state.
#[derive(Clone, Copy, Debug)]
pub struct NormalizerDebugInfo {
    /// The capability adopted as primary, if any was available.
    pub primary: Option<Capability>,
    /// Listener sets currently attached.
    pub listeners: Listeners,
    /// Number of tracked pointer contacts.
    pub contact_count: usize,
    /// The configuration decided at construction.
    pub config: NormalizerConfig,
}

/// Normalizes heterogeneous pointing-device input into one canonical
/// [`GestureEvent`] stream.
///
/// Construction performs capability negotiation immediately: the first
/// capability in the configured priority order that the host exposes becomes
/// primary and gets its full gesture-producing listener set; every other
/// exposed capability gets only prevent-default listeners for its start/end
/// events, so compatibility events synthesized from the same physical
/// gesture neither trigger default behavior nor double-report. A wheel
/// listener is attached unconditionally when the host exposes wheel input —
/// wheel zoom is additive to whichever capability is primary.
///
/// The host drives [`InputNormalizer::dispatch`] with translated raw events
/// and forwards the returned canonical event (if any) synchronously; it also
/// honors the returned [`DefaultAction`]. Raw events without an attached
/// listener cannot produce output.
///
/// ```
/// use kurbo::Point;
/// use loupe_input::{
///     DefaultAction, GestureKind, HostCaps, InputNormalizer, NormalizerConfig, RawEvent,
///     RawPhase,
/// };
///
/// // A mouse-only environment; the surface sits at (10, 10).
/// let config = NormalizerConfig::desktop(HostCaps::MOUSE | HostCaps::WHEEL);
/// let mut input = InputNormalizer::new(Point::new(10.0, 10.0), config);
///
/// let out = input.dispatch(&RawEvent::Mouse {
///     phase: RawPhase::Start,
///     position: Point::new(60.0, 60.0),
/// });
/// let event = out.event.unwrap();
/// assert_eq!(event.kind, GestureKind::Start);
/// // Coordinates are surface-relative.
/// assert_eq!(event.target_point, Point::new(50.0, 50.0));
/// assert_eq!(out.default_action, DefaultAction::Prevent);
/// ```
#[derive(Debug)]
pub struct InputNormalizer<S: Surface> {
    surface: S,
    config: NormalizerConfig,
    primary: Option<Capability>,
    listeners: Listeners,
    contacts: ContactSet,
}

impl<S: Surface> InputNormalizer<S> {
    /// Creates a normalizer over `surface` and negotiates capabilities.
    ///
    /// Negotiation is the only side effect; no events are produced until the
    /// host starts dispatching. When the host exposes none of the recognized
    /// capabilities, nothing is attached and the normalizer stays silent.
    #[must_use]
    pub fn new(surface: S, config: NormalizerConfig) -> Self {
        let mut primary = None;
        let mut listeners = Listeners::empty();

        for &cap in config.priority.as_slice() {
            if !config.caps.contains(cap.flag()) {
                continue;
            }
            if primary.is_none() {
                primary = Some(cap);
                listeners |= cap.primary_set();
            } else {
                listeners |= cap.suppress_set();
            }
        }
        if config.caps.contains(HostCaps::WHEEL) {
            listeners |= Listeners::WHEEL;
        }

        Self {
            surface,
            config,
            primary,
            listeners,
            contacts: ContactSet::new(),
        }
    }

    /// The capability adopted as primary, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Capability> {
        self.primary
    }

    /// Listener sets currently attached.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// The surface handle this normalizer was constructed over.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Snapshot of negotiated and transient state for inspection.
    #[must_use]
    pub fn debug_info(&self) -> NormalizerDebugInfo {
        NormalizerDebugInfo {
            primary: self.primary,
            listeners: self.listeners,
            contact_count: self.contacts.len(),
            config: self.config,
        }
    }

    /// Detaches every listener, including any global in-gesture ones, and
    /// drops tracked contacts. After this, every dispatch is ignored.
    ///
    /// Calling `destroy` twice is not defended against.
    pub fn destroy(&mut self) {
        self.listeners = Listeners::empty();
        self.contacts.clear();
    }

    /// Routes one raw event through the negotiated listener registry.
    pub fn dispatch(&mut self, raw: &RawEvent) -> Dispatch {
        match raw {
            RawEvent::Wheel { position, delta } => self.dispatch_wheel(*position, *delta),
            RawEvent::Mouse { phase, position } => self.dispatch_mouse(*phase, *position),
            RawEvent::Touch {
                phase,
                active,
                changed,
            } => self.dispatch_touch(*phase, active, changed),
            RawEvent::Pointer {
                phase,
                contact,
                source,
            } => self.dispatch_pointer(*phase, *contact, *source),
        }
    }

    fn dispatch_wheel(&mut self, position: Point, delta: f64) -> Dispatch {
        if !self.listeners.contains(Listeners::WHEEL) {
            return Dispatch::IGNORED;
        }
        let target_point = self.to_surface(position);
        Dispatch::emit(GestureEvent::zoom(target_point, delta))
    }

    fn dispatch_mouse(&mut self, phase: RawPhase, position: Point) -> Dispatch {
        let pressed = self.listeners.contains(Listeners::MOUSE_GLOBAL);
        let kind = match phase {
            RawPhase::Start if self.listeners.contains(Listeners::MOUSE_PRESS) => {
                // Escalate to global listening so the drag survives leaving
                // the surface bounds.
                self.listeners |= Listeners::MOUSE_GLOBAL;
                GestureKind::Start
            }
            RawPhase::Move if pressed => GestureKind::Move,
            RawPhase::End | RawPhase::Cancel if pressed => {
                self.listeners -= Listeners::MOUSE_GLOBAL;
                GestureKind::End
            }
            RawPhase::Start | RawPhase::End
                if self.listeners.contains(Listeners::MOUSE_SUPPRESS) =>
            {
                return Dispatch::SUPPRESSED;
            }
            _ => return Dispatch::IGNORED,
        };

        let target_point = self.to_surface(position);
        Dispatch::emit(GestureEvent::single(kind, target_point, SourceKind::Mouse))
    }

    fn dispatch_touch(
        &mut self,
        phase: RawPhase,
        active: &[Contact],
        changed: &[Contact],
    ) -> Dispatch {
        if !self.listeners.contains(Listeners::TOUCH) {
            // Suppression covers only the start/end event names.
            if self.listeners.contains(Listeners::TOUCH_SUPPRESS)
                && matches!(phase, RawPhase::Start | RawPhase::End)
            {
                return Dispatch::SUPPRESSED;
            }
            return Dispatch::IGNORED;
        }

        // On end/cancel the active list is empty; fall back to the contacts
        // that changed in this frame.
        let contacts = if active.is_empty() { changed } else { active };
        let kind = kind_for(phase);
        match contacts {
            [] => Dispatch::SUPPRESSED,
            [only] => {
                let target_point = self.to_surface(only.position);
                Dispatch::emit(GestureEvent::single(kind, target_point, SourceKind::Touch))
            }
            [first, second, ..] => {
                let target_point = self.to_surface(first.position.midpoint(second.position));
                let distance = (second.position - first.position).hypot();
                Dispatch::emit(GestureEvent::multi(
                    kind,
                    target_point,
                    distance,
                    SourceKind::Touch,
                ))
            }
        }
    }

    fn dispatch_pointer(
        &mut self,
        phase: RawPhase,
        contact: Contact,
        source: SourceKind,
    ) -> Dispatch {
        let primary = self.listeners.contains(Listeners::POINTER_DOWN);
        let in_gesture = self.listeners.contains(Listeners::POINTER_GLOBAL);
        let reachable = primary && (matches!(phase, RawPhase::Start) || in_gesture);
        if !reachable {
            if self.listeners.contains(Listeners::POINTER_SUPPRESS)
                && matches!(phase, RawPhase::Start | RawPhase::End)
            {
                return Dispatch::SUPPRESSED;
            }
            return Dispatch::IGNORED;
        }

        match phase {
            RawPhase::Start => {
                self.listeners |= Listeners::POINTER_GLOBAL;
                self.contacts.insert(contact);
            }
            RawPhase::Move => {
                // Updates only tracked identifiers; a hover move of an
                // untracked device does not create a contact.
                self.contacts.update_position(contact.id, contact.position);
            }
            RawPhase::End | RawPhase::Cancel => {
                self.contacts.remove(contact.id);
                if self.contacts.is_empty() {
                    self.listeners -= Listeners::POINTER_GLOBAL;
                }
            }
        }

        let kind = kind_for(phase);
        match self.contacts.first_two() {
            Some((first, second)) => {
                let target_point = self.to_surface(first.position.midpoint(second.position));
                let distance = (second.position - first.position).hypot();
                Dispatch::emit(GestureEvent::multi(kind, target_point, distance, source))
            }
            None => {
                // With one contact still tracked, report its table position;
                // only the release of the last contact reports the raw one.
                let position = self
                    .contacts
                    .iter()
                    .next()
                    .map_or(contact.position, |tracked| tracked.position);
                let target_point = self.to_surface(position);
                Dispatch::emit(GestureEvent::single(kind, target_point, source))
            }
        }
    }

    /// Viewport → surface-local conversion, re-querying the surface offset
    /// on every event because layout may have shifted since the last one.
    fn to_surface(&self, position: Point) -> Point {
        position - self.surface.origin().to_vec2()
    }
}

fn kind_for(phase: RawPhase) -> GestureKind {
    match phase {
        RawPhase::Start => GestureKind::Start,
        RawPhase::Move => GestureKind::Move,
        RawPhase::End | RawPhase::Cancel => GestureKind::End,
    }
}
