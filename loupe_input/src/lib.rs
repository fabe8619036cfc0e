// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Input: capability-negotiated pointing-device input normalization.
//!
//! Mouse, touch, and pointer input disagree about multi-contact semantics,
//! capture lifetimes, and coordinate spaces, and hosts frequently expose
//! more than one of them for the same physical gesture. This crate folds the
//! three models into a single canonical [`GestureEvent`] stream for a
//! pannable, zoomable view:
//!
//! - [`InputNormalizer`] negotiates which capability is *primary* from an
//!   explicit priority order and the host's advertised [`HostCaps`], keeps
//!   the remaining capabilities suppressed (default actions prevented, no
//!   duplicate events), and attaches a wheel listener additively.
//! - An owned [`ContactSet`](contact::ContactSet) tracks pointer contacts by
//!   stable identifier; multi-contact events report the midpoint and
//!   separation of the two lowest-ordered contacts.
//! - All emitted coordinates are surface-local, with the surface offset
//!   re-queried through the [`Surface`] trait on every event so layout
//!   shifts mid-gesture are accounted for.
//!
//! ## Design Philosophy
//!
//! The normalizer is headless: it owns no event loop and subscribes to
//! nothing itself. The host translates each native event into a [`RawEvent`]
//! and calls [`InputNormalizer::dispatch`]; the normalizer's listener
//! registry — the headless model of what would be `addEventListener` state,
//! including global listeners attached only for in-progress drags — decides
//! whether the event can reach the output at all. The returned canonical
//! event is consumed synchronously by the owner, and the returned
//! [`DefaultAction`] tells the host whether to suppress the native default
//! behavior.
//!
//! There is no error surface: events that are not listened for, and frames
//! with no usable contacts, are silently absorbed. A host exposing none of
//! the recognized capabilities gets a normalizer that attaches nothing and
//! stays silent rather than failing construction.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use loupe_input::{GestureKind, HostCaps, InputNormalizer, NormalizerConfig, RawEvent, RawPhase};
//!
//! // Touch-only host; the surface sits at the viewport origin.
//! let config = NormalizerConfig::desktop(HostCaps::TOUCH);
//! let mut input = InputNormalizer::new(Point::ORIGIN, config);
//!
//! // Two fingers down: one canonical event with midpoint and separation.
//! let out = input.dispatch(&RawEvent::Touch {
//!     phase: RawPhase::Start,
//!     active: [(1, (100.0, 100.0)), (2, (200.0, 100.0))]
//!         .map(|(id, (x, y))| loupe_input::Contact { id, position: Point::new(x, y) })
//!         .into_iter()
//!         .collect(),
//!     changed: loupe_input::TouchList::new(),
//! });
//! let event = out.event.unwrap();
//! assert_eq!(event.kind, GestureKind::Start);
//! assert_eq!(event.target_point, Point::new(150.0, 100.0));
//! assert_eq!(event.distance, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod contact;

mod capability;
mod event;
mod normalizer;
mod raw;
mod surface;

pub use capability::{Capability, HostCaps, NormalizerConfig, PriorityOrder};
pub use contact::Contact;
pub use event::{GestureEvent, GestureKind, SourceKind};
pub use normalizer::{DefaultAction, Dispatch, InputNormalizer, Listeners, NormalizerDebugInfo};
pub use raw::{RawEvent, RawPhase, TouchList};
pub use surface::Surface;
