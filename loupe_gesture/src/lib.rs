// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: pan/zoom gesture interpretation for image views.
//!
//! This crate sits on top of [`loupe_input`]'s canonical event stream and
//! turns it into view-transform commands for a pannable, zoomable image
//! view. Per gesture it recognizes exactly one of:
//!
//! - **drag** — translate by the offset from the gesture-start point;
//! - **pinch-zoom** — scale by the ratio of the current to the initial
//!   two-contact separation, anchored at the contact midpoint;
//! - **one-touch zoom** — after a tap-then-hold (`start end start move`),
//!   vertical displacement drives the scale about the hold point;
//! - **double-tap zoom** — `start end start end` inside a 500 ms window
//!   steps the scale by a fixed increment about the tap point;
//! - **wheel zoom** — each tick scales about the cursor, independent of any
//!   drag session.
//!
//! Every zoom path shares one anchor-preserving transform: the image
//! content under the anchor stays put on screen across the scale change.
//! Out-of-range scale candidates and sub-epsilon jitter are silently
//! absorbed; this crate raises no errors.
//!
//! The widget being steered stays external behind the [`View`] trait: the
//! interpreter reads a [`ViewState`] snapshot per event, computes the new
//! transform, and writes it back. Rendering, image decoding, and widget
//! chrome are the view's business.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use loupe_gesture::{GestureInterpreter, View, ViewState, ViewStatePatch};
//! use loupe_input::{GestureEvent, GestureKind, HostCaps, NormalizerConfig, SourceKind};
//!
//! struct ImageView {
//!     state: ViewState,
//! }
//!
//! impl View for ImageView {
//!     type Surface = Point;
//!     fn surface(&self) -> Point {
//!         Point::ORIGIN
//!     }
//!     fn state(&self) -> ViewState {
//!         self.state
//!     }
//!     fn set_state(&mut self, patch: ViewStatePatch) {
//!         self.state.apply(patch);
//!     }
//!     fn image_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! let view = ImageView { state: ViewState::default() };
//! let mut gestures =
//!     GestureInterpreter::new(view, NormalizerConfig::desktop(HostCaps::empty()));
//!
//! // A mouse drag: press at (50, 50), move to (80, 70).
//! let press = GestureEvent::single(GestureKind::Start, Point::new(50.0, 50.0), SourceKind::Mouse);
//! let drag = GestureEvent::single(GestureKind::Move, Point::new(80.0, 70.0), SourceKind::Mouse);
//! gestures.handle(press, 0);
//! gestures.handle(drag, 16);
//! assert_eq!(gestures.view().state().position, Vec2::new(30.0, 20.0));
//! ```
//!
//! Hosts that use [`loupe_input`] end to end feed raw events through
//! [`GestureInterpreter::dispatch`] instead and honor the returned
//! default-action verdict.
//!
//! This crate is `no_std`.

#![no_std]

mod interpreter;
mod recent;
mod view;

pub use interpreter::{GestureInterpreter, InterpreterConfig, InterpreterDebugInfo};
pub use recent::RecentKinds;
pub use view::{View, ViewState, ViewStatePatch};
