// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external view collaborator contract.
//!
//! The interpreter owns no rendering, image decoding, or widget chrome; it
//! only reads and writes pan/zoom state on a [`View`] and asks it for the
//! geometry the anchor-preserving transform needs.

use kurbo::{Point, Size, Vec2};
use loupe_input::Surface;

/// Pan/zoom state of the image view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Translation of the image origin, in surface-local units.
    pub position: Vec2,
    /// Uniform scale factor. Positive.
    pub scale: f64,
    /// The anchor of the most recent scale change. Informational only; it
    /// carries no invariants and is never read back by the interpreter.
    pub pivot: Option<Point>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            pivot: None,
        }
    }
}

impl ViewState {
    /// Applies a partial update in place. `None` fields are left unchanged.
    pub fn apply(&mut self, patch: ViewStatePatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(pivot) = patch.pivot {
            self.pivot = Some(pivot);
        }
    }
}

/// A partial [`ViewState`] write; a drag updates only the position while a
/// zoom writes position, scale, and pivot together.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewStatePatch {
    /// New translation, if changed.
    pub position: Option<Vec2>,
    /// New scale, if changed.
    pub scale: Option<f64>,
    /// New scale anchor, if a scale change happened.
    pub pivot: Option<Point>,
}

impl ViewStatePatch {
    /// A position-only update.
    #[must_use]
    pub fn position(position: Vec2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

impl From<ViewState> for ViewStatePatch {
    /// A full update carrying every field of `state`.
    fn from(state: ViewState) -> Self {
        Self {
            position: Some(state.position),
            scale: Some(state.scale),
            pivot: state.pivot,
        }
    }
}

/// The widget the interpreter steers.
///
/// All state lives on the view side; the interpreter reads a snapshot per
/// event, computes the transform, and writes back through
/// [`View::set_state`]. Re-rendering is the view's responsibility.
pub trait View {
    /// Handle type for the input surface listeners attach to.
    type Surface: Surface;

    /// The surface the normalizer attaches to (`getElement` analogue).
    fn surface(&self) -> Self::Surface;

    /// Current pan/zoom snapshot.
    fn state(&self) -> ViewState;

    /// Applies a partial or full pan/zoom update.
    fn set_state(&mut self, patch: ViewStatePatch);

    /// Natural (unscaled) image dimensions, used by the anchor-preserving
    /// transform.
    fn image_size(&self) -> Size;
}
