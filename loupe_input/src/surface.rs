// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The target surface abstraction.

use kurbo::Point;

/// A handle to the surface the normalizer is attached to.
///
/// The only geometry the normalizer needs is the surface's current
/// bounding-box offset in viewport coordinates. It is re-queried on every
/// dispatched event — never cached — because the surface may reflow, scroll,
/// or be repositioned between gesture events.
pub trait Surface {
    /// The surface's current top-left corner, viewport-relative.
    fn origin(&self) -> Point;
}

/// A surface fixed at a point; convenient for static layouts and tests.
impl Surface for Point {
    fn origin(&self) -> Point {
        *self
    }
}

impl<S: Surface + ?Sized> Surface for &S {
    fn origin(&self) -> Point {
        (**self).origin()
    }
}
