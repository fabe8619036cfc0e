// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input capabilities and per-instance negotiation configuration.
//!
//! A [`Capability`] is a distinct native input technology the host surface
//! may expose. Exactly one capability is adopted as *primary* for the
//! lifetime of a normalizer instance; the others, when present, are only
//! suppressed so that compatibility events synthesized from the same
//! physical gesture do not trigger default actions.
//!
//! Which capabilities exist is not probed by this crate. The host evaluates
//! its environment (one pure boolean probe per capability) and hands the
//! result in as a [`HostCaps`] set inside [`NormalizerConfig`]. Negotiation
//! state is therefore per-instance configuration decided once at
//! construction; multiple viewers on one host never interfere.

use bitflags::bitflags;

/// A distinct native pointing-input technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Unified pointer input (mouse, touch, and stylus behind one model).
    Pointer,
    /// Multi-contact touch input.
    Touch,
    /// Single-contact mouse input.
    Mouse,
}

impl Capability {
    /// The [`HostCaps`] flag corresponding to this capability.
    #[must_use]
    pub fn flag(self) -> HostCaps {
        match self {
            Self::Pointer => HostCaps::POINTER,
            Self::Touch => HostCaps::TOUCH,
            Self::Mouse => HostCaps::MOUSE,
        }
    }
}

bitflags! {
    /// The set of input technologies the host environment actually exposes.
    ///
    /// Computed by the host from pure environment probes and passed to
    /// [`NormalizerConfig`]; [`HostCaps::WHEEL`] is independent of the three
    /// pointing capabilities and only controls whether a wheel listener is
    /// attached.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HostCaps: u8 {
        /// Pointer events are available.
        const POINTER = 1 << 0;
        /// Touch events are available.
        const TOUCH = 1 << 1;
        /// Mouse events are available.
        const MOUSE = 1 << 2;
        /// A wheel-style input is available.
        const WHEEL = 1 << 3;
    }
}

/// An explicit, ordered list of capability probes.
///
/// The first capability in the order that the host exposes becomes primary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorityOrder([Capability; 3]);

impl PriorityOrder {
    /// Desktop ordering: pointer, then touch, then mouse.
    pub const DESKTOP: Self = Self([Capability::Pointer, Capability::Touch, Capability::Mouse]);

    /// Touch-heavy device ordering: touch, then pointer, then mouse.
    pub const TOUCH_FIRST: Self = Self([Capability::Touch, Capability::Pointer, Capability::Mouse]);

    /// Creates a custom ordering.
    #[must_use]
    pub const fn new(order: [Capability; 3]) -> Self {
        Self(order)
    }

    /// The capabilities in priority order, highest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Capability; 3] {
        &self.0
    }
}

/// Per-instance normalizer configuration, decided once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// What the host environment exposes.
    pub caps: HostCaps,
    /// Which capability wins when several are exposed.
    pub priority: PriorityOrder,
}

impl NormalizerConfig {
    /// Configuration with the [`PriorityOrder::DESKTOP`] ordering.
    #[must_use]
    pub fn desktop(caps: HostCaps) -> Self {
        Self {
            caps,
            priority: PriorityOrder::DESKTOP,
        }
    }

    /// Configuration with the [`PriorityOrder::TOUCH_FIRST`] ordering.
    #[must_use]
    pub fn touch_first(caps: HostCaps) -> Self {
        Self {
            caps,
            priority: PriorityOrder::TOUCH_FIRST,
        }
    }
}

impl Default for NormalizerConfig {
    /// An empty capability set with desktop ordering: attaches nothing and
    /// emits nothing (graceful degradation).
    fn default() -> Self {
        Self::desktop(HostCaps::empty())
    }
}
