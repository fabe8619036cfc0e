// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture interpreter: canonical events in, view transforms out.

use kurbo::{Point, Vec2};
use loupe_input::{
    DefaultAction, GestureEvent, GestureKind, InputNormalizer, NormalizerConfig, RawEvent,
    SourceKind,
};

use crate::recent::RecentKinds;
use crate::view::{View, ViewState, ViewStatePatch};

/// `start end start end` within the quiet window: a double-tap.
const DOUBLE_TAP: [GestureKind; 4] = [
    GestureKind::Start,
    GestureKind::End,
    GestureKind::Start,
    GestureKind::End,
];

/// `start end start move` within the quiet window: tap, then hold and drag
/// to zoom with one finger.
const DRAG_TO_ZOOM: [GestureKind; 4] = [
    GestureKind::Start,
    GestureKind::End,
    GestureKind::Start,
    GestureKind::Move,
];

/// Tuning constants for gesture interpretation.
///
/// The defaults carry the behavior this crate models; hosts with unusual
/// wheel hardware or display densities can adjust them per instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpreterConfig {
    /// Scale increment applied by a double-tap.
    pub double_tap_step: f64,
    /// Multiplier from native wheel delta to scale delta.
    pub wheel_zoom_coef: f64,
    /// Lower bound of the accepted scale range.
    pub min_scale: f64,
    /// Upper bound of the accepted scale range.
    pub max_scale: f64,
    /// A move whose target point and contact separation both stay within
    /// this threshold of the last reported values is jitter and ignored.
    pub jitter_epsilon: f64,
    /// Quiet window for compound-gesture recognition, in milliseconds.
    pub quiet_window_ms: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            double_tap_step: 0.2,
            wheel_zoom_coef: 0.001,
            min_scale: 0.1,
            max_scale: 6.0,
            jitter_epsilon: 1.0,
            quiet_window_ms: 500,
        }
    }
}

/// Ephemeral per-gesture state, opened by a `start` event.
#[derive(Clone, Copy, Debug)]
struct Session {
    /// View state snapshot at gesture start.
    init_state: ViewState,
    /// The event that opened the gesture.
    init_event: GestureEvent,
    /// When set, subsequent moves zoom about the initial point instead of
    /// dragging or pinching.
    one_touch_zoom: bool,
}

/// Debug snapshot of interpreter state.
#[derive(Clone, Copy, Debug)]
pub struct InterpreterDebugInfo {
    /// Whether a gesture session is live.
    pub session_active: bool,
    /// Whether the live session is in one-touch-zoom mode.
    pub one_touch_zoom: bool,
    /// The last reported target point, if any.
    pub last_point: Option<Point>,
    /// Number of kinds in the compound-gesture log.
    pub recent_len: usize,
}

/// Interprets the canonical gesture event stream into pan/zoom commands on
/// a [`View`].
///
/// Each gesture resolves to exactly one of drag, pinch-zoom, one-touch
/// anchor zoom, double-tap zoom, or wheel zoom. All zoom paths share one
/// anchor-preserving transform: the image content under the anchor point
/// stays visually stationary across the scale change, and a candidate scale
/// outside the configured range is rejected outright — state unchanged, no
/// error raised.
///
/// The interpreter owns an [`InputNormalizer`] over the view's surface; the
/// host drives [`GestureInterpreter::dispatch`] with raw events and a
/// millisecond timestamp (the timestamp only feeds the compound-gesture
/// quiet window). Every event is handled to completion, including the view
/// mutation, before `dispatch` returns.
#[derive(Debug)]
pub struct GestureInterpreter<V: View> {
    view: V,
    input: InputNormalizer<V::Surface>,
    config: InterpreterConfig,
    recent: RecentKinds,
    session: Option<Session>,
    /// Target point and separation of the last reported non-zoom event.
    last_report: Option<(Point, f64)>,
}

impl<V: View> GestureInterpreter<V> {
    /// Creates an interpreter over `view` with default tuning.
    ///
    /// Capability negotiation on the view's surface happens here, through
    /// the owned normalizer.
    #[must_use]
    pub fn new(view: V, input_config: NormalizerConfig) -> Self {
        Self::with_config(view, input_config, InterpreterConfig::default())
    }

    /// Creates an interpreter with explicit tuning.
    #[must_use]
    pub fn with_config(
        view: V,
        input_config: NormalizerConfig,
        config: InterpreterConfig,
    ) -> Self {
        let input = InputNormalizer::new(view.surface(), input_config);
        Self {
            view,
            input,
            config,
            recent: RecentKinds::new(config.quiet_window_ms),
            session: None,
            last_report: None,
        }
    }

    /// The steered view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the steered view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The owned input normalizer.
    #[must_use]
    pub fn input(&self) -> &InputNormalizer<V::Surface> {
        &self.input
    }

    /// The active tuning constants.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Snapshot of transient interpreter state for inspection.
    #[must_use]
    pub fn debug_info(&self) -> InterpreterDebugInfo {
        InterpreterDebugInfo {
            session_active: self.session.is_some(),
            one_touch_zoom: self.session.is_some_and(|s| s.one_touch_zoom),
            last_point: self.last_report.map(|(point, _)| point),
            recent_len: self.recent.kinds().len(),
        }
    }

    /// Releases the owned normalizer (detaching all its listeners) and
    /// drops any live session.
    pub fn destroy(&mut self) {
        self.input.destroy();
        self.session = None;
        self.recent.clear();
        self.last_report = None;
    }

    /// Routes one raw event through the normalizer and handles the
    /// canonical event it produces, if any.
    ///
    /// `now_ms` is the host clock in milliseconds; it anchors the
    /// compound-gesture quiet window.
    pub fn dispatch(&mut self, raw: &RawEvent, now_ms: u64) -> DefaultAction {
        let out = self.input.dispatch(raw);
        if let Some(event) = out.event {
            self.handle(event, now_ms);
        }
        out.default_action
    }

    /// Handles one canonical event.
    ///
    /// Public so that hosts with their own normalization layer — and tests —
    /// can feed events directly.
    pub fn handle(&mut self, event: GestureEvent, now_ms: u64) {
        // Anti-jitter: sensor noise below the epsilon never mutates state.
        // Contact separation counts as movement too, so a pinch whose
        // midpoint happens to stay put is not absorbed.
        if event.kind == GestureKind::Move
            && let Some((last_point, last_distance)) = self.last_report
            && !points_differ(event.target_point, last_point, self.config.jitter_epsilon)
            && (event.distance - last_distance).abs() <= self.config.jitter_epsilon
        {
            return;
        }

        self.recent.record(event.kind, now_ms);

        if self.recent.contains(&DOUBLE_TAP) {
            self.recent.clear();
            let new_scale = self.view.state().scale + self.config.double_tap_step;
            self.scale_about(event.target_point, new_scale);
            return;
        }
        if self.recent.contains(&DRAG_TO_ZOOM)
            && event.source != SourceKind::Mouse
            && let Some(session) = &mut self.session
        {
            session.one_touch_zoom = true;
        }

        match event.kind {
            GestureKind::Zoom => {
                // Wheel zoom is independent of any drag session and does not
                // advance the last reported point.
                let new_scale =
                    self.view.state().scale + event.delta * self.config.wheel_zoom_coef;
                self.scale_about(event.target_point, new_scale);
                return;
            }
            GestureKind::Move => {
                // A move with no live session has nothing to be relative to.
                let Some(session) = self.session else {
                    return;
                };
                if session.one_touch_zoom {
                    // Vertical displacement relative to the gesture start
                    // drives the scale; the start point stays anchored.
                    let init_point = session.init_event.target_point;
                    let new_scale =
                        session.init_state.scale * (init_point.y / event.target_point.y);
                    self.scale_about(init_point, new_scale);
                } else if event.distance > 1.0 && event.distance != session.init_event.distance {
                    let ratio = event.distance / session.init_event.distance;
                    self.scale_about(event.target_point, session.init_state.scale * ratio);
                } else {
                    let offset = event.target_point - session.init_event.target_point;
                    self.view
                        .set_state(ViewStatePatch::position(session.init_state.position + offset));
                }
            }
            GestureKind::Start => {
                self.session = Some(Session {
                    init_state: self.view.state(),
                    init_event: event,
                    one_touch_zoom: false,
                });
            }
            GestureKind::End => {
                self.session = None;
            }
        }
        self.last_report = Some((event.target_point, event.distance));
    }

    /// Anchor-preserving scale: keeps the image content under `anchor`
    /// visually stationary across the scale change.
    ///
    /// A candidate scale outside the configured range (or non-finite) is
    /// rejected and nothing is written.
    fn scale_about(&mut self, anchor: Point, new_scale: f64) {
        if !new_scale.is_finite()
            || new_scale < self.config.min_scale
            || new_scale > self.config.max_scale
        {
            return;
        }
        let image = self.view.image_size();
        let mut state = self.view.state();
        let scaled_width = image.width * state.scale;
        let scaled_height = image.height * state.scale;
        if scaled_width <= 0.0 || scaled_height <= 0.0 {
            return;
        }

        // The anchor's offset from the image origin, as a fraction of the
        // scaled image; the same fraction of the rescaled image must land
        // under the anchor afterwards.
        let origin = anchor.to_vec2() - state.position;
        let fraction = Vec2::new(origin.x / scaled_width, origin.y / scaled_height);
        let new_width = image.width * new_scale;
        let new_height = image.height * new_scale;
        state.position += Vec2::new(
            origin.x - new_width * fraction.x,
            origin.y - new_height * fraction.y,
        );
        state.scale = new_scale;
        state.pivot = Some(anchor);
        self.view.set_state(ViewStatePatch::from(state));
    }
}

fn points_differ(a: Point, b: Point, epsilon: f64) -> bool {
    (a.x - b.x).abs() > epsilon || (a.y - b.y).abs() > epsilon
}
