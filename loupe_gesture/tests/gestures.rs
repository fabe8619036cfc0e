// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `loupe_gesture` crate.
//!
//! These drive raw host events through the owned normalizer and assert on
//! the resulting view state, covering the full pipeline from capability
//! negotiation to the anchor-preserving transform.

use kurbo::{Point, Size, Vec2};
use loupe_gesture::{GestureInterpreter, View, ViewState, ViewStatePatch};
use loupe_input::{
    Contact, DefaultAction, HostCaps, NormalizerConfig, RawEvent, RawPhase, TouchList,
};

struct ImageView {
    state: ViewState,
    image: Size,
    origin: Point,
    writes: usize,
}

impl ImageView {
    fn new() -> Self {
        Self {
            state: ViewState::default(),
            image: Size::new(800.0, 600.0),
            origin: Point::ORIGIN,
            writes: 0,
        }
    }
}

impl View for ImageView {
    type Surface = Point;

    fn surface(&self) -> Point {
        self.origin
    }

    fn state(&self) -> ViewState {
        self.state
    }

    fn set_state(&mut self, patch: ViewStatePatch) {
        self.state.apply(patch);
        self.writes += 1;
    }

    fn image_size(&self) -> Size {
        self.image
    }
}

fn contacts(list: &[(u64, f64, f64)]) -> TouchList {
    list.iter()
        .map(|&(id, x, y)| Contact {
            id,
            position: Point::new(x, y),
        })
        .collect()
}

fn touch_frame(phase: RawPhase, active: &[(u64, f64, f64)]) -> RawEvent {
    RawEvent::Touch {
        phase,
        active: contacts(active),
        changed: TouchList::new(),
    }
}

fn touch_lift(changed: &[(u64, f64, f64)]) -> RawEvent {
    RawEvent::Touch {
        phase: RawPhase::End,
        active: TouchList::new(),
        changed: contacts(changed),
    }
}

fn mouse(phase: RawPhase, x: f64, y: f64) -> RawEvent {
    RawEvent::Mouse {
        phase,
        position: Point::new(x, y),
    }
}

#[test]
fn mouse_drag_translates_the_view() {
    let config = NormalizerConfig::desktop(HostCaps::MOUSE);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    assert_eq!(
        gestures.dispatch(&mouse(RawPhase::Start, 50.0, 50.0), 0),
        DefaultAction::Prevent
    );
    gestures.dispatch(&mouse(RawPhase::Move, 80.0, 70.0), 16);

    let state = gestures.view().state;
    assert_eq!(state.position, Vec2::new(30.0, 20.0));
    assert_eq!(state.scale, 1.0);

    // Release, then a stray move: the global listeners are gone, nothing
    // reaches the interpreter.
    gestures.dispatch(&mouse(RawPhase::End, 80.0, 70.0), 32);
    let writes = gestures.view().writes;
    gestures.dispatch(&mouse(RawPhase::Move, 200.0, 200.0), 48);
    assert_eq!(gestures.view().writes, writes);
}

#[test]
fn two_finger_pinch_doubles_the_scale_about_the_midpoint() {
    // Surface at (0, 0), image 800x600, initial scale 1 at position (0, 0).
    let config = NormalizerConfig::desktop(HostCaps::TOUCH);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    // Two fingers 100 apart, midpoint (200, 150); spread to 200 apart.
    gestures.dispatch(
        &touch_frame(RawPhase::Start, &[(1, 150.0, 150.0), (2, 250.0, 150.0)]),
        0,
    );
    gestures.dispatch(
        &touch_frame(RawPhase::Move, &[(1, 100.0, 150.0), (2, 300.0, 150.0)]),
        16,
    );

    let state = gestures.view().state;
    assert_eq!(state.scale, 2.0);
    // (200, 150) keeps the same image content under it: at scale 1 that
    // content sat at image point (200, 150); at scale 2 the origin must
    // shift to (-200, -150).
    assert_eq!(state.position, Vec2::new(-200.0, -150.0));
    assert_eq!(state.pivot, Some(Point::new(200.0, 150.0)));
}

#[test]
fn double_tap_via_touch_frames_steps_the_scale() {
    let config = NormalizerConfig::desktop(HostCaps::TOUCH);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    for (raw, t) in [
        (touch_frame(RawPhase::Start, &[(1, 120.0, 90.0)]), 0),
        (touch_lift(&[(1, 120.0, 90.0)]), 60),
        (touch_frame(RawPhase::Start, &[(2, 120.0, 90.0)]), 180),
        (touch_lift(&[(2, 120.0, 90.0)]), 240),
    ] {
        gestures.dispatch(&raw, t);
    }

    let state = gestures.view().state;
    assert!((state.scale - 1.2).abs() < 1e-12);
    assert_eq!(state.pivot, Some(Point::new(120.0, 90.0)));
}

#[test]
fn tap_then_vertical_drag_zooms_with_one_finger() {
    let config = NormalizerConfig::desktop(HostCaps::TOUCH);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    gestures.dispatch(&touch_frame(RawPhase::Start, &[(1, 100.0, 100.0)]), 0);
    gestures.dispatch(&touch_lift(&[(1, 100.0, 100.0)]), 60);
    gestures.dispatch(&touch_frame(RawPhase::Start, &[(2, 100.0, 100.0)]), 150);
    gestures.dispatch(&touch_frame(RawPhase::Move, &[(2, 100.0, 50.0)]), 180);

    // Dragging upward from the hold point doubles the scale (100 / 50).
    let state = gestures.view().state;
    assert!((state.scale - 2.0).abs() < 1e-12);
    assert_eq!(state.pivot, Some(Point::new(100.0, 100.0)));
}

#[test]
fn wheel_zoom_keeps_the_cursor_anchored() {
    let config = NormalizerConfig::desktop(HostCaps::MOUSE | HostCaps::WHEEL);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    let out = gestures.dispatch(
        &RawEvent::Wheel {
            position: Point::new(400.0, 300.0),
            delta: 1000.0,
        },
        0,
    );
    assert_eq!(out, DefaultAction::Prevent);

    let state = gestures.view().state;
    assert!((state.scale - 2.0).abs() < 1e-12);
    // Cursor sat over image point (400, 300); after doubling, the origin
    // shifts so that point is still under the cursor.
    assert_eq!(state.position, Vec2::new(-400.0, -300.0));
}

#[test]
fn absurd_wheel_delta_never_pushes_scale_out_of_range() {
    let config = NormalizerConfig::desktop(HostCaps::MOUSE | HostCaps::WHEEL);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    for delta in [100_000.0, -100_000.0, f64::MAX] {
        gestures.dispatch(
            &RawEvent::Wheel {
                position: Point::new(10.0, 10.0),
                delta,
            },
            0,
        );
    }
    let scale = gestures.view().state.scale;
    assert!((0.1..=6.0).contains(&scale));
    assert_eq!(scale, 1.0);
}

#[test]
fn surface_offset_is_applied_to_gesture_coordinates() {
    let config = NormalizerConfig::desktop(HostCaps::MOUSE);
    let mut view = ImageView::new();
    view.origin = Point::new(20.0, 30.0);
    let mut gestures = GestureInterpreter::new(view, config);

    gestures.dispatch(&mouse(RawPhase::Start, 70.0, 80.0), 0);
    gestures.dispatch(&mouse(RawPhase::Move, 100.0, 100.0), 16);

    // Surface-local points are (50, 50) and (80, 70).
    assert_eq!(gestures.view().state.position, Vec2::new(30.0, 20.0));
}

#[test]
fn touch_only_host_ignores_mouse_and_pointer_input() {
    let config = NormalizerConfig::desktop(HostCaps::TOUCH);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    let out = gestures.dispatch(&mouse(RawPhase::Start, 10.0, 10.0), 0);
    assert_eq!(out, DefaultAction::Allow);
    gestures.dispatch(&mouse(RawPhase::Move, 90.0, 90.0), 16);
    assert_eq!(gestures.view().writes, 0);

    gestures.dispatch(&touch_frame(RawPhase::Start, &[(1, 10.0, 10.0)]), 32);
    gestures.dispatch(&touch_frame(RawPhase::Move, &[(1, 40.0, 40.0)]), 48);
    assert_eq!(gestures.view().state.position, Vec2::new(30.0, 30.0));
}

#[test]
fn destroy_tears_down_all_listening() {
    let config = NormalizerConfig::desktop(HostCaps::TOUCH | HostCaps::WHEEL);
    let mut gestures = GestureInterpreter::new(ImageView::new(), config);

    gestures.dispatch(&touch_frame(RawPhase::Start, &[(1, 10.0, 10.0)]), 0);
    gestures.destroy();

    let out = gestures.dispatch(&touch_frame(RawPhase::Move, &[(1, 90.0, 90.0)]), 16);
    assert_eq!(out, DefaultAction::Allow);
    assert_eq!(gestures.view().writes, 0);
    assert!(gestures.input().listeners().is_empty());
}
