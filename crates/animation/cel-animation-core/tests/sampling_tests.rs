use cel_animation_core::{sampling, Keyframe, ShapeKind, TimelineStore};

fn kf(tick: u32, x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Keyframe {
    Keyframe::new(tick, x, y, w, h, r, g, b).unwrap()
}

fn store_with(frames: &[Keyframe]) -> TimelineStore {
    let mut store = TimelineStore::new();
    store.declare_shape("shape", ShapeKind::Rectangle).unwrap();
    for frame in frames {
        store.add_keyframe("shape", *frame).unwrap();
    }
    store
}

/// it should return the bracketing keyframes verbatim at their own ticks
#[test]
fn boundary_ticks_return_endpoints() {
    let prev = kf(1, 400, 10, 20, 100, 0, 0, 255);
    let next = kf(17, 200, 20, 20, 100, 0, 0, 255);
    let store = store_with(&[prev, next]);
    assert_eq!(sampling::state_at(&store, "shape", 1), Some(prev));
    assert_eq!(sampling::state_at(&store, "shape", 17), Some(next));
}

/// it should not render outside the keyframe span
#[test]
fn outside_span_is_not_visible() {
    let store = store_with(&[
        kf(5, 0, 0, 10, 10, 0, 0, 0),
        kf(10, 50, 0, 10, 10, 0, 0, 0),
    ]);
    assert_eq!(sampling::state_at(&store, "shape", 4), None);
    assert_eq!(sampling::state_at(&store, "shape", 11), None);
    assert_eq!(sampling::state_at(&store, "shape", 0), None);
}

/// it should render a single-keyframe shape only at exactly that tick
#[test]
fn single_keyframe_exact_tick_only() {
    let only = kf(16, 10, 20, 20, 100, 0, 0, 255);
    let store = store_with(&[only]);
    assert_eq!(sampling::state_at(&store, "shape", 16), Some(only));
    assert_eq!(sampling::state_at(&store, "shape", 15), None);
    assert_eq!(sampling::state_at(&store, "shape", 17), None);
}

/// it should return None for unknown shapes and empty timelines
#[test]
fn unknown_and_empty_shapes_are_invisible() {
    let store = store_with(&[]);
    assert_eq!(sampling::state_at(&store, "shape", 0), None);
    assert_eq!(sampling::state_at(&store, "ghost", 0), None);
}

/// it should blend position linearly between bracketing keyframes
#[test]
fn midpoint_interpolation() {
    let store = store_with(&[
        kf(1, 400, 10, 20, 100, 0, 0, 255),
        kf(17, 200, 20, 20, 100, 0, 0, 255),
    ]);
    let mid = sampling::state_at(&store, "shape", 9).unwrap();
    // halfway through the segment: x 400 -> 200, y 10 -> 20
    assert_eq!(mid.tick(), 9);
    assert_eq!(mid.x(), 300);
    assert_eq!(mid.y(), 15);
    // unchanged groups carried verbatim
    assert_eq!((mid.width(), mid.height()), (20, 100));
    assert_eq!((mid.red(), mid.green(), mid.blue()), (0, 0, 255));
}

/// it should truncate blended values toward zero
#[test]
fn interpolation_truncates_toward_zero() {
    // x runs 0 -> 5 over ticks 0..3: at tick 1 the exact value is 5/3
    let store = store_with(&[kf(0, 0, 0, 10, 10, 0, 0, 0), kf(3, 5, 0, 10, 10, 0, 0, 0)]);
    assert_eq!(sampling::state_at(&store, "shape", 1).unwrap().x(), 1);

    // x runs -5 -> 0: at tick 1 the exact value is -10/3, truncating to -3
    let store = store_with(&[kf(0, -5, 0, 10, 10, 0, 0, 0), kf(3, 0, 0, 10, 10, 0, 0, 0)]);
    assert_eq!(sampling::state_at(&store, "shape", 1).unwrap().x(), -3);
}

/// it should return a middle keyframe verbatim when the tick lands on it
#[test]
fn middle_keyframe_returned_verbatim() {
    let middle = kf(10, 50, 0, 10, 10, 0, 0, 0);
    let store = store_with(&[
        kf(5, 0, 0, 10, 10, 0, 0, 0),
        middle,
        kf(20, 100, 0, 10, 10, 0, 0, 0),
    ]);
    assert_eq!(sampling::state_at(&store, "shape", 10), Some(middle));
}

/// it should blend each attribute group independently
#[test]
fn groups_blend_independently() {
    // size and color change, position holds
    let store = store_with(&[
        kf(0, 7, 7, 10, 20, 0, 100, 200),
        kf(10, 7, 7, 20, 40, 100, 200, 0),
    ]);
    let mid = sampling::state_at(&store, "shape", 5).unwrap();
    assert_eq!((mid.x(), mid.y()), (7, 7));
    assert_eq!((mid.width(), mid.height()), (15, 30));
    assert_eq!((mid.red(), mid.green(), mid.blue()), (50, 150, 100));
}

/// it should sample raw sequences the same way as store-backed queries
#[test]
fn sample_keyframes_matches_state_at() {
    let frames = [
        kf(1, 400, 10, 20, 100, 0, 0, 255),
        kf(17, 200, 20, 20, 100, 0, 0, 255),
    ];
    let store = store_with(&frames);
    for tick in 0..20 {
        assert_eq!(
            sampling::sample_keyframes(&frames, tick),
            sampling::state_at(&store, "shape", tick)
        );
    }
}
