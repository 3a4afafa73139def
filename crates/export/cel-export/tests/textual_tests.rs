use cel_animation_core::{Keyframe, ShapeKind, TimelineStore};
use cel_export::TextualExporter;

fn kf(tick: u32, x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Keyframe {
    Keyframe::new(tick, x, y, w, h, r, g, b).unwrap()
}

/// it should dump an empty store as just the canvas header
#[test]
fn empty_store_is_canvas_line_only() {
    let store = TimelineStore::new();
    assert_eq!(TextualExporter::new(&store).render(), "Canvas 0 0 500 500\n");
}

/// it should emit a single-tuple line for a one-keyframe shape
#[test]
fn single_keyframe_line() {
    let mut store = TimelineStore::new();
    store.declare_shape("loony", ShapeKind::Rectangle).unwrap();
    store
        .add_keyframe("loony", kf(1, 10, 20, 20, 100, 0, 0, 255))
        .unwrap();
    assert_eq!(
        TextualExporter::new(&store).render(),
        "Canvas 0 0 500 500\n\
         Shape loony rectangle\n\
         motion loony\t1\t10\t20\t20\t100\t0\t0\t255\n"
    );
}

/// it should emit shapes in declaration order with one line per segment
#[test]
fn full_dump_matches_reference() {
    let mut store = TimelineStore::new();
    store.declare_shape("loony", ShapeKind::Rectangle).unwrap();
    store.declare_shape("franky", ShapeKind::Circle).unwrap();
    store.declare_shape("leralt", ShapeKind::Ellipse).unwrap();
    store.declare_shape("d", ShapeKind::Circle).unwrap();
    let m = kf(1, 10, 20, 20, 100, 0, 0, 255);
    let m2 = kf(17, 10, 20, 20, 100, 0, 0, 255);
    let m3 = kf(138, 10, 20, 20, 100, 0, 0, 255);
    let m4 = kf(16, 10, 20, 20, 100, 0, 0, 255);
    for frame in [m, m2, m4] {
        store.add_keyframe("loony", frame).unwrap();
    }
    for frame in [m, m2, m3] {
        store.add_keyframe("franky", frame).unwrap();
    }
    store.add_keyframe("leralt", m4).unwrap();

    assert_eq!(
        TextualExporter::new(&store).render(),
        "Canvas 0 0 500 500\n\
         Shape loony rectangle\n\
         motion loony\t1\t10\t20\t20\t100\t0\t0\t255\t\t16\t10\t20\t20\t100\t0\t0\t255\n\
         motion loony\t16\t10\t20\t20\t100\t0\t0\t255\t\t17\t10\t20\t20\t100\t0\t0\t255\n\
         Shape franky circle\n\
         motion franky\t1\t10\t20\t20\t100\t0\t0\t255\t\t17\t10\t20\t20\t100\t0\t0\t255\n\
         motion franky\t17\t10\t20\t20\t100\t0\t0\t255\t\t138\t10\t20\t20\t100\t0\t0\t255\n\
         Shape leralt ellipse\n\
         motion leralt\t16\t10\t20\t20\t100\t0\t0\t255\n\
         Shape d circle\n"
    );
}

/// it should render the canvas header from the configured bounds
#[test]
fn canvas_line_reflects_bounds() {
    let mut store = TimelineStore::new();
    store.set_bounds(-12, 15, 600, 700).unwrap();
    assert_eq!(
        TextualExporter::new(&store).render(),
        "Canvas -12 15 600 700\n"
    );
}

/// it should produce output whose tuples reconstruct the keyframes exactly
#[test]
fn dump_round_trips_to_keyframes() {
    let mut store = TimelineStore::new();
    store.declare_shape("loony", ShapeKind::Rectangle).unwrap();
    for frame in [
        kf(1, 400, 10, 20, 100, 0, 0, 255),
        kf(17, 200, 20, 30, 90, 10, 20, 30),
        kf(45, -200, 200, 20, 100, 255, 0, 0),
    ] {
        store.add_keyframe("loony", frame).unwrap();
    }

    let dump = TextualExporter::new(&store).render();
    let mut recovered: Vec<Keyframe> = Vec::new();
    for line in dump.lines().filter(|line| line.starts_with("motion ")) {
        let fields = line.split('\t').skip(1).filter(|part| !part.is_empty());
        let values: Vec<i32> = fields.map(|part| part.parse().unwrap()).collect();
        for tuple in values.chunks(8) {
            let frame = kf(
                tuple[0] as u32,
                tuple[1],
                tuple[2],
                tuple[3],
                tuple[4],
                tuple[5],
                tuple[6],
                tuple[7],
            );
            if recovered.last() != Some(&frame) {
                recovered.push(frame);
            }
        }
    }
    assert_eq!(recovered, store.keyframes("loony"));
}
