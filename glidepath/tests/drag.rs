//! End-to-end drag scenarios through the engine's pointer interface.

use glidepath::algorithms::picking::HIT_RADIUS;
use glidepath::engine::EngineCore;
use glidepath::input::DragState;
use glidepath::model::{HandleRole, PathSegment, Point};

#[test]
fn full_drag_round_trip() {
    let mut core = EngineCore::demo();
    let before = core.scene().path().segments().to_vec();
    let ver = core.scene().geom_version();

    // Grab segment 0's `from` handle and walk it to (10, 10) in two moves.
    let start = core.scene().handles()[0].pos;
    assert!(core.on_pointer_down(start));
    assert!(core.on_pointer_move(Point::new(40.0, 200.0)));
    assert!(core.on_pointer_move(Point::new(10.0, 10.0)));
    core.on_pointer_up();

    let after = core.scene().path().segments();
    match (before[0], after[0]) {
        (PathSegment::Line { to: t0, .. }, PathSegment::Line { from, to }) => {
            assert_eq!(from, Point::new(10.0, 10.0));
            assert_eq!(to, t0);
        }
        _ => panic!("segment 0 should remain a line"),
    }
    // Every other segment is value-equal to its original.
    assert_eq!(&after[1..], &before[1..]);
    assert!(core.scene().geom_version() > ver);
}

#[test]
fn release_keeps_the_mutated_path() {
    let mut core = EngineCore::demo();
    let start = core.scene().handles()[0].pos;
    assert!(core.on_pointer_down(start));
    assert!(core.on_pointer_move(Point::new(90.0, 310.0)));

    // Leaving the surface behaves exactly like releasing: back to idle, the
    // moved geometry stays.
    core.on_pointer_leave();
    assert_eq!(core.drag_state(), DragState::Idle);
    assert_eq!(core.scene().handles()[0].pos, Point::new(90.0, 310.0));

    // A stray move after release touches nothing.
    let ver = core.scene().geom_version();
    assert!(!core.on_pointer_move(Point::new(500.0, 500.0)));
    assert_eq!(core.scene().geom_version(), ver);
}

#[test]
fn near_miss_within_hit_radius_still_grabs() {
    let mut core = EngineCore::demo();
    let target = core.scene().handles()[5];
    assert_eq!(target.role, HandleRole::Center);
    let near = Point::new(target.pos.x + HIT_RADIUS - 0.5, target.pos.y);
    assert!(core.on_pointer_down(near));
    match core.drag_state() {
        DragState::DraggingHandle { segment, role, last } => {
            assert_eq!(segment, target.segment);
            assert_eq!(role, HandleRole::Center);
            assert_eq!(last, near);
        }
        DragState::Idle => panic!("expected drag"),
    }
}

#[test]
fn dragging_arc_center_translates_the_arc() {
    let mut core = EngineCore::demo();
    let (radius, start_angle, end_angle) = match core.scene().path().segments()[2] {
        PathSegment::Arc { radius, start_angle, end_angle, .. } => {
            (radius, start_angle, end_angle)
        }
        _ => panic!("demo segment 2 is an arc"),
    };

    let center = core.scene().handles()[5].pos;
    assert!(core.on_pointer_down(center));
    assert!(core.on_pointer_move(Point::new(350.0, 220.0)));
    core.on_pointer_up();

    match core.scene().path().segments()[2] {
        PathSegment::Arc {
            center,
            radius: r,
            start_angle: s,
            end_angle: e,
        } => {
            assert_eq!(center, Point::new(350.0, 220.0));
            // Only the center moves; shape parameters are untouched.
            assert_eq!(r, radius);
            assert_eq!(s, start_angle);
            assert_eq!(e, end_angle);
        }
        _ => panic!("segment 2 should remain an arc"),
    }
}

#[test]
fn drag_invalidates_cached_length_next_query() {
    let mut core = EngineCore::demo();
    let before = core.scene().total_length();

    let start = core.scene().handles()[0].pos;
    assert!(core.on_pointer_down(start));
    // Stretch the first line far out.
    assert!(core.on_pointer_move(Point::new(-400.0, 300.0)));
    core.on_pointer_up();

    let after = core.scene().total_length();
    assert!(after > before + 100.0);
}
