//! End-to-end undo/redo behavior over the drawing session.

use inkboard::config::Config;
use inkboard::draw::color::{BLACK, BLUE, RED, WHITE};
use inkboard::input::{SketchSession, ToolState};

fn session() -> SketchSession {
    SketchSession::new(64, 64, ToolState::with_defaults(BLACK, 4, WHITE), 0)
}

fn stroke(session: &mut SketchSession, from: (i32, i32), to: (i32, i32)) {
    session.begin(from.0, from.1);
    session.extend(to.0, to.1);
    session.end();
}

#[test]
fn undo_after_each_stroke_walks_back_pixel_exact() {
    let mut session = session();
    let mut checkpoints = vec![session.surface.snapshot()];

    for i in 0..5 {
        stroke(&mut session, (i * 10, 5), (i * 10, 50));
        checkpoints.push(session.surface.snapshot());
    }

    for expected in checkpoints.iter().rev().skip(1) {
        assert!(session.undo());
        assert_eq!(&session.surface.snapshot(), expected);
    }
    assert!(!session.can_undo());
}

#[test]
fn draw_undo_redo_scenario() {
    let mut session = session();

    // Stroke A: blue, width 4
    session.tools.select_swatch(3);
    session.tools.set_width(4);
    stroke(&mut session, (10, 10), (40, 10));
    let only_a = session.surface.snapshot();
    assert_eq!(session.surface.pixel(20, 10), Some([BLUE.r, BLUE.g, BLUE.b, 255]));

    // Stroke B: red, width 2
    session.tools.select_swatch(1);
    session.tools.set_width(2);
    stroke(&mut session, (10, 30), (40, 30));
    assert_eq!(session.surface.pixel(20, 30), Some([RED.r, RED.g, RED.b, 255]));

    // Undo once: only A remains
    assert!(session.undo());
    assert_eq!(session.surface.snapshot(), only_a);

    // Undo again: blank canvas
    assert!(session.undo());
    assert!(session.surface.snapshot().is_blank());

    // Redo: A comes back
    assert!(session.redo());
    assert_eq!(session.surface.snapshot(), only_a);

    // New stroke C empties the redo stack
    stroke(&mut session, (5, 50), (60, 50));
    assert!(!session.can_redo());
    let with_c = session.surface.snapshot();
    assert!(!session.redo());
    assert_eq!(session.surface.snapshot(), with_c);
}

#[test]
fn clear_is_undoable() {
    let mut session = session();
    stroke(&mut session, (0, 0), (63, 63));
    let drawn = session.surface.snapshot();

    session.clear();
    assert!(session.surface.snapshot().is_blank());

    assert!(session.undo());
    assert_eq!(session.surface.snapshot(), drawn);
}

#[test]
fn empty_stack_operations_leave_the_surface_untouched() {
    let mut session = session();
    stroke(&mut session, (10, 10), (20, 20));
    let drawn = session.surface.snapshot();

    assert!(!session.redo());
    assert_eq!(session.surface.snapshot(), drawn);

    session.undo();
    session.undo(); // history exhausted, no-op
    assert!(session.surface.snapshot().is_blank());
}

#[test]
fn configured_history_cap_bounds_snapshot_count() {
    let config: Config = toml::from_str(
        r#"
        [canvas]
        width = 32
        height = 32

        [history]
        max_depth = 3
        "#,
    )
    .unwrap();
    let mut session = SketchSession::from_config(&config);

    for i in 0..10 {
        stroke(&mut session, (i, 0), (i, 31));
    }
    assert_eq!(session.history_depth(), 3);

    // Only the three retained frames can be undone
    assert!(session.undo());
    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.can_undo());
}
