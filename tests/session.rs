use egui::{Color32, Pos2, pos2};
use sketchpad::{Drawable, InputEvent, SessionState, SketchSession, ToolKind, ToolPreview};

fn down(session: &mut SketchSession, x: f32, y: f32) {
    session.handle_event(InputEvent::PointerDown { pos: pos2(x, y) });
}

fn moved(session: &mut SketchSession, x: f32, y: f32) {
    session.handle_event(InputEvent::PointerMove { pos: pos2(x, y) });
}

fn up(session: &mut SketchSession, x: f32, y: f32) {
    session.handle_event(InputEvent::PointerUp { pos: pos2(x, y) });
}

fn leave(session: &mut SketchSession) {
    session.handle_event(InputEvent::PointerLeave);
}

fn stroke_points(drawable: &Drawable) -> &[Pos2] {
    drawable.as_stroke().expect("expected a stroke").points()
}

#[test]
fn click_commits_a_one_point_stroke() {
    let mut session = SketchSession::new();

    down(&mut session, 10.0, 10.0);
    assert_eq!(session.state(), SessionState::Drawing);
    up(&mut session, 10.0, 10.0);

    // A plain click is still an undoable commit: one stroke, one point.
    let committed = session.document().committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(stroke_points(&committed[0]), &[pos2(10.0, 10.0)]);
    assert_eq!(session.state(), SessionState::Idle);

    session.undo();
    assert!(session.document().is_empty());
}

#[test]
fn pointer_leave_freezes_the_stroke_like_pointer_up() {
    let mut session = SketchSession::new();

    down(&mut session, 10.0, 10.0);
    moved(&mut session, 10.0, 50.0);
    leave(&mut session);

    assert_eq!(session.state(), SessionState::Idle);
    let committed = session.document().committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(
        stroke_points(&committed[0]),
        &[pos2(10.0, 10.0), pos2(10.0, 50.0)]
    );

    // Re-entering and moving must not extend the frozen stroke.
    moved(&mut session, 90.0, 90.0);
    assert_eq!(stroke_points(&session.document().committed()[0]).len(), 2);
}

#[test]
fn strokes_snapshot_width_and_color_at_creation() {
    let mut session = SketchSession::new();
    session.select_marker_width(5.0);
    session.set_hue(120.0);

    down(&mut session, 10.0, 10.0);
    moved(&mut session, 20.0, 20.0);
    up(&mut session, 20.0, 20.0);

    // Changing the tool afterwards must not touch the committed stroke.
    session.select_marker_width(1.0);
    session.set_hue(300.0);
    session.set_lightness(90.0);

    let stroke = session.document().committed()[0]
        .as_stroke()
        .expect("expected a stroke");
    assert_eq!(stroke.line_width(), 5.0);
    assert_eq!(stroke.color(), Color32::from_rgb(0, 255, 0));
}

#[test]
fn sticker_placement_flow() {
    let mut session = SketchSession::new();

    session.select_sticker("🎃");
    assert_eq!(session.state(), SessionState::PlacingSticker);
    assert_eq!(session.tools().kind(), ToolKind::Sticker);

    // Moving shows the ghost but commits nothing.
    moved(&mut session, 30.0, 30.0);
    assert!(session.document().is_empty());
    match session.visible_preview() {
        Some(ToolPreview::StickerGhost { pos, symbol }) => {
            assert_eq!(*pos, pos2(30.0, 30.0));
            assert_eq!(symbol, "🎃");
        }
        other => panic!("expected a sticker ghost preview, got {other:?}"),
    }

    // Dropping commits exactly one sticker and returns to idle marker.
    down(&mut session, 50.0, 50.0);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.tools().kind(), ToolKind::Marker);

    let committed = session.document().committed();
    assert_eq!(committed.len(), 1);
    let sticker = committed[0].as_sticker().expect("expected a sticker");
    assert_eq!(sticker.symbol(), "🎃");
    assert_eq!(sticker.pos(), pos2(50.0, 50.0));
    assert!(!sticker.is_dragging());
}

#[test]
fn dragging_an_existing_sticker_moves_it_without_new_commits() {
    let mut session = SketchSession::new();
    session.select_sticker("👻");
    down(&mut session, 50.0, 50.0);
    assert_eq!(session.document().committed().len(), 1);

    // Grab within the hit tolerance, drag, release.
    down(&mut session, 55.0, 52.0);
    assert_eq!(session.state(), SessionState::DraggingSticker { index: 0 });

    moved(&mut session, 120.0, 80.0);
    moved(&mut session, 200.0, 200.0);
    up(&mut session, 200.0, 200.0);

    let committed = session.document().committed();
    assert_eq!(committed.len(), 1);
    let sticker = committed[0].as_sticker().expect("expected a sticker");
    assert_eq!(sticker.pos(), pos2(200.0, 200.0));
    assert!(!sticker.is_dragging());
    assert_eq!(session.state(), SessionState::Idle);

    // A drag is not a commit: one undo removes the sticker entirely.
    session.undo();
    assert!(session.document().is_empty());
}

#[test]
fn drag_release_via_pointer_leave() {
    let mut session = SketchSession::new();
    session.select_sticker("💀");
    down(&mut session, 40.0, 40.0);

    down(&mut session, 40.0, 40.0);
    moved(&mut session, 10.0, 10.0);
    leave(&mut session);

    let sticker = session.document().committed()[0]
        .as_sticker()
        .expect("expected a sticker");
    assert_eq!(sticker.pos(), pos2(10.0, 10.0));
    assert!(!sticker.is_dragging());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn pending_sticker_wins_over_existing_sticker_hit() {
    let mut session = SketchSession::new();
    session.select_sticker("🎃");
    down(&mut session, 50.0, 50.0);

    // A new sticker is pending; pointer-down on top of the existing one
    // must place the new sticker, not start a drag.
    session.select_sticker("👻");
    down(&mut session, 50.0, 50.0);

    let committed = session.document().committed();
    assert_eq!(committed.len(), 2);
    assert_eq!(committed[1].as_sticker().unwrap().symbol(), "👻");
    assert!(!committed[0].as_sticker().unwrap().is_dragging());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn clicking_a_sticker_does_not_start_a_stroke() {
    let mut session = SketchSession::new();
    session.select_sticker("🧟");
    down(&mut session, 50.0, 50.0);

    down(&mut session, 52.0, 48.0);
    up(&mut session, 52.0, 48.0);

    // Still just the sticker; no one-point stroke was committed.
    let committed = session.document().committed();
    assert_eq!(committed.len(), 1);
    assert!(committed[0].as_sticker().is_some());
}

#[test]
fn preview_is_hidden_while_drawing_and_dragging() {
    let mut session = SketchSession::new();

    moved(&mut session, 15.0, 15.0);
    assert!(matches!(
        session.visible_preview(),
        Some(ToolPreview::BrushRing { .. })
    ));

    down(&mut session, 15.0, 15.0);
    moved(&mut session, 16.0, 16.0);
    assert!(session.visible_preview().is_none());

    up(&mut session, 16.0, 16.0);
    moved(&mut session, 17.0, 17.0);
    assert!(session.visible_preview().is_some());
}

#[test]
fn preview_is_hidden_after_pointer_leave() {
    let mut session = SketchSession::new();

    moved(&mut session, 15.0, 15.0);
    assert!(session.visible_preview().is_some());

    leave(&mut session);
    assert!(session.visible_preview().is_none());

    moved(&mut session, 18.0, 18.0);
    assert!(session.visible_preview().is_some());
}

#[test]
fn selecting_a_tool_replaces_the_preview() {
    let mut session = SketchSession::new();
    moved(&mut session, 10.0, 10.0);

    session.select_marker_width(3.0);
    match session.visible_preview() {
        Some(ToolPreview::BrushRing { center, radius }) => {
            // Radius is half the pen width; position carries over.
            assert_eq!(*radius, 1.5);
            assert_eq!(*center, pos2(10.0, 10.0));
        }
        other => panic!("expected a brush ring preview, got {other:?}"),
    }

    session.select_sticker("💀");
    assert!(matches!(
        session.visible_preview(),
        Some(ToolPreview::StickerGhost { .. })
    ));

    // Picking a width cancels the pending placement.
    session.select_marker_width(1.0);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(matches!(
        session.visible_preview(),
        Some(ToolPreview::BrushRing { .. })
    ));
}

#[test]
fn session_clear_empties_everything() {
    let mut session = SketchSession::new();
    down(&mut session, 10.0, 10.0);
    up(&mut session, 10.0, 10.0);
    session.select_sticker("🧛");
    down(&mut session, 60.0, 60.0);
    session.undo();

    session.clear();

    assert!(session.document().is_empty());
    assert!(!session.document().can_redo());
}

#[test]
fn add_sticker_symbol_rejects_blank_input() {
    let mut session = SketchSession::new();
    let before = session.tools().catalog().len();

    assert!(!session.add_sticker_symbol("   "));
    assert_eq!(session.tools().catalog().len(), before);

    assert!(session.add_sticker_symbol("🍬"));
    assert_eq!(session.tools().catalog().len(), before + 1);
}
