use super::*;
use crate::config::Config;
use crate::draw::{PALETTE, Preview, Rgba};
use crate::input::coordinate::Point;
use crate::input::events::{PointerEvent, PointerPhase};
use crate::share::DecodeError;
use crate::tools::{ToolError, ToolKind};
use futures::executor::block_on;

fn create_test_controller() -> SurfaceController {
    SurfaceController::new(64, 48).unwrap()
}

fn stroke(state: &mut SurfaceController, from: (f64, f64), to: (f64, f64)) {
    state.on_pointer_press(Point::new(from.0, from.1));
    state.on_pointer_motion(Point::new(to.0, to.1));
    state.on_pointer_release(Point::new(to.0, to.1));
}

fn pixels(state: &mut SurfaceController) -> Vec<Option<Rgba>> {
    let (w, h) = (state.canvas().width(), state.canvas().height());
    let mut out = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            out.push(state.canvas_mut().pixel(x, y));
        }
    }
    out
}

#[test]
fn test_defaults_match_config() {
    let state = create_test_controller();
    assert_eq!(state.active_tool_kind(), ToolKind::CircleSolid);
    assert_eq!(state.selected_color(), PALETTE[0]);
    assert_eq!(state.state(), DrawingState::Idle);
    assert_eq!(state.history_len(), 0);
    assert!(!state.has_pending_load());
}

#[test]
fn test_press_pushes_snapshot_before_drawing() {
    let mut state = create_test_controller();
    state.on_pointer_press(Point::new(10.0, 10.0));

    assert!(state.is_drawing());
    assert_eq!(state.history_len(), 1);
    assert_eq!(
        state.state(),
        DrawingState::Drawing {
            start: Point::new(10.0, 10.0)
        }
    );

    // A second press mid-stroke is ignored.
    state.on_pointer_press(Point::new(20.0, 20.0));
    assert_eq!(state.history_len(), 1);

    state.on_pointer_release(Point::new(10.0, 10.0));
    assert!(!state.is_drawing());
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut state = create_test_controller();
    state.set_tool(ToolKind::PaintBucket);
    state.on_pointer_release(Point::new(5.0, 5.0));
    assert!(state.canvas_mut().is_blank());
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_undo_is_lifo_back_to_blank() {
    let mut state = create_test_controller();
    state.set_tool(ToolKind::FreeHand);

    stroke(&mut state, (5.0, 5.0), (20.0, 5.0));
    let after_one = pixels(&mut state);
    stroke(&mut state, (5.0, 20.0), (20.0, 20.0));
    stroke(&mut state, (5.0, 35.0), (20.0, 35.0));
    assert_eq!(state.history_len(), 3);

    assert!(state.undo());
    block_on(state.wait_for_pending());
    assert!(state.undo());
    block_on(state.wait_for_pending());
    assert_eq!(pixels(&mut state), after_one);

    assert!(state.undo());
    assert_eq!(block_on(state.wait_for_pending()), 1);
    assert!(state.canvas_mut().is_blank());

    assert!(!state.undo());
    assert!(!state.has_pending_load());
}

#[test]
fn test_clear_discards_history() {
    let mut state = create_test_controller();
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));
    stroke(&mut state, (30.0, 30.0), (30.0, 30.0));
    assert!(!state.canvas_mut().is_blank());

    state.clear();
    assert!(state.canvas_mut().is_blank());
    assert_eq!(state.history_len(), 0);
    assert!(!state.undo());
    assert!(state.canvas_mut().is_blank());
}

#[test]
fn test_tool_switch_mid_stroke_rolls_back() {
    let mut state = create_test_controller();
    stroke(&mut state, (40.0, 40.0), (40.0, 40.0));
    let before = pixels(&mut state);

    state.set_tool(ToolKind::SquareSolid);
    state.on_pointer_press(Point::new(2.0, 2.0));
    state.on_pointer_motion(Point::new(30.0, 30.0));
    assert_eq!(state.canvas_mut().pixel(15, 15), Some(PALETTE[0].rgba()));
    assert_eq!(state.history_len(), 2);

    state.set_tool(ToolKind::FreeHand);
    assert!(!state.is_drawing());
    assert_eq!(state.history_len(), 1);
    assert_eq!(pixels(&mut state), before);

    // The next stroke starts cleanly with the new tool.
    state.on_pointer_release(Point::new(30.0, 30.0));
    assert_eq!(pixels(&mut state), before);
}

#[test]
fn test_tool_switch_reapplies_selected_color() {
    let mut state = create_test_controller();
    state.set_color(4).unwrap();
    state.set_tool(ToolKind::Eraser);
    assert_eq!(state.active_tool().color(), PALETTE[4]);
    state.set_tool(ToolKind::PaintBucket);
    assert_eq!(state.active_tool().color(), PALETTE[4]);
}

#[test]
fn test_set_color_out_of_range_keeps_selection() {
    let mut state = create_test_controller();
    state.set_color(3).unwrap();
    assert_eq!(
        state.set_color(10),
        Err(ToolError::PaletteIndex { index: 10, len: 10 })
    );
    assert_eq!(state.selected_color(), PALETTE[3]);
    assert_eq!(state.active_tool().color(), PALETTE[3]);
}

#[test]
fn test_set_size_is_clamped_per_tool() {
    let mut state = create_test_controller();
    state.set_tool(ToolKind::FreeHand);
    assert_eq!(state.set_size(100.0), 30.0);
    state.set_tool(ToolKind::Eraser);
    assert_eq!(state.set_size(100.0), 100.0);
    assert_eq!(state.tool(ToolKind::FreeHand).size().current, 30.0);
    state.set_tool(ToolKind::SquareSolid);
    assert_eq!(state.set_size(12.0), 0.0);
}

#[test]
fn test_palette_index_two_circle_center() {
    let mut state = create_test_controller();
    state.set_color(2).unwrap();
    state.set_tool(ToolKind::CircleSolid);
    stroke(&mut state, (32.0, 24.0), (32.0, 24.0));

    let center = state.canvas_mut().pixel(32, 24).unwrap();
    assert_eq!(center, PALETTE[2].rgba());
    assert_eq!((center.r, center.g, center.b), (0x2e, 0xcc, 0x71));
}

#[test]
fn test_every_tool_click_is_deterministic() {
    for kind in ToolKind::ALL {
        let mut first = create_test_controller();
        first.set_color(5).unwrap();
        first.set_tool(kind);
        stroke(&mut first, (20.0, 20.0), (20.0, 20.0));
        let expected = pixels(&mut first);

        // Same gesture again on a cleared canvas of the same controller.
        first.clear();
        stroke(&mut first, (20.0, 20.0), (20.0, 20.0));
        assert_eq!(pixels(&mut first), expected, "{kind} repeated click differs");

        let mut fresh = create_test_controller();
        fresh.set_color(5).unwrap();
        fresh.set_tool(kind);
        stroke(&mut fresh, (20.0, 20.0), (20.0, 20.0));
        assert_eq!(pixels(&mut fresh), expected, "{kind} fresh click differs");
    }
}

#[test]
fn test_bucket_fills_enclosed_region_only() {
    let mut state = create_test_controller();
    state.set_tool(ToolKind::SquareLine);
    state.set_size(2.0);
    stroke(&mut state, (10.0, 10.0), (30.0, 30.0));
    let outline = state.canvas_mut().pixel(10, 20);
    assert_eq!(outline, Some(PALETTE[0].rgba()));

    state.set_color(3).unwrap();
    state.set_tool(ToolKind::PaintBucket);
    stroke(&mut state, (20.0, 20.0), (20.0, 20.0));

    assert_eq!(state.canvas_mut().pixel(20, 20), Some(PALETTE[3].rgba()));
    assert_eq!(state.canvas_mut().pixel(12, 28), Some(PALETTE[3].rgba()));
    assert_eq!(state.canvas_mut().pixel(10, 20), outline);
    assert_eq!(state.canvas_mut().pixel(5, 5), Some(Rgba::TRANSPARENT));
    assert_eq!(state.canvas_mut().pixel(40, 40), Some(Rgba::TRANSPARENT));
}

#[test]
fn test_preview_never_touches_canvas() {
    let mut state = create_test_controller();
    state.set_tool(ToolKind::Eraser);
    state.set_size(10.0);
    state.on_pointer_motion(Point::new(20.0, 20.0));

    assert!(matches!(state.preview(), Some(Preview::Square { .. })));
    assert!(state.canvas_mut().is_blank());

    let mut frame = state.compose_frame().unwrap();
    let data = frame.data().unwrap();
    assert!(data.iter().any(|byte| *byte != 0));
    drop(data);

    // The canvas is still exclusively owned after composing.
    assert!(state.canvas_mut().is_blank());
    state.set_tool(ToolKind::FreeHand);
    stroke(&mut state, (5.0, 5.0), (5.0, 5.0));
    assert!(!state.canvas_mut().is_blank());
}

#[test]
fn test_preview_hidden_outside_canvas() {
    let mut state = create_test_controller();
    state.on_pointer_motion(Point::new(10.0, 10.0));
    assert!(state.preview().is_some());
    state.on_pointer_motion(Point::new(-5.0, 10.0));
    assert!(state.preview().is_none());
}

#[test]
fn test_out_of_bounds_points_are_clamped() {
    let mut state = create_test_controller();
    state.set_tool(ToolKind::SquareSolid);
    stroke(&mut state, (-50.0, -50.0), (1000.0, 1000.0));
    assert_eq!(state.canvas_mut().pixel(0, 0), Some(PALETTE[0].rgba()));
    assert_eq!(state.canvas_mut().pixel(62, 46), Some(PALETTE[0].rgba()));
}

#[test]
fn test_screen_events_use_origin() {
    let mut config = Config::default();
    config.canvas.width = 40;
    config.canvas.height = 40;
    config.canvas.origin_x = 100.0;
    config.canvas.origin_y = 50.0;
    let mut state = SurfaceController::from_config(&config).unwrap();

    state.handle_pointer_event(PointerEvent::new(PointerPhase::Press, 110.0, 60.0));
    assert_eq!(
        state.state(),
        DrawingState::Drawing {
            start: Point::new(10.0, 10.0)
        }
    );
    state.handle_pointer_event(PointerEvent::new(PointerPhase::Release, 110.0, 60.0));
    assert_eq!(state.canvas_mut().pixel(10, 10), Some(PALETTE[0].rgba()));
}

#[test]
fn test_share_then_load_is_pixel_identical() {
    let mut state = create_test_controller();
    state.set_color(2).unwrap();
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));
    state.set_color(6).unwrap();
    state.set_tool(ToolKind::SquareSolid);
    stroke(&mut state, (20.0, 5.0), (50.0, 40.0));
    state.set_tool(ToolKind::Eraser);
    state.set_size(6.0);
    stroke(&mut state, (35.0, 20.0), (35.0, 20.0));
    let expected = pixels(&mut state);

    let link = state.share().unwrap();
    assert_eq!(state.last_share(), Some(&link));
    assert!(link.as_str().starts_with("http://localhost:4200/game?source="));

    let mut other = create_test_controller();
    other.load_from_source(&link.data_url).unwrap();
    assert!(other.has_pending_load());
    assert!(other.canvas_mut().is_blank());
    block_on(other.wait_for_pending());
    assert_eq!(pixels(&mut other), expected);
}

#[test]
fn test_malformed_source_leaves_canvas() {
    let mut state = create_test_controller();
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));
    let before = pixels(&mut state);

    assert!(matches!(
        state.load_from_source("data:image/png;base64,***"),
        Err(DecodeError::Base64(_))
    ));
    assert!(matches!(
        state.load_from_source("data:text/plain;base64,aGVsbG8="),
        Err(DecodeError::UnsupportedMime(_))
    ));
    assert!(!state.has_pending_load());
    assert_eq!(pixels(&mut state), before);
}

#[test]
fn test_failed_decode_restores_backup() {
    let mut state = create_test_controller();
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));
    let before = pixels(&mut state);

    state.load_from_source(&broken_png_source()).unwrap();
    assert!(state.canvas_mut().is_blank());
    block_on(state.wait_for_pending());
    assert_eq!(pixels(&mut state), before);
}

#[test]
fn test_failed_decode_keeps_later_changes() {
    let mut state = create_test_controller();
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));

    state.load_from_source(&broken_png_source()).unwrap();
    state.clear();
    block_on(state.wait_for_pending());

    assert!(state.canvas_mut().is_blank());
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_later_load_survives_failed_decode() {
    let mut source = create_test_controller();
    source.set_color(3).unwrap();
    stroke(&mut source, (30.0, 20.0), (30.0, 20.0));
    let loaded = pixels(&mut source);
    let data_url = source.snapshot().unwrap();

    let mut state = create_test_controller();
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));
    state.load_from_source(&broken_png_source()).unwrap();
    state.load_from_source(&data_url).unwrap();
    assert_eq!(block_on(state.wait_for_pending()), 2);

    assert_eq!(pixels(&mut state), loaded);
}

#[test]
fn test_press_applies_pending_load_first() {
    let mut source = create_test_controller();
    stroke(&mut source, (10.0, 10.0), (10.0, 10.0));
    let loaded = pixels(&mut source);
    let data_url = source.snapshot().unwrap();

    let mut state = create_test_controller();
    state.load_from_source(&data_url).unwrap();
    state.set_color(4).unwrap();
    stroke(&mut state, (50.0, 36.0), (50.0, 36.0));
    assert!(!state.has_pending_load());
    assert_eq!(state.canvas_mut().pixel(10, 10), Some(PALETTE[0].rgba()));
    assert_eq!(state.canvas_mut().pixel(50, 36), Some(PALETTE[4].rgba()));

    // The stroke's undo entry is the loaded image, not the blank it replaced.
    assert!(state.undo());
    block_on(state.wait_for_pending());
    assert_eq!(pixels(&mut state), loaded);
}

#[test]
fn test_last_applied_load_replaces_canvas() {
    let mut state = create_test_controller();
    let blank = pixels(&mut state);
    stroke(&mut state, (10.0, 10.0), (10.0, 10.0));
    let after_first = pixels(&mut state);
    stroke(&mut state, (40.0, 30.0), (40.0, 30.0));

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(block_on(state.wait_for_pending()), 2);

    // Whichever decode lands last decides the canvas; the two are never merged.
    let result = pixels(&mut state);
    assert!(result == blank || result == after_first);
    assert_eq!(state.history_len(), 0);
}

/// Valid envelope and PNG signature, broken PNG body.
fn broken_png_source() -> String {
    let mut bogus = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    bogus.extend_from_slice(&[0u8; 16]);
    crate::share::encode_png(&bogus)
}

#[test]
fn test_poll_pending_applies_completed_loads() {
    let mut state = create_test_controller();
    let blank = state.snapshot().unwrap();
    state.load_from_source(&blank).unwrap();

    let mut applied = 0;
    for _ in 0..500 {
        applied += state.poll_pending();
        if !state.has_pending_load() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    assert_eq!(applied, 1);
    assert!(!state.has_pending_load());
}

#[test]
fn test_history_depth_limit() {
    let mut config = Config::default();
    config.canvas.width = 32;
    config.canvas.height = 32;
    config.history.max_depth = 2;
    let mut state = SurfaceController::from_config(&config).unwrap();

    for x in [4.0, 12.0, 20.0] {
        stroke(&mut state, (x, 10.0), (x, 10.0));
    }
    assert_eq!(state.history_len(), 2);
    assert!(state.undo());
    assert!(state.undo());
    assert!(!state.undo());
}
