use super::*;
use crate::config::{Action, KeybindingsConfig, Style};
use crate::draw::{DrawOp, Image, RED, RecordingCanvas};
use crate::measure::{LabelLocation, MarkCategory, Measurement, ToolKind, ToolMode};
use crate::services::{CursorHint, ScreenError, ScreenService};
use crate::state::AppState;
use crate::util::{PixelRect, Point};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MockScreenState {
    cursor: Point,
    hints: Vec<CursorHint>,
    captures: Vec<PixelRect>,
    invalidated: Vec<Point>,
    fail_capture: bool,
}

#[derive(Clone, Default)]
struct MockScreen {
    state: Rc<RefCell<MockScreenState>>,
}

impl MockScreen {
    fn last_hint(&self) -> Option<CursorHint> {
        self.state.borrow().hints.last().copied()
    }
}

impl ScreenService for MockScreen {
    fn dimensions(&self) -> PixelRect {
        PixelRect::new(0, 0, 1000, 500).unwrap()
    }

    fn capture(&mut self, rect: PixelRect) -> Result<Image, ScreenError> {
        let mut state = self.state.borrow_mut();
        state.captures.push(rect);
        if state.fail_capture {
            return Err(ScreenError::Unavailable("mock".to_string()));
        }
        Ok(Image::filled(rect.width, rect.height, RED))
    }

    fn cursor_position(&self) -> Point {
        self.state.borrow().cursor
    }

    fn set_cursor_hint(&mut self, hint: CursorHint) {
        self.state.borrow_mut().hints.push(hint);
    }

    fn invalidate(&mut self, p: Point) {
        self.state.borrow_mut().invalidated.push(p);
    }
}

fn create_test_app_with_state(state: &AppState) -> (App, MockScreen) {
    let screen = MockScreen::default();
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let app = App::new(
        Box::new(screen.clone()),
        Style::default(),
        action_map,
        state,
    );
    (app, screen)
}

fn create_test_app() -> (App, MockScreen) {
    create_test_app_with_state(&AppState::default())
}

/// Click, move, click: a finished line from `from` to `to`.
fn draw_tool(app: &mut App, from: Point, to: Point) {
    app.on_mouse_click(from);
    app.on_mouse_move(to);
    app.on_mouse_click(to);
}

#[test]
fn mouse_move_updates_readouts_even_without_tool() {
    let (mut app, screen) = create_test_app();
    app.on_mouse_move(Point::new(12.0, 34.0));

    assert_eq!(app.help_lines().pos(), Point::new(12.0, 34.0));
    assert!(app.info().lines().contains(&"Mouse:\t12.0, 34.0"));
    // Hidden tool: no hover handling, so no cursor hint either.
    assert!(screen.last_hint().is_none());
}

#[test]
fn click_move_click_places_a_line() {
    let (mut app, screen) = create_test_app();
    app.on_mouse_click(Point::new(10.0, 10.0));
    assert_eq!(screen.last_hint(), Some(CursorHint::Resizing));

    app.on_mouse_move(Point::new(13.0, 14.0));
    app.on_mouse_click(Point::new(13.0, 14.0));

    let tool = app.tools().active();
    assert_eq!(tool.mode(), ToolMode::Passive);
    assert_eq!(tool.measure()[&Measurement::Length], 5.0);
    assert!(app.info().lines().contains(&"Length:\t5.00"));
}

#[test]
fn hover_sets_grip_hint_and_drag_moves_tool() {
    let (mut app, screen) = create_test_app();
    app.handle_action(Action::SelectNextTool);
    draw_tool(&mut app, Point::new(100.0, 100.0), Point::new(300.0, 200.0));

    app.on_mouse_move(Point::new(200.0, 150.0));
    assert_eq!(screen.last_hint(), Some(CursorHint::CanGrip));

    app.on_mouse_click(Point::new(200.0, 150.0));
    assert_eq!(screen.last_hint(), Some(CursorHint::Moving));
    app.on_mouse_move(Point::new(210.0, 140.0));
    assert_eq!(
        app.tools().active().endpoint(crate::measure::Corner::P0).pos,
        Point::new(110.0, 90.0)
    );

    app.on_mouse_click(Point::new(210.0, 140.0));
    app.on_mouse_move(Point::new(900.0, 20.0));
    assert_eq!(screen.last_hint(), Some(CursorHint::Normal));
}

#[test]
fn shift_locks_active_resize() {
    let (mut app, _screen) = create_test_app();
    app.on_mouse_click(Point::ZERO);
    app.on_key_press(Key::Shift);
    assert!(app.tools().active().is_locked());
    app.on_mouse_move(Point::new(50.0, 5.0));
    assert_eq!(
        app.tools().active().active_endpoint().map(|e| e.pos),
        Some(Point::new(50.0, 0.0))
    );

    app.on_key_release(Key::Shift);
    assert!(!app.tools().active().is_locked());
    app.on_mouse_move(Point::new(50.0, 5.0));
    assert_eq!(
        app.tools().active().active_endpoint().map(|e| e.pos),
        Some(Point::new(50.0, 5.0))
    );
}

#[test]
fn keys_dispatch_bound_actions() {
    let (mut app, _screen) = create_test_app();

    app.on_key_press(Key::Space);
    assert_eq!(app.tools().active().kind(), ToolKind::Rectangle);
    assert!(app.info().lines().contains(&"Tool:\tRectangle"));

    app.on_key_press(Key::Char('l'));
    assert_eq!(app.tools().label_location(), LabelLocation::CenterTool);
    assert!(app.info().lines().contains(&"Label:\tCenter"));

    app.on_key_press(Key::Char('W'));
    assert!(app.tools().wide_lines());

    app.on_key_press(Key::Char('M'));
    assert_eq!(
        app.tools().active().mark_visible(MarkCategory::Middle),
        Some(true)
    );

    app.on_key_press(Key::Char('Q'));
    assert!(!app.should_exit());
    app.on_key_press(Key::Escape);
    assert!(app.should_exit());
}

#[test]
fn modifiers_change_binding_match() {
    let (mut app, _screen) = create_test_app();
    app.on_key_press(Key::Ctrl);
    app.on_key_press(Key::Char('H'));
    assert!(!app.help_lines().is_visible());

    app.on_key_release(Key::Ctrl);
    app.on_key_press(Key::Char('H'));
    assert!(app.help_lines().is_visible());
}

#[test]
fn help_lines_hide_zoom_crosshair() {
    let (mut app, _screen) = create_test_app();
    assert!(app.zoom().crosshair_visible());
    app.handle_action(Action::ToggleHelpLines);
    assert!(!app.zoom().crosshair_visible());
    app.handle_action(Action::ToggleHelpLines);
    assert!(app.zoom().crosshair_visible());
}

#[test]
fn window_toggles_request_repaint() {
    let (mut app, screen) = create_test_app();
    app.handle_action(Action::ToggleZoomWindow);
    assert!(!app.zoom().frame().is_visible());
    app.handle_action(Action::ToggleInfoWindow);
    assert!(!app.info().frame().is_visible());

    let invalidated = screen.state.borrow().invalidated.clone();
    assert_eq!(
        invalidated,
        vec![app.zoom().frame().anchor(), app.info().frame().anchor()]
    );
}

#[test]
fn tick_captures_around_cursor() {
    let (mut app, screen) = create_test_app();
    screen.state.borrow_mut().cursor = Point::new(500.0, 250.0);
    app.tick();

    // Window side is 500 / 5 = 100, so the capture is 20 px wide.
    assert_eq!(
        screen.state.borrow().captures,
        vec![PixelRect::new(490, 240, 20, 20).unwrap()]
    );
    assert_eq!(app.zoom().image().width(), 20);
}

#[test]
fn tick_follows_snapped_corner_during_locked_resize() {
    let (mut app, screen) = create_test_app();
    app.on_mouse_click(Point::ZERO);
    app.on_key_press(Key::Shift);
    app.on_mouse_move(Point::new(300.0, 7.0));
    screen.state.borrow_mut().cursor = Point::new(300.0, 7.0);

    app.tick();
    assert_eq!(
        screen.state.borrow().captures.last().copied(),
        PixelRect::new(290, -10, 20, 20)
    );
}

#[test]
fn tick_skips_hidden_zoom_and_survives_capture_failure() {
    let (mut app, screen) = create_test_app();
    app.tick();
    assert!(!app.zoom().image().is_empty());

    screen.state.borrow_mut().fail_capture = true;
    app.tick();
    assert!(app.zoom().image().is_empty());

    app.handle_action(Action::ToggleZoomWindow);
    let captures = screen.state.borrow().captures.len();
    app.tick();
    assert_eq!(screen.state.borrow().captures.len(), captures);
}

#[test]
fn state_round_trips_through_app() {
    let saved = AppState {
        active_tool: ToolKind::Oval,
        label_location: LabelLocation::AboveMouse,
        help_lines_visible: true,
        zoom_window_visible: false,
        info_window_visible: true,
        marks_visible: [MarkCategory::Third].into_iter().collect(),
        wide_lines: true,
        locked: false,
    };
    let (app, _screen) = create_test_app_with_state(&saved);

    assert_eq!(app.tools().active().kind(), ToolKind::Oval);
    assert!(!app.zoom().crosshair_visible());
    assert_eq!(app.app_state(), saved);
}

#[test]
fn draw_renders_tool_and_windows() {
    let (mut app, _screen) = create_test_app();
    draw_tool(&mut app, Point::new(10.0, 10.0), Point::new(110.0, 10.0));
    app.tick();

    let mut canvas = RecordingCanvas::new();
    app.draw(&mut canvas);

    assert!(canvas.texts().contains(&"Length:"));
    assert_eq!(canvas.count(|op| matches!(op, DrawOp::Image { .. })), 1);
    assert!(
        canvas
            .lines()
            .iter()
            .any(|(from, to, _)| *from == Point::new(10.0, 10.0) && *to == Point::new(110.0, 10.0))
    );
    assert!(app.take_needs_redraw());
    assert!(!app.take_needs_redraw());
}
