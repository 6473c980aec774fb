use phiddle::app::App;
use phiddle::backend::HeadlessScreen;
use phiddle::config::{Action, KeybindingsConfig, Style};
use phiddle::draw::{Image, WHITE, image_from_surface, text_size};
use phiddle::state::AppState;
use phiddle::util::Point;
use tempfile::TempDir;

const WHITE_PIXEL: u32 = 0xFFFF_FFFF;

fn create_test_app() -> (App, HeadlessScreen) {
    let screen = HeadlessScreen::with_background(Image::filled(200, 100, WHITE));
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let app = App::new(
        Box::new(screen.clone()),
        Style::default(),
        action_map,
        &AppState::default(),
    );
    (app, screen)
}

fn render(app: &App, screen: &HeadlessScreen) -> Image {
    let mut surface = screen.render(app).unwrap();
    image_from_surface(&mut surface).unwrap()
}

fn green(pixel: u32) -> u32 {
    (pixel >> 8) & 0xFF
}

#[test]
fn background_shows_through_empty_overlay() {
    let (mut app, screen) = create_test_app();
    app.handle_action(Action::ToggleZoomWindow);
    app.handle_action(Action::ToggleInfoWindow);

    let frame = render(&app, &screen);
    assert_eq!(frame.width(), 200);
    assert_eq!(frame.height(), 100);
    assert_eq!(frame.pixel(100, 50), Some(WHITE_PIXEL));
    assert_eq!(frame.pixel(186, 86), Some(WHITE_PIXEL));
}

#[test]
fn placed_line_is_painted_in_tool_color() {
    let (mut app, screen) = create_test_app();
    app.on_mouse_click(Point::new(20.0, 30.0));
    app.on_mouse_move(Point::new(150.0, 30.0));
    app.on_mouse_click(Point::new(150.0, 30.0));

    let frame = render(&app, &screen);
    let on_line = frame.pixel(80, 30).unwrap();
    assert_ne!(on_line, WHITE_PIXEL);
    assert!(green(on_line) < 0xFF);
    assert_eq!(frame.pixel(5, 95), Some(WHITE_PIXEL));
}

#[test]
fn windows_cover_bottom_right_corner() {
    let (mut app, screen) = create_test_app();
    app.tick();

    // 100 px high screen: 20 px windows, 4 px from the edges.
    let frame = render(&app, &screen);
    assert_ne!(frame.pixel(186, 62), Some(WHITE_PIXEL));
    assert_ne!(frame.pixel(186, 86), Some(WHITE_PIXEL));

    app.handle_action(Action::ToggleInfoWindow);
    let frame = render(&app, &screen);
    assert_eq!(frame.pixel(186, 62), Some(WHITE_PIXEL));
}

#[test]
fn help_lines_cross_the_whole_screen() {
    let (mut app, screen) = create_test_app();
    app.handle_action(Action::ToggleZoomWindow);
    app.handle_action(Action::ToggleInfoWindow);
    app.handle_action(Action::ToggleHelpLines);
    app.on_mouse_move(Point::new(60.0, 40.0));

    let frame = render(&app, &screen);
    assert_ne!(frame.pixel(0, 40), Some(WHITE_PIXEL));
    assert_ne!(frame.pixel(199, 40), Some(WHITE_PIXEL));
    assert_ne!(frame.pixel(60, 0), Some(WHITE_PIXEL));
    assert_ne!(frame.pixel(60, 99), Some(WHITE_PIXEL));
    assert_eq!(frame.pixel(10, 10), Some(WHITE_PIXEL));
}

#[test]
fn write_png_produces_screen_sized_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frame.png");
    let (app, screen) = create_test_app();

    screen.write_png(&app, &path).unwrap();

    let mut file = std::fs::File::open(&path).unwrap();
    let png = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!((png.width(), png.height()), (200, 100));
}

#[test]
fn label_box_matches_text_drawn_on_cairo_surface() {
    let style = Style::default().tool.label;
    let text = "W x H = 1234 x 567, C = 3602, A = 699678";

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 8, 8).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    let layout = pangocairo::functions::create_layout(&ctx);
    let font = pango::FontDescription::from_string(&style.text.font.to_pango_string(style.text.size));
    layout.set_font_description(Some(&font));
    layout.set_text(text);
    let (drawn_width, drawn_height) = layout.pixel_size();

    let measured = text_size(text, &style.text);
    assert!((measured.width - drawn_width as f64).abs() <= 1.0);
    assert!((measured.height - drawn_height as f64).abs() <= 1.0);

    let label = style.measure(text);
    assert!(label.width >= drawn_width as f64 + 2.0 * style.padding - 1.0);
    assert!(label.height >= drawn_height as f64 + 2.0 * style.padding - 1.0);
}
