use cairo::{Context, ImageSurface};
use chessdrag::config::Config;
use chessdrag::draw::{self, CairoRenderer, RenderDescriptor, Renderer};
use chessdrag::input::MouseButton;
use chessdrag::session::{GameSession, SessionSettings};

fn surface_with_context(size: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, size, size).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Painted frame copied out of the surface.
struct Pixels {
    data: Vec<u8>,
    stride: usize,
}

impl Pixels {
    /// RGBA bytes of one pixel (ARGB32 is stored as BGRA on little-endian hosts).
    fn at(&self, x: i32, y: i32) -> [u8; 4] {
        let i = y as usize * self.stride + x as usize * 4;
        let d = &self.data;
        [d[i + 2], d[i + 1], d[i], d[i + 3]]
    }

    /// True if every pixel of the 64px square at screen `(row, col)` is `expected`.
    fn square_is_plain(&self, row: i32, col: i32, expected: (u8, u8, u8)) -> bool {
        (0..64).all(|dy| {
            (0..64).all(|dx| close_to(self.at(col * 64 + dx, row * 64 + dy), expected))
        })
    }
}

fn render_to_pixels(frame: &RenderDescriptor) -> Pixels {
    let (mut surface, ctx) = surface_with_context(frame.board_pixels());
    draw::render_frame(&ctx, frame, "Sans");
    drop(ctx);
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap().to_vec();
    Pixels { data, stride }
}

fn close_to(actual: [u8; 4], expected: (u8, u8, u8)) -> bool {
    let (r, g, b) = expected;
    [r, g, b, 255]
        .iter()
        .zip(actual.iter())
        .all(|(e, a)| e.abs_diff(*a) <= 1)
}

const LIGHT: (u8, u8, u8) = (238, 238, 210);
const DARK: (u8, u8, u8) = (118, 150, 86);

#[test]
fn empty_squares_use_checkerboard_colors() {
    let session = GameSession::new(SessionSettings::default());
    let pixels = render_to_pixels(&session.render_descriptor());

    // Ranks 3..6 are empty at the start: rows 2..5 on screen
    for row in 2..6 {
        for col in 0..8 {
            let expected = if (row + col) % 2 == 0 { LIGHT } else { DARK };
            assert!(
                pixels.square_is_plain(row, col, expected),
                "square at row {row}, col {col} has the wrong color"
            );
        }
    }
}

#[test]
fn pieces_paint_over_their_squares() {
    let session = GameSession::new(SessionSettings::default());
    let pixels = render_to_pixels(&session.render_descriptor());

    // e2 (row 6, col 4) holds a pawn, e8 (row 0, col 4) the black king
    assert!(!pixels.square_is_plain(6, 4, LIGHT));
    assert!(!pixels.square_is_plain(0, 4, LIGHT));
}

#[test]
fn dragged_piece_follows_pointer() {
    let mut session = GameSession::new(SessionSettings::default());
    session.on_pointer_down(MouseButton::Left, 288, 416);
    session.on_pointer_move(288, 288);
    let pixels = render_to_pixels(&session.render_descriptor());

    // The origin square is drawn empty while the pawn hovers over e4
    assert!(pixels.square_is_plain(6, 4, LIGHT));
    assert!(!pixels.square_is_plain(4, 4, LIGHT));
}

#[test]
fn configured_colors_are_used() {
    let config = Config::from_toml_str(
        "[board]\nlight_color = [200, 10, 10]\ndark_color = \"blue\"\n",
    )
    .unwrap();
    let session = GameSession::new(config.session_settings());
    let pixels = render_to_pixels(&session.render_descriptor());

    assert!(pixels.square_is_plain(2, 0, (200, 10, 10)));
    assert!(pixels.square_is_plain(2, 1, (0, 0, 255)));
}

#[test]
fn cairo_renderer_counts_frames_and_writes_png() {
    let session = GameSession::new(SessionSettings::default());
    let mut renderer = CairoRenderer::new(512, "Sans").unwrap();
    renderer.render(&session.render_descriptor()).unwrap();
    renderer.render(&session.render_descriptor()).unwrap();
    assert_eq!(renderer.frames(), 2);
    assert_eq!(renderer.surface().width(), 512);

    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("board.png");
    renderer.write_png(&path).unwrap();
    assert!(std::fs::read(&path).unwrap().starts_with(b"\x89PNG"));
}

#[test]
fn cairo_renderer_resizes_with_the_board() {
    let config = Config::from_toml_str("[board]\nsquare_size = 32\n").unwrap();
    let session = GameSession::new(config.session_settings());
    let mut renderer = CairoRenderer::new(512, "Sans").unwrap();
    renderer.render(&session.render_descriptor()).unwrap();
    assert_eq!(renderer.surface().width(), 256);
    assert_eq!(renderer.surface().height(), 256);
}
