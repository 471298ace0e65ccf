//! Cairo-based rendering of board frames.

use super::color::{BLACK, BoardColors, Color, WHITE};
use super::frame::RenderDescriptor;
use crate::board::{Piece, Side};
use log::debug;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised while painting or storing a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to create {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Paints a [`RenderDescriptor`]; called once per loop iteration.
pub trait Renderer {
    fn render(&mut self, frame: &RenderDescriptor) -> Result<(), RenderError>;
}

/// Fills the 8x8 checkerboard.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `colors` - Light/dark square colors
/// * `square_size` - Edge length of one square in pixels
pub fn render_board(ctx: &cairo::Context, colors: &BoardColors, square_size: i32) {
    let size = f64::from(square_size);
    for row in 0..8 {
        for col in 0..8 {
            let color = colors.for_cell(row, col);
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.rectangle(f64::from(col) * size, f64::from(row) * size, size, size);
            let _ = ctx.fill();
        }
    }
}

/// Draws a piece glyph filling the square whose top-left pixel is `(x, y)`.
///
/// White pieces are filled white with a dark outline, black pieces the other
/// way round, so both stay readable on either square color.
pub fn render_piece(
    ctx: &cairo::Context,
    piece: Piece,
    x: i32,
    y: i32,
    square_size: i32,
    font_family: &str,
) {
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family(font_family);
    font_desc.set_absolute_size(f64::from(square_size) * 0.8 * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&piece.kind.glyph().to_string());

    // Centre the logical box of the glyph inside the square
    let (width, height) = layout.pixel_size();
    let left = f64::from(x) + f64::from(square_size - width) / 2.0;
    let top = f64::from(y) + f64::from(square_size - height) / 2.0;

    let (fill, outline): (Color, Color) = match piece.side {
        Side::White => (WHITE, BLACK),
        Side::Black => (BLACK, WHITE),
    };

    ctx.move_to(left, top);
    pangocairo::functions::layout_path(ctx, &layout);
    ctx.set_source_rgba(outline.r, outline.g, outline.b, outline.a);
    ctx.set_line_width(f64::from(square_size) * 0.04);
    ctx.set_line_join(cairo::LineJoin::Round);
    let _ = ctx.stroke_preserve();
    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    let _ = ctx.fill();

    ctx.restore().ok();
}

/// Renders a whole frame: board, resting pieces, then the dragged piece on top.
pub fn render_frame(ctx: &cairo::Context, frame: &RenderDescriptor, font_family: &str) {
    render_board(ctx, &frame.colors, frame.square_size);
    for placed in &frame.pieces {
        render_piece(
            ctx,
            placed.piece,
            placed.x,
            placed.y,
            frame.square_size,
            font_family,
        );
    }
    if let Some(dragged) = frame.dragged {
        render_piece(
            ctx,
            dragged.piece,
            dragged.x,
            dragged.y,
            frame.square_size,
            font_family,
        );
    }
}

/// Off-screen renderer painting into an ARGB image surface.
///
/// The surface is resized whenever the board size changes; the last painted
/// frame can be stored with [`CairoRenderer::write_png`].
pub struct CairoRenderer {
    surface: cairo::ImageSurface,
    font_family: String,
    frames: u64,
}

impl CairoRenderer {
    /// Creates a renderer for a board of `board_pixels` x `board_pixels`.
    pub fn new(board_pixels: i32, font_family: impl Into<String>) -> Result<Self, RenderError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, board_pixels, board_pixels)?;
        Ok(Self {
            surface,
            font_family: font_family.into(),
            frames: 0,
        })
    }

    /// Target surface holding the most recent frame.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Writes the most recent frame as a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        let mut file = File::create(path).map_err(|source| RenderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.surface.write_to_png(&mut file)?;
        debug!("Wrote frame {} to {}", self.frames, path.display());
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderDescriptor) -> Result<(), RenderError> {
        let board_pixels = frame.board_pixels();
        if self.surface.width() != board_pixels || self.surface.height() != board_pixels {
            self.surface =
                cairo::ImageSurface::create(cairo::Format::ARgb32, board_pixels, board_pixels)?;
        }

        let ctx = cairo::Context::new(&self.surface)?;
        render_frame(&ctx, frame, &self.font_family);
        drop(ctx);
        self.surface.flush();
        self.frames += 1;
        Ok(())
    }
}
