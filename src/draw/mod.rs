//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing side of the board:
//! - [`Color`] / [`BoardColors`]: RGBA colors and the checkerboard palette
//! - [`RenderDescriptor`]: the per-frame snapshot of what must be drawn
//! - [`Renderer`]: the paint step, with [`CairoRenderer`] painting off-screen

pub mod color;
pub mod frame;
pub mod render;

// Re-export commonly used types at module level
pub use color::{BoardColors, Color};
pub use frame::{DraggedPiece, PlacedPiece, RenderDescriptor};
pub use render::{CairoRenderer, RenderError, Renderer, render_frame};
