//! Game session: the drag interaction state machine.
//!
//! Converts pointer events into board squares, assembles candidate moves on
//! release, submits them to the board model and derives the per-frame render
//! descriptor from the board and the drag in progress.

mod pointer;
mod render;
mod state;

pub use state::{DiagnosticHook, DragState, GameSession, GestureOutcome, SessionSettings};
