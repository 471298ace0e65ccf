//! Library exports for the chessdrag interaction core.
//!
//! Exposes the board model, the drag session state machine and the rendering
//! and input seams so that other front-ends (or tests) can drive a game with
//! their own renderer and event source.

pub mod app;
pub mod board;
pub mod config;
pub mod draw;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::GameSession;
