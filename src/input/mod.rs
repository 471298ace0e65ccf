//! Input events and the sources that produce them.
//!
//! Backends (or scripts) translate their native pointer/window events into
//! [`InputEvent`] values; the main loop polls an [`InputSource`] once per tick.

pub mod events;
pub mod source;

// Re-export commonly used types at module level
pub use events::{InputEvent, MouseButton};
pub use source::{InputSource, ScriptError, ScriptedInput};
