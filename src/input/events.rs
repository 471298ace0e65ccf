//! Generic input event types delivered by an input source.

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (picks up and drops pieces)
    Left,
    /// Right mouse button (cancels a drag in progress)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// One discrete event from the input source, in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { button: MouseButton, x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp { button: MouseButton, x: i32, y: i32 },
    /// Window lost focus; any drag in progress is abandoned
    FocusLost,
    /// Close request; ends the main loop
    Quit,
}
