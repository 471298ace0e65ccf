use crate::board::{GestureError, Move};
use crate::input::{InputEvent, MouseButton};
use log::{debug, warn};

use super::{DragState, GameSession, GestureOutcome};

impl GameSession {
    /// Dispatches one input event.
    ///
    /// Returns the gesture outcome for pointer releases, `None` for every other
    /// event. `Quit` is left to the main loop.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<GestureOutcome> {
        match event {
            InputEvent::PointerDown { button, x, y } => {
                self.on_pointer_down(button, x, y);
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.on_pointer_move(x, y);
                None
            }
            InputEvent::PointerUp { button, x, y } => Some(self.on_pointer_up(button, x, y)),
            InputEvent::FocusLost => {
                self.cancel();
                None
            }
            InputEvent::Quit => None,
        }
    }

    /// Processes a pointer button press.
    ///
    /// # Behavior
    /// - Left press while Idle: picks up whatever is on the square, including
    ///   nothing; legality is only checked on release
    /// - Left press while Dragging: ignored (one gesture at a time)
    /// - Right press: cancels the current drag
    /// - Press outside the board: stays Idle
    pub fn on_pointer_down(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                if self.drag.is_active() {
                    debug!("Ignoring press at ({x}, {y}): drag already in progress");
                    return;
                }
                match self.geometry.pixel_to_square(x, y) {
                    Ok(origin) => {
                        debug!("Picked up {origin} at ({x}, {y})");
                        self.drag = DragState::Dragging {
                            origin,
                            pointer: (x, y),
                        };
                    }
                    Err(err) => debug!("Press ignored: {err}"),
                }
            }
            MouseButton::Right => self.cancel(),
            MouseButton::Middle => {}
        }
    }

    /// Tracks the pointer while dragging; no logic depends on it.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        if let DragState::Dragging { pointer, .. } = &mut self.drag {
            *pointer = (x, y);
        }
    }

    /// Processes a pointer button release.
    ///
    /// # Behavior
    /// Every release leaves the machine Idle. A left release during a drag
    /// resolves the gesture:
    /// - off the board: rejected, board unchanged
    /// - on the origin square: dropped, no move attempted
    /// - elsewhere: the move is submitted to the board model and either
    ///   applied or rejected
    pub fn on_pointer_up(&mut self, button: MouseButton, x: i32, y: i32) -> GestureOutcome {
        let DragState::Dragging { origin, .. } = std::mem::take(&mut self.drag) else {
            return GestureOutcome::Ignored;
        };

        if button != MouseButton::Left {
            debug!("Drag from {origin} cancelled by {button:?} release");
            return GestureOutcome::Cancelled;
        }

        let target = match self.geometry.pixel_to_square(x, y) {
            Ok(target) => target,
            Err(err) => return self.reject(err),
        };

        if target == origin {
            debug!("Dropped back on {origin}");
            return GestureOutcome::Dropped;
        }

        let mut mv = Move::new(origin, target);
        if let Some(kind) = self.auto_promotion {
            if self.board.is_promotion(origin, target) {
                mv = mv.with_promotion(kind);
            }
        }

        match self.board.apply(mv) {
            Ok(status) => GestureOutcome::Applied { mv, status },
            Err(err) => self.reject(err),
        }
    }

    /// Abandons the drag in progress without attempting a move.
    pub fn cancel(&mut self) {
        if let Some(origin) = self.drag.origin() {
            debug!("Drag from {origin} cancelled");
        }
        self.drag = DragState::Idle;
    }

    fn reject(&mut self, err: GestureError) -> GestureOutcome {
        if self.report_illegal_moves {
            warn!("{err}");
        }
        if let Some(hook) = self.diagnostic_hook.as_mut() {
            hook(&err);
        }
        GestureOutcome::Rejected(err)
    }
}
