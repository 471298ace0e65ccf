//! Drag state machine and game session state.

use crate::board::{BoardGeometry, BoardModel, GameStatus, GestureError, Move, PieceKind, Square};
use crate::draw::BoardColors;

/// Current drag state machine.
///
/// A gesture starts with a primary-button press (`Idle` -> `Dragging`) and
/// ends with the release, a cancel, or focus loss (back to `Idle`). The origin
/// square exists exactly while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not dragging - waiting for a press
    #[default]
    Idle,
    /// A piece (or an empty square) has been picked up
    Dragging {
        /// Square under the pointer when the button went down
        origin: Square,
        /// Latest pointer position, only used to draw the floating piece
        pointer: (i32, i32),
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn origin(&self) -> Option<Square> {
        match self {
            DragState::Dragging { origin, .. } => Some(*origin),
            DragState::Idle => None,
        }
    }

    pub fn pointer(&self) -> Option<(i32, i32)> {
        match self {
            DragState::Dragging { pointer, .. } => Some(*pointer),
            DragState::Idle => None,
        }
    }
}

/// How a pointer release was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The move was legal and the board advanced by one move
    Applied { mv: Move, status: GameStatus },
    /// Illegal move or drop outside the board; board unchanged
    Rejected(GestureError),
    /// Dropped back on the origin square; no move attempted
    Dropped,
    /// Released with a non-primary button; drag abandoned
    Cancelled,
    /// No drag was in progress
    Ignored,
}

/// Callback receiving every rejected gesture.
pub type DiagnosticHook = Box<dyn FnMut(&GestureError)>;

/// Settings a session is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Board layout in window pixels
    pub geometry: BoardGeometry,
    /// Checkerboard colors
    pub colors: BoardColors,
    /// Piece substituted when a pawn is dropped on its last rank (`None` = reject)
    pub auto_promotion: Option<PieceKind>,
    /// Log rejected gestures at warn level
    pub report_illegal_moves: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::default(),
            colors: BoardColors::default(),
            auto_promotion: Some(PieceKind::Queen),
            report_illegal_moves: true,
        }
    }
}

/// One game: the board, the drag in progress and the settings that shape both.
///
/// All pointer events go through this struct; it is the only caller of
/// [`BoardModel::apply`]. Nothing here is global, and every transition
/// completes synchronously inside the event that triggered it.
pub struct GameSession {
    /// Position and move history (written only through `apply`)
    pub(super) board: BoardModel,
    /// Current drag state machine
    pub(super) drag: DragState,
    /// Board layout in window pixels
    pub(super) geometry: BoardGeometry,
    /// Checkerboard colors handed to the renderer
    pub(super) colors: BoardColors,
    /// Piece used for pawns dropped on the last rank
    pub(super) auto_promotion: Option<PieceKind>,
    /// Whether rejected gestures are logged
    pub(super) report_illegal_moves: bool,
    /// Optional observer for rejected gestures
    pub(super) diagnostic_hook: Option<DiagnosticHook>,
}

impl GameSession {
    /// Creates a session on the standard starting position.
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_board(BoardModel::new(), settings)
    }

    /// Creates a session around an existing board model.
    pub fn with_board(board: BoardModel, settings: SessionSettings) -> Self {
        Self {
            board,
            drag: DragState::Idle,
            geometry: settings.geometry,
            colors: settings.colors,
            auto_promotion: settings.auto_promotion,
            report_illegal_moves: settings.report_illegal_moves,
            diagnostic_hook: None,
        }
    }

    /// Installs a callback that sees every rejected gesture.
    pub fn set_diagnostic_hook(&mut self, hook: impl FnMut(&GestureError) + 'static) {
        self.diagnostic_hook = Some(Box::new(hook));
    }

    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }
}
