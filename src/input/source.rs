//! Input sources feeding the main loop.

use super::events::{InputEvent, MouseButton};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Delivers the events that arrived since the previous tick.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Errors raised while loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    InvalidArgument { line: usize, message: String },
}

/// Replays a line-based gesture script.
///
/// # Format
/// ```text
/// # pick up the e2 pawn and drop it on e4 (64px squares)
/// down 288 416
/// move 288 300
/// frame
/// up 288 288
/// ```
///
/// Commands: `down X Y [left|right|middle]`, `move X Y`, `up X Y [button]`,
/// `cancel` (focus loss), `frame` (ends the current tick's batch) and `quit`.
/// Once the script runs out every poll returns [`InputEvent::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    /// Parses a script from text.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut batches = VecDeque::new();
        let mut current = Vec::new();

        for (idx, raw) in script.lines().enumerate() {
            let line = idx + 1;
            let text = raw.split('#').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }

            let mut parts = text.split_whitespace();
            let command = parts.next().unwrap_or_default().to_lowercase();
            let args: Vec<&str> = parts.collect();

            match command.as_str() {
                "down" => {
                    let (x, y) = parse_point(&args, line)?;
                    let button = parse_button(args.get(2).copied(), line)?;
                    current.push(InputEvent::PointerDown { button, x, y });
                }
                "move" => {
                    let (x, y) = parse_point(&args, line)?;
                    current.push(InputEvent::PointerMove { x, y });
                }
                "up" => {
                    let (x, y) = parse_point(&args, line)?;
                    let button = parse_button(args.get(2).copied(), line)?;
                    current.push(InputEvent::PointerUp { button, x, y });
                }
                "cancel" => current.push(InputEvent::FocusLost),
                "quit" => current.push(InputEvent::Quit),
                "frame" => batches.push_back(std::mem::take(&mut current)),
                _ => {
                    return Err(ScriptError::UnknownCommand {
                        line,
                        command: command.clone(),
                    });
                }
            }
        }

        if !current.is_empty() {
            batches.push_back(current);
        }

        Ok(Self { batches })
    }

    /// Reads and parses a script file.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let script = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&script)
    }

    /// Number of batches not yet delivered.
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

fn parse_point(args: &[&str], line: usize) -> Result<(i32, i32), ScriptError> {
    match args {
        [x, y, ..] => Ok((parse_coord(x, line)?, parse_coord(y, line)?)),
        _ => Err(ScriptError::InvalidArgument {
            line,
            message: "expected X and Y pixel coordinates".to_string(),
        }),
    }
}

fn parse_coord(value: &str, line: usize) -> Result<i32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidArgument {
        line,
        message: format!("'{value}' is not a pixel coordinate"),
    })
}

fn parse_button(value: Option<&str>, line: usize) -> Result<MouseButton, ScriptError> {
    match value.map(str::to_lowercase).as_deref() {
        None | Some("left") => Ok(MouseButton::Left),
        Some("right") => Ok(MouseButton::Right),
        Some("middle") => Ok(MouseButton::Middle),
        Some(other) => Err(ScriptError::InvalidArgument {
            line,
            message: format!("unknown button '{other}'"),
        }),
    }
}
