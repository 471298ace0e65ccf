//! Main loop: poll input, update the session, render, wait for the next tick.

use crate::board::{GameStatus, Move};
use crate::draw::Renderer;
use crate::input::{InputEvent, InputSource};
use crate::session::{GameSession, GestureOutcome};
use anyhow::{Context, Result};
use log::{debug, info};
use std::thread;
use std::time::{Duration, Instant};

/// Sleeps away the rest of each tick so the loop runs at a fixed rate.
///
/// A rate of 0 disables pacing.
#[derive(Debug)]
pub struct FramePacer {
    interval: Option<Duration>,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(tick_rate: u32) -> Self {
        let interval = (tick_rate > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(tick_rate)));
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Blocks until one interval has passed since the previous call.
    pub fn wait(&mut self) {
        if let Some(interval) = self.interval {
            let elapsed = self.last_tick.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
        self.last_tick = Instant::now();
    }
}

/// What happened during a run of the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Loop iterations (one rendered frame each)
    pub frames: u64,
    /// Moves accepted during the run, in order
    pub moves: Vec<Move>,
    /// Gestures that ended as illegal or off-board drops
    pub rejected: usize,
    /// Status at the end of the run
    pub status: GameStatus,
}

/// Owns the session and its collaborators for the lifetime of the loop.
pub struct App<R: Renderer, S: InputSource> {
    session: GameSession,
    renderer: R,
    source: S,
    pacer: FramePacer,
}

impl<R: Renderer, S: InputSource> App<R, S> {
    pub fn new(session: GameSession, renderer: R, source: S, pacer: FramePacer) -> Self {
        Self {
            session,
            renderer,
            source,
            pacer,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs until a `Quit` event arrives.
    ///
    /// Rejected gestures never stop the loop; renderer failures do.
    pub fn run(&mut self) -> Result<RunSummary> {
        info!(
            "Starting main loop ({} px squares)",
            self.session.geometry().square_size
        );

        let mut frames = 0;
        let mut moves = Vec::new();
        let mut rejected = 0;
        let mut running = true;

        while running {
            for event in self.source.poll() {
                if event == InputEvent::Quit {
                    debug!("Quit requested");
                    running = false;
                    continue;
                }
                match self.session.handle_event(event) {
                    Some(GestureOutcome::Applied { mv, .. }) => moves.push(mv),
                    Some(GestureOutcome::Rejected(_)) => rejected += 1,
                    _ => {}
                }
            }

            let frame = self.session.render_descriptor();
            self.renderer
                .render(&frame)
                .with_context(|| format!("Failed to render frame {frames}"))?;
            frames += 1;

            if running {
                self.pacer.wait();
            }
        }

        let status = self.session.status();
        info!(
            "Main loop stopped after {frames} frames, {} moves ({})",
            moves.len(),
            status.as_str()
        );

        Ok(RunSummary {
            frames,
            moves,
            rejected,
            status,
        })
    }
}
