use std::fmt::Display;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use rand::Rng;

use crate::bgrid::Frame;
use crate::gol::Board;
use crate::input::Event;
use crate::render::Renderer;

/// Pause between generations.
pub const FRAME_DELAY: Duration = Duration::from_millis(50);

/// The current generation and how many steps it took to get there.
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    steps: u64,
}

/// End-of-run report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub steps: u64,
    pub live_cells: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "game ended after {} steps", self.steps)?;
        write!(f, "live cells: {}", self.live_cells)
    }
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self { board, steps: 0 }
    }

    pub fn random<R: Rng>(width: u32, height: u32, rng: &mut R) -> Self {
        Self::new(Board::random(width, height, rng))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn advance(&mut self) {
        self.board = self.board.step();
        self.steps += 1;
    }

    pub fn summary(&self) -> Summary {
        Summary {
            steps: self.steps,
            live_cells: self.board.alive(),
        }
    }
}

/// Runs a simulation against a renderer until told to stop.
pub struct Driver<R> {
    sim: Simulation,
    renderer: R,
}

impl<R: Renderer> Driver<R> {
    pub fn new(sim: Simulation, renderer: R) -> Self {
        Self { sim, renderer }
    }

    fn render(&mut self) -> Result<()> {
        let frame = Frame::new(self.sim.board());
        let status = frame.status(frame.width());
        let cells = frame.render();
        self.renderer
            .draw(&status, &cells)
            .with_context(|| format!("failed to draw step {}", self.sim.steps()))
    }

    /// Advances one generation and draws it.
    pub fn tick(&mut self) -> Result<()> {
        self.sim.advance();
        tracing::trace!(
            steps = self.sim.steps(),
            alive = self.sim.board().alive(),
            "advanced"
        );
        self.render()
    }

    /// Draws the starting grid, then ticks every [`FRAME_DELAY`] until an
    /// [`Event::Interrupt`] arrives. Events are only looked at between ticks,
    /// so a stop never lands in the middle of a frame.
    pub fn run(mut self, events: &Receiver<Event>) -> Result<Summary> {
        tracing::info!(
            width = self.sim.board().width(),
            height = self.sim.board().height(),
            "simulation started"
        );
        self.render()?;
        loop {
            match events.recv_timeout(FRAME_DELAY) {
                Err(RecvTimeoutError::Timeout) => self.tick()?,
                Ok(Event::Interrupt) => break,
                Ok(Event::InputFailed(e)) => {
                    return Err(e.context("failed to read terminal input"))
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(anyhow!("input listener stopped unexpectedly"))
                }
            }
        }
        Ok(self.finish())
    }

    /// Consumes the driver, so a run yields exactly one summary.
    pub fn finish(self) -> Summary {
        let summary = self.sim.summary();
        tracing::info!(
            steps = summary.steps,
            live_cells = summary.live_cells,
            "simulation stopped"
        );
        summary
    }
}
