use anyhow::Result;

use crate::bgrid::Status;
use crate::gol::Point;

pub mod term;

/// Sink for one generation's worth of draw instructions.
pub trait Renderer {
    /// Clears the screen, writes the status line and every cell, then
    /// flushes, in that order.
    fn draw(&mut self, status: &Status, cells: &[(Point, char)]) -> Result<()>;
}
