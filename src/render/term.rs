use std::io::{self, BufWriter, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::bgrid::{Status, STATUS_ROWS};
use crate::gol::Point;

use super::Renderer;

/// Draws frames with crossterm escape sequences.
pub struct TermRenderer<W: Write> {
    out: W,
}

impl TermRenderer<BufWriter<Stdout>> {
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

fn cursor_at(pt: &Point) -> Result<MoveTo> {
    let col = u16::try_from(pt.x).with_context(|| format!("column of {} off screen", pt))?;
    let row = u16::try_from(pt.y).with_context(|| format!("row of {} off screen", pt))?;
    Ok(MoveTo(col, row))
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn draw(&mut self, status: &Status, cells: &[(Point, char)]) -> Result<()> {
        let at = cursor_at(&status.at)?;
        queue!(self.out, Clear(ClearType::All), at, Print(&status.text))?;
        for (pt, ch) in cells {
            let at = cursor_at(pt)?;
            queue!(self.out, at, Print(ch))?;
        }
        self.out.flush().context("failed to flush frame")?;
        Ok(())
    }
}

/// Board dimensions that fit the terminal below the status line.
pub fn board_size() -> Result<(u32, u32)> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    Ok((cols as u32, (rows as u32).saturating_sub(STATUS_ROWS)))
}

/// Puts the terminal in raw mode on the alternate screen with the cursor
/// hidden.
pub fn enter() -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)
        .context("failed to enter alternate screen")?;
    Ok(())
}

/// Undoes [`enter`]. Failures are logged, not returned, so this is safe to
/// call from a drop guard.
pub fn restore() {
    if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
        tracing::error!(?err, "failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bgrid::Frame;
    use crate::gol::tests::board;

    fn drawn(rows: &[&str]) -> Result<String> {
        let b = board(rows);
        let frame = Frame::new(&b);
        let mut r = TermRenderer::new(Vec::<u8>::new());
        r.draw(&frame.status(b.width()), &frame.render())?;
        Ok(String::from_utf8(r.out)?)
    }

    #[test]
    fn test_draw_writes_status_and_cells() -> Result<()> {
        let out = drawn(&["#.", ".#"])?;
        assert!(out.contains("live cells: 2"));
        assert_eq!(out.matches('#').count(), 2);
        Ok(())
    }

    #[test]
    fn test_draw_clears_before_status() -> Result<()> {
        let out = drawn(&["#"])?;
        let mut clear = Vec::<u8>::new();
        queue!(clear, Clear(ClearType::All))?;
        let clear = String::from_utf8(clear)?;
        assert!(out.starts_with(&clear));
        assert_eq!(out.matches(&clear).count(), 1);
        Ok(())
    }

    #[test]
    fn test_draw_moves_to_each_cell() -> Result<()> {
        let out = drawn(&["..", ".."])?;
        for (col, row) in [(0, 1), (1, 1), (0, 2), (1, 2)] {
            let mut mv = Vec::<u8>::new();
            queue!(mv, MoveTo(col, row))?;
            assert!(out.contains(&String::from_utf8(mv)?));
        }
        Ok(())
    }

    #[test]
    fn test_negative_position_is_error() {
        assert!(cursor_at(&Point { x: -1, y: 0 }).is_err());
    }
}
