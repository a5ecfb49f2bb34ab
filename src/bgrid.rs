use std::ops::Deref;

use crate::gol::{Board, Point};

pub const ALIVE: char = '#';
pub const DEAD: char = ' ';

/// Screen rows above the first board row. Row 0 holds the status line.
pub const STATUS_ROWS: u32 = 1;

/// The status line and where it starts on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub at: Point,
    pub text: String,
}

/// Turns a board into screen draw instructions.
pub struct Frame<'a> {
    pts: &'a Board,
}

impl<'a> Frame<'a> {
    pub fn new(pts: &'a Board) -> Self {
        Self { pts }
    }

    /// One `(screen position, char)` pair per cell, row-major.
    pub fn render(&self) -> Vec<(Point, char)> {
        self.pts
            .pixels()
            .map(|(pt, alive)| {
                let ch = if alive { ALIVE } else { DEAD };
                (pt + Point::from((0, STATUS_ROWS)), ch)
            })
            .collect()
    }

    /// `live cells: N`, centered on a screen `cols` wide.
    pub fn status(&self, cols: u32) -> Status {
        let text = format!("live cells: {}", self.pts.alive());
        let x = (cols as i64 / 2 - text.chars().count() as i64 / 2).max(0);
        Status {
            at: Point { x, y: 0 },
            text,
        }
    }
}

impl Deref for Frame<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.pts
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::gol::tests::{board, dead};

    #[test]
    fn test_one_instruction_per_cell() {
        let b = board(&["#..", ".#.", "..#", "..."]);
        let f = Frame::new(&b);
        let cells = f.render();
        assert_eq!(cells.len(), (f.width() * f.height()) as usize);
        assert!(cells.iter().map(|(pt, _)| pt).all_unique());
    }

    #[test]
    fn test_cells_shifted_below_status() {
        let b = board(&["#.", ".#"]);
        let cells = Frame::new(&b).render();
        assert_eq!(
            cells,
            vec![
                (Point { x: 0, y: 1 }, '#'),
                (Point { x: 1, y: 1 }, ' '),
                (Point { x: 0, y: 2 }, ' '),
                (Point { x: 1, y: 2 }, '#'),
            ]
        );
    }

    #[test]
    fn test_status_centered() {
        let b = board(&["##..", "...."]);
        let status = Frame::new(&b).status(40);
        assert_eq!(status.text, "live cells: 2");
        assert_eq!(status.at, Point { x: 20 - 6, y: 0 });
    }

    #[test]
    fn test_status_on_narrow_screen() {
        let b = dead(0, 0);
        let status = Frame::new(&b).status(4);
        assert_eq!(status.text, "live cells: 0");
        assert_eq!(status.at.x, 0);
    }
}
