use rand::Rng;
use rayon::prelude::*;
use std::{
    fmt::Display,
    ops::{Add, Index},
};

/// Chance of any one cell starting out alive in a random board.
pub const INITIAL_DENSITY: f64 = 0.5;

// x is the column offset, y the row offset.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// A fixed-size, non-wrapping Game of Life grid.
///
/// Everything outside `[0, width) x [0, height)` reads as dead. A board is
/// never mutated by [`Board::step`], which always produces a fresh board of
/// the same dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    buf: Vec<bool>,
    width: u32,
    height: u32,
}

#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}
impl<I1, I2> From<(I1, I2)> for Point
where
    I1: Into<i64>,
    I2: Into<i64>,
{
    fn from((l, r): (I1, I2)) -> Self {
        Self {
            x: l.into(),
            y: r.into(),
        }
    }
}

impl Board {
    /// Every cell is independently alive with [`INITIAL_DENSITY`].
    pub fn random<R: Rng>(width: u32, height: u32, rng: &mut R) -> Self {
        let buf = (0..width as usize * height as usize)
            .map(|_| rng.gen_bool(INITIAL_DENSITY))
            .collect();
        Board { buf, width, height }
    }

    fn pt_to_index(&self, pt: &Point) -> Option<usize> {
        if !self.contains(pt) {
            return None;
        }
        Some(((pt.y * self.width as i64) + pt.x) as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, pt: &Point) -> bool {
        pt.x >= 0 && pt.y >= 0 && pt.x < self.width as i64 && pt.y < self.height as i64
    }

    pub fn cell_at(&self, pt: &Point) -> bool {
        self[pt.clone()]
    }

    pub fn neighbors(&self, pt: &Point) -> [bool; 8] {
        NEIGHBOR_OFFSETS.map(|d| self.cell_at(&(pt.clone() + Point::from(d))))
    }

    /// Live cells among the 8 surrounding positions. The cell itself is not
    /// counted.
    pub fn live_neighbors(&self, pt: &Point) -> u8 {
        self.neighbors(pt).iter().filter(|a| **a).count() as u8
    }

    fn next_state(&self, pt: &Point) -> bool {
        matches!(
            (self.cell_at(pt), self.live_neighbors(pt)),
            (true, 2) | (true, 3) | (false, 3)
        )
    }

    /// Computes the next generation. Rows are split across the current rayon
    /// pool.
    pub fn step(&self) -> Board {
        let mut buf = vec![false; self.buf.len()];
        if self.width > 0 {
            buf.par_chunks_mut(self.width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, v) in row.iter_mut().enumerate() {
                        *v = self.next_state(&Point::from((x as u32, y as u32)));
                    }
                });
        }
        Board {
            buf,
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major iterator over every cell.
    pub fn pixels(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        let w = self.width as usize;
        self.buf.iter().enumerate().map(move |(i, b)| {
            (
                Point {
                    x: (i % w) as i64,
                    y: (i / w) as i64,
                },
                *b,
            )
        })
    }

    pub fn alive(&self) -> usize {
        self.buf.iter().filter(|v| **v).count()
    }
}

impl Index<Point> for Board {
    type Output = bool;
    fn index(&self, index: Point) -> &Self::Output {
        match self.pt_to_index(&index) {
            Some(i) => &self.buf[i],
            None => &false,
        }
    }
}
