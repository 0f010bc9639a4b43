//! Board snapshot: the three-valued cell grid every analysis pass reads.
//!
//! Boards are plain values. Analysis functions take `&Board` and hand back
//! new boards or annotation grids; nothing in the engine keeps a reference to
//! a caller's board between calls.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE};
use crate::error::{BoardError, MoveError, Result};
use crate::grid::{Grid, Point};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Content of a single point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Stone color, or `None` for an empty point.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => CHAR_EMPTY,
            Cell::Black => CHAR_BLACK,
            Cell::White => CHAR_WHITE,
        }
    }

    pub fn from_char(ch: char) -> Option<Cell> {
        match ch.to_ascii_uppercase() {
            CHAR_EMPTY | '+' => Some(Cell::Empty),
            CHAR_BLACK | '#' => Some(Cell::Black),
            CHAR_WHITE => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Cell {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Result of a successful [`Board::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opponent stones removed by the move.
    pub captured: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid<Cell>,
}

impl Board {
    /// An empty board. Fails only for size 0; larger bounds are up to the caller.
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            grid: Grid::new(size, Cell::Empty),
        })
    }

    /// Build a board from rows of cells, validating that the input is square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
        }
        Ok(Self {
            grid: Grid::from_cells(size, rows.into_iter().flatten().collect()),
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Checked lookup for caller-supplied coordinates.
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.grid.get(p).copied()
    }

    pub fn set(&mut self, p: Point, cell: Cell) -> Result<()> {
        self.grid.set(p, cell)
    }

    /// Clear a point the engine already knows is on the board.
    pub(crate) fn clear(&mut self, p: Point) {
        self.grid[p] = Cell::Empty;
    }

    pub fn is_empty_board(&self) -> bool {
        self.grid.iter().all(|c| c.is_empty())
    }

    pub fn stone_count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.grid.iter().filter(|&&c| c == cell).count()
    }

    pub fn total_stones(&self) -> usize {
        self.grid.iter().filter(|c| !c.is_empty()).count()
    }

    /// Points holding a stone of `color`, row-major.
    pub fn stones(&self, color: Color) -> Vec<Point> {
        let cell = Cell::from(color);
        self.grid
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(p, _)| p)
            .collect()
    }

    /// Place a stone, capturing opponent groups left without liberties.
    ///
    /// A move that captures nothing and leaves its own group without
    /// liberties is rejected as suicide and the board is left unchanged.
    pub fn play(&mut self, p: Point, color: Color) -> std::result::Result<MoveOutcome, MoveError> {
        match self.get(p) {
            None => return Err(MoveError::OutOfBounds),
            Some(Cell::Empty) => {}
            Some(_) => return Err(MoveError::Occupied),
        }
        self.grid[p] = Cell::from(color);

        let opp = color.opponent();
        let mut captured: Vec<Point> = Vec::new();
        for n in self.grid.neighbors(p) {
            if self.grid[n].color() == Some(opp)
                && !captured.contains(&n)
                && !self.has_liberty(n)
            {
                self.collect_chain(n, &mut captured);
            }
        }
        for &r in &captured {
            self.clear(r);
        }

        if captured.is_empty() && !self.has_liberty(p) {
            self.clear(p);
            return Err(MoveError::Suicide);
        }
        Ok(MoveOutcome { captured })
    }

    /// A position built from alternating random legal moves until about
    /// `density` of the points hold stones (captures can keep it lower).
    pub fn random(size: usize, density: f64, rng: &mut fastrand::Rng) -> Result<Self> {
        let mut board = Board::new(size)?;
        let target = ((size * size) as f64 * density.clamp(0.0, 1.0)) as usize;
        let mut color = Color::Black;
        for _ in 0..size * size * 4 {
            if board.total_stones() >= target {
                break;
            }
            let p = (rng.usize(..size), rng.usize(..size));
            if board.play(p, color).is_ok() {
                color = color.opponent();
            }
        }
        Ok(board)
    }

    /// Append every stone connected to `start` to `out`.
    fn collect_chain(&self, start: Point, out: &mut Vec<Point>) {
        let color = self.grid[start];
        let mut visited = vec![false; self.size() * self.size()];
        let mut stack = vec![start];
        visited[self.grid.index_of(start)] = true;
        while let Some(pt) = stack.pop() {
            out.push(pt);
            for n in self.grid.neighbors(pt) {
                let ni = self.grid.index_of(n);
                if !visited[ni] && self.grid[n] == color {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
    }

    /// Whether the chain through `start` touches at least one empty point.
    fn has_liberty(&self, start: Point) -> bool {
        let color = self.grid[start];
        let mut visited = vec![false; self.size() * self.size()];
        let mut stack = vec![start];
        visited[self.grid.index_of(start)] = true;
        while let Some(pt) = stack.pop() {
            for n in self.grid.neighbors(pt) {
                let c = self.grid[n];
                if c.is_empty() {
                    return true;
                }
                let ni = self.grid.index_of(n);
                if c == color && !visited[ni] {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
        false
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(BoardError::UnsupportedSize(size));
    }
    Ok(())
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a text diagram: `X` black, `O` white, `.` empty.
    ///
    /// Whitespace between cells and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = rows.len();
            let cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, ch)| Cell::from_char(ch).ok_or(BoardError::InvalidCell { ch, row, col }))
                .collect::<Result<Vec<Cell>>>()?;
            rows.push(cells);
        }
        if rows.is_empty() {
            return Err(BoardError::InvalidBoard("no rows".into()));
        }
        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
