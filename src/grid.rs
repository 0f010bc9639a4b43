//! Square coordinate space and 4-adjacency model shared by every component.
//!
//! A [`Grid`] is an owned `size x size` array stored row-major. Points are
//! `(x, y)` pairs with `x` the column and `y` the row (row 0 at the top);
//! internally each point packs to the index `y * size + x`.
//!
//! Indexing with a point outside the grid panics: traversal code only ever
//! produces in-bounds neighbours, so an out-of-range index means the
//! adjacency model itself is broken. Caller-supplied coordinates go through
//! the checked [`Grid::get`] / [`Grid::contains`] instead.

use std::ops::{Index, IndexMut};

use crate::error::{BoardError, Result};

/// A point on the grid as `(x, y)`.
pub type Point = (usize, usize);

/// Orthogonal offsets: East, South, West, North.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells. `cells.len()` must be `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), size * size, "grid cell count does not match size");
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    /// Packed row-major index of `p`.
    #[inline]
    pub fn index_of(&self, (x, y): Point) -> usize {
        assert!(x < self.size && y < self.size, "point ({x}, {y}) outside grid");
        y * self.size + x
    }

    /// Inverse of [`Grid::index_of`].
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        (idx % self.size, idx / self.size)
    }

    /// Checked access for caller-supplied coordinates.
    pub fn get(&self, p: Point) -> Option<&T> {
        if self.contains(p) {
            Some(&self.cells[self.index_of(p)])
        } else {
            None
        }
    }

    /// Checked write for caller-supplied coordinates.
    pub fn set(&mut self, p: Point, value: T) -> Result<()> {
        if !self.contains(p) {
            return Err(BoardError::OutOfBounds {
                point: p,
                size: self.size,
            });
        }
        let i = self.index_of(p);
        self.cells[i] = value;
        Ok(())
    }

    /// In-bounds orthogonal neighbours of `p`.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + use<T> {
        let s = self.size as isize;
        DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx >= 0 && nx < s && ny >= 0 && ny < s {
                Some((nx as usize, ny as usize))
            } else {
                None
            }
        })
    }

    /// Whether `p` sits on the outermost ring of the grid.
    pub fn on_edge(&self, (x, y): Point) -> bool {
        x == 0 || y == 0 || x + 1 == self.size || y + 1 == self.size
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let s = self.size;
        (0..s * s).map(move |i| (i % s, i / s))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Points paired with their cells, row-major.
    pub fn enumerate(&self) -> impl Iterator<Item = (Point, &T)> {
        let s = self.size;
        self.cells.iter().enumerate().map(move |(i, c)| ((i % s, i / s), c))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }

    /// A new grid of the same size with `f` applied to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Fail with [`BoardError::SizeMismatch`] unless both grids share a size.
    pub fn ensure_same_size<U>(&self, other: &Grid<U>) -> Result<()> {
        if self.size != other.size {
            return Err(BoardError::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(())
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        &self.cells[self.index_of(p)]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        let i = self.index_of(p);
        &mut self.cells[i]
    }
}
