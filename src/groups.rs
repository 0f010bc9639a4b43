//! Group finder: connected same-colored stones and their liberties.
//!
//! Groups are recomputed from the board on every analysis pass and thrown
//! away afterwards; nothing here caches between calls.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Color};
use crate::grid::{Grid, Point};

/// A maximal 4-connected set of same-colored stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    /// Stones in discovery order; never empty.
    pub stones: Vec<Point>,
    /// Empty points adjacent to at least one stone. A point may be a liberty
    /// of several groups at once.
    pub liberties: BTreeSet<Point>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Find every group of `color`, ordered by the row-major position of the
/// first stone encountered.
pub fn find_groups(board: &Board, color: Color) -> Vec<Group> {
    let grid = board.grid();
    let target = Cell::from(color);
    let mut visited = vec![false; grid.size() * grid.size()];
    let mut groups = Vec::new();

    for start in grid.points() {
        let si = grid.index_of(start);
        if visited[si] || grid[start] != target {
            continue;
        }
        visited[si] = true;

        let mut stack = vec![start];
        let mut stones = Vec::new();
        let mut liberties = BTreeSet::new();
        while let Some(pt) = stack.pop() {
            stones.push(pt);
            for n in grid.neighbors(pt) {
                match grid[n] {
                    Cell::Empty => {
                        liberties.insert(n);
                    }
                    c if c == target => {
                        let ni = grid.index_of(n);
                        if !visited[ni] {
                            visited[ni] = true;
                            stack.push(n);
                        }
                    }
                    _ => {}
                }
            }
        }
        groups.push(Group {
            color,
            stones,
            liberties,
        });
    }
    groups
}

/// Per-point index into `groups`, `None` where no listed group has a stone.
pub fn label_groups(size: usize, groups: &[Group]) -> Grid<Option<usize>> {
    let mut labels = Grid::new(size, None);
    for (id, group) in groups.iter().enumerate() {
        for &p in &group.stones {
            labels[p] = Some(id);
        }
    }
    labels
}
