//! Dead-stone review: per-side marking and consensus merge.
//!
//! Each side starts from the Benson marks and may flip points by hand. A
//! stone is finally removed only when both sides mark it; any disagreement
//! leaves it on the board.

use crate::benson::{Mark, MarkGrid};
use crate::board::Board;
use crate::error::{BoardError, Result};
use crate::grid::Point;
use crate::groups::find_groups;

/// One side's working copy of the dead-stone marks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewState {
    marks: MarkGrid,
}

impl ReviewState {
    /// Start from an existing marking, typically the Benson result.
    pub fn from_marks(marks: &MarkGrid) -> Self {
        Self {
            marks: marks.clone(),
        }
    }

    /// A review with nothing marked.
    pub fn unmarked(size: usize) -> Self {
        Self {
            marks: MarkGrid::new(size, Mark::Unchanged),
        }
    }

    pub fn marks(&self) -> &MarkGrid {
        &self.marks
    }

    /// Flip a single point between `Unchanged` and `Remove`.
    pub fn toggle(&mut self, p: Point) -> Result<Mark> {
        let next = self
            .marks
            .get(p)
            .ok_or(BoardError::OutOfBounds {
                point: p,
                size: self.marks.size(),
            })?
            .toggled();
        self.marks[p] = next;
        Ok(next)
    }

    /// Flip every stone of the group at `p` to the opposite of the clicked
    /// stone's current mark. Toggling an empty point flips just that point.
    pub fn toggle_group(&mut self, board: &Board, p: Point) -> Result<Mark> {
        self.marks.ensure_same_size(board.grid())?;
        let cell = board.get(p).ok_or(BoardError::OutOfBounds {
            point: p,
            size: board.size(),
        })?;
        let Some(color) = cell.color() else {
            return self.toggle(p);
        };
        let next = self.marks[p].toggled();
        if let Some(group) = find_groups(board, color)
            .into_iter()
            .find(|g| g.stones.contains(&p))
        {
            for s in group.stones {
                self.marks[s] = next;
            }
        }
        Ok(next)
    }
}

/// Points both sides agreed to remove.
pub fn merge(a: &MarkGrid, b: &MarkGrid) -> Result<MarkGrid> {
    a.ensure_same_size(b)?;
    let mut merged = MarkGrid::new(a.size(), Mark::Unchanged);
    for (p, &mark) in a.enumerate() {
        if mark == Mark::Remove && b[p] == Mark::Remove {
            merged[p] = Mark::Remove;
        }
    }
    Ok(merged)
}

/// A copy of `board` with every `Remove` point cleared.
pub fn apply_removal(board: &Board, confirmed: &MarkGrid) -> Result<Board> {
    board.grid().ensure_same_size(confirmed)?;
    let mut out = board.clone();
    for (p, &mark) in confirmed.enumerate() {
        if mark == Mark::Remove {
            out.clear(p);
        }
    }
    Ok(out)
}

/// Merge two reviews and apply the consensus to `board`.
pub fn finalize(board: &Board, a: &ReviewState, b: &ReviewState) -> Result<Board> {
    let confirmed = merge(a.marks(), b.marks())?;
    apply_removal(board, &confirmed)
}
