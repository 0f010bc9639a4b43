//! Benson's unconditional-life test, iterated to a fixed point.
//!
//! Each round runs, for Black and then White:
//!
//! 1. find every group of the color,
//! 2. find the enclosed regions relative to that whole group set,
//! 3. keep the regions that pass the vitality check,
//! 4. declare dead every group adjacent to fewer than two of them,
//! 5. remove the dead stones from the working board.
//!
//! White's pass sees Black's removals from the same round. Rounds repeat
//! until one removes nothing. Every group is checked against the regions of
//! the full same-color group set rather than searching subsets of groups, so
//! the result can be more pessimistic than textbook Benson on positions
//! where only a sub-cluster of strings is alive.

use std::collections::BTreeSet;

use log::debug;

use crate::board::{Board, Color};
use crate::grid::{Grid, Point};
use crate::groups::{Group, find_groups};
use crate::regions::{Region, find_enclosed_regions};
use crate::vitality::vital_regions;

/// Per-point verdict of a dead-stone review.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Unchanged,
    Remove,
}

impl Mark {
    pub fn toggled(self) -> Mark {
        match self {
            Mark::Unchanged => Mark::Remove,
            Mark::Remove => Mark::Unchanged,
        }
    }
}

pub type MarkGrid = Grid<Mark>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BensonConfig {
    /// Treat regions with a point on the board edge as open space.
    pub reject_edge_regions: bool,
}

impl Default for BensonConfig {
    fn default() -> Self {
        Self {
            reject_edge_regions: true,
        }
    }
}

/// Result of [`resolve`].
#[derive(Clone, Debug)]
pub struct BensonOutcome {
    /// Input board with every dead stone removed.
    pub board: Board,
    /// `Remove` on every point whose stone was judged dead.
    pub marks: MarkGrid,
    /// Rounds that removed at least one stone.
    pub rounds: usize,
    /// Stones removed in total.
    pub removed: usize,
}

impl BensonOutcome {
    /// Points marked for removal, row-major.
    pub fn dead_stones(&self) -> Vec<Point> {
        self.marks
            .enumerate()
            .filter(|(_, m)| **m == Mark::Remove)
            .map(|(p, _)| p)
            .collect()
    }
}

fn label_regions(size: usize, regions: &[Region]) -> Grid<Option<usize>> {
    let mut region_of = Grid::new(size, None);
    for (id, region) in regions.iter().enumerate() {
        for &p in &region.cells {
            region_of[p] = Some(id);
        }
    }
    region_of
}

/// Number of distinct labelled regions adjacent to some stone of `group`.
fn count_adjacent(board: &Board, group: &Group, region_of: &Grid<Option<usize>>) -> usize {
    let grid = board.grid();
    group
        .stones
        .iter()
        .flat_map(|&s| grid.neighbors(s))
        .filter_map(|n| region_of[n])
        .collect::<BTreeSet<usize>>()
        .len()
}

/// Groups of `color` on `board` that border fewer than two vital regions.
pub fn dead_groups(board: &Board, color: Color, config: &BensonConfig) -> Vec<Group> {
    let groups = find_groups(board, color);
    if groups.is_empty() {
        return groups;
    }
    let enclosed = find_enclosed_regions(board, &groups, color, config);
    let enclosed_count = enclosed.len();
    let vital = vital_regions(board, enclosed, color);

    let region_of = label_regions(board.size(), &vital);

    let total = groups.len();
    let dead: Vec<Group> = groups
        .into_iter()
        .filter(|g| count_adjacent(board, g, &region_of) < 2)
        .collect();
    debug!(
        "{color}: {total} groups, {enclosed_count} enclosed regions, {} vital, {} dead",
        vital.len(),
        dead.len()
    );
    dead
}

/// Remove dead groups from a copy of `board` until no more can be removed.
///
/// The input board is never modified. Stones are only ever removed, so the
/// loop ends after at most one round per stone plus a final quiet round.
pub fn resolve(board: &Board, config: &BensonConfig) -> BensonOutcome {
    let mut working = board.clone();
    let mut marks = MarkGrid::new(board.size(), Mark::Unchanged);
    let mut rounds = 0;
    let mut removed = 0;

    loop {
        let mut changed = false;
        for color in Color::BOTH {
            for group in dead_groups(&working, color, config) {
                for &p in &group.stones {
                    working.clear(p);
                    marks[p] = Mark::Remove;
                }
                removed += group.len();
                changed = true;
            }
        }
        if !changed {
            break;
        }
        rounds += 1;
        debug!("round {rounds}: {removed} stones removed so far");
    }

    BensonOutcome {
        board: working,
        marks,
        rounds,
        removed,
    }
}
