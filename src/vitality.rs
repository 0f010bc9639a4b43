//! Vitality check: whether an enclosed region can serve as an eye.
//!
//! The region's empty cells are split into connected sub-blocks. A sub-block
//! touched only by the opponent is a pocket the opponent can always fill,
//! and it disqualifies the entire region.

use std::collections::BTreeSet;

use crate::board::{Board, Color};
use crate::grid::Grid;
use crate::regions::Region;

/// Whether `region` is vital for the side whose opponent is `opponent`.
///
/// Short-circuits on the first sub-block whose adjacent stones are all of
/// the opponent's color. A sub-block with no adjacent stones at all does
/// not disqualify the region.
pub fn is_vital(board: &Board, region: &Region, opponent: Color) -> bool {
    let grid = board.grid();
    let mut in_region = Grid::new(grid.size(), false);
    for &p in &region.cells {
        in_region[p] = true;
    }
    let mut visited = Grid::new(grid.size(), false);

    for &start in &region.cells {
        if visited[start] || !grid[start].is_empty() {
            continue;
        }
        visited[start] = true;

        let mut stack = vec![start];
        let mut colors = BTreeSet::new();
        while let Some(pt) = stack.pop() {
            for n in grid.neighbors(pt) {
                match grid[n].color() {
                    Some(c) => {
                        colors.insert(c);
                    }
                    None if in_region[n] && !visited[n] => {
                        visited[n] = true;
                        stack.push(n);
                    }
                    None => {}
                }
            }
        }

        if colors.len() == 1 && colors.contains(&opponent) {
            return false;
        }
    }
    true
}

/// Enclosed regions that pass [`is_vital`] for `color`.
pub fn vital_regions(board: &Board, regions: Vec<Region>, color: Color) -> Vec<Region> {
    let opponent = color.opponent();
    regions
        .into_iter()
        .filter(|r| is_vital(board, r, opponent))
        .collect()
}
