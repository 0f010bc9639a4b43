//! Region finder: connected empty areas and the stones around them.
//!
//! [`find_regions`] partitions every empty point into regions.
//! [`find_enclosed_regions`] applies the pre-filter that decides which of
//! those regions may be considered for vitality relative to one set of
//! candidate groups: regions reaching the board edge are open space, and a
//! region touching a friendly stone outside the candidate set belongs to a
//! different cluster of strings.

use std::collections::BTreeSet;

use log::trace;

use crate::benson::BensonConfig;
use crate::board::{Board, Color};
use crate::grid::Point;
use crate::groups::{Group, label_groups};

/// A maximal 4-connected set of empty points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub cells: BTreeSet<Point>,
    /// At least one cell lies on the outermost ring of the board.
    pub touches_edge: bool,
    /// Indices of adjacent groups, counted only among the groups passed to
    /// [`find_regions`]. Benson passes one color's groups, so opponent
    /// stones land in `stray_stones` instead.
    pub bordering_groups: BTreeSet<usize>,
    /// Adjacent stones, of either color, that belong to none of those groups.
    pub stray_stones: BTreeSet<Point>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

/// Partition the empty points of `board` into regions, in row-major order of
/// their first cell. Adjacency to stones is reported against `groups`.
pub fn find_regions(board: &Board, groups: &[Group]) -> Vec<Region> {
    let grid = board.grid();
    let labels = label_groups(grid.size(), groups);
    let mut visited = vec![false; grid.size() * grid.size()];
    let mut regions = Vec::new();

    for start in grid.points() {
        let si = grid.index_of(start);
        if visited[si] || !grid[start].is_empty() {
            continue;
        }
        visited[si] = true;

        let mut queue = vec![start];
        let mut region = Region {
            cells: BTreeSet::new(),
            touches_edge: false,
            bordering_groups: BTreeSet::new(),
            stray_stones: BTreeSet::new(),
        };
        while let Some(pt) = queue.pop() {
            region.cells.insert(pt);
            if grid.on_edge(pt) {
                region.touches_edge = true;
            }
            for n in grid.neighbors(pt) {
                if grid[n].is_empty() {
                    let ni = grid.index_of(n);
                    if !visited[ni] {
                        visited[ni] = true;
                        queue.push(n);
                    }
                } else if let Some(id) = labels[n] {
                    region.bordering_groups.insert(id);
                } else {
                    region.stray_stones.insert(n);
                }
            }
        }
        regions.push(region);
    }
    regions
}

/// Regions that may count as vital for `color` relative to `candidates`.
///
/// `candidates` must all be groups of `color`. A region survives when it does
/// not reach the edge (unless the config keeps edge regions) and every
/// adjacent stone of `color` belongs to one of the candidates.
pub fn find_enclosed_regions(
    board: &Board,
    candidates: &[Group],
    color: Color,
    config: &BensonConfig,
) -> Vec<Region> {
    debug_assert!(candidates.iter().all(|g| g.color == color));
    let grid = board.grid();

    find_regions(board, candidates)
        .into_iter()
        .filter(|region| {
            if config.reject_edge_regions && region.touches_edge {
                trace!("{color}: region of {} points reaches the edge", region.len());
                return false;
            }
            let outside = region
                .stray_stones
                .iter()
                .any(|&p| grid[p].color() == Some(color));
            if outside {
                trace!(
                    "{color}: region of {} points borders a group outside the candidate set",
                    region.len()
                );
            }
            !outside
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::find_groups;

    const TWO_EYES: &str = "
        . . . . . . .
        . X X X X X .
        . X . X . X .
        . X X X X X .
        . . . . . . .
        . . . O . . .
        . . . . . . .
    ";

    #[test]
    fn test_partition_covers_all_empty_points() {
        let board: Board = TWO_EYES.parse().unwrap();
        let regions = find_regions(&board, &[]);
        let total: usize = regions.iter().map(Region::len).sum();
        assert_eq!(total, 49 - board.total_stones());
        assert_eq!(regions.len(), 3);
    }

    #[test]
    fn test_region_metadata() {
        let board: Board = TWO_EYES.parse().unwrap();
        let black = find_groups(&board, Color::Black);
        let regions = find_regions(&board, &black);
        // Row-major: the outside, then the two eyes.
        assert!(regions[0].touches_edge);
        assert_eq!(regions[0].stray_stones, BTreeSet::from([(3, 5)]));
        assert_eq!(regions[1].cells, BTreeSet::from([(2, 2)]));
        assert!(!regions[1].touches_edge);
        assert_eq!(regions[1].bordering_groups, BTreeSet::from([0]));
        assert!(regions[1].stray_stones.is_empty());
        assert_eq!(regions[2].bordering_groups, BTreeSet::from([0]));
    }

    #[test]
    fn test_both_colors_as_groups() {
        let board: Board = TWO_EYES.parse().unwrap();
        let mut groups = find_groups(&board, Color::Black);
        groups.extend(find_groups(&board, Color::White));
        let regions = find_regions(&board, &groups);
        assert_eq!(regions[0].bordering_groups, BTreeSet::from([0, 1]));
        assert!(regions[0].stray_stones.is_empty());
    }

    #[test]
    fn test_edge_regions_filtered() {
        let board: Board = TWO_EYES.parse().unwrap();
        let black = find_groups(&board, Color::Black);
        let config = BensonConfig::default();
        let enclosed = find_enclosed_regions(&board, &black, Color::Black, &config);
        assert_eq!(enclosed.len(), 2);
        assert!(enclosed.iter().all(|r| !r.touches_edge));

        let open = BensonConfig {
            reject_edge_regions: false,
        };
        let all = find_enclosed_regions(&board, &black, Color::Black, &open);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_foreign_friendly_group_filtered() {
        let board: Board = TWO_EYES.parse().unwrap();
        let black = find_groups(&board, Color::Black);
        // With no candidates every interior region touches an unlisted black stone.
        let config = BensonConfig::default();
        let enclosed = find_enclosed_regions(&board, &[], Color::Black, &config);
        assert!(enclosed.is_empty());
        assert_eq!(
            find_enclosed_regions(&board, &black, Color::Black, &config).len(),
            2
        );
    }
}
