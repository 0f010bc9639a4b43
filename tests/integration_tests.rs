//! Integration tests for benson-go
//!
//! End-to-end scenarios over the public API, plus randomized invariant
//! checks over positions generated from seeded move sequences.

use benson_go::benson::{BensonConfig, Mark, MarkGrid, resolve};
use benson_go::board::{Board, Cell, Color};
use benson_go::grid::Grid;
use benson_go::groups::find_groups;
use benson_go::influence::{InfluenceConfig, Owner, estimate};
use benson_go::regions::find_regions;
use benson_go::review::{ReviewState, apply_removal, finalize, merge};
use benson_go::vitality::is_vital;

// =============================================================================
// Helper functions
// =============================================================================

fn board(diagram: &str) -> Board {
    diagram.parse().expect("test diagram should parse")
}

/// Seeded random positions of various sizes and densities.
fn random_boards(count: u64) -> Vec<Board> {
    (0..count)
        .map(|seed| {
            let mut rng = fastrand::Rng::with_seed(seed);
            let size = [5, 7, 9, 13][rng.usize(..4)];
            let density = 0.3 + rng.f64() * 0.5;
            Board::random(size, density, &mut rng).unwrap()
        })
        .collect()
}

/// Same position with Black and White exchanged.
fn swap_colors(b: &Board) -> Board {
    let rows = b
        .grid()
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| match c {
                    Cell::Black => Cell::White,
                    Cell::White => Cell::Black,
                    Cell::Empty => Cell::Empty,
                })
                .collect()
        })
        .collect();
    Board::from_rows(rows).unwrap()
}

fn random_marks(size: usize, rng: &mut fastrand::Rng) -> MarkGrid {
    let mut marks = MarkGrid::new(size, Mark::Unchanged);
    for y in 0..size {
        for x in 0..size {
            if rng.bool() {
                marks[(x, y)] = Mark::Remove;
            }
        }
    }
    marks
}

// =============================================================================
// Benson scenarios
// =============================================================================

#[test]
fn test_surrounded_block_dies_and_wall_lives() {
    // A 2x2 Black block with no liberties inside a White wall. White has one
    // real eye at (5, 2).
    let b = board(
        "
        . . . . . . . .
        . O O O O O O .
        . O X X O . O .
        . O X X O O O .
        . O O O O . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
    ",
    );
    let outcome = resolve(&b, &BensonConfig::default());
    for p in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        assert_eq!(outcome.marks[p], Mark::Remove, "{p:?} should be dead");
    }
    assert_eq!(outcome.removed, 4);
    assert_eq!(outcome.rounds, 1);
    // Once the block is gone its space is a second White eye.
    assert_eq!(outcome.board.stone_count(Color::White), b.stone_count(Color::White));
    assert_eq!(outcome.board.stone_count(Color::Black), 0);
}

#[test]
fn test_two_eyed_group_is_stable() {
    let b = board(
        "
        . . . . . . . . .
        . . . . . . . . .
        . . X X X X X . .
        . . X . X . X . .
        . . X X X X X . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
        . . . . . . . . .
    ",
    );
    let outcome = resolve(&b, &BensonConfig::default());
    assert_eq!(outcome.removed, 0);
    assert_eq!(outcome.rounds, 0);
    assert!(outcome.marks.iter().all(|&m| m == Mark::Unchanged));
}

#[test]
fn test_enemy_pocket_is_not_vital() {
    // The point inside White's ring is no eye for Black, and Black's single
    // real eye is not enough.
    let b = board(
        "
        . . . . . . . .
        . X X X X . . .
        . X . X O O . .
        . X X X O . O .
        . . . . O O . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
    ",
    );
    let black = find_groups(&b, Color::Black);
    let pocket = find_regions(&b, &black)
        .into_iter()
        .find(|r| r.contains((5, 3)))
        .unwrap();
    assert!(!is_vital(&b, &pocket, Color::White));

    let outcome = resolve(&b, &BensonConfig::default());
    assert_eq!(outcome.board.stone_count(Color::Black), 0);
}

#[test]
fn test_edge_eyes_depend_on_config() {
    let b = board(
        "
        . X . X . .
        X X X X . .
        . . . . . .
        . . . . . .
        . . . . . .
        . . . . . .
    ",
    );
    let strict = resolve(&b, &BensonConfig::default());
    assert_eq!(strict.removed, 6);

    let open = BensonConfig {
        reject_edge_regions: false,
    };
    let lenient = resolve(&b, &open);
    assert_eq!(lenient.removed, 0);
}

#[test]
fn test_removals_cascade_over_rounds() {
    let b = board(
        "
        . O . X X X O
        . X . X . X .
        X X X . X . .
        X . X X . X X
        X X O O X O X
        . O X . X X O
        O O X X X X X
    ",
    );
    let expected = board(
        "
        . . . X X X .
        . X . X . X .
        X X X . X . .
        X . X X . . .
        X X . . . . .
        . . . . . . .
        . . . . . . .
    ",
    );
    let outcome = resolve(&b, &BensonConfig::default());
    assert_eq!(outcome.rounds, 2);
    assert_eq!(outcome.removed, 21);
    assert_eq!(outcome.board, expected);
}

#[test]
fn test_empty_board_everything_neutral() {
    let b = Board::new(19).unwrap();
    let outcome = resolve(&b, &BensonConfig::default());
    assert_eq!(outcome.rounds, 0);
    let est = estimate(&b, &InfluenceConfig::default());
    assert_eq!((est.black, est.white), (0, 0));
    assert_eq!(est.neutral, 361);
}

// =============================================================================
// Influence estimator
// =============================================================================

#[test]
fn test_lone_stone_influence_stays_local() {
    let mut b = Board::new(19).unwrap();
    b.set((3, 15), Cell::White).unwrap();
    let est = estimate(&b, &InfluenceConfig::default());
    assert_eq!(est.owner((3, 15)), Some(Owner::White));
    assert_eq!(est.white, 1);
    assert_eq!(est.black, 0);
    // Shorter decay leaves a halo around the stone.
    let short = InfluenceConfig {
        erosions: 3,
        ..InfluenceConfig::default()
    };
    let est = estimate(&b, &short);
    assert!(est.white > 1);
    assert!(est.white < 61);
    assert_eq!(est.owner((18, 0)), Some(Owner::Neutral));
}

#[test]
fn test_estimate_counts_partition_board() {
    for b in random_boards(20) {
        let est = estimate(&b, &InfluenceConfig::default());
        assert_eq!(est.black + est.white + est.neutral, b.size() * b.size());
        // Stones always keep their own point.
        for p in b.stones(Color::Black) {
            assert_eq!(est.owners[p], Owner::Black);
        }
        for p in b.stones(Color::White) {
            assert_eq!(est.owners[p], Owner::White);
        }
    }
}

#[test]
fn test_estimate_color_symmetry() {
    for b in random_boards(15) {
        let est = estimate(&b, &InfluenceConfig::default());
        let mirrored = estimate(&swap_colors(&b), &InfluenceConfig::default());
        assert_eq!(est.black, mirrored.white);
        assert_eq!(est.white, mirrored.black);
        for (p, &v) in est.influence.enumerate() {
            assert_eq!(mirrored.influence[p], -v);
        }
    }
}

// =============================================================================
// Invariants over random positions
// =============================================================================

#[test]
fn test_benson_conserves_stones() {
    for b in random_boards(30) {
        let outcome = resolve(&b, &BensonConfig::default());
        assert!(outcome.board.total_stones() <= b.total_stones());
        assert_eq!(b.total_stones() - outcome.board.total_stones(), outcome.removed);
        for (p, &cell) in outcome.board.grid().enumerate() {
            if !cell.is_empty() {
                assert_eq!(b.grid()[p], cell, "stone appeared at {p:?}");
                assert_eq!(outcome.marks[p], Mark::Unchanged);
            } else if !b.grid()[p].is_empty() {
                assert_eq!(outcome.marks[p], Mark::Remove);
            }
        }
    }
}

#[test]
fn test_benson_stable_state_is_idempotent() {
    for b in random_boards(30) {
        let config = BensonConfig::default();
        let first = resolve(&b, &config);
        let second = resolve(&first.board, &config);
        assert_eq!(second.removed, 0);
        assert_eq!(second.rounds, 0);
        assert_eq!(second.board, first.board);
    }
}

#[test]
fn test_liberty_consistency() {
    for b in random_boards(20) {
        for color in Color::BOTH {
            for group in find_groups(&b, color) {
                assert!(!group.stones.is_empty());
                for &s in &group.stones {
                    assert_eq!(b.grid()[s].color(), Some(color));
                }
                for &lib in &group.liberties {
                    assert_eq!(b.grid()[lib], Cell::Empty);
                    assert!(
                        group
                            .stones
                            .iter()
                            .any(|&s| b.grid().neighbors(s).any(|n| n == lib))
                    );
                }
            }
        }
    }
}

#[test]
fn test_points_belong_to_exactly_one_group_or_region() {
    for b in random_boards(20) {
        let mut owners = Grid::new(b.size(), 0usize);
        for color in Color::BOTH {
            for group in find_groups(&b, color) {
                for s in group.stones {
                    owners[s] += 1;
                }
            }
        }
        for region in find_regions(&b, &[]) {
            for p in region.cells {
                owners[p] += 1;
            }
        }
        assert!(owners.iter().all(|&n| n == 1));
    }
}

// =============================================================================
// Review merge
// =============================================================================

#[test]
fn test_merge_is_pointwise_and() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..20 {
        let a = random_marks(9, &mut rng);
        let b = random_marks(9, &mut rng);
        let merged = merge(&a, &b).unwrap();
        for (p, &m) in merged.enumerate() {
            let both = a[p] == Mark::Remove && b[p] == Mark::Remove;
            assert_eq!(m == Mark::Remove, both);
        }
        let none = merge(&a, &MarkGrid::new(9, Mark::Unchanged)).unwrap();
        assert!(none.iter().all(|&m| m == Mark::Unchanged));
    }
}

#[test]
fn test_review_round_trip() {
    let b = board(
        "
        . . . . . . . .
        . O O O O O O .
        . O X X O . O .
        . O X X O O O .
        . O O O O . . .
        . . . . . . . .
        . . . . . . X .
        . . . . . . . .
    ",
    );
    let outcome = resolve(&b, &BensonConfig::default());
    // Benson also calls the lone stone at (6, 6) dead.
    assert_eq!(outcome.marks[(6, 6)], Mark::Remove);

    let black_side = ReviewState::from_marks(&outcome.marks);
    let mut white_side = ReviewState::from_marks(&outcome.marks);
    // White disputes the lone stone.
    white_side.toggle((6, 6)).unwrap();

    let final_board = finalize(&b, &black_side, &white_side).unwrap();
    assert_eq!(final_board.get((6, 6)), Some(Cell::Black));
    assert_eq!(final_board.get((2, 2)), Some(Cell::Empty));
    assert_eq!(final_board.stone_count(Color::Black), 1);

    // Applying Benson's own marks equals its cleaned board.
    assert_eq!(apply_removal(&b, &outcome.marks).unwrap(), outcome.board);
}
