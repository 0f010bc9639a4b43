//! Constants for board dimensions and estimator parameters.
//!
//! Board size is a runtime property of each [`Board`](crate::board::Board);
//! only the GTP front-end bounds it, by [`MAX_BOARD_SIZE`]. The influence
//! estimator's iteration counts are empirical; changing them changes
//! territory verdicts.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when none is given (standard 19x19).
pub const DEFAULT_SIZE: usize = 19;

/// Largest board the GTP front-end accepts. Vertex letters stop at Z (minus I).
pub const MAX_BOARD_SIZE: usize = 25;

// =============================================================================
// Influence Estimator Parameters
// =============================================================================

/// Initial influence of a stone (positive for Black, negative for White).
pub const STONE_INFLUENCE: i32 = 128;

/// Number of dilation passes applied to the seeded influence map.
pub const DILATIONS: usize = 5;

/// Number of erosion passes applied after dilation.
pub const EROSIONS: usize = 21;

// =============================================================================
// Demo Position Generation
// =============================================================================

/// Default fraction of points the `demo` command tries to fill with stones.
pub const DEMO_DENSITY: f64 = 0.45;

// =============================================================================
// Text Diagram Characters
// =============================================================================

/// Black stone in board diagrams.
pub const CHAR_BLACK: char = 'X';

/// White stone in board diagrams.
pub const CHAR_WHITE: char = 'O';

/// Empty point in board diagrams.
pub const CHAR_EMPTY: char = '.';
