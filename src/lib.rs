//! Benson-Go: life/death and territory resolution for Go end-game scoring.
//!
//! Given a board snapshot, the engine decides which groups are
//! unconditionally alive under Benson's algorithm, removes the rest, and
//! estimates territory with a dilation/erosion influence map. Two sides'
//! dead-stone reviews can be merged so that only stones both agree on are
//! removed.
//!
//! ## Modules
//!
//! - [`constants`] - Size limits and estimator parameters
//! - [`grid`] - Coordinate space and 4-adjacency
//! - [`board`] - Board snapshot, parsing, stone placement
//! - [`groups`] - Connected groups and their liberties
//! - [`regions`] - Empty regions and the enclosure pre-filter
//! - [`vitality`] - Whether an enclosed region can act as an eye
//! - [`benson`] - Fixed-point dead-group removal
//! - [`influence`] - Territory estimation
//! - [`review`] - Per-side dead-stone marking and consensus merge
//! - [`gtp`] - Go Text Protocol front-end
//!
//! ## Example
//!
//! ```
//! use benson_go::board::Board;
//! use benson_go::benson::{resolve, BensonConfig};
//! use benson_go::influence::{estimate, InfluenceConfig};
//!
//! let board: Board = "
//!     . . . . . . .
//!     . X X X X X .
//!     . X . X . X .
//!     . X X X X X .
//!     . . . . . . .
//!     . . . . . . .
//!     . . . . . . .
//! ".parse().unwrap();
//!
//! // Two separate eyes: nothing is removed.
//! let outcome = resolve(&board, &BensonConfig::default());
//! assert_eq!(outcome.removed, 0);
//!
//! let est = estimate(&outcome.board, &InfluenceConfig::default());
//! assert!(est.black > 0);
//! assert_eq!(est.white, 0);
//! ```

pub mod benson;
pub mod board;
pub mod constants;
pub mod error;
pub mod grid;
pub mod groups;
pub mod gtp;
pub mod influence;
pub mod regions;
pub mod review;
pub mod vitality;

pub use benson::{BensonConfig, BensonOutcome, Mark, MarkGrid, resolve};
pub use board::{Board, Cell, Color};
pub use error::{BoardError, MoveError, Result};
pub use grid::{Grid, Point};
pub use influence::{InfluenceConfig, Owner, TerritoryEstimate, estimate};
pub use review::{ReviewState, apply_removal, merge};
