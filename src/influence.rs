//! Territory estimation by morphological dilation and erosion.
//!
//! Stones seed a signed influence map (Black positive, White negative).
//! Dilation spreads influence outward additively; erosion then wears it
//! down from every point that had no influence at the start of the pass.
//! Whatever keeps a non-zero value after both phases decides ownership.
//!
//! With the default 5 dilations and 21 erosions a lone stone owns only its
//! own point, while areas walled off by one color survive as territory.

use std::fmt;

use crate::board::{Board, Cell, Color};
use crate::constants::{DILATIONS, EROSIONS, STONE_INFLUENCE};
use crate::grid::{Grid, Point};

/// Signed influence per point: positive leans Black, negative leans White.
pub type InfluenceMap = Grid<i32>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InfluenceConfig {
    pub dilations: usize,
    pub erosions: usize,
    /// Magnitude of the initial value placed on each stone.
    pub stone_influence: i32,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            dilations: DILATIONS,
            erosions: EROSIONS,
            stone_influence: STONE_INFLUENCE,
        }
    }
}

/// Estimated owner of a point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Owner {
    Black,
    White,
    #[default]
    Neutral,
}

impl Owner {
    fn of_influence(value: i32) -> Owner {
        match value.signum() {
            1 => Owner::Black,
            -1 => Owner::White,
            _ => Owner::Neutral,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Owner::Black => Some(Color::Black),
            Owner::White => Some(Color::White),
            Owner::Neutral => None,
        }
    }
}

/// Result of [`estimate`].
#[derive(Clone, Debug)]
pub struct TerritoryEstimate {
    pub influence: InfluenceMap,
    pub owners: Grid<Owner>,
    pub black: usize,
    pub white: usize,
    pub neutral: usize,
}

impl TerritoryEstimate {
    pub fn owner(&self, p: Point) -> Option<Owner> {
        self.owners.get(p).copied()
    }

    pub fn count(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

impl fmt::Display for TerritoryEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.owners.rows() {
            let line: Vec<&str> = row
                .iter()
                .map(|o| match o {
                    Owner::Black => "b",
                    Owner::White => "w",
                    Owner::Neutral => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        write!(
            f,
            "black {} white {} neutral {}",
            self.black, self.white, self.neutral
        )
    }
}

/// Initial map: `±stone_influence` on stones, zero elsewhere.
pub fn seed(board: &Board, stone_influence: i32) -> InfluenceMap {
    board.grid().map(|c| match c {
        Cell::Black => stone_influence,
        Cell::White => -stone_influence,
        Cell::Empty => 0,
    })
}

/// One dilation pass.
///
/// Every point with non-zero influence keeps its value and adds one unit of
/// its own sign to each orthogonal neighbour. Contributions accumulate, so a
/// point reached from several sides gains more than one unit.
pub fn dilate(map: &InfluenceMap) -> InfluenceMap {
    let mut out = InfluenceMap::new(map.size(), 0);
    for (p, &value) in map.enumerate() {
        if value == 0 {
            continue;
        }
        out[p] += value;
        let unit = value.signum();
        for n in map.neighbors(p) {
            out[n] += unit;
        }
    }
    out
}

/// One erosion pass.
///
/// Every point whose influence is zero at the start of the pass moves each
/// orthogonal neighbour one unit toward zero. Values never cross zero and
/// stones are not eroded.
pub fn erode(map: &InfluenceMap, board: &Board) -> InfluenceMap {
    let stones = board.grid();
    let mut out = map.clone();
    for (p, &value) in map.enumerate() {
        if value != 0 {
            continue;
        }
        for n in map.neighbors(p) {
            if !stones[n].is_empty() {
                continue;
            }
            let v = out[n];
            if v != 0 {
                out[n] = v - v.signum();
            }
        }
    }
    out
}

/// Run the full estimator on `board`.
pub fn estimate(board: &Board, config: &InfluenceConfig) -> TerritoryEstimate {
    let mut influence = seed(board, config.stone_influence);
    for _ in 0..config.dilations {
        influence = dilate(&influence);
    }
    for _ in 0..config.erosions {
        influence = erode(&influence, board);
    }

    let owners = influence.map(|&v| Owner::of_influence(v));
    let (mut black, mut white, mut neutral) = (0, 0, 0);
    for owner in owners.iter() {
        match owner {
            Owner::Black => black += 1,
            Owner::White => white += 1,
            Owner::Neutral => neutral += 1,
        }
    }

    TerritoryEstimate {
        influence,
        owners,
        black,
        white,
        neutral,
    }
}
