use core::fmt;
use core::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for mine counts and reveal counters.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub const ROWS: Coord = 5;
pub const COLUMNS: Coord = 5;
pub const TOTAL_CELLS: CellCount = mult(ROWS, COLUMNS);

/// Fewest mines a board may carry.
pub const MIN_MINES: CellCount = 1;

/// Most mines a board may carry; at least one cell always stays safe.
pub const MAX_MINES: CellCount = TOTAL_CELLS - 1;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Maps signed request coordinates onto the board, `None` when either axis falls outside it.
pub fn board_coords(row: i64, col: i64) -> Option<Coord2> {
    let row = Coord::try_from(row).ok().filter(|&row| row < ROWS)?;
    let col = Coord::try_from(col).ok().filter(|&col| col < COLUMNS)?;
    Some((row, col))
}

pub(crate) fn empty_grid() -> Array2<bool> {
    Array2::default((ROWS, COLUMNS).to_nd_index())
}

pub trait GridRowsExt {
    /// Copies the grid out as nested row vectors, the shape clients expect on the wire.
    fn to_rows(&self) -> Vec<Vec<bool>>;

    fn count_set(&self) -> usize;
}

impl GridRowsExt for Array2<bool> {
    fn to_rows(&self) -> Vec<Vec<bool>> {
        self.outer_iter().map(|row| row.to_vec()).collect()
    }

    fn count_set(&self) -> usize {
        self.iter().filter(|&&cell| cell).count()
    }
}

/// Persistence key of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
