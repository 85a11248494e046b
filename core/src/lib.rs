use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use payout::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod payout;
mod types;

/// Validated parameters of a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    mines: CellCount,
}

impl GameConfig {
    pub fn new(mines: CellCount) -> Result<Self> {
        if (MIN_MINES..=MAX_MINES).contains(&mines) {
            Ok(Self { mines })
        } else {
            Err(GameError::InvalidConfiguration)
        }
    }

    /// Accepts the raw integer a request carries, so negative or oversized counts fail the
    /// same way as any other out-of-range count.
    pub fn from_request(mines: i64) -> Result<Self> {
        CellCount::try_from(mines)
            .map_err(|_| GameError::InvalidConfiguration)
            .and_then(Self::new)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn safe_cells(&self) -> CellCount {
        TOTAL_CELLS - self.mines
    }
}

/// Hidden mine positions of a board. Fixed once a game is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a mask produced by a generator, rejecting it unless it holds exactly the mines
    /// `config` asked for.
    pub(crate) fn from_generated(mine_mask: Array2<bool>, config: GameConfig) -> Result<Self> {
        let layout = Self::from_mine_mask(mine_mask)?;
        layout.check_matches(config)?;
        Ok(layout)
    }

    /// Fails when the layout does not carry the mine count of `config`.
    pub fn check_matches(&self, config: GameConfig) -> Result<()> {
        if self.mine_count == config.mines() {
            Ok(())
        } else {
            log::warn!(
                "Layout mine count mismatch, actual: {}, requested: {}",
                self.mine_count,
                config.mines()
            );
            Err(GameError::InvalidConfiguration)
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        if mine_mask.dim() != (usize::from(ROWS), usize::from(COLUMNS)) {
            return Err(GameError::InvalidConfiguration);
        }
        let mine_count = CellCount::try_from(mine_mask.count_set())
            .map_err(|_| GameError::InvalidConfiguration)?;
        let config = GameConfig::new(mine_count)?;
        Ok(Self {
            mine_mask,
            mine_count: config.mines(),
        })
    }

    /// Builds a layout from explicit mine positions; repeated positions count once.
    pub fn from_mine_coords(mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask = empty_grid();

        for &coords in mine_coords {
            if coords.0 >= ROWS || coords.1 >= COLUMNS {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            mines: self.mine_count,
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        TOTAL_CELLS - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Safe,
    HitMine,
}

impl MoveOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine)
    }
}
