//! Wire format shared by the mines server and its clients.

use core::str::FromStr;

use mines_core::{CellCount, Game, GameId, GridRowsExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HEALTH_PATH: &str = "/health";
pub const MINE_PATH: &str = "/v1/mine";

/// Envelope wrapped around every JSON response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// What a player may see of a game. `board` carries the mine layout and is only filled in
/// once the game is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub id: GameId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<Vec<bool>>>,
    pub moves: Vec<Vec<bool>>,
    pub mines: CellCount,
    pub revealed: CellCount,
    pub game_over: bool,
    pub payout: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_payout: Option<f64>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            board: game
                .is_over()
                .then(|| game.mine_layout().mine_mask().to_rows()),
            moves: game.revealed_mask().to_rows(),
            mines: game.mine_count(),
            revealed: game.safe_reveals(),
            game_over: game.is_over(),
            payout: game.payout(),
            next_payout: game.next_payout(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

fn parse_param<T: FromStr>(name: &'static str, value: Option<&str>) -> Result<T, ParamError> {
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ParamError::Missing(name))?;
    value.parse().map_err(|_| ParamError::Invalid {
        name,
        value: value.to_string(),
    })
}

/// Query string of `POST /v1/mine`. Fields stay raw so missing and malformed values can be
/// reported by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGameQuery {
    pub mines: Option<String>,
}

impl CreateGameQuery {
    pub fn mines(&self) -> Result<i64, ParamError> {
        parse_param("mines", self.mines.as_deref())
    }
}

/// Query string of `GET /v1/mine`; `x` is the row and `y` the column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveQuery {
    pub game_id: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
}

/// A move request after its parameters were parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub game_id: GameId,
    pub row: i64,
    pub col: i64,
}

impl MoveQuery {
    pub fn parse(&self) -> Result<MoveRequest, ParamError> {
        Ok(MoveRequest {
            game_id: parse_game_id(self.game_id.as_deref())?,
            row: parse_param("x", self.x.as_deref())?,
            col: parse_param("y", self.y.as_deref())?,
        })
    }
}

pub fn parse_game_id(value: Option<&str>) -> Result<GameId, ParamError> {
    parse_param("game_id", value)
}
