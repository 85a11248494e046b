use std::sync::Arc;

use mines_core::{Game, GameConfig, GameId};

use crate::error::Result;
use crate::store::GameStore;

/// Runs engine operations against stored games.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// Creates and stores a game with `mines` mines; out-of-range counts are rejected before
    /// any layout is drawn.
    pub fn create(&self, mines: i64) -> Result<Game> {
        let config = GameConfig::from_request(mines)?;
        let game = Game::new(config.mines())?;
        self.store.create(&game)?;
        tracing::info!(game_id = %game.id(), mines = config.mines(), "game created");
        Ok(game)
    }

    pub fn get(&self, id: GameId) -> Result<Game> {
        Ok(self.store.load(id)?)
    }

    /// Loads the game, reveals `(row, col)` and writes it back. A concurrent writer that got
    /// there first makes the write fail instead of being overwritten.
    pub fn make_move(&self, id: GameId, row: i64, col: i64) -> Result<Game> {
        let mut game = self.store.load(id)?;
        let outcome = game.apply_move(row, col)?;
        let game = self.store.replace(&game)?;
        tracing::info!(
            game_id = %id,
            row,
            col,
            ?outcome,
            payout = game.payout(),
            "move applied"
        );
        Ok(game)
    }
}
