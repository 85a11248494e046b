//! In-memory GameStore for tests and single-process deployments.

use std::sync::RwLock;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use mines_core::{Game, GameId};

use super::{GameStore, Result, StoreError, check_revision};

/// Games live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: RwLock<HashMap<GameId, Game>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let games = self.games.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(games.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl GameStore for MemoryGameStore {
    fn create(&self, game: &Game) -> Result<()> {
        let mut games = self.games.write().map_err(|_| StoreError::LockPoisoned)?;
        match games.entry(game.id()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(game.id())),
            Entry::Vacant(slot) => {
                slot.insert(game.clone());
                Ok(())
            }
        }
    }

    fn load(&self, id: GameId) -> Result<Game> {
        let games = self.games.read().map_err(|_| StoreError::LockPoisoned)?;
        games.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn replace(&self, game: &Game) -> Result<Game> {
        let mut games = self.games.write().map_err(|_| StoreError::LockPoisoned)?;
        let stored = games
            .get_mut(&game.id())
            .ok_or(StoreError::NotFound(game.id()))?;
        let next = check_revision(stored, game)?;
        *stored = next.clone();
        Ok(next)
    }
}
