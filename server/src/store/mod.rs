//! Persistence contract for games, keyed by [`GameId`].

use mines_core::{Game, GameId};
use thiserror::Error;

pub use file::FileGameStore;
pub use memory::MemoryGameStore;

mod file;
mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    NotFound(GameId),

    #[error("game {0} already exists")]
    AlreadyExists(GameId),

    #[error("game {id} was modified concurrently (expected revision {expected}, found {found})")]
    ConcurrentModification { id: GameId, expected: u64, found: u64 },

    #[error("game store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage for game state between requests.
///
/// `replace` is a compare-and-swap on [`Game::revision`]: it only succeeds when the stored
/// revision still equals the caller's, and the stored copy comes back with the next revision.
pub trait GameStore: Send + Sync {
    /// Stores a game that was just created.
    fn create(&self, game: &Game) -> Result<()>;

    fn load(&self, id: GameId) -> Result<Game>;

    /// Overwrites a stored game and returns the copy as stored.
    fn replace(&self, game: &Game) -> Result<Game>;
}

/// Shared revision check of both stores.
fn check_revision(stored: &Game, incoming: &Game) -> Result<Game> {
    if stored.revision() != incoming.revision() {
        return Err(StoreError::ConcurrentModification {
            id: incoming.id(),
            expected: incoming.revision(),
            found: stored.revision(),
        });
    }
    let mut next = incoming.clone();
    next.advance_revision();
    Ok(next)
}

#[cfg(test)]
pub(crate) mod contract {
    //! Behaviour every [`GameStore`] must show, run against each implementation.

    use super::*;
    use mines_core::MineLayout;

    pub fn game() -> Game {
        Game::from_layout(MineLayout::from_mine_coords(&[(4, 4)]).unwrap())
    }

    pub fn create_then_load(store: &dyn GameStore) {
        let game = game();
        store.create(&game).unwrap();

        assert_eq!(store.load(game.id()).unwrap(), game);
    }

    pub fn create_twice_fails(store: &dyn GameStore) {
        let game = game();
        store.create(&game).unwrap();

        assert!(matches!(
            store.create(&game),
            Err(StoreError::AlreadyExists(id)) if id == game.id()
        ));
    }

    pub fn unknown_game_is_not_found(store: &dyn GameStore) {
        let game = game();

        assert!(matches!(store.load(game.id()), Err(StoreError::NotFound(_))));
        assert!(matches!(store.replace(&game), Err(StoreError::NotFound(_))));
    }

    pub fn replace_bumps_revision(store: &dyn GameStore) {
        let game = game();
        store.create(&game).unwrap();

        let mut moved = store.load(game.id()).unwrap();
        moved.apply_move(0, 0).unwrap();
        let stored = store.replace(&moved).unwrap();

        assert_eq!(stored.revision(), 1);
        assert_eq!(stored.safe_reveals(), 1);
        assert_eq!(store.load(game.id()).unwrap(), stored);
    }

    pub fn stale_replace_is_rejected(store: &dyn GameStore) {
        let game = game();
        store.create(&game).unwrap();

        let mut first = store.load(game.id()).unwrap();
        let mut second = store.load(game.id()).unwrap();
        first.apply_move(0, 0).unwrap();
        second.apply_move(1, 1).unwrap();

        store.replace(&first).unwrap();
        assert!(matches!(
            store.replace(&second),
            Err(StoreError::ConcurrentModification {
                expected: 0,
                found: 1,
                ..
            })
        ));

        let stored = store.load(game.id()).unwrap();
        assert!(stored.is_revealed((0, 0)));
        assert!(!stored.is_revealed((1, 1)));
    }
}
