//! File-based GameStore.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use mines_core::{Game, GameId};

use super::{GameStore, Result, StoreError, check_revision};

/// Stores each game as `{id}.json` under a base directory.
///
/// Writes go to a temporary file first and are renamed into place, so readers never see a
/// half-written game. Writes within one process are serialized to keep the revision check
/// and the write together.
#[derive(Debug)]
pub struct FileGameStore {
    base_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileGameStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn game_path(&self, id: GameId) -> PathBuf {
        self.base_dir.join(format!("{id}.json"))
    }

    fn read(&self, id: GameId) -> Result<Game> {
        let bytes = match fs::read(self.game_path(id)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound(id)),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write(&self, game: &Game) -> Result<()> {
        let path = self.game_path(game.id());
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec(game)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved game {} to {}", game.id(), path.display());
        Ok(())
    }
}

impl GameStore for FileGameStore {
    fn create(&self, game: &Game) -> Result<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        if self.game_path(game.id()).exists() {
            return Err(StoreError::AlreadyExists(game.id()));
        }
        self.write(game)
    }

    fn load(&self, id: GameId) -> Result<Game> {
        self.read(id)
    }

    fn replace(&self, game: &Game) -> Result<Game> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let stored = self.read(game.id())?;
        let next = check_revision(&stored, game)?;
        self.write(&next)?;
        Ok(next)
    }
}
