//! HTTP service around the mines engine: persistence, routing and configuration.

use std::sync::Arc;

pub use config::ServerConfig;
pub use error::ServiceError;
pub use routes::router;
pub use service::GameService;
pub use store::{FileGameStore, GameStore, MemoryGameStore, StoreError};

pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod store;

/// Picks the store the configuration asks for.
pub fn open_store(config: &ServerConfig) -> store::Result<Arc<dyn GameStore>> {
    Ok(match &config.data_dir {
        Some(dir) => {
            tracing::info!("Storing games under {}", dir.display());
            Arc::new(FileGameStore::new(dir)?)
        }
        None => {
            tracing::info!("Storing games in memory");
            Arc::new(MemoryGameStore::new())
        }
    })
}
