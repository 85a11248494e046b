use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mines_core::GameError;
use mines_protocol::{ApiResponse, ParamError};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Param(_) => StatusCode::BAD_REQUEST,
            Self::Game(err) => match err {
                GameError::InvalidConfiguration | GameError::OutOfBounds => {
                    StatusCode::BAD_REQUEST
                }
                GameError::GameAlreadyOver | GameError::CellAlreadyRevealed => StatusCode::CONFLICT,
            },
            Self::Store(err) => match err {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::AlreadyExists(_) | StoreError::ConcurrentModification { .. } => {
                    StatusCode::CONFLICT
                }
                StoreError::LockPoisoned | StoreError::Io(_) | StoreError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}
