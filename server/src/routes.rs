use std::any::Any;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use mines_protocol::{
    ApiResponse, CreateGameQuery, GameView, HEALTH_PATH, MINE_PATH, MoveQuery, parse_game_id,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::service::GameService;

pub fn router(service: GameService, request_timeout: Duration) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(MINE_PATH, get(make_move).post(create_game))
        .route(&format!("{MINE_PATH}/{{game_id}}"), get(get_game))
        .with_state(service)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::failure("Internal server error")),
    )
        .into_response()
}

/// Stores may block on file I/O, so service calls run on the blocking pool.
async fn run_blocking<T, F>(service: GameService, call: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&GameService) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&service)).await?
}

async fn health() -> &'static str {
    "OK"
}

async fn create_game(
    State(service): State<GameService>,
    Query(query): Query<CreateGameQuery>,
) -> Result<impl IntoResponse> {
    let mines = query.mines()?;
    let game = run_blocking(service, move |service| service.create(mines)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(GameView::from(&game))),
    ))
}

async fn make_move(
    State(service): State<GameService>,
    Query(query): Query<MoveQuery>,
) -> Result<impl IntoResponse> {
    let request = query.parse()?;
    let game = run_blocking(service, move |service| {
        service.make_move(request.game_id, request.row, request.col)
    })
    .await?;
    Ok(Json(ApiResponse::success(GameView::from(&game))))
}

async fn get_game(
    State(service): State<GameService>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_game_id(Some(&game_id))?;
    let game = run_blocking(service, move |service| service.get(id)).await?;
    Ok(Json(ApiResponse::success(GameView::from(&game))))
}
