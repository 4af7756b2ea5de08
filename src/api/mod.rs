//! HTTP layer: axum router and one handler module per resource.

pub mod players;
pub mod task_lists;
pub mod tasks;
pub mod teams;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::{BoardDb, RosterDb};

/// Shared state for all API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Roster store (teams and players).
    pub roster: RosterDb,
    /// Board store (task lists and tasks).
    pub board: BoardDb,
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/teams",
            get(teams::list_teams).post(teams::create_team),
        )
        .route(
            "/teams/{id}",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route(
            "/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/players/{id}",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route(
            "/task-lists",
            get(task_lists::list_task_lists).post(task_lists::create_task_list),
        )
        .route(
            "/task-lists/{id}",
            get(task_lists::get_task_list)
                .put(task_lists::update_task_list)
                .delete(task_lists::delete_task_list),
        )
        .route(
            "/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve requests until ctrl-c.
pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("API server shutting down");
        })
        .await?;

    Ok(())
}
