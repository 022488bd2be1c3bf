use anyhow::{Context, Result};
use std::future::Future;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::services::ServeDir;
use tracing::{error, info};

use super::state::{GuardedQuizStore, ServerState};
use super::{
    log_requests, make_question_routes, make_quiz_routes, make_subject_routes, ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub subjects: usize,
    pub quizzes: usize,
    pub questions: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> Response {
    match state.quiz_store.count_entities() {
        Ok(counts) => Json(ServerStats {
            uptime: format_uptime(state.start_time.elapsed()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            subjects: counts.subjects,
            quizzes: counts.quizzes,
            questions: counts.questions,
        })
        .into_response(),
        Err(err) => {
            error!("Failed to count entities: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Routes mounted under `/api`.
fn make_api_routes(state: ServerState) -> Router {
    Router::new()
        .merge(make_subject_routes(state.clone()))
        .merge(make_quiz_routes(state.clone()))
        .merge(make_question_routes(state))
}

pub fn make_app(config: ServerConfig, quiz_store: GuardedQuizStore) -> Router {
    let state = ServerState::new(config.clone(), quiz_store);

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)).with_state(state.clone()),
    };

    home_router
        .nest("/api", make_api_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, log_requests))
}

/// Serve the API until `shutdown` resolves.
pub async fn run_server<F>(
    config: ServerConfig,
    quiz_store: GuardedQuizStore,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, quiz_store);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Ready to serve at {}!", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}
