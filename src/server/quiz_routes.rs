//! `/quizzes` resource.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;

use super::api_error::ApiResult;
use super::state::{GuardedQuizStore, ServerState};
use crate::quiz_store::{validate_quiz, Question, Quiz, QuizPayload};

async fn list_quizzes(State(store): State<GuardedQuizStore>) -> ApiResult<Json<Vec<Quiz>>> {
    Ok(Json(store.list_quizzes()?))
}

async fn create_quiz(
    State(store): State<GuardedQuizStore>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Quiz>)> {
    let Json(payload) = payload?;
    let quiz = store.create_quiz(validate_quiz(payload)?)?;
    info!(
        "Created quiz {} ({:?}) under subject {}",
        quiz.id, quiz.title, quiz.subject_id
    );
    Ok((StatusCode::CREATED, Json(quiz)))
}

async fn get_quiz(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Quiz>> {
    let Path(id) = id?;
    Ok(Json(store.get_quiz(id)?))
}

async fn put_quiz(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> ApiResult<Json<Quiz>> {
    let Path(id) = id?;
    store.get_quiz(id)?;
    let Json(payload) = payload?;
    Ok(Json(store.update_quiz(id, validate_quiz(payload)?)?))
}

async fn delete_quiz(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    store.delete_quiz(id)?;
    info!("Deleted quiz {} and its questions", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_quiz_questions(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<Question>>> {
    let Path(id) = id?;
    Ok(Json(store.list_quiz_questions(id)?))
}

pub fn make_quiz_routes(state: ServerState) -> Router {
    Router::new()
        .route("/quizzes", get(list_quizzes).post(create_quiz))
        .route("/quizzes/", get(list_quizzes).post(create_quiz))
        .route("/quizzes/{id}", get(get_quiz).put(put_quiz).delete(delete_quiz))
        .route("/quizzes/{id}/questions", get(list_quiz_questions))
        .with_state(state)
}
