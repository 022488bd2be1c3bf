//! `/questions` resource.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use super::api_error::ApiResult;
use super::state::{GuardedQuizStore, ServerState};
use crate::quiz_store::{validate_question, Question, QuestionPayload};

async fn list_questions(
    State(store): State<GuardedQuizStore>,
) -> ApiResult<Json<Vec<Question>>> {
    Ok(Json(store.list_questions()?))
}

async fn create_question(
    State(store): State<GuardedQuizStore>,
    payload: Result<Json<QuestionPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Question>)> {
    let Json(payload) = payload?;
    let question = store.create_question(validate_question(payload)?)?;
    info!(
        "Created question {} under quiz {}",
        question.id, question.quiz_id
    );
    Ok((StatusCode::CREATED, Json(question)))
}

async fn get_question(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Question>> {
    let Path(id) = id?;
    Ok(Json(store.get_question(id)?))
}

async fn put_question(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<QuestionPayload>, JsonRejection>,
) -> ApiResult<Json<Question>> {
    let Path(id) = id?;
    store.get_question(id)?;
    let Json(payload) = payload?;
    let question = validate_question(payload)?;
    debug!("Replacing question {} with {:?}", id, question);
    Ok(Json(store.update_question(id, question)?))
}

async fn delete_question(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    store.delete_question(id)?;
    info!("Deleted question {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn make_question_routes(state: ServerState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/", get(list_questions).post(create_question))
        .route(
            "/questions/{id}",
            get(get_question).put(put_question).delete(delete_question),
        )
        .with_state(state)
}
