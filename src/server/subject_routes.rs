//! `/subjects` resource.

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
use crate::quiz_store::{validate_subject, Quiz, Subject, SubjectPayload};

async fn list_subjects(State(store): State<GuardedQuizStore>) -> ApiResult<Json<Vec<Subject>>> {
    Ok(Json(store.list_subjects()?))
}

async fn create_subject(
    State(store): State<GuardedQuizStore>,
    payload: Result<Json<SubjectPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Subject>)> {
    let Json(payload) = payload?;
    let subject = store.create_subject(validate_subject(payload)?)?;
    info!("Created subject {} ({:?})", subject.id, subject.name);
    Ok((StatusCode::CREATED, Json(subject)))
}

async fn get_subject(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Subject>> {
    let Path(id) = id?;
    Ok(Json(store.get_subject(id)?))
}

async fn put_subject(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SubjectPayload>, JsonRejection>,
) -> ApiResult<Json<Subject>> {
    let Path(id) = id?;
    store.get_subject(id)?;
    let Json(payload) = payload?;
    Ok(Json(store.update_subject(id, validate_subject(payload)?)?))
}

async fn delete_subject(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    store.delete_subject(id)?;
    info!("Deleted subject {} and its quizzes", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_subject_quizzes(
    State(store): State<GuardedQuizStore>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<Quiz>>> {
    let Path(id) = id?;
    Ok(Json(store.list_subject_quizzes(id)?))
}

pub fn make_subject_routes(state: ServerState) -> Router {
    Router::new()
        .route("/subjects", get(list_subjects).post(create_subject))
        .route("/subjects/", get(list_subjects).post(create_subject))
        .route(
            "/subjects/{id}",
            get(get_subject).put(put_subject).delete(delete_subject),
        )
        .route("/subjects/{id}/quizzes", get(list_subject_quizzes))
        .with_state(state)
}
