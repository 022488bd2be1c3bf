//! Validation of request payloads.
//!
//! Turns the loosely-typed payloads decoded from request bodies into the
//! checked inputs accepted by the store. Parent existence is checked by the
//! store itself, inside the write transaction.

use super::models::{
    EntityKind, NewQuestion, NewQuiz, NewSubject, QuestionPayload, QuizPayload, SubjectPayload,
};
use std::fmt;

/// Validation error types
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingField { field: &'static str },
    EmptyField { field: &'static str },
    MissingParent { entity: EntityKind, id: i64 },
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "Field '{}' is required", field)
            }
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
            ValidationError::MissingParent { entity, id } => {
                write!(f, "Referenced {} '{}' does not exist", entity, id)
            }
            ValidationError::MalformedBody { reason } => {
                write!(f, "Malformed request body: {}", reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn require<T>(field: &'static str, value: Option<T>) -> ValidationResult<T> {
    value.ok_or(ValidationError::MissingField { field })
}

/// Like `require`, but also rejects blank text.
fn require_non_blank(field: &'static str, value: Option<String>) -> ValidationResult<String> {
    let value = require(field, value)?;
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

pub fn validate_subject(payload: SubjectPayload) -> ValidationResult<NewSubject> {
    Ok(NewSubject {
        name: require_non_blank("name", payload.name)?,
    })
}

pub fn validate_quiz(payload: QuizPayload) -> ValidationResult<NewQuiz> {
    Ok(NewQuiz {
        title: require("title", payload.title)?,
        subject_id: require("subject_id", payload.subject_id)?,
    })
}

/// Validate a question payload.
///
/// `options` may be any list, and `correct_answer` is not checked against it.
pub fn validate_question(payload: QuestionPayload) -> ValidationResult<NewQuestion> {
    Ok(NewQuestion {
        text: require("text", payload.text)?,
        options: require("options", payload.options)?,
        correct_answer: require("correct_answer", payload.correct_answer)?,
        quiz_id: require("quiz_id", payload.quiz_id)?,
    })
}
