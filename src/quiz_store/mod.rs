//! Storage model for subjects, quizzes and questions.

mod error;
pub mod models;
mod schema;
mod store;
mod trait_def;
mod validation;

pub use error::{QuizStoreError, QuizStoreResult};
pub use models::*;
pub use schema::QUIZ_VERSIONED_SCHEMAS;
pub use store::SqliteQuizStore;
pub use trait_def::QuizStore;
pub use validation::{
    validate_question, validate_quiz, validate_subject, ValidationError, ValidationResult,
};
