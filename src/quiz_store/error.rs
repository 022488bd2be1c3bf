use super::models::EntityKind;
use super::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizStoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid stored question options: {0}")]
    OptionsEncoding(#[from] serde_json::Error),

    #[error("Store connection lock poisoned")]
    LockPoisoned,
}

impl QuizStoreError {
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        QuizStoreError::NotFound { entity, id }
    }

    pub fn missing_parent(entity: EntityKind, id: i64) -> Self {
        QuizStoreError::Validation(ValidationError::MissingParent { entity, id })
    }
}

pub type QuizStoreResult<T> = Result<T, QuizStoreError>;
