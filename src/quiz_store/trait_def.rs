//! QuizStore trait definition.

use super::error::QuizStoreResult;
use super::models::{EntityCounts, NewQuestion, NewQuiz, NewSubject, Question, Quiz, Subject};

/// Storage backend for subjects, quizzes and questions.
///
/// Any operation addressing an id that does not exist fails with
/// `QuizStoreError::NotFound`. A create or update referencing a parent that
/// does not exist fails with a validation error and persists nothing.
/// Deleting a record deletes all of its descendants.
pub trait QuizStore: Send + Sync {
    // =========================================================================
    // Subjects
    // =========================================================================

    fn list_subjects(&self) -> QuizStoreResult<Vec<Subject>>;

    fn create_subject(&self, subject: NewSubject) -> QuizStoreResult<Subject>;

    fn get_subject(&self, id: i64) -> QuizStoreResult<Subject>;

    /// Replace every mutable field of a subject.
    fn update_subject(&self, id: i64, subject: NewSubject) -> QuizStoreResult<Subject>;

    /// Delete a subject together with its quizzes and their questions.
    fn delete_subject(&self, id: i64) -> QuizStoreResult<()>;

    fn list_subject_quizzes(&self, subject_id: i64) -> QuizStoreResult<Vec<Quiz>>;

    // =========================================================================
    // Quizzes
    // =========================================================================

    fn list_quizzes(&self) -> QuizStoreResult<Vec<Quiz>>;

    fn create_quiz(&self, quiz: NewQuiz) -> QuizStoreResult<Quiz>;

    fn get_quiz(&self, id: i64) -> QuizStoreResult<Quiz>;

    /// Replace title and owning subject of a quiz.
    fn update_quiz(&self, id: i64, quiz: NewQuiz) -> QuizStoreResult<Quiz>;

    /// Delete a quiz together with its questions.
    fn delete_quiz(&self, id: i64) -> QuizStoreResult<()>;

    fn list_quiz_questions(&self, quiz_id: i64) -> QuizStoreResult<Vec<Question>>;

    // =========================================================================
    // Questions
    // =========================================================================

    fn list_questions(&self) -> QuizStoreResult<Vec<Question>>;

    fn create_question(&self, question: NewQuestion) -> QuizStoreResult<Question>;

    fn get_question(&self, id: i64) -> QuizStoreResult<Question>;

    fn update_question(&self, id: i64, question: NewQuestion) -> QuizStoreResult<Question>;

    fn delete_question(&self, id: i64) -> QuizStoreResult<()>;

    // =========================================================================
    // Stats
    // =========================================================================

    fn count_entities(&self) -> QuizStoreResult<EntityCounts>;
}
