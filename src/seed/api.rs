use super::error::SeedError;
use crate::quiz_store::{NewQuestion, Question, Quiz, Subject};
use async_trait::async_trait;

/// The subset of the quiz REST API the seeding routine relies on.
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn list_subjects(&self) -> Result<Vec<Subject>, SeedError>;

    async fn create_subject(&self, name: &str) -> Result<Subject, SeedError>;

    async fn list_subject_quizzes(&self, subject_id: i64) -> Result<Vec<Quiz>, SeedError>;

    async fn create_quiz(&self, title: &str, subject_id: i64) -> Result<Quiz, SeedError>;

    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<Question>, SeedError>;

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, SeedError>;
}
