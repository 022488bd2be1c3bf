//! HTTP client for a running quiz server.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use super::api::QuizApi;
use super::error::SeedError;
use crate::quiz_store::{NewQuestion, NewQuiz, NewSubject, Question, Quiz, Subject};

/// `QuizApi` backed by the REST routes of a quiz server.
///
/// Requests are sent one at a time and never retried.
pub struct HttpQuizApi {
    client: reqwest::Client,
    api_root: String,
}

impl HttpQuizApi {
    /// Create a client for the API found at `base_url` + `api_prefix`
    /// (e.g. "http://127.0.0.1:5000" and "/api").
    pub fn new(
        base_url: &str,
        api_prefix: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, SeedError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| SeedError::Transport {
            action: "Creating HTTP client".to_string(),
            source,
        })?;

        let base_url = base_url.trim_end_matches('/');
        let api_prefix = api_prefix.trim_matches('/');
        let api_root = if api_prefix.is_empty() {
            base_url.to_string()
        } else {
            format!("{}/{}", base_url, api_prefix)
        };

        Ok(Self { client, api_root })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    async fn parse_response<T: DeserializeOwned>(
        action: String,
        response: reqwest::Response,
    ) -> Result<T, SeedError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::Status {
                action,
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|source| SeedError::Transport { action, source })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SeedError> {
        let url = format!("{}{}", self.api_root, path);
        let action = format!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SeedError::Transport {
                action: action.clone(),
                source,
            })?;
        Self::parse_response(action, response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SeedError> {
        let url = format!("{}{}", self.api_root, path);
        let action = format!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| SeedError::Transport {
                action: action.clone(),
                source,
            })?;
        Self::parse_response(action, response).await
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn list_subjects(&self) -> Result<Vec<Subject>, SeedError> {
        self.get_json("/subjects/").await
    }

    async fn create_subject(&self, name: &str) -> Result<Subject, SeedError> {
        let body = NewSubject {
            name: name.to_string(),
        };
        self.post_json("/subjects/", &body).await
    }

    async fn list_subject_quizzes(&self, subject_id: i64) -> Result<Vec<Quiz>, SeedError> {
        self.get_json(&format!("/subjects/{}/quizzes", subject_id))
            .await
    }

    async fn create_quiz(&self, title: &str, subject_id: i64) -> Result<Quiz, SeedError> {
        let body = NewQuiz {
            title: title.to_string(),
            subject_id,
        };
        self.post_json("/quizzes/", &body).await
    }

    async fn list_quiz_questions(&self, quiz_id: i64) -> Result<Vec<Question>, SeedError> {
        self.get_json(&format!("/quizzes/{}/questions", quiz_id))
            .await
    }

    async fn create_question(&self, question: &NewQuestion) -> Result<Question, SeedError> {
        self.post_json("/questions/", question).await
    }
}
