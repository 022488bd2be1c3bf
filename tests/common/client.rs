//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per API route. When routes or request
//! formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.api_url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.api_url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.api_url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.api_url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    /// POST with a raw, possibly malformed, JSON body
    pub async fn post_raw(&self, path: &str, body: &str) -> Response {
        self.client
            .post(self.api_url(path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("POST request failed")
    }

    /// GET / (server stats)
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Stats request failed")
    }

    // ========================================================================
    // Subjects
    // ========================================================================

    /// GET /api/subjects/
    pub async fn list_subjects(&self) -> Response {
        self.get("/subjects/").await
    }

    /// POST /api/subjects/
    pub async fn create_subject(&self, name: &str) -> Response {
        self.post("/subjects/", &json!({ "name": name })).await
    }

    pub async fn create_subject_with_body(&self, body: Value) -> Response {
        self.post("/subjects/", &body).await
    }

    /// GET /api/subjects/{id}
    pub async fn get_subject(&self, id: i64) -> Response {
        self.get(&format!("/subjects/{}", id)).await
    }

    /// PUT /api/subjects/{id}
    pub async fn update_subject(&self, id: i64, body: Value) -> Response {
        self.put(&format!("/subjects/{}", id), &body).await
    }

    /// DELETE /api/subjects/{id}
    pub async fn delete_subject(&self, id: i64) -> Response {
        self.delete(&format!("/subjects/{}", id)).await
    }

    /// GET /api/subjects/{id}/quizzes
    pub async fn list_subject_quizzes(&self, id: i64) -> Response {
        self.get(&format!("/subjects/{}/quizzes", id)).await
    }

    // ========================================================================
    // Quizzes
    // ========================================================================

    /// GET /api/quizzes/
    pub async fn list_quizzes(&self) -> Response {
        self.get("/quizzes/").await
    }

    /// POST /api/quizzes/
    pub async fn create_quiz(&self, title: &str, subject_id: i64) -> Response {
        self.post("/quizzes/", &json!({ "title": title, "subject_id": subject_id }))
            .await
    }

    pub async fn create_quiz_with_body(&self, body: Value) -> Response {
        self.post("/quizzes/", &body).await
    }

    /// GET /api/quizzes/{id}
    pub async fn get_quiz(&self, id: i64) -> Response {
        self.get(&format!("/quizzes/{}", id)).await
    }

    /// PUT /api/quizzes/{id}
    pub async fn update_quiz(&self, id: i64, body: Value) -> Response {
        self.put(&format!("/quizzes/{}", id), &body).await
    }

    /// DELETE /api/quizzes/{id}
    pub async fn delete_quiz(&self, id: i64) -> Response {
        self.delete(&format!("/quizzes/{}", id)).await
    }

    /// GET /api/quizzes/{id}/questions
    pub async fn list_quiz_questions(&self, id: i64) -> Response {
        self.get(&format!("/quizzes/{}/questions", id)).await
    }

    // ========================================================================
    // Questions
    // ========================================================================

    /// GET /api/questions/
    pub async fn list_questions(&self) -> Response {
        self.get("/questions/").await
    }

    /// POST /api/questions/
    pub async fn create_question(
        &self,
        text: &str,
        options: &[&str],
        correct_answer: &str,
        quiz_id: i64,
    ) -> Response {
        self.post(
            "/questions/",
            &json!({
                "text": text,
                "options": options,
                "correct_answer": correct_answer,
                "quiz_id": quiz_id,
            }),
        )
        .await
    }

    pub async fn create_question_with_body(&self, body: Value) -> Response {
        self.post("/questions/", &body).await
    }

    /// GET /api/questions/{id}
    pub async fn get_question(&self, id: i64) -> Response {
        self.get(&format!("/questions/{}", id)).await
    }

    /// PUT /api/questions/{id}
    pub async fn update_question(&self, id: i64, body: Value) -> Response {
        self.put(&format!("/questions/{}", id), &body).await
    }

    /// DELETE /api/questions/{id}
    pub async fn delete_question(&self, id: i64) -> Response {
        self.delete(&format!("/questions/{}", id)).await
    }
}
