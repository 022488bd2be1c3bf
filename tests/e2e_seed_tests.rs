//! End-to-end tests for seeding a running server over HTTP

mod common;

use common::*;
use quiz_server::seed::{seed_quiz, HttpQuizApi, SeedError, SeedFile, SeedQuestion};
use serde_json::Value;
use std::time::Duration;

fn math_seed(texts: &[&str]) -> SeedFile {
    SeedFile {
        subject: "Math".to_string(),
        quiz: "Basics".to_string(),
        questions: texts
            .iter()
            .map(|text| SeedQuestion {
                text: text.to_string(),
                options: vec!["3".to_string(), "4".to_string()],
                correct_answer: "4".to_string(),
            })
            .collect(),
    }
}

fn api_for(server: &TestServer) -> HttpQuizApi {
    HttpQuizApi::new(&server.base_url, "/api", Some(Duration::from_secs(10))).unwrap()
}

#[tokio::test]
async fn test_seeding_twice_creates_records_once() {
    let server = TestServer::spawn_empty().await;
    let api = api_for(&server);
    let seed = math_seed(&["2+2?"]);

    let first = seed_quiz(&api, &seed).await.unwrap();
    assert!(first.subject_created);
    assert!(first.quiz_created);
    assert_eq!(first.questions_created, 1);

    let second = seed_quiz(&api, &seed).await.unwrap();
    assert!(!second.subject_created);
    assert!(!second.quiz_created);
    assert_eq!(second.questions_created, 0);
    assert_eq!(second.total_questions, 1);

    let client = TestClient::new(server.base_url.clone());
    let stats: Value = client.get_stats().await.json().await.unwrap();
    assert_eq!(stats["subjects"], 1);
    assert_eq!(stats["quizzes"], 1);
    assert_eq!(stats["questions"], 1);
}

#[tokio::test]
async fn test_seeding_with_appended_question_adds_one() {
    let server = TestServer::spawn_empty().await;
    let api = api_for(&server);

    seed_quiz(&api, &math_seed(&["2+2?"])).await.unwrap();
    let report = seed_quiz(&api, &math_seed(&["2+2?", "3+3?"]))
        .await
        .unwrap();

    assert_eq!(report.questions_created, 1);
    assert_eq!(report.questions_skipped, 1);
    assert_eq!(report.total_questions, 2);
}

#[tokio::test]
async fn test_seeding_reuses_fixture_records() {
    let server = TestServer::spawn().await;
    let api = api_for(&server);

    let report = seed_quiz(&api, &math_seed(&[ADDITION_QUESTION_TEXT, "7-2?"]))
        .await
        .unwrap();

    assert_eq!(report.subject_id, MATH_SUBJECT_ID);
    assert_eq!(report.quiz_id, BASICS_QUIZ_ID);
    assert_eq!(report.questions_created, 1);
    assert_eq!(report.total_questions, 3);

    let client = TestClient::new(server.base_url.clone());
    let original: Value = client
        .get_question(ADDITION_QUESTION_ID)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(original["options"], serde_json::json!(["3", "4", "5"]));
}

#[tokio::test]
async fn test_seed_file_from_disk() {
    let server = TestServer::spawn_empty().await;
    let api = api_for(&server);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"{
            "materia": "Science",
            "quiz": "Planets",
            "perguntas": [
                {"pergunta": "Largest planet?", "respostas": ["Mars", "Jupiter"], "correta": "Jupiter"}
            ]
        }"#,
    )
    .unwrap();

    let seed = SeedFile::load(&path).unwrap();
    let report = seed_quiz(&api, &seed).await.unwrap();
    assert_eq!(report.total_questions, 1);

    let question = &server.quiz_store.list_questions().unwrap()[0];
    assert_eq!(question.correct_answer, "Jupiter");
}

#[tokio::test]
async fn test_wrong_api_prefix_reports_status() {
    let server = TestServer::spawn_empty().await;
    let api = HttpQuizApi::new(&server.base_url, "/nope", None).unwrap();

    let err = seed_quiz(&api, &math_seed(&["2+2?"])).await.unwrap_err();
    assert!(matches!(err, SeedError::Status { status: 404, .. }));
}
