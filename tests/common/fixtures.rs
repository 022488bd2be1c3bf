//! Test database creation

use super::constants::*;
use anyhow::Result;
use quiz_server::quiz_store::{NewQuestion, NewQuiz, NewSubject, QuizStore, SqliteQuizStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates an empty quiz database in a fresh temporary directory.
/// Returns (temp_dir, db_path)
pub fn create_empty_quiz_db() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("quiz.db");
    SqliteQuizStore::new(&db_path)?;
    Ok((dir, db_path))
}

/// Creates a quiz database holding two subjects, one quiz and two questions.
/// Returns (temp_dir, db_path)
pub fn create_test_quiz_db() -> Result<(TempDir, PathBuf)> {
    let (dir, db_path) = create_empty_quiz_db()?;
    let store = SqliteQuizStore::new(&db_path)?;
    populate_quiz_db(&store)?;
    Ok((dir, db_path))
}

fn populate_quiz_db(store: &SqliteQuizStore) -> Result<()> {
    let math = store.create_subject(NewSubject {
        name: MATH_SUBJECT_NAME.to_string(),
    })?;
    let history = store.create_subject(NewSubject {
        name: HISTORY_SUBJECT_NAME.to_string(),
    })?;
    assert_eq!(math.id, MATH_SUBJECT_ID);
    assert_eq!(history.id, HISTORY_SUBJECT_ID);

    let basics = store.create_quiz(NewQuiz {
        title: BASICS_QUIZ_TITLE.to_string(),
        subject_id: math.id,
    })?;
    assert_eq!(basics.id, BASICS_QUIZ_ID);

    store.create_question(NewQuestion {
        text: ADDITION_QUESTION_TEXT.to_string(),
        options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
        correct_answer: "4".to_string(),
        quiz_id: basics.id,
    })?;
    store.create_question(NewQuestion {
        text: PRODUCT_QUESTION_TEXT.to_string(),
        options: vec!["6".to_string(), "9".to_string()],
        correct_answer: "9".to_string(),
        quiz_id: basics.id,
    })?;
    Ok(())
}
