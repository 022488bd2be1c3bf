//! Idempotent creation of a subject, a quiz and its questions.
//!
//! Records are matched by exact, case-sensitive text: a subject by name, a
//! quiz by title within the subject, a question by text within the quiz.
//! When several records share a name the first one listed (lowest id) is
//! reused. Existing records are never modified.

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

use super::api::QuizApi;
use super::error::SeedError;
use super::seed_file::SeedFile;
use crate::quiz_store::NewQuestion;

/// Outcome of one seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub subject_id: i64,
    pub subject_created: bool,
    pub quiz_id: i64,
    pub quiz_created: bool,
    pub questions_created: usize,
    pub questions_skipped: usize,
    /// Questions in the quiz after the run, including pre-existing ones.
    pub total_questions: usize,
}

/// Make sure everything described by `seed` exists, creating only what is
/// missing. The first failing request aborts the run; records created
/// before it are kept.
pub async fn seed_quiz<A>(api: &A, seed: &SeedFile) -> Result<SeedReport, SeedError>
where
    A: QuizApi + ?Sized,
{
    let (subject_id, subject_created) = resolve_subject(api, &seed.subject).await?;
    let (quiz_id, quiz_created) = resolve_quiz(api, subject_id, &seed.quiz).await?;

    let mut known_texts: HashSet<String> = api
        .list_quiz_questions(quiz_id)
        .await?
        .into_iter()
        .map(|question| question.text)
        .collect();
    info!("Quiz {} has {} existing questions", quiz_id, known_texts.len());

    let mut questions_created = 0;
    let mut questions_skipped = 0;
    for question in &seed.questions {
        if known_texts.contains(&question.text) {
            debug!("Skipping existing question: {}", question.text);
            questions_skipped += 1;
            continue;
        }
        let created = api
            .create_question(&NewQuestion {
                text: question.text.clone(),
                options: question.options.clone(),
                correct_answer: question.correct_answer.clone(),
                quiz_id,
            })
            .await?;
        info!("Created question {}: {}", created.id, created.text);
        known_texts.insert(question.text.clone());
        questions_created += 1;
    }

    let total_questions = api.list_quiz_questions(quiz_id).await?.len();

    Ok(SeedReport {
        subject_id,
        subject_created,
        quiz_id,
        quiz_created,
        questions_created,
        questions_skipped,
        total_questions,
    })
}

async fn resolve_subject<A>(api: &A, name: &str) -> Result<(i64, bool), SeedError>
where
    A: QuizApi + ?Sized,
{
    let existing = api
        .list_subjects()
        .await?
        .into_iter()
        .find(|subject| subject.name == name);
    if let Some(subject) = existing {
        info!("Using existing subject {} ({})", subject.id, subject.name);
        return Ok((subject.id, false));
    }
    let subject = api.create_subject(name).await?;
    info!("Created subject {} ({})", subject.id, subject.name);
    Ok((subject.id, true))
}

async fn resolve_quiz<A>(api: &A, subject_id: i64, title: &str) -> Result<(i64, bool), SeedError>
where
    A: QuizApi + ?Sized,
{
    let existing = api
        .list_subject_quizzes(subject_id)
        .await?
        .into_iter()
        .find(|quiz| quiz.title == title);
    if let Some(quiz) = existing {
        info!("Using existing quiz {} ({})", quiz.id, quiz.title);
        return Ok((quiz.id, false));
    }
    let quiz = api.create_quiz(title, subject_id).await?;
    info!("Created quiz {} ({})", quiz.id, quiz.title);
    Ok((quiz.id, true))
}
