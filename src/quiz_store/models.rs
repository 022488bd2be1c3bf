//! Entity records, checked inputs and raw request payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three kinds of records held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Subject,
    Quiz,
    Question,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Subject => "subject",
            EntityKind::Quiz => "quiz",
            EntityKind::Question => "question",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Stored records
// =============================================================================

/// Top-level grouping of quizzes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub subject_id: i64,
}

/// A multiple-choice prompt.
///
/// `correct_answer` is expected to be one of `options` but this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub quiz_id: i64,
}

/// Number of records per entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub subjects: usize,
    pub quizzes: usize,
    pub questions: usize,
}

// =============================================================================
// Checked inputs (all mutable fields, no id)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubject {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuiz {
    pub title: String,
    pub subject_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub quiz_id: i64,
}

// =============================================================================
// Request payloads
// =============================================================================
//
// Every field is optional so that an absent or null field reaches validation
// instead of failing inside the JSON decoder.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectPayload {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizPayload {
    pub title: Option<String>,
    pub subject_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPayload {
    pub text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub quiz_id: Option<i64>,
}
