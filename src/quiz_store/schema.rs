//! SQLite schema definitions for the quiz database.
//!
//! Children reference their parent with `ON DELETE CASCADE`, so deleting a
//! subject removes its quizzes and, transitively, their questions.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

const SUBJECT_FK: ForeignKey = ForeignKey {
    foreign_table: "subjects",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Cascade,
};

const QUIZ_FK: ForeignKey = ForeignKey {
    foreign_table: "quizzes",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::Cascade,
};

const SUBJECTS_TABLE: Table = Table {
    name: "subjects",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
    ],
    indices: &[],
};

const QUIZZES_TABLE: Table = Table {
    name: "quizzes",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!(
            "subject_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&SUBJECT_FK)
        ),
    ],
    indices: &[("idx_quizzes_subject", "subject_id")],
};

const QUESTIONS_TABLE: Table = Table {
    name: "questions",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("text", &SqlType::Text, non_null = true),
        sqlite_column!("options", &SqlType::Text, non_null = true), // JSON array of strings
        sqlite_column!("correct_answer", &SqlType::Text, non_null = true),
        sqlite_column!(
            "quiz_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&QUIZ_FK)
        ),
    ],
    indices: &[("idx_questions_quiz", "quiz_id")],
};

pub const QUIZ_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[SUBJECTS_TABLE, QUIZZES_TABLE, QUESTIONS_TABLE],
    migration: None,
}];
