//! SQLite-backed quiz store implementation.

use super::error::{QuizStoreError, QuizStoreResult};
use super::models::*;
use super::schema::QUIZ_VERSIONED_SCHEMAS;
use super::trait_def::QuizStore;
use crate::sqlite_persistence::{VersionedSchema, BASE_DB_VERSION};
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// SQLite-backed store for subjects, quizzes and questions.
///
/// A single connection is shared behind a mutex, so writes are serialized.
/// Foreign keys are enabled on the connection and cascade deletes downward.
#[derive(Clone)]
pub struct SqliteQuizStore {
    conn: Arc<Mutex<Connection>>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = QUIZ_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &QUIZ_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!("Creating quiz db schema at version {}", latest_version);
        return create_schema(conn, latest_schema);
    }

    if db_version < BASE_DB_VERSION as i64 {
        bail!(
            "Database has tables but no quiz schema version (user_version = {})",
            db_version
        );
    }
    let mut current_version = (db_version - BASE_DB_VERSION as i64) as usize;
    if current_version > latest_version {
        bail!(
            "Database schema version {} is newer than the latest known version {}",
            current_version,
            latest_version
        );
    }

    if current_version < latest_version {
        let tx = conn.transaction()?;
        for schema in QUIZ_VERSIONED_SCHEMAS.iter().skip(current_version + 1) {
            if let Some(migration_fn) = schema.migration {
                info!(
                    "Migrating quiz db from version {} to {}",
                    current_version, schema.version
                );
                migration_fn(&tx)?;
            }
            current_version = schema.version;
        }
        tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
        tx.commit()?;
    }

    latest_schema
        .validate(conn)
        .context("Quiz database does not match the expected schema")
}

/// Create every table and stamp the version in one transaction, so a failed
/// creation leaves an empty database behind.
fn create_schema(conn: &mut Connection, schema: &VersionedSchema) -> Result<()> {
    let tx = conn.transaction()?;
    schema.create(&tx)?;
    tx.commit()?;
    Ok(())
}

fn exists(conn: &Connection, table: &str, id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", table),
        params![id],
        |r| r.get(0),
    )
}

fn row_to_subject(row: &Row) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_quiz(row: &Row) -> rusqlite::Result<Quiz> {
    Ok(Quiz {
        id: row.get(0)?,
        title: row.get(1)?,
        subject_id: row.get(2)?,
    })
}

/// A `questions` row with `options` still in its stored JSON form.
struct QuestionRow {
    id: i64,
    text: String,
    options: String,
    correct_answer: String,
    quiz_id: i64,
}

impl QuestionRow {
    fn into_question(self) -> QuizStoreResult<Question> {
        Ok(Question {
            id: self.id,
            text: self.text,
            options: serde_json::from_str(&self.options)?,
            correct_answer: self.correct_answer,
            quiz_id: self.quiz_id,
        })
    }
}

fn row_to_question(row: &Row) -> rusqlite::Result<QuestionRow> {
    Ok(QuestionRow {
        id: row.get(0)?,
        text: row.get(1)?,
        options: row.get(2)?,
        correct_answer: row.get(3)?,
        quiz_id: row.get(4)?,
    })
}

const SUBJECT_COLUMNS: &str = "id, name";
const QUIZ_COLUMNS: &str = "id, title, subject_id";
const QUESTION_COLUMNS: &str = "id, text, options, correct_answer, quiz_id";

impl SqliteQuizStore {
    /// Open (or create) the quiz database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open quiz database at {:?}", db_path.as_ref()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory store, mostly useful for tests.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrate_if_needed(&mut conn)?;

        let store = SqliteQuizStore {
            conn: Arc::new(Mutex::new(conn)),
        };
        let counts = store.count_entities()?;
        info!(
            "Opened quiz store: {} subjects, {} quizzes, {} questions",
            counts.subjects, counts.quizzes, counts.questions
        );
        Ok(store)
    }

    fn lock(&self) -> QuizStoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| QuizStoreError::LockPoisoned)
    }

    fn count(conn: &Connection, table: &str) -> QuizStoreResult<usize> {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
        Ok(count as usize)
    }
}

impl QuizStore for SqliteQuizStore {
    // =========================================================================
    // Subjects
    // =========================================================================

    fn list_subjects(&self) -> QuizStoreResult<Vec<Subject>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {} FROM subjects ORDER BY id", SUBJECT_COLUMNS))?;
        let subjects = stmt
            .query_map([], row_to_subject)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(subjects)
    }

    fn create_subject(&self, subject: NewSubject) -> QuizStoreResult<Subject> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO subjects (name) VALUES (?1)",
            params![subject.name],
        )?;
        Ok(Subject {
            id: conn.last_insert_rowid(),
            name: subject.name,
        })
    }

    fn get_subject(&self, id: i64) -> QuizStoreResult<Subject> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("SELECT {} FROM subjects WHERE id = ?1", SUBJECT_COLUMNS),
            params![id],
            row_to_subject,
        )
        .optional()?
        .ok_or(QuizStoreError::not_found(EntityKind::Subject, id))
    }

    fn update_subject(&self, id: i64, subject: NewSubject) -> QuizStoreResult<Subject> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE subjects SET name = ?1 WHERE id = ?2",
            params![subject.name, id],
        )?;
        if changed == 0 {
            return Err(QuizStoreError::not_found(EntityKind::Subject, id));
        }
        Ok(Subject {
            id,
            name: subject.name,
        })
    }

    fn delete_subject(&self, id: i64) -> QuizStoreResult<()> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM subjects WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(QuizStoreError::not_found(EntityKind::Subject, id));
        }
        Ok(())
    }

    fn list_subject_quizzes(&self, subject_id: i64) -> QuizStoreResult<Vec<Quiz>> {
        let conn = self.lock()?;
        if !exists(&conn, "subjects", subject_id)? {
            return Err(QuizStoreError::not_found(EntityKind::Subject, subject_id));
        }
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM quizzes WHERE subject_id = ?1 ORDER BY id",
            QUIZ_COLUMNS
        ))?;
        let quizzes = stmt
            .query_map(params![subject_id], row_to_quiz)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(quizzes)
    }

    // =========================================================================
    // Quizzes
    // =========================================================================

    fn list_quizzes(&self) -> QuizStoreResult<Vec<Quiz>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {} FROM quizzes ORDER BY id", QUIZ_COLUMNS))?;
        let quizzes = stmt
            .query_map([], row_to_quiz)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(quizzes)
    }

    fn create_quiz(&self, quiz: NewQuiz) -> QuizStoreResult<Quiz> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !exists(&tx, "subjects", quiz.subject_id)? {
            return Err(QuizStoreError::missing_parent(
                EntityKind::Subject,
                quiz.subject_id,
            ));
        }
        tx.execute(
            "INSERT INTO quizzes (title, subject_id) VALUES (?1, ?2)",
            params![quiz.title, quiz.subject_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Quiz {
            id,
            title: quiz.title,
            subject_id: quiz.subject_id,
        })
    }

    fn get_quiz(&self, id: i64) -> QuizStoreResult<Quiz> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("SELECT {} FROM quizzes WHERE id = ?1", QUIZ_COLUMNS),
            params![id],
            row_to_quiz,
        )
        .optional()?
        .ok_or(QuizStoreError::not_found(EntityKind::Quiz, id))
    }

    fn update_quiz(&self, id: i64, quiz: NewQuiz) -> QuizStoreResult<Quiz> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !exists(&tx, "quizzes", id)? {
            return Err(QuizStoreError::not_found(EntityKind::Quiz, id));
        }
        if !exists(&tx, "subjects", quiz.subject_id)? {
            return Err(QuizStoreError::missing_parent(
                EntityKind::Subject,
                quiz.subject_id,
            ));
        }
        tx.execute(
            "UPDATE quizzes SET title = ?1, subject_id = ?2 WHERE id = ?3",
            params![quiz.title, quiz.subject_id, id],
        )?;
        tx.commit()?;
        Ok(Quiz {
            id,
            title: quiz.title,
            subject_id: quiz.subject_id,
        })
    }

    fn delete_quiz(&self, id: i64) -> QuizStoreResult<()> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM quizzes WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(QuizStoreError::not_found(EntityKind::Quiz, id));
        }
        Ok(())
    }

    fn list_quiz_questions(&self, quiz_id: i64) -> QuizStoreResult<Vec<Question>> {
        let conn = self.lock()?;
        if !exists(&conn, "quizzes", quiz_id)? {
            return Err(QuizStoreError::not_found(EntityKind::Quiz, quiz_id));
        }
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM questions WHERE quiz_id = ?1 ORDER BY id",
            QUESTION_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![quiz_id], row_to_question)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(QuestionRow::into_question).collect()
    }

    // =========================================================================
    // Questions
    // =========================================================================

    fn list_questions(&self) -> QuizStoreResult<Vec<Question>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], row_to_question)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(QuestionRow::into_question).collect()
    }

    fn create_question(&self, question: NewQuestion) -> QuizStoreResult<Question> {
        let options = serde_json::to_string(&question.options)?;
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !exists(&tx, "quizzes", question.quiz_id)? {
            return Err(QuizStoreError::missing_parent(
                EntityKind::Quiz,
                question.quiz_id,
            ));
        }
        tx.execute(
            "INSERT INTO questions (text, options, correct_answer, quiz_id) VALUES (?1, ?2, ?3, ?4)",
            params![question.text, options, question.correct_answer, question.quiz_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Question {
            id,
            text: question.text,
            options: question.options,
            correct_answer: question.correct_answer,
            quiz_id: question.quiz_id,
        })
    }

    fn get_question(&self, id: i64) -> QuizStoreResult<Question> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
            params![id],
            row_to_question,
        )
        .optional()?
        .ok_or(QuizStoreError::not_found(EntityKind::Question, id))?
        .into_question()
    }

    fn update_question(&self, id: i64, question: NewQuestion) -> QuizStoreResult<Question> {
        let options = serde_json::to_string(&question.options)?;
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        if !exists(&tx, "questions", id)? {
            return Err(QuizStoreError::not_found(EntityKind::Question, id));
        }
        if !exists(&tx, "quizzes", question.quiz_id)? {
            return Err(QuizStoreError::missing_parent(
                EntityKind::Quiz,
                question.quiz_id,
            ));
        }
        tx.execute(
            "UPDATE questions SET text = ?1, options = ?2, correct_answer = ?3, quiz_id = ?4
             WHERE id = ?5",
            params![question.text, options, question.correct_answer, question.quiz_id, id],
        )?;
        tx.commit()?;
        Ok(Question {
            id,
            text: question.text,
            options: question.options,
            correct_answer: question.correct_answer,
            quiz_id: question.quiz_id,
        })
    }

    fn delete_question(&self, id: i64) -> QuizStoreResult<()> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(QuizStoreError::not_found(EntityKind::Question, id));
        }
        Ok(())
    }

    // =========================================================================
    // Stats
    // =========================================================================

    fn count_entities(&self) -> QuizStoreResult<EntityCounts> {
        let conn = self.lock()?;
        Ok(EntityCounts {
            subjects: Self::count(&conn, "subjects")?,
            quizzes: Self::count(&conn, "quizzes")?,
            questions: Self::count(&conn, "questions")?,
        })
    }
}
