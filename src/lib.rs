//! Quiz Server Library
//!
//! Exposes the storage, HTTP and seeding modules to the binaries and to
//! integration tests.

pub mod config;
pub mod quiz_store;
pub mod seed;
pub mod server;
pub mod sqlite_persistence;

pub use quiz_store::{QuizStore, SqliteQuizStore};
pub use seed::{seed_quiz, HttpQuizApi, QuizApi, SeedFile, SeedReport};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
