//! Client-side seeding of a running quiz server from a seed file.

mod api;
mod client;
mod error;
mod reconcile;
mod seed_file;

pub use api::QuizApi;
pub use client::HttpQuizApi;
pub use error::SeedError;
pub use reconcile::{seed_quiz, SeedReport};
pub use seed_file::{SeedFile, SeedQuestion};
