//! Declarative seed description read by the seeding CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A subject, one quiz under it and the questions the quiz must contain.
///
/// The on-disk keys are `materia`, `quiz` and `perguntas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(rename = "materia")]
    pub subject: String,
    pub quiz: String,
    #[serde(rename = "perguntas")]
    pub questions: Vec<SeedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedQuestion {
    #[serde(rename = "pergunta")]
    pub text: String,
    #[serde(rename = "respostas")]
    pub options: Vec<String>,
    #[serde(rename = "correta")]
    pub correct_answer: String,
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse seed file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
