use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quiz_server::seed::{seed_quiz, HttpQuizApi, SeedFile};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Create a subject, a quiz and its questions on a running quiz server,
/// skipping whatever already exists.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON seed file.
    #[clap(value_parser = parse_path)]
    pub seed_file: PathBuf,

    /// Base URL of the quiz server.
    #[clap(long, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Path prefix of the REST API on the server.
    #[clap(long, default_value = "/api")]
    pub api_prefix: String,

    /// Per-request timeout in seconds. No timeout if omitted.
    #[clap(long)]
    pub timeout_sec: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let seed = SeedFile::load(&cli_args.seed_file)?;
    info!(
        "Seeding \"{}\" / \"{}\" with {} questions",
        seed.subject,
        seed.quiz,
        seed.questions.len()
    );

    let api = HttpQuizApi::new(
        &cli_args.base_url,
        &cli_args.api_prefix,
        cli_args.timeout_sec.map(Duration::from_secs),
    )?;
    let report = seed_quiz(&api, &seed)
        .await
        .with_context(|| format!("Seeding against {} failed", api.api_root()))?;

    info!(
        "Done: {} questions created, {} skipped, {} in quiz {}",
        report.questions_created, report.questions_skipped, report.total_questions, report.quiz_id
    );
    Ok(())
}
