use thiserror::Error;

/// Failure talking to the quiz API. Any of these aborts a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("{action} failed: {source}")]
    Transport {
        action: String,
        source: reqwest::Error,
    },

    #[error("{action} failed with status {status}: {body}")]
    Status {
        action: String,
        status: u16,
        body: String,
    },
}
