//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own database file.

use super::constants::*;
use super::fixtures::{create_empty_quiz_db, create_test_quiz_db};
use quiz_server::quiz_store::{QuizStore, SqliteQuizStore};
use quiz_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated database
///
/// When dropped, the server shuts down and the temp directory is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Store shared with the server, for direct inspection in tests
    pub quiz_store: Arc<dyn QuizStore>,

    pub db_path: PathBuf,

    _temp_db_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server whose database holds the fixture records.
    pub async fn spawn() -> Self {
        let (dir, db_path) = create_test_quiz_db().expect("Failed to create test database");
        Self::spawn_with_db(dir, db_path).await
    }

    /// Spawns a server on an empty database.
    pub async fn spawn_empty() -> Self {
        let (dir, db_path) = create_empty_quiz_db().expect("Failed to create test database");
        Self::spawn_with_db(dir, db_path).await
    }

    async fn spawn_with_db(temp_db_dir: TempDir, db_path: PathBuf) -> Self {
        let quiz_store: Arc<dyn QuizStore> =
            Arc::new(SqliteQuizStore::new(&db_path).expect("Failed to open quiz store"));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            bind_address: "127.0.0.1".to_string(),
            port,
            frontend_dir_path: None,
        };
        let app = make_app(config, quiz_store.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            quiz_store,
            db_path,
            _temp_db_dir: temp_db_dir,
            _shutdown_tx: Some(shutdown_tx),
        };
        server.wait_for_ready().await;
        server
    }

    /// Polls the stats page until the server answers.
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
