//! Common test infrastructure
//!
//! Every e2e test spawns its own server on a random port backed by a
//! temporary database. Tests should only import from this module.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestClient, TestServer, MATH_SUBJECT_ID};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_subject() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_subject(MATH_SUBJECT_ID).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod fixtures;
mod server;

pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;
