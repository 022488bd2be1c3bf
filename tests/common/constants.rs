//! Shared constants for end-to-end tests
//!
//! Ids follow insertion order in `fixtures::populate_quiz_db`.

// ============================================================================
// Fixture records
// ============================================================================

pub const MATH_SUBJECT_ID: i64 = 1;
pub const MATH_SUBJECT_NAME: &str = "Math";

/// Subject without any quiz.
pub const HISTORY_SUBJECT_ID: i64 = 2;
pub const HISTORY_SUBJECT_NAME: &str = "History";

pub const BASICS_QUIZ_ID: i64 = 1;
pub const BASICS_QUIZ_TITLE: &str = "Basics";

pub const ADDITION_QUESTION_ID: i64 = 1;
pub const ADDITION_QUESTION_TEXT: &str = "2+2?";

pub const PRODUCT_QUESTION_ID: i64 = 2;
pub const PRODUCT_QUESTION_TEXT: &str = "3*3?";

/// An id no fixture record uses.
pub const MISSING_ID: i64 = 999;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
