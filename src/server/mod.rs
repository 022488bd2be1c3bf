mod api_error;
pub mod config;
mod http_layers;
mod question_routes;
mod quiz_routes;
pub mod server;
pub mod state;
mod subject_routes;

pub use api_error::{ApiError, ApiResult};
pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use question_routes::make_question_routes;
pub(self) use quiz_routes::make_quiz_routes;
pub(self) use subject_routes::make_subject_routes;
pub use server::{make_app, run_server};
