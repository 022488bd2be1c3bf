use axum::extract::FromRef;

use crate::quiz_store::QuizStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedQuizStore = Arc<dyn QuizStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub quiz_store: GuardedQuizStore,
}

impl ServerState {
    pub fn new(config: ServerConfig, quiz_store: GuardedQuizStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            quiz_store,
        }
    }
}

impl FromRef<ServerState> for GuardedQuizStore {
    fn from_ref(input: &ServerState) -> Self {
        input.quiz_store.clone()
    }
}
