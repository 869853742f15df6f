//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use focusdeck_core::{GoalStore, SessionStore};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The shared application state, created once at startup and passed to all
/// handlers.
///
/// Each store sits behind its own mutex; every store operation (including
/// insert-with-eviction and summary computation) runs to completion under one
/// lock acquisition, and no handler holds both locks at once.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<SessionStore>>,
    pub goals: Arc<Mutex<GoalStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the state the binary serves with, honoring the seed flag.
    pub fn from_config(config: Config) -> Self {
        let (sessions, goals) = if config.seed_demo_data {
            (SessionStore::seeded(), GoalStore::seeded())
        } else {
            (SessionStore::new(), GoalStore::new())
        };

        Self {
            sessions: Arc::new(Mutex::new(sessions)),
            goals: Arc::new(Mutex::new(goals)),
            config: Arc::new(config),
        }
    }
}
