//! MVP Shell
//!
//! A server-rendered dashboard with three read-only panels (system logs, an
//! XP leaderboard and a feedback list) backed by hardcoded sample data.
//!
//! # Architecture
//!
//! - **Shell**: per-session UI state updated by a pure reducer
//! - **UI**: HTML rendered with `format!`, Tailwind classes and htmx attributes
//! - **Server**: Axum router serving full pages, htmx fragments and JSON
//!
//! # Modules
//!
//! - [`model`]: Log, XP and feedback types plus the tab selector
//! - [`seed`]: Hardcoded sample collections
//! - [`shell`]: `ShellState`, `Action` and `reduce`
//! - [`ui`]: Components, style tables and page layout
//! - [`session`]: In-memory per-browser sessions
//! - [`server`]: Router and handlers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod server;
pub mod session;
pub mod shell;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Per-browser shell sessions.
    pub sessions: SessionStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Fresh state with an empty session store.
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            sessions: SessionStore::new(),
            config,
        }
    }
}
