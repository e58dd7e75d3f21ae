//! Session management.
//!
//! Each browser gets its own [`ShellState`](crate::shell::ShellState),
//! identified by a UUID kept in a cookie. Sessions live in memory only and
//! expire after a period of inactivity.
//!
//! # Architecture
//!
//! - [`Session`]: one browser's shell state
//! - [`SessionStore`]: thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use mvp_shell::model::Tab;
//! use mvp_shell::session::SessionStore;
//! use mvp_shell::shell::Action;
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! let state = session.dispatch(Action::SelectTab(Tab::Xp));
//!
//! assert_eq!(state.active_tab, Tab::Logs);
//! ```

mod store;

pub use store::{DEFAULT_SESSION_TIMEOUT, Session, SessionStore};
