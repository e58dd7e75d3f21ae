//! Per-browser shell sessions and their store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shell::{Action, ShellState, reduce};

/// Default session timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// One browser's view-shell state.
///
/// Cloning is cheap and every clone refers to the same state.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Current UI state.
    state: RwLock<ShellState>,
    /// Session creation time.
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Session {
    /// Create a new session with the given ID and the initial shell state.
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                state: RwLock::new(ShellState::default()),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// A session that no store holds. Its state is dropped with it.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ShellState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run `action` through the reducer and return the resulting state.
    pub fn dispatch(&self, action: Action) -> ShellState {
        let mut guard = self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let next = reduce(std::mem::take(&mut *guard), action);
        *guard = next.clone();
        drop(guard);
        self.touch();
        next
    }

    /// Apply any submitted draft fields, then add feedback, under one lock.
    ///
    /// Fields left as `None` keep their current draft value. Returns whether
    /// the draft was complete when the add ran, and the resulting state.
    pub fn submit_draft(
        &self,
        title: Option<String>,
        content: Option<String>,
    ) -> (bool, ShellState) {
        let mut guard = self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut state = std::mem::take(&mut *guard);
        if title.is_some() || content.is_some() {
            let edit = Action::EditDraft {
                title: title.unwrap_or_else(|| state.draft.title.clone()),
                content: content.unwrap_or_else(|| state.draft.content.clone()),
            };
            state = reduce(state, edit);
        }
        let complete = state.draft.is_complete();
        let next = reduce(state, Action::AddFeedback);
        *guard = next.clone();
        drop(guard);
        self.touch();
        (complete, next)
    }

    /// Update the last activity timestamp.
    pub fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        // A negative span means clock skew; treat it as fresh.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }
}

/// Thread-safe store for all active sessions.
///
/// Cloning is cheap and every clone refers to the same sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    sessions: RwLock<HashMap<String, Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    fn sessions_read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Session>> {
        self.inner
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn sessions_write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Session>> {
        self.inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let session = Session::detached();
        self.sessions_write()
            .insert(session.id().to_string(), session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions_read().get(id).cloned()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions_write().remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions_read().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.sessions_write();
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeedbackDraft, Tab};

    #[test]
    fn test_session_lifecycle() {
        let session = Session::new("test-123".to_string());

        assert_eq!(session.id(), "test-123");
        assert_eq!(session.state(), ShellState::default());

        session.dispatch(Action::EditDraft {
            title: "T".into(),
            content: "C".into(),
        });
        assert_eq!(session.state().draft, FeedbackDraft::new("T", "C"));

        let after = session.dispatch(Action::AddFeedback);
        assert_eq!(after.draft, FeedbackDraft::default());
        assert_eq!(session.state(), after);
    }

    #[test]
    fn test_dispatch_ignores_disabled_tabs() {
        let session = Session::new("tabs".to_string());
        let state = session.dispatch(Action::SelectTab(Tab::Feedback));
        assert_eq!(state.active_tab, Tab::Logs);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let session = store.create();
        session.dispatch(Action::EditDraft {
            title: "shared".into(),
            content: String::new(),
        });

        let again = store.get(session.id()).unwrap();
        assert_eq!(again.state().draft.title, "shared");
    }

    #[test]
    fn test_store_operations() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let session = store.create();
        let id = session.id().to_string();
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_some());

        store.remove(&id);
        assert!(store.get(&id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::new();
        let _ = store.create();
        let _ = store.create();

        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_secs(60)), 0);
        assert_eq!(store.len(), 2);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.cleanup_expired_with_timeout(Duration::ZERO), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_touch_resets_idle_time() {
        let session = Session::new("idle".to_string());
        std::thread::sleep(Duration::from_millis(30));
        assert!(session.is_expired_with_timeout(Duration::from_millis(20)));

        session.touch();
        assert!(!session.is_expired_with_timeout(Duration::from_millis(20)));
    }

    #[test]
    fn test_submit_draft_applies_fields_then_adds() {
        let session = Session::new("submit".to_string());

        let (complete, state) = session.submit_draft(Some("T".into()), None);
        assert!(!complete);
        assert_eq!(state.draft, FeedbackDraft::new("T", ""));

        let (complete, state) = session.submit_draft(None, Some("C".into()));
        assert!(complete);
        assert_eq!(state.draft, FeedbackDraft::default());
        assert_eq!(session.state(), state);
    }

    #[test]
    fn test_submit_draft_without_fields_uses_current_draft() {
        let session = Session::new("current".to_string());
        session.dispatch(Action::EditDraft {
            title: "T".into(),
            content: "C".into(),
        });

        let (complete, state) = session.submit_draft(None, None);
        assert!(complete);
        assert_eq!(state.draft, FeedbackDraft::default());
    }

    #[test]
    fn test_detached_session_is_not_stored() {
        let store = SessionStore::new();
        let session = Session::detached();
        session.dispatch(Action::EditDraft {
            title: "T".into(),
            content: String::new(),
        });
        assert!(store.get(session.id()).is_none());
        assert!(store.is_empty());
    }
}
