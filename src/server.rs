//! HTTP surface for the dashboard shell.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::Html,
    routing::{get, post, put},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::AppState;
use crate::config::{AppConfig, SessionConfig};
use crate::error::Result;
use crate::model::{FeedbackEntry, LogEntry, Tab, XpEntry};
use crate::seed;
use crate::session::{Session, SessionStore};
use crate::shell::{Action, ShellState};
use crate::ui::shell::{feedback_draft_form, page, shell_fragment};

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "mvp_session";

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // HTML pages and fragments
        .route("/", get(index_handler))
        .route("/tabs/{tab}", post(select_tab_handler))
        .route("/feedback", post(add_feedback_handler))
        .route("/feedback/draft", put(edit_draft_handler))
        // JSON API
        .route("/api/state", get(api_state))
        .route("/api/logs", get(api_logs))
        .route("/api/xp", get(api_xp))
        .route("/api/feedback", get(api_feedback))
        .route("/health", get(health))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config));
    let sweeper = spawn_session_sweeper(state.sessions.clone(), &config.session);

    let app = build_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(crate::error::AppError::from)?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Periodically drop sessions idle for longer than the configured timeout.
pub fn spawn_session_sweeper(sessions: SessionStore, config: &SessionConfig) -> JoinHandle<()> {
    let idle = Duration::from_secs(config.idle_timeout_secs);
    let every = Duration::from_secs(config.sweep_interval_secs.max(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let removed = sessions.cleanup_expired_with_timeout(idle);
            if removed > 0 {
                debug!(
                    name: "session.swept",
                    removed,
                    remaining = sessions.len(),
                    "Expired sessions removed"
                );
            }
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(name: "server.signal.error", error = %e, "Failed to listen for Ctrl-C");
        return;
    }
    info!(name: "server.shutdown", "Shutdown requested");
}

/// The caller's stored session, if its cookie names one.
///
/// A found session counts as active and has its idle timer reset.
fn find_session(sessions: &SessionStore, jar: &CookieJar) -> Option<Session> {
    let session = sessions.get(jar.get(SESSION_COOKIE)?.value())?;
    session.touch();
    Some(session)
}

/// Find the caller's session, or start one and attach its cookie.
fn resolve_session(sessions: &SessionStore, jar: CookieJar) -> (CookieJar, Session) {
    if let Some(session) = find_session(sessions, &jar) {
        return (jar, session);
    }

    let session = sessions.create();
    info!(name: "session.created", session_id = %session.id(), "Session created");

    let cookie = Cookie::build((SESSION_COOKIE, session.id().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), session)
}

/// The caller's session, or a throwaway one when the request has none.
///
/// Only the page load stores new sessions.
fn session_or_detached(sessions: &SessionStore, jar: &CookieJar) -> Session {
    find_session(sessions, jar).unwrap_or_else(Session::detached)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Full page for the session's current state.
async fn index_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, session) = resolve_session(&state.sessions, jar);
    let html = page(&state.config.ui.title, &session.state());
    (jar, Html(html))
}

/// POST /tabs/{tab} - Navigation button pressed; returns the `#shell` fragment.
async fn select_tab_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(tab): Path<String>,
) -> Result<Html<String>> {
    let requested: Tab = tab.parse()?;
    let session = session_or_detached(&state.sessions, &jar);

    let before = session.state().active_tab;
    let next = session.dispatch(Action::SelectTab(requested));

    if next.active_tab == requested {
        info!(
            name: "shell.tab.selected",
            session_id = %session.id(),
            from = %before,
            to = %next.active_tab,
            "Tab selected"
        );
    } else {
        debug!(
            name: "shell.tab.ignored",
            session_id = %session.id(),
            requested = %requested,
            active = %next.active_tab,
            "Tab is not navigable"
        );
    }

    Ok(Html(shell_fragment(&state.config.ui.title, &next)))
}

/// Form body for the draft endpoints.
#[derive(Debug, Deserialize)]
struct DraftForm {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// PUT /feedback/draft - Draft fields changed.
async fn edit_draft_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<DraftForm>,
) -> Html<String> {
    let session = session_or_detached(&state.sessions, &jar);
    let next = session.dispatch(Action::EditDraft {
        title: form.title.unwrap_or_default(),
        content: form.content.unwrap_or_default(),
    });
    Html(feedback_draft_form(&next.draft))
}

/// POST /feedback - Add button pressed.
///
/// Field values sent with the request are applied to the draft first, the
/// same way the form's change events would have.
async fn add_feedback_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<DraftForm>,
) -> Html<String> {
    let session = session_or_detached(&state.sessions, &jar);
    let (submitted, next) = session.submit_draft(form.title, form.content);

    if submitted {
        info!(
            name: "shell.feedback.cleared",
            session_id = %session.id(),
            feedback_count = seed::feedback().len(),
            "Feedback draft cleared"
        );
    } else {
        debug!(
            name: "shell.feedback.incomplete",
            session_id = %session.id(),
            "Feedback draft incomplete; nothing to add"
        );
    }

    Html(feedback_draft_form(&next.draft))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/state - The session's shell state.
async fn api_state(State(state): State<AppState>, jar: CookieJar) -> Json<ShellState> {
    Json(session_or_detached(&state.sessions, &jar).state())
}

async fn api_logs() -> Json<&'static [LogEntry]> {
    Json(seed::logs())
}

async fn api_xp() -> Json<&'static [XpEntry]> {
    Json(seed::xp_ranking())
}

async fn api_feedback() -> Json<&'static [FeedbackEntry]> {
    Json(seed::feedback())
}

async fn health() -> &'static str {
    "ok"
}
