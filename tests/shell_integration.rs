use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use mvp_shell::AppState;
use mvp_shell::config::{AppConfig, LogConfig, LogFormat, ServerConfig, SessionConfig, UiConfig};
use mvp_shell::server::{SESSION_COOKIE, build_router};
use serde_json::Value;

type SessionCookie = axum_extra::extract::cookie::Cookie<'static>;

fn test_config(static_dir: PathBuf) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir,
        },
        session: SessionConfig {
            idle_timeout_secs: 60,
            sweep_interval_secs: 60,
        },
        log: LogConfig {
            format: LogFormat::Text,
        },
        ui: UiConfig {
            title: "MVP Shell".to_string(),
        },
    }
}

fn setup() -> (TestServer, AppState) {
    let state = AppState::new(Arc::new(test_config(PathBuf::from("static"))));
    let server =
        TestServer::new(build_router(state.clone())).expect("Failed to create test server");
    (server, state)
}

/// Open the page once and return the session cookie it hands out.
async fn start_session(server: &TestServer) -> SessionCookie {
    let response = server.get("/").await;
    response.assert_status_ok();
    response.cookie(SESSION_COOKIE)
}

mod page {
    use super::*;

    #[tokio::test]
    async fn initial_render_shows_seeded_logs_in_order() {
        let (server, _) = setup();

        let response = server.get("/").await;
        response.assert_status_ok();
        let html = response.text();

        assert!(html.contains("<title>MVP Shell</title>"));
        assert!(html.contains(r#"data-panel="logs""#));
        assert!(!html.contains(r#"data-panel="xp""#));
        assert!(!html.contains(r#"data-panel="feedback""#));
        assert_eq!(html.matches("data-log-id=").count(), 6);

        let positions: Vec<usize> = [
            "User authentication successful",
            "Database connection established",
            "High memory usage detected (85%)",
            "Failed to load external API resource",
            "System backup completed successfully",
            "New user registration completed",
        ]
        .iter()
        .map(|msg| html.find(msg).expect("log message missing"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        for label in ["SUCCESS", "INFO", "WARNING", "ERROR"] {
            assert!(html.contains(&format!(">{label}<")), "missing {label} badge");
        }
        assert!(html.contains("2024-01-15 14:32:15"));
    }

    #[tokio::test]
    async fn first_visit_creates_one_session() {
        let (server, state) = setup();
        let cookie = start_session(&server).await;

        assert_eq!(state.sessions.len(), 1);
        assert!(state.sessions.get(cookie.value()).is_some());

        server.get("/").add_cookie(cookie).await.assert_status_ok();
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn stale_cookie_starts_fresh_session() {
        let (server, state) = setup();
        let cookie = start_session(&server).await;
        state.sessions.remove(cookie.value());

        let response = server.get("/").add_cookie(cookie.clone()).await;
        let renewed = response.cookie(SESSION_COOKIE);
        assert_ne!(renewed.value(), cookie.value());
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn page_load_keeps_session_active() {
        let (server, state) = setup();
        let cookie = start_session(&server).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        server.get("/").add_cookie(cookie.clone()).await.assert_status_ok();

        let session = state.sessions.get(cookie.value()).expect("session missing");
        assert!(!session.is_expired_with_timeout(Duration::from_millis(40)));
    }

    #[tokio::test]
    async fn state_read_keeps_session_active() {
        let (server, state) = setup();
        let cookie = start_session(&server).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        server
            .get("/api/state")
            .add_cookie(cookie.clone())
            .await
            .assert_status_ok();

        let session = state.sessions.get(cookie.value()).expect("session missing");
        assert!(!session.is_expired_with_timeout(Duration::from_millis(40)));
    }

    #[tokio::test]
    async fn requests_without_cookie_store_no_session() {
        let (server, state) = setup();

        server.get("/api/state").await.assert_status_ok();
        server.post("/tabs/logs").await.assert_status_ok();
        server
            .put("/feedback/draft")
            .form(&[("title", "T"), ("content", "")])
            .await
            .assert_status_ok();
        server
            .post("/feedback")
            .form(&[("title", "T"), ("content", "C")])
            .await
            .assert_status_ok();

        assert!(state.sessions.is_empty());
    }
}

mod tabs {
    use super::*;

    #[tokio::test]
    async fn selecting_logs_returns_shell_fragment() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        let response = server.post("/tabs/logs").add_cookie(cookie).await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.starts_with(r#"<div id="shell">"#));
        assert!(html.contains(r#"data-panel="logs""#));
    }

    #[tokio::test]
    async fn xp_and_feedback_requests_leave_logs_active() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        for tab in ["xp", "feedback"] {
            let response = server
                .post(&format!("/tabs/{tab}"))
                .add_cookie(cookie.clone())
                .await;
            response.assert_status_ok();
            assert!(response.text().contains(r#"data-panel="logs""#));

            let state: Value = server
                .get("/api/state")
                .add_cookie(cookie.clone())
                .await
                .json();
            assert_eq!(state["active_tab"], "logs");
        }
    }

    #[tokio::test]
    async fn unknown_tab_is_bad_request() {
        let (server, _) = setup();

        let response = server.post("/tabs/settings").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "unknown tab: settings");
    }
}

mod feedback {
    use super::*;

    async fn state_of(server: &TestServer, cookie: &SessionCookie) -> Value {
        server.get("/api/state").add_cookie(cookie.clone()).await.json()
    }

    #[tokio::test]
    async fn draft_edits_are_kept_in_session() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        let response = server
            .put("/feedback/draft")
            .add_cookie(cookie.clone())
            .form(&[("title", "Sidebar"), ("content", "")])
            .await;
        response.assert_status_ok();
        assert!(response.text().contains(r#"value="Sidebar""#));

        let state = state_of(&server, &cookie).await;
        assert_eq!(state["draft"]["title"], "Sidebar");
        assert_eq!(state["draft"]["content"], "");
    }

    #[tokio::test]
    async fn add_with_missing_title_keeps_draft() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        server
            .post("/feedback")
            .add_cookie(cookie.clone())
            .form(&[("title", ""), ("content", "anything")])
            .await
            .assert_status_ok();

        let state = state_of(&server, &cookie).await;
        assert_eq!(state["draft"]["title"], "");
        assert_eq!(state["draft"]["content"], "anything");
    }

    #[tokio::test]
    async fn add_with_missing_content_keeps_draft() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        let response = server
            .post("/feedback")
            .add_cookie(cookie.clone())
            .form(&[("title", "anything"), ("content", "")])
            .await;
        assert!(response.text().contains(r#"value="anything""#));

        let state = state_of(&server, &cookie).await;
        assert_eq!(state["draft"]["title"], "anything");
    }

    #[tokio::test]
    async fn add_with_complete_draft_clears_it_but_not_the_list() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        server
            .put("/feedback/draft")
            .add_cookie(cookie.clone())
            .form(&[("title", "T"), ("content", "C")])
            .await
            .assert_status_ok();

        let response = server
            .post("/feedback")
            .add_cookie(cookie.clone())
            .form(&Vec::<(String, String)>::new())
            .await;
        response.assert_status_ok();
        assert!(response.text().contains(r#"value="""#));

        let state = state_of(&server, &cookie).await;
        assert_eq!(state["draft"]["title"], "");
        assert_eq!(state["draft"]["content"], "");

        let notes: Vec<Value> = server.get("/api/feedback").await.json();
        assert_eq!(notes.len(), 3);
    }

    #[tokio::test]
    async fn add_returns_only_the_swapped_form() {
        let (server, _) = setup();
        let cookie = start_session(&server).await;

        for _ in 0..2 {
            let response = server
                .post("/feedback")
                .add_cookie(cookie.clone())
                .form(&[("title", "T"), ("content", "C")])
                .await;
            response.assert_status_ok();
            let html = response.text();
            assert!(html.starts_with(r#"<form id="feedback-draft""#));
            assert!(html.ends_with("</form>"));
            assert_eq!(html.matches(r#"id="feedback-draft""#).count(), 1);
            assert!(!html.contains("Add Feedback</h3>"));
        }
    }

    #[tokio::test]
    async fn draft_edit_returns_only_the_form() {
        let (server, _) = setup();

        let response = server
            .put("/feedback/draft")
            .form(&[("title", "T"), ("content", "")])
            .await;
        assert!(response.text().starts_with(r#"<form id="feedback-draft""#));
    }

    #[tokio::test]
    async fn draft_values_are_escaped_in_fragment() {
        let (server, _) = setup();

        let response = server
            .put("/feedback/draft")
            .form(&[("title", "<script>"), ("content", "a & b")])
            .await;
        let html = response.text();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}

mod api {
    use super::*;

    #[tokio::test]
    async fn serves_seed_collections() {
        let (server, _) = setup();

        let logs: Vec<Value> = server.get("/api/logs").await.json();
        assert_eq!(logs.len(), 6);
        assert_eq!(logs[0]["type"], "success");
        assert_eq!(logs[2]["message"], "High memory usage detected (85%)");

        let xp: Vec<Value> = server.get("/api/xp").await.json();
        assert_eq!(xp.len(), 5);
        assert_eq!(xp[0]["name"], "Alex Chen");
        assert_eq!(xp[0]["progress"], 75);

        let notes: Vec<Value> = server.get("/api/feedback").await.json();
        assert_eq!(notes[0]["priority"], "high");
    }

    #[tokio::test]
    async fn fresh_state_is_logs_with_empty_draft() {
        let (server, _) = setup();

        let state: Value = server.get("/api/state").await.json();
        assert_eq!(state["active_tab"], "logs");
        assert_eq!(state["draft"]["title"], "");
        assert_eq!(state["draft"]["content"], "");
    }

    #[tokio::test]
    async fn health_check() {
        let (server, _) = setup();

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "ok");
    }

    #[tokio::test]
    async fn serves_static_assets_from_configured_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("app.css"), "body{}").expect("Failed to write asset");

        let state = AppState::new(Arc::new(test_config(dir.path().to_path_buf())));
        let server = TestServer::new(build_router(state)).expect("Failed to create test server");

        let response = server.get("/static/app.css").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "body{}");

        server
            .get("/static/missing.js")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
