//! HTTP ルーティングとハンドラ
//!
//! 送信はセッションの Mutex を取ったまま spawn_blocking で改善を実行する。
//! 画面更新は POST 後に / へリダイレクトして行う。

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use common::domain::{ModelCatalog, RawPrompt};
use common::ports::outbound::{log_event, Log, LogLevel};
use common::usecase::PerfectionService;
use serde::Deserialize;
use serde_json::json;

use crate::page::render_page;
use crate::session::{session_cookie, session_id_from_cookie, Checkout, SessionRegistry};

/// ハンドラ間で共有する状態
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PerfectionService>,
    pub catalog: Arc<ModelCatalog>,
    pub sessions: Arc<SessionRegistry>,
    pub log: Arc<dyn Log>,
}

impl AppState {
    pub fn new(service: PerfectionService, session_ttl: Duration, log: Arc<dyn Log>) -> Self {
        Self {
            service: Arc::new(service),
            catalog: Arc::new(ModelCatalog::builtin()),
            sessions: Arc::new(SessionRegistry::new(session_ttl)),
            log,
        }
    }

    fn checkout(&self, headers: &HeaderMap) -> Checkout {
        let id = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(session_id_from_cookie);
        let checkout = self
            .sessions
            .checkout(id, &self.catalog.default_option().id);
        if checkout.created {
            log_event(
                self.log.as_ref(),
                LogLevel::Debug,
                "web",
                "lifecycle",
                "session created",
                vec![("sessions", json!(self.sessions.len()))],
            );
        }
        checkout
    }
}

#[derive(Debug, Deserialize)]
pub struct PerfectForm {
    #[serde(default)]
    pub prompt: String,
    pub model: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/perfect", post(perfect))
        .route("/clear", post(clear_output))
        .route("/history/clear", post(clear_history))
        .route("/health", get(health))
        .with_state(state)
}

/// 新規セッションなら Set-Cookie を付ける
fn with_session(checkout: &Checkout, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if checkout.created {
        if let Ok(value) = HeaderValue::from_str(&session_cookie(checkout.id)) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let checkout = state.checkout(&headers);
    let html = {
        let session = checkout.session.lock().await;
        render_page(&state.catalog, &session)
    };
    with_session(&checkout, Html(html))
}

async fn perfect(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PerfectForm>,
) -> Response {
    let checkout = state.checkout(&headers);

    let option = match form.model.as_deref() {
        None => state.catalog.default_option().clone(),
        Some(value) => match state.catalog.resolve(value) {
            Some(option) => option.clone(),
            None => {
                log_event(
                    state.log.as_ref(),
                    LogLevel::Warn,
                    "web",
                    "error",
                    "unknown model",
                    vec![("model", json!(value))],
                );
                return with_session(
                    &checkout,
                    (StatusCode::BAD_REQUEST, format!("Unknown model: {}", value)),
                );
            }
        },
    };

    // 送信サイクルの間ずっとセッションを保持する
    let mut session = Arc::clone(&checkout.session).lock_owned().await;
    session.selected_model = option.id.clone();
    session.draft = form.prompt.clone();

    if RawPrompt::parse(form.prompt.as_str()).is_none() {
        return with_session(&checkout, Redirect::to("/"));
    }

    let service = Arc::clone(&state.service);
    let joined = tokio::task::spawn_blocking(move || {
        session
            .prompt
            .submit(&service, &form.prompt, &option)
            .map(|result| result.is_success())
    })
    .await;

    state.sessions.touch(checkout.id);

    match joined {
        Ok(_) => with_session(&checkout, Redirect::to("/")),
        Err(e) => {
            log_event(
                state.log.as_ref(),
                LogLevel::Error,
                "web",
                "error",
                "perfection task failed",
                vec![("error", json!(e.to_string()))],
            );
            with_session(
                &checkout,
                (StatusCode::INTERNAL_SERVER_ERROR, "perfection task failed"),
            )
        }
    }
}

async fn clear_output(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let checkout = state.checkout(&headers);
    checkout.session.lock().await.prompt.clear_output();
    with_session(&checkout, Redirect::to("/"))
}

async fn clear_history(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let checkout = state.checkout(&headers);
    checkout.session.lock().await.prompt.clear_history();
    with_session(&checkout, Redirect::to("/"))
}

async fn health() -> &'static str {
    "ok"
}
