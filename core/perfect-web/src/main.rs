mod cli;
mod page;
mod server;
mod session;
mod wiring;


use std::process;
use std::time::Duration;

use anyhow::Context;
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{log_event, LogLevel};
use serde_json::json;

use crate::cli::{parse_args, WebConfig};
use crate::server::{router, AppState};
use crate::wiring::wire_state;

/// 期限切れセッションの掃除間隔の上限
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("perfect-web: {:#}", e);
            // 設定・引数エラーは共通の終了コードに揃える
            e.downcast_ref::<Error>().map(Error::exit_code).unwrap_or(1)
        }
    };
    process::exit(exit_code);
}

async fn run() -> anyhow::Result<()> {
    let config = match parse_args()? {
        Some(c) => c,
        None => return Ok(()),
    };
    StdEnvResolver::load_dotenv();
    let state = wire_state(&StdEnvResolver, &config)?;
    serve(config, state).await
}

async fn serve(config: WebConfig, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    spawn_session_sweeper(state.clone());

    log_event(
        state.log.as_ref(),
        LogLevel::Info,
        "web",
        "lifecycle",
        "listening",
        vec![("addr", json!(config.bind.to_string()))],
    );
    eprintln!("Prompt Perfecter listening on http://{}", config.bind);

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}

/// TTL を過ぎたセッションを定期的に破棄する
fn spawn_session_sweeper(state: AppState) {
    let period = state.sessions.ttl().min(MAX_SWEEP_INTERVAL);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let evicted = state.sessions.evict_expired();
            if evicted > 0 {
                log_event(
                    state.log.as_ref(),
                    LogLevel::Debug,
                    "web",
                    "lifecycle",
                    "sessions evicted",
                    vec![
                        ("evicted", json!(evicted)),
                        ("remaining", json!(state.sessions.len())),
                    ],
                );
            }
        }
    });
}
