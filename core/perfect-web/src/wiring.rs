//! 配線: 環境から設定を解決し、サーバーの状態を組み立てる

use std::sync::Arc;

use common::adapter::{build_log, ProviderTextGenerator};
use common::config::AppConfig;
use common::error::Error;
use common::ports::outbound::{log_event, EnvResolver, LogLevel};
use common::usecase::PerfectionService;
use serde_json::json;

use crate::cli::WebConfig;
use crate::server::AppState;

/// API キー欠如・テンプレート不備はここで Err になり、待ち受けを始めない
pub fn wire_state(env: &dyn EnvResolver, config: &WebConfig) -> Result<AppState, Error> {
    let log = build_log(env.resolve_log_path().ok(), config.verbose);

    let app_config = match AppConfig::resolve(env, config.provider.as_deref(), log.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            log_event(
                log.as_ref(),
                LogLevel::Error,
                "wiring",
                "config",
                e.to_string(),
                vec![],
            );
            return Err(e);
        }
    };

    log_event(
        log.as_ref(),
        LogLevel::Debug,
        "wiring",
        "config",
        "configuration resolved",
        vec![
            ("provider", json!(app_config.provider_type.as_str())),
            ("template", json!(format!("{:?}", app_config.template_source))),
            ("session_ttl_secs", json!(config.session_ttl.as_secs())),
        ],
    );

    let generator = Arc::new(ProviderTextGenerator::new(
        app_config.provider_type,
        app_config.provider_settings,
    ));
    let service = PerfectionService::new(app_config.template, generator, Arc::clone(&log));
    Ok(AppState::new(service, config.session_ttl, log))
}
