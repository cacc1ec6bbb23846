//! 配線: 標準アダプタで PerfectionService を組み立てる

use std::sync::Arc;

use common::adapter::{build_log, ProviderTextGenerator};
use common::config::AppConfig;
use common::error::Error;
use common::ports::outbound::{log_event, EnvResolver, Log, LogLevel};
use common::usecase::PerfectionService;
use serde_json::json;

/// 組み立て済みのアプリ
pub struct App {
    pub service: PerfectionService,
    pub log: Arc<dyn Log>,
}

/// 配線: 設定を解決し、サービスを組み立てる
///
/// API キー欠如・テンプレート不備はここで Err になり、入力を読む前に処理を止める。
pub fn wire_perfect(
    env: &dyn EnvResolver,
    provider: Option<&str>,
    verbose: bool,
) -> Result<App, Error> {
    let log = build_log(env.resolve_log_path().ok(), verbose);

    let config = match AppConfig::resolve(env, provider, log.as_ref()) {
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
            ("provider", json!(config.provider_type.as_str())),
            ("template", json!(format!("{:?}", config.template_source))),
        ],
    );

    let generator = Arc::new(ProviderTextGenerator::new(
        config.provider_type,
        config.provider_settings,
    ));
    let service = PerfectionService::new(config.template, generator, Arc::clone(&log));
    Ok(App { service, log })
}
