//! 起動時設定の解決
//!
//! プロバイダ・API キー・テンプレート・ログパスを環境から解決する。
//! ここでのエラー（Env / Template）は起動を止める致命的エラーとして扱う。

use crate::error::Error;
use crate::llm::{ProviderSettings, ProviderType};
use crate::ports::outbound::{log_event, EnvResolver, Log, LogLevel};
use crate::template::PromptTemplate;
use std::fs;
use std::path::PathBuf;

/// テンプレートの出どころ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    File(PathBuf),
}

/// 解決済みの起動時設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider_type: ProviderType,
    pub provider_settings: ProviderSettings,
    pub template: PromptTemplate,
    pub template_source: TemplateSource,
    /// JSONL ログの出力先（ホームを解決できなければ None）
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// 環境から設定を解決する
    ///
    /// # Arguments
    /// * `env` - 環境変数解決
    /// * `provider_override` - CLI で指定されたプロバイダ名（PERFECTER_PROVIDER より優先）
    /// * `log` - 解決過程の記録先
    pub fn resolve(
        env: &dyn EnvResolver,
        provider_override: Option<&str>,
        log: &dyn Log,
    ) -> Result<Self, Error> {
        let provider_type = resolve_provider_type(env, provider_override)?;

        // 入力を受け付ける前に API キーの有無を確認する
        let api_key = if provider_type.requires_api_key() {
            Some(env.api_key()?)
        } else {
            None
        };

        let (template, template_source) = load_template(env, log)?;

        Ok(Self {
            provider_type,
            provider_settings: ProviderSettings {
                api_key,
                base_url: env.gemini_base_url(),
            },
            template,
            template_source,
            log_path: env.resolve_log_path().ok(),
        })
    }
}

fn resolve_provider_type(
    env: &dyn EnvResolver,
    provider_override: Option<&str>,
) -> Result<ProviderType, Error> {
    match provider_override.map(str::to_string).or_else(|| env.provider_name()) {
        Some(name) => ProviderType::from_str(&name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider '{}' (expected gemini or echo)",
                name
            ))
        }),
        None => Ok(ProviderType::Gemini),
    }
}

/// template.txt があればそれを、無ければ組み込みテンプレートを検証して返す
fn load_template(
    env: &dyn EnvResolver,
    log: &dyn Log,
) -> Result<(PromptTemplate, TemplateSource), Error> {
    match env.resolve_template_path() {
        Ok(path) if path.is_file() => {
            let text = fs::read_to_string(&path).map_err(|e| {
                Error::template(format!("Failed to read template {}: {}", path.display(), e))
            })?;
            let template = PromptTemplate::parse(&text).map_err(|e| {
                Error::template(format!("Invalid template {}: {}", path.display(), e))
            })?;
            return Ok((template, TemplateSource::File(path)));
        }
        Ok(_) => {}
        Err(e) => log_event(
            log,
            LogLevel::Debug,
            "wiring",
            "config",
            "template override skipped",
            vec![("reason", serde_json::json!(e.to_string()))],
        ),
    }
    Ok((PromptTemplate::canonical()?, TemplateSource::Builtin))
}
