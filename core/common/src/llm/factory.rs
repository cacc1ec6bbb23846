//! プロバイダファクトリー
//!
//! プロバイダタイプとモデル名に基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::LlmProvider;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Google Gemini（generateContent）
    Gemini,
    /// Echo（プロンプトを返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }

    /// API キーが必要か
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::Gemini)
    }
}

/// プロバイダ生成に使う設定（起動時に解決済み）
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// API キー（Gemini 用。Echo では不要）
    pub api_key: Option<String>,
    /// ベース URL（None のとき各プロバイダのデフォルト）
    pub base_url: Option<String>,
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Gemini(GeminiProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.model(),
            Self::Echo(p) => p.model(),
        }
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        match self {
            Self::Gemini(p) => p.make_request_payload(prompt),
            Self::Echo(p) => p.make_request_payload(prompt),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gemini(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gemini(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名
/// * `settings` - API キー・ベース URL
pub fn create_provider(
    provider_type: ProviderType,
    model: &str,
    settings: &ProviderSettings,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::Gemini => {
            let api_key = settings
                .api_key
                .clone()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| Error::env("GOOGLE_API_KEY is not set"))?;
            Ok(AnyProvider::Gemini(GeminiProvider::new(
                model,
                api_key,
                settings.base_url.clone(),
            )))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new(model))),
    }
}

/// ドライバーを作成する
pub fn create_driver(
    provider_type: ProviderType,
    model: &str,
    settings: &ProviderSettings,
) -> Result<LlmDriver<AnyProvider>, Error> {
    let provider = create_provider(provider_type, model, settings)?;
    Ok(LlmDriver::new(provider))
}
