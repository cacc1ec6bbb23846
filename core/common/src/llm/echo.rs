//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、送られたプロンプトをそのまま返します。
//! API キー無しでのローカル確認やテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echoプロバイダ
pub struct EchoProvider {
    model: String,
}

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({ "prompt": prompt }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際のAPI呼び出しは行わず、リクエストをそのまま応答とする
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["prompt"].as_str().map(|s| s.to_string()))
    }
}
