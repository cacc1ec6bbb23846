//! Geminiプロバイダの実装（generateContent、非ストリーミング）

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Generative Language API のデフォルトベース URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Geminiプロバイダ
pub struct GeminiProvider {
    model: String,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// 新しいGeminiプロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（例: "gemini-2.5-flash"）
    /// * `api_key` - API キー（起動時に解決済みのもの）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    pub fn new(model: impl Into<String>, api_key: impl Into<String>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// generateContent のエンドポイント URL（キーはヘッダで渡すため含めない）
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// エラーレスポンスからメッセージを抽出する
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Gemini API error: {}",
                api_error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // エラーチェック
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // 複数 part に分かれることがあるので連結する
        let text: Option<String> = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .filter(|s| !s.is_empty());

        if text.is_none() {
            // 安全フィルタ等でブロックされた場合は理由を返す
            if let Some(reason) = v["promptFeedback"]["blockReason"].as_str() {
                return Err(Error::json(format!("Prompt was blocked: {}", reason)));
            }
            if let Some(reason) = v["candidates"][0]["finishReason"].as_str() {
                if reason != "STOP" {
                    return Err(Error::json(format!(
                        "Response finished without text: {}",
                        reason
                    )));
                }
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider::new("gemini-2.5-flash", "test-key", None)
    }

    #[test]
    fn test_gemini_provider_name_and_model() {
        let p = provider();
        assert_eq!(p.name(), "gemini");
        assert_eq!(p.model(), "gemini-2.5-flash");
    }

    #[test]
    fn test_endpoint_does_not_contain_key() {
        let p = provider();
        let url = p.endpoint();
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(!url.contains("test-key"));
    }

    #[test]
    fn test_base_url_override_trims_slash() {
        let p = GeminiProvider::new("m", "k", Some("http://127.0.0.1:9999/".to_string()));
        assert_eq!(p.endpoint(), "http://127.0.0.1:9999/v1beta/models/m:generateContent");

        let p = GeminiProvider::new("m", "k", Some(String::new()));
        assert!(p.endpoint().starts_with(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_make_request_payload_simple() {
        let payload = provider().make_request_payload("Hello").unwrap();
        let contents = payload["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "Hello");
    }

    #[test]
    fn test_parse_response_text() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"A detailed "},{"text":"cat story prompt..."}]},"finishReason":"STOP"}]}"#;
        let text = provider().parse_response_text(json).unwrap();
        assert_eq!(text.as_deref(), Some("A detailed cat story prompt..."));
    }

    #[test]
    fn test_parse_response_error_object() {
        let json = r#"{"error":{"code":429,"message":"Resource has been exhausted"}}"#;
        let err = provider().parse_response_text(json).unwrap_err();
        assert_eq!(err.to_string(), "Gemini API error: Resource has been exhausted");
    }

    #[test]
    fn test_parse_response_blocked_prompt() {
        let json = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = provider().parse_response_text(json).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_response_without_text() {
        let json = r#"{"candidates":[{"content":{"parts":[]},"finishReason":"STOP"}]}"#;
        assert_eq!(provider().parse_response_text(json).unwrap(), None);
    }

    #[test]
    fn test_parse_response_invalid_json() {
        assert!(matches!(
            provider().parse_response_text("<html>"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_api_error_message_extraction() {
        let body = r#"{"error":{"message":"API key not valid"}}"#;
        assert_eq!(
            api_error_message(reqwest::StatusCode::BAD_REQUEST, body),
            "API key not valid"
        );
        assert_eq!(
            api_error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down"),
            "HTTP 502 Bad Gateway: upstream down"
        );
    }
}
