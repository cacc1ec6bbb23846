//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → HTTP → テキスト抽出）を提供します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// LLMにプロンプトを送信して応答テキストを取得（1 リクエストのみ）
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト
    /// * `Err(Error)` - 通信・API・レスポンス形式のエラー
    pub fn query(&self, prompt: &str) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        self.provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::json("Response contained no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    // モックプロバイダ
    struct MockProvider {
        response: Result<String, Error>,
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }

        fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
            Ok(serde_json::json!({ "prompt": prompt }))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            self.response.clone()
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(format!("Failed to parse JSON: {}", e)))?;
            Ok(v["text"].as_str().map(|s| s.to_string()))
        }
    }

    #[test]
    fn test_llm_driver_query() {
        let driver = LlmDriver::new(MockProvider {
            response: Ok(r#"{"text":"Hello, world!"}"#.to_string()),
        });
        assert_eq!(driver.query("test").unwrap(), "Hello, world!");
    }

    #[test]
    fn test_llm_driver_query_without_text_is_error() {
        let driver = LlmDriver::new(MockProvider {
            response: Ok(r#"{"other":1}"#.to_string()),
        });
        let err = driver.query("test").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn test_llm_driver_query_propagates_http_error() {
        let driver = LlmDriver::new(MockProvider {
            response: Err(Error::http("HTTP request failed: timed out")),
        });
        let err = driver.query("test").unwrap_err();
        assert_eq!(err.to_string(), "HTTP request failed: timed out");
    }

    #[test]
    fn test_llm_driver_query_malformed_json() {
        let driver = LlmDriver::new(MockProvider {
            response: Ok("not json".to_string()),
        });
        assert!(matches!(driver.query("test"), Err(Error::Json(_))));
    }
}
