//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echoなど）はこのトレイトを実装する必要があります。
/// 1 インスタンスは 1 モデルに対応する。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// 対象モデル名
    fn model(&self) -> &str;

    /// リクエストペイロードを生成（単発のユーザーメッセージ）
    ///
    /// # Arguments
    /// * `prompt` - 送信するプロンプト全文
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラー
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信エラーまたは API エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - JSON の不備や API エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
