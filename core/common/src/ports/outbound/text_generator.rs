//! リモートテキスト生成 Outbound ポート
//!
//! 埋め込み済みのプロンプト全文とモデル識別子を渡し、生成テキストを 1 回で受け取る。
//! 再試行やタイムアウトの上乗せはしない（1 呼び出し = 1 リクエスト）。

use crate::domain::ModelId;
use crate::error::Error;

/// リモートテキスト生成（generate(full_prompt, model) -> text | error）
pub trait TextGenerator: Send + Sync {
    fn generate(&self, full_prompt: &str, model: &ModelId) -> Result<String, Error>;
}
