//! 環境変数解決 Outbound ポート
//!
//! API キー・ホームディレクトリ・プロバイダ指定を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// API キーを読む環境変数
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// GOOGLE_API_KEY を取得する。未設定・空なら Error::Env
    fn api_key(&self) -> Result<String, Error>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. PERFECTER_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/perfecter（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/perfecter
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// PERFECTER_PROVIDER（gemini / echo）
    fn provider_name(&self) -> Option<String>;

    /// PERFECTER_GEMINI_BASE_URL
    fn gemini_base_url(&self) -> Option<String>;

    /// テンプレート上書きファイル（$PERFECTER_HOME/template.txt）
    fn resolve_template_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("template.txt"))
    }

    /// JSONL ログファイル（$PERFECTER_HOME/log/perfecter.jsonl）
    fn resolve_log_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("log").join("perfecter.jsonl"))
    }
}
