//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::env_resolver::{EnvResolver, API_KEY_ENV};
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl StdEnvResolver {
    /// カレントディレクトリの .env を環境変数に読み込む（無ければ何もしない）
    ///
    /// 既に設定済みの環境変数は上書きしない。
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenv::dotenv().ok()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn api_key(&self) -> Result<String, Error> {
        non_empty_var(API_KEY_ENV).ok_or_else(|| {
            Error::env(format!(
                "{} not found. Set it in the environment or in a .env file.",
                API_KEY_ENV
            ))
        })
    }

    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = non_empty_var("PERFECTER_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(HomeDir::new(config_base.join("perfecter")))
    }

    fn provider_name(&self) -> Option<String> {
        non_empty_var("PERFECTER_PROVIDER")
    }

    fn gemini_base_url(&self) -> Option<String> {
        non_empty_var("PERFECTER_GEMINI_BASE_URL")
    }
}
