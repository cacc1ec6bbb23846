//! Outbound ポート: アプリが外界（環境変数・ログ・リモート生成 API）を使うための trait

pub mod env_resolver;
pub mod log;
pub mod text_generator;

pub use env_resolver::EnvResolver;
pub use log::{log_event, now_iso8601, Log, LogLevel, LogRecord};
pub use text_generator::TextGenerator;
