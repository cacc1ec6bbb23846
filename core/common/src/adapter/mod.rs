//! アダプター（外界の I/O を trait で抽象化した実装）
//!
//! usecase は ports の trait 経由でのみ環境変数・ログ・リモート API に触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod provider_text_generator;
pub mod std_env_resolver;
pub mod stderr_log;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use provider_text_generator::ProviderTextGenerator;
pub use std_env_resolver::StdEnvResolver;
pub use stderr_log::{build_log, FanoutLog, StderrLog};
