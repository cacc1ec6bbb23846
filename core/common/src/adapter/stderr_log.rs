//! 人間向けログ（stderr）と複数 Log への振り分け

use crate::adapter::file_json_log::{FileJsonLog, NoopLog};
use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::path::PathBuf;
use std::sync::Arc;

/// fields を 1 行の key=value 列にする
fn fields_summary(record: &LogRecord) -> String {
    match &record.fields {
        Some(fields) if !fields.is_empty() => fields
            .iter()
            .map(|(k, v)| match v.as_str() {
                Some(s) => format!(" {}={}", k, s),
                None => format!(" {}={}", k, v),
            })
            .collect(),
        _ => String::new(),
    }
}

/// 1 レコードを人間向けに整形する
pub fn format_line(record: &LogRecord) -> String {
    format!(
        "[{}] {} {}: {}{}",
        record.level.as_str(),
        record.ts,
        record.layer.as_deref().unwrap_or("-"),
        record.message,
        fields_summary(record)
    )
}

/// -v 指定時に stderr へ出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}

/// 複数の Log に同じレコードを書く。1 つ失敗しても残りには書く。
pub struct FanoutLog {
    logs: Vec<Arc<dyn Log>>,
}

impl FanoutLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// 起動時のログを組み立てる（JSONL ファイル + verbose 時は stderr）
pub fn build_log(log_path: Option<PathBuf>, verbose: bool) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Some(path) = log_path {
        logs.push(Arc::new(FileJsonLog::new(path)));
    }
    if verbose {
        logs.push(Arc::new(StderrLog));
    }
    match logs.len() {
        0 => Arc::new(NoopLog),
        1 => logs.remove(0),
        _ => Arc::new(FanoutLog::new(logs)),
    }
}
