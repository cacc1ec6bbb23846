//! プロンプト改善サービス
//!
//! テンプレートに生プロンプトを埋め込み、リモート生成を 1 回呼び、結果を PerfectionResult にする。
//! リモート側の失敗はここで Failure に変換し、呼び出し元へは伝播しない。履歴には触れない。

use crate::domain::{ModelId, PerfectionResult};
use crate::ports::outbound::{log_event, Log, LogLevel, TextGenerator};
use crate::template::PromptTemplate;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

const LAYER: &str = "usecase";

pub struct PerfectionService {
    template: PromptTemplate,
    generator: Arc<dyn TextGenerator>,
    log: Arc<dyn Log>,
}

impl PerfectionService {
    pub fn new(template: PromptTemplate, generator: Arc<dyn TextGenerator>, log: Arc<dyn Log>) -> Self {
        Self {
            template,
            generator,
            log,
        }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// 生プロンプトを改善する（再試行なし）
    ///
    /// 空入力の拒否は呼び出し側の責務（PromptSession::submit）。モデルの妥当性も検証しない。
    pub fn perfect(&self, raw_prompt: &str, model: &ModelId) -> PerfectionResult {
        let full_prompt = self.template.render(raw_prompt);
        log_event(
            self.log.as_ref(),
            LogLevel::Info,
            LAYER,
            "usecase",
            "perfection requested",
            vec![
                ("model", json!(model.as_ref())),
                ("prompt_chars", json!(raw_prompt.chars().count())),
            ],
        );

        let started = Instant::now();
        let outcome = self.generator.generate(&full_prompt, model);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(text) => {
                log_event(
                    self.log.as_ref(),
                    LogLevel::Info,
                    LAYER,
                    "usecase",
                    "perfection succeeded",
                    vec![
                        ("model", json!(model.as_ref())),
                        ("elapsed_ms", json!(elapsed_ms)),
                        ("response_chars", json!(text.chars().count())),
                    ],
                );
                PerfectionResult::success(text)
            }
            Err(e) => {
                log_event(
                    self.log.as_ref(),
                    LogLevel::Warn,
                    LAYER,
                    "error",
                    "perfection failed",
                    vec![
                        ("model", json!(model.as_ref())),
                        ("elapsed_ms", json!(elapsed_ms)),
                        ("error", json!(e.to_string())),
                    ],
                );
                PerfectionResult::failure(e)
            }
        }
    }
}
