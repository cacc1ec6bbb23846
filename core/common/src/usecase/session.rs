//! 1 セッション分の状態（履歴と現在の出力）と送信フロー
//!
//! 空入力はここで弾き、サービスを呼ばず履歴にも残さない。
//! 結果は成功・失敗どちらも履歴に追加する。

use crate::domain::{History, HistoryEntry, ModelOption, PerfectionResult, RawPrompt};
use crate::usecase::perfect::PerfectionService;

#[derive(Debug, Clone, Default)]
pub struct PromptSession {
    history: History,
    current: Option<PerfectionResult>,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生プロンプトを送信する
    ///
    /// 空・空白のみなら None（何もしない）。それ以外は結果を現在の出力にして履歴へ追加する。
    pub fn submit(
        &mut self,
        service: &PerfectionService,
        raw: &str,
        model: &ModelOption,
    ) -> Option<&PerfectionResult> {
        let prompt = RawPrompt::parse(raw)?;
        let result = service.perfect(&prompt, &model.id);
        self.history.append(HistoryEntry::new(
            prompt.into_inner(),
            result.text(),
            model.label.clone(),
        ));
        self.current = Some(result);
        self.current.as_ref()
    }

    /// 現在の出力のみ消す
    pub fn clear_output(&mut self) {
        self.current = None;
    }

    /// 履歴と現在の出力を消す
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.current = None;
    }

    pub fn current(&self) -> Option<&PerfectionResult> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::NoopLog;
    use crate::domain::ModelCatalog;
    use crate::error::Error;
    use crate::template::PromptTemplate;
    use crate::usecase::stub::StubTextGenerator;
    use std::sync::Arc;

    fn service(generator: Arc<StubTextGenerator>) -> PerfectionService {
        PerfectionService::new(
            PromptTemplate::canonical().unwrap(),
            generator,
            Arc::new(NoopLog),
        )
    }

    fn fast_tier() -> ModelOption {
        ModelCatalog::builtin().option_for("fast-tier")
    }

    #[test]
    fn test_submit_success_appends_history() {
        let generator = Arc::new(StubTextGenerator::ok("A detailed cat story prompt..."));
        let svc = service(generator.clone());
        let mut session = PromptSession::new();

        let result = session
            .submit(&svc, "write a story about a cat", &fast_tier())
            .cloned();

        assert_eq!(
            result,
            Some(PerfectionResult::success("A detailed cat story prompt..."))
        );
        assert_eq!(session.history().len(), 1);
        let entry = &session.history().entries()[0];
        assert_eq!(entry.original, "write a story about a cat");
        assert_eq!(entry.perfected, "A detailed cat story prompt...");
        assert_eq!(entry.model_label, "fast-tier");
    }

    #[test]
    fn test_submit_blank_does_not_dispatch() {
        let generator = Arc::new(StubTextGenerator::ok("unused"));
        let svc = service(generator.clone());
        let mut session = PromptSession::new();

        for raw in ["", "   ", "\n\t"] {
            assert!(session.submit(&svc, raw, &fast_tier()).is_none());
        }

        assert_eq!(generator.call_count(), 0);
        assert!(session.history().is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_submit_failure_is_recorded_too() {
        let generator = Arc::new(StubTextGenerator::failing(Error::http("timed out")));
        let svc = service(generator);
        let mut session = PromptSession::new();

        let result = session.submit(&svc, "hello", &fast_tier()).cloned();

        assert_eq!(result, Some(PerfectionResult::failure("timed out")));
        assert_eq!(session.history().entries()[0].perfected, "Error: timed out");
    }

    #[test]
    fn test_blank_submit_keeps_previous_output() {
        let generator = Arc::new(StubTextGenerator::ok("first"));
        let svc = service(generator);
        let mut session = PromptSession::new();
        session.submit(&svc, "one", &fast_tier());
        session.submit(&svc, "  ", &fast_tier());
        assert_eq!(session.current().map(|r| r.text()), Some("first"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_clear_output_keeps_history() {
        let generator = Arc::new(StubTextGenerator::ok("x"));
        let svc = service(generator);
        let mut session = PromptSession::new();
        session.submit(&svc, "one", &fast_tier());
        session.clear_output();
        assert!(session.current().is_none());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_clear_history_clears_everything() {
        let generator = Arc::new(StubTextGenerator::ok("x"));
        let svc = service(generator);
        let mut session = PromptSession::new();
        for p in ["a", "b", "c"] {
            session.submit(&svc, p, &fast_tier());
        }
        session.clear_history();
        assert!(session.current().is_none());
        assert!(session.history().recent(History::DISPLAY_LIMIT).is_empty());
    }
}
