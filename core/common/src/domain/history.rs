//! 改善履歴のドメイン型
//!
//! 追加順で保持し、表示時は新しい順に取り出す。個別の変更・削除はできず、全消去のみ。

/// 履歴 1 件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    /// 成功テキスト、または失敗メッセージ
    pub perfected: String,
    pub model_label: String,
}

/// プレビュー表示の最大文字数
pub const PREVIEW_CHARS: usize = 100;

impl HistoryEntry {
    pub fn new(
        original: impl Into<String>,
        perfected: impl Into<String>,
        model_label: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            perfected: perfected.into(),
            model_label: model_label.into(),
        }
    }

    /// 100 文字を超える場合は切り詰めて "..." を付ける（文字単位）
    pub fn preview(text: &str) -> String {
        match text.char_indices().nth(PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}

/// セッション単位の履歴（呼び出し側が所有する）
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// 画面に出す件数
    pub const DISPLAY_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// 直近 n 件を新しい順で返す
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 追加順のまま
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
