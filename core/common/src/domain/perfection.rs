//! 1 回のプロンプト改善の結果

/// 失敗メッセージの先頭に付けるマーカー
pub const ERROR_MARKER: &str = "Error: ";

/// 改善結果（成功テキストか失敗メッセージのどちらか一方）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerfectionResult {
    Success { text: String },
    Failure { message: String },
}

impl PerfectionResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    /// 原因文字列にマーカーを付けて失敗結果にする
    pub fn failure(cause: impl std::fmt::Display) -> Self {
        Self::Failure {
            message: format!("{}{}", ERROR_MARKER, cause),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 表示・履歴用のテキスト（成功ならテキスト、失敗ならメッセージ）
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text } => text,
            Self::Failure { message } => message,
        }
    }
}
