//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod history;
pub mod model;
pub mod perfection;

use std::path::{Path, PathBuf};

pub use history::{History, HistoryEntry};
pub use model::{ModelCatalog, ModelOption, ModelTier};
pub use perfection::{PerfectionResult, ERROR_MARKER};

/// ホームディレクトリのパス（template.txt / log/ を置く）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// リモートモデル識別子（gemini-2.5-flash 等）
///
/// 値は不透明な文字列としてそのままリモート呼び出しに渡す。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// ユーザーの生プロンプト
///
/// 不変条件: trim 後に空でない。中身は trim せず入力のまま保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPrompt(String);

impl RawPrompt {
    /// 空・空白のみの入力は None（送信しない）
    pub fn parse(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::ops::Deref for RawPrompt {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for RawPrompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_prompt_rejects_blank() {
        assert!(RawPrompt::parse("").is_none());
        assert!(RawPrompt::parse("   ").is_none());
        assert!(RawPrompt::parse("\n\t \r\n").is_none());
    }

    #[test]
    fn test_raw_prompt_keeps_surrounding_whitespace() {
        let p = RawPrompt::parse("  write a story  ").unwrap();
        assert_eq!(&*p, "  write a story  ");
    }

    #[test]
    fn test_model_id_display() {
        let id = ModelId::new("gemini-2.5-flash");
        assert_eq!(id.to_string(), "gemini-2.5-flash");
        assert_eq!(id.as_ref(), "gemini-2.5-flash");
    }
}
