//! エラーハンドリング
//!
//! 終了コードは sysexits.h の慣例に合わせる（64: 使い方, 78: 設定 など）。

/// エラー型
///
/// バリアントごとにプロセスの終了コードが決まる。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数・認証情報の不足（EX_CONFIG）
    #[error("{0}")]
    Env(String),
    /// テンプレートの不備（EX_CONFIG）
    #[error("{0}")]
    Template(String),
    /// HTTP 通信・ステータスエラー（EX_UNAVAILABLE）
    #[error("{0}")]
    Http(String),
    /// レスポンス JSON の不備（EX_DATAERR）
    #[error("{0}")]
    Json(String),
    /// ローカル I/O（EX_IOERR）
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Http(_) => 69,
            Self::Io(_) => 74,
            Self::Env(_) | Self::Template(_) => 78,
        }
    }

    /// 使い方の誤り（usage を表示すべきか）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::env("GOOGLE_API_KEY not found");
        assert_eq!(err.exit_code(), 78);
        assert!(!err.is_usage());
        assert_eq!(Error::template("missing placeholder").exit_code(), 78);
    }

    #[test]
    fn test_remote_error_exit_codes() {
        assert_eq!(Error::http("x").exit_code(), 69);
        assert_eq!(Error::json("x").exit_code(), 65);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: Error = io.into();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("disk full"));
    }
}
