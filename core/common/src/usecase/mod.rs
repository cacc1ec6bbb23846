//! ユースケース（ports 経由で外界に触れるアプリケーションロジック）

pub mod perfect;
pub mod session;

#[cfg(test)]
pub(crate) mod stub;

pub use perfect::PerfectionService;
pub use session::PromptSession;
