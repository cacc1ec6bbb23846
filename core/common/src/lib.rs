//! Prompt Perfecter 共通ライブラリ
//!
//! `perfect`（CLI）と`perfect-web`（ブラウザフォーム）で共有される機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（モデル・履歴・結果）
pub mod domain;

/// メタプロンプトのテンプレート
pub mod template;

/// 起動時設定の解決
pub mod config;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// ユースケース（改善サービス・セッション）
pub mod usecase;
