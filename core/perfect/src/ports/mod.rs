//! Ports & Adapters のポート定義
//!
//! - inbound: main が Runner を呼ぶためのインターフェース
//! - outbound: 端末入出力

pub mod inbound;
pub mod outbound;
