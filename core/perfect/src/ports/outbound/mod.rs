//! Outbound ポート: 端末入出力

pub mod console;

pub use console::Console;
