//! perfect 用アダプター

pub mod console;

pub use console::StdConsole;
