//! 標準入出力による Console 実装

use crate::ports::outbound::Console;
use common::error::Error;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct StdConsole;

/// 末尾の改行（\n / \r\n）を 1 つ取り除く
pub fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// 読み込んだバイト列を文字列にする（不正なバイト列は U+FFFD）
pub fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Console for StdConsole {
    fn read_line(&self, label: &str) -> Result<Option<String>, Error> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", label)?;
        stderr.flush()?;

        // 不正な UTF-8 は置換文字にして受け付ける
        let mut buf = Vec::new();
        let n = io::stdin().lock().read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(decode_line(&buf))))
    }

    fn print_result(&self, text: &str) -> Result<(), Error> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }

    fn print_status(&self, text: &str) {
        eprintln!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("hello\n".to_string()), "hello");
        assert_eq!(trim_line_ending("hello\r\n".to_string()), "hello");
        assert_eq!(trim_line_ending("hello".to_string()), "hello");
        assert_eq!(trim_line_ending("  spaced  \n".to_string()), "  spaced  ");
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        let line = decode_line(b"write a story \xff about a cat\n");
        assert_eq!(trim_line_ending(line), "write a story \u{FFFD} about a cat");
        assert_eq!(decode_line("猫".as_bytes()), "猫");
    }
}
