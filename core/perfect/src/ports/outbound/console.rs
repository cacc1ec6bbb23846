//! 端末入出力 Outbound ポート
//!
//! 結果は stdout、案内表示（入力プロンプト・進行中メッセージ）は stderr に分ける。

use common::error::Error;

pub trait Console: Send + Sync {
    /// ラベルを表示して 1 行読む（EOF なら None、末尾の改行は除く）
    fn read_line(&self, label: &str) -> Result<Option<String>, Error>;

    /// 結果テキストを出力する
    fn print_result(&self, text: &str) -> Result<(), Error>;

    /// 案内表示
    fn print_status(&self, text: &str);
}
