//! perfect コマンドの enum（Command Pattern）

use common::domain::ModelId;

/// perfect の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum PerfectCommand {
    /// ヘルプ表示
    Help,
    /// モデル一覧
    ListModels,
    /// 標準入力の 1 行を改善して出力する
    Perfect {
        provider: Option<String>,
        model: ModelId,
    },
}
