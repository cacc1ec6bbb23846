//! 選択可能なモデルの一覧（表示ラベルとレート区分）

use super::ModelId;

/// レート区分（表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// 高品質・低スループット
    Quality,
    /// 高速・高スループット
    Throughput,
}

impl ModelTier {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Quality => "Pro Models",
            Self::Throughput => "Flash Models",
        }
    }

    /// 表示用の説明行
    pub fn details(&self) -> &'static [&'static str] {
        match self {
            Self::Quality => &["Highest quality", "2 req/min", "50 req/day"],
            Self::Throughput => &["Fast & efficient", "15 req/min", "1,500 req/day"],
        }
    }
}

/// 1 モデル分の選択肢
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOption {
    pub id: ModelId,
    pub label: String,
    pub tier: ModelTier,
}

impl ModelOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, tier: ModelTier) -> Self {
        Self {
            id: ModelId::new(id),
            label: label.into(),
            tier,
        }
    }
}

/// モデル選択肢の一覧（表示順を保持）
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    options: Vec<ModelOption>,
    default_index: usize,
}

/// CLI が固定で使うモデル
pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash";

impl ModelCatalog {
    /// 組み込みの 4 モデル（既定は Flash）
    pub fn builtin() -> Self {
        Self {
            options: vec![
                ModelOption::new("gemini-2.5-pro", "Gemini 2.5 Pro (Best Quality)", ModelTier::Quality),
                ModelOption::new("gemini-2.5-flash", "Gemini 2.5 Flash (Fast & Balanced)", ModelTier::Throughput),
                ModelOption::new("gemini-pro-latest", "Gemini Pro Latest", ModelTier::Quality),
                ModelOption::new("gemini-flash-latest", "Gemini Flash Latest", ModelTier::Throughput),
            ],
            default_index: 1,
        }
    }

    pub fn options(&self) -> &[ModelOption] {
        &self.options
    }

    pub fn default_option(&self) -> &ModelOption {
        &self.options[self.default_index]
    }

    /// 識別子で検索
    pub fn find(&self, id: &str) -> Option<&ModelOption> {
        self.options.iter().find(|o| o.id.as_ref() == id)
    }

    /// フォームから来た値（識別子またはラベル）で検索
    pub fn resolve(&self, value: &str) -> Option<&ModelOption> {
        self.find(value)
            .or_else(|| self.options.iter().find(|o| o.label == value))
    }

    /// 一覧にない識別子でも選択肢にする（ラベルは識別子そのまま）
    pub fn option_for(&self, id: &str) -> ModelOption {
        self.find(id).cloned().unwrap_or_else(|| {
            let tier = if id.contains("pro") {
                ModelTier::Quality
            } else {
                ModelTier::Throughput
            };
            ModelOption::new(id, id, tier)
        })
    }
}
