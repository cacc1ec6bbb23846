//! TextGenerator の標準実装（モデルごとにプロバイダを組み立てて 1 回問い合わせる）

use crate::domain::ModelId;
use crate::error::Error;
use crate::llm::{create_driver, ProviderSettings, ProviderType};
use crate::ports::outbound::TextGenerator;

/// LlmProvider 経由のテキスト生成アダプタ
pub struct ProviderTextGenerator {
    provider_type: ProviderType,
    settings: ProviderSettings,
}

impl ProviderTextGenerator {
    pub fn new(provider_type: ProviderType, settings: ProviderSettings) -> Self {
        Self {
            provider_type,
            settings,
        }
    }
}

impl TextGenerator for ProviderTextGenerator {
    fn generate(&self, full_prompt: &str, model: &ModelId) -> Result<String, Error> {
        let driver = create_driver(self.provider_type, model.as_ref(), &self.settings)?;
        driver.query(full_prompt)
    }
}
