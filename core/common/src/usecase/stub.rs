//! テスト用: 固定応答を返し、呼び出しを記録する TextGenerator

use crate::domain::ModelId;
use crate::error::Error;
use crate::ports::outbound::TextGenerator;
use std::sync::Mutex;

pub struct StubTextGenerator {
    response: Result<String, Error>,
    pub calls: Mutex<Vec<(String, ModelId)>>,
}

impl StubTextGenerator {
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: Error) -> Self {
        Self {
            response: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TextGenerator for StubTextGenerator {
    fn generate(&self, full_prompt: &str, model: &ModelId) -> Result<String, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((full_prompt.to_string(), model.clone()));
        self.response.clone()
    }
}
