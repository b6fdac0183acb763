//! Canned `ContentGenerator` for unit and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{ContentGenerator, GenerationOptions, LlmError};

#[derive(Debug, Clone)]
pub enum CannedReply {
    Text(String),
    MissingKey,
    Upstream(u16),
}

/// Records every call and answers with the same reply.
pub struct CannedGenerator {
    reply: CannedReply,
    calls: Mutex<Vec<(String, GenerationOptions)>>,
}

impl CannedGenerator {
    pub fn new(reply: CannedReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(CannedReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> Vec<(String, GenerationOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for CannedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        if matches!(self.reply, CannedReply::MissingKey) {
            return Err(LlmError::MissingApiKey);
        }
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.clone()));
        match &self.reply {
            CannedReply::Text(text) => Ok(text.clone()),
            CannedReply::Upstream(status) => Err(LlmError::Api {
                status: *status,
                message: "upstream failure".to_string(),
            }),
            CannedReply::MissingKey => Err(LlmError::MissingApiKey),
        }
    }
}
