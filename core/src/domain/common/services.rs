use std::{sync::Arc, time::Duration};

use crate::domain::recommendation::ports::LLMClient;

/// Parameters applied to every completion call.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) settings: CompletionSettings,
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            settings: self.settings.clone(),
        }
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, settings: CompletionSettings) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            settings,
        }
    }

    pub fn is_llm_configured(&self) -> bool {
        self.llm_client.is_configured()
    }
}
