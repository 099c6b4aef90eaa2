use crate::{
    domain::{
        common::{
            DinsteinConfig,
            entities::app_errors::CoreError,
            services::{CompletionSettings, Service},
        },
        recommendation::ports::LLMClient,
    },
    infrastructure::llm::OpenAILLMClient,
};

pub type DinsteinService = Service<OpenAILLMClient>;

/// Builds the process-wide service. The provider client is created once here
/// and shared by every request.
pub fn create_service(config: DinsteinConfig) -> Result<DinsteinService, CoreError> {
    let llm_client = OpenAILLMClient::new(&config.llm)?;

    if !llm_client.is_configured() {
        tracing::warn!(
            "OPENAI_API_KEY is not set, recommendations will fail until it is configured"
        );
    }

    Ok(Service::new(
        llm_client,
        CompletionSettings {
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            timeout: config.llm.timeout,
        },
    ))
}
