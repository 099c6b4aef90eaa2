use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("OpenAI API key is not configured")]
    ConfigurationError,

    #[error("Selection is incomplete")]
    IncompleteSelection,

    #[error("LLM provider did not respond in time")]
    ProviderTimeout,

    #[error("No response content received")]
    EmptyResponse,

    /// Carries the raw provider text for diagnostics.
    #[error("LLM response is not valid JSON: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("LLM API returned error: {status} - {body}")]
    ProviderStatus { status: u16, body: String },
}
