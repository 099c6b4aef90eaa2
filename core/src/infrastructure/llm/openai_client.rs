use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recommendation::{
        ports::LLMClient,
        value_objects::{ChatMessage, CompletionRequest},
    },
};

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn map_transport_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        tracing::error!("OpenAI API request timed out: {}", e);
        CoreError::ProviderTimeout
    } else {
        tracing::error!("OpenAI API request failed: {}", e);
        CoreError::Network(format!("LLM API error: {}", e))
    }
}

impl OpenAILLMClient {
    /// Builds the single HTTP client shared by every request. The timeout
    /// covers the whole exchange, body included.
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config
                .openai_api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_openai_api(
        &self,
        api_key: &str,
        request: ChatCompletionRequest<'_>,
    ) -> Result<Option<String>, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ProviderStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                return map_transport_error(e);
            }
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::Network(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

impl LLMClient for OpenAILLMClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, CoreError> {
        let api_key = self.api_key.as_deref().ok_or(CoreError::ConfigurationError)?;

        let body = ChatCompletionRequest {
            model: &self.model_name,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_object.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        self.call_openai_api(api_key, body).await
    }
}
