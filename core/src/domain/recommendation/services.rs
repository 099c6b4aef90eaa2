use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    recommendation::{
        entities::Recommendation,
        helpers::parse_recommendation,
        ports::{LLMClient, RecommendationService},
        prompts::build_completion_request,
    },
    selection::entities::Selection,
};

impl<LLM> RecommendationService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(request_id = %generate_uuid_v7(), zip_code = %selection.zip_code))]
    async fn recommend(&self, selection: Selection) -> Result<Recommendation, CoreError> {
        // 1. Preconditions, checked before any network traffic
        if !self.llm_client.is_configured() {
            tracing::error!("OpenAI API key is not configured");
            return Err(CoreError::ConfigurationError);
        }

        if !selection.is_complete() {
            return Err(CoreError::IncompleteSelection);
        }

        // 2. Build prompt
        let request = build_completion_request(
            &selection,
            self.settings.temperature,
            self.settings.max_tokens,
        );

        // 3. Call LLM, bounded by the timeout whatever the client does
        let content =
            tokio::time::timeout(self.settings.timeout, self.llm_client.complete(request))
                .await
                .map_err(|_| {
                    tracing::error!(
                        timeout_ms = self.settings.timeout.as_millis() as u64,
                        "LLM request timed out"
                    );
                    CoreError::ProviderTimeout
                })??;

        // 4. Parse and validate response
        let recommendation = parse_recommendation(content.as_deref())?;

        tracing::info!(
            suggestions = recommendation.suggestions.len(),
            "Generated restaurant recommendation"
        );

        Ok(recommendation)
    }
}
