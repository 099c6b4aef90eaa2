use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::Recommendation, value_objects::CompletionRequest},
    selection::entities::Selection,
};

/// LLM Client trait for chat completion providers
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Whether a provider credential is available.
    fn is_configured(&self) -> bool;

    /// Sends one completion request and returns the text of the first
    /// choice, or `None` when the provider answered without content.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// Service trait for restaurant recommendation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn recommend(
        &self,
        selection: Selection,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;
}
