use axum::extract::State;
use dinstein_core::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::Recommendation, ports::RecommendationService},
    selection::entities::Selection,
};

use crate::application::http::{
    recommendation::validators::RecommendRestaurantsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/restaurantRecommendation",
    tag = "recommendation",
    summary = "Recommend restaurant orders",
    description = "Turns meal preferences into 2-3 menu items from well-known restaurant chains using an LLM",
    responses(
        (status = 200, body = Recommendation),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = RecommendRestaurantsRequest
)]
pub async fn recommend_restaurants(
    State(state): State<AppState>,
    payload: Result<ValidateJson<RecommendRestaurantsRequest>, ApiError>,
) -> Result<Response<Recommendation>, ApiError> {
    // A missing key wins over any problem with the body.
    if !state.service.is_llm_configured() {
        return Err(ApiError::from(CoreError::ConfigurationError));
    }
    let ValidateJson(payload) = payload?;

    let selection =
        Selection::try_from(payload).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let recommendation = state
        .service
        .recommend(selection)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendation))
}
