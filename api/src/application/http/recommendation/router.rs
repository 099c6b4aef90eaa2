use super::handlers::{
    get_options::{__path_get_options, get_options},
    recommend_restaurants::{__path_recommend_restaurants, recommend_restaurants},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend_restaurants, get_options))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/restaurantRecommendation", state.args.server.root_path),
            post(recommend_restaurants),
        )
        .route(
            &format!("{}/options", state.args.server.root_path),
            get(get_options),
        )
}
