use crate::application::http::{
    health::HealthApiDoc, recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(title = "Dinstein API"))]
pub struct ApiDoc;

impl ApiDoc {
    /// Every route group documented relative to the root path.
    pub fn documentation() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
            .merge_from(RecommendationApiDoc::openapi())
            .merge_from(HealthApiDoc::openapi())
    }
}
