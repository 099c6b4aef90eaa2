use dinstein_core::domain::selection::value_objects::OptionCatalog;

use crate::application::http::server::api_entities::response::Response;

#[utoipa::path(
    get,
    path = "/options",
    tag = "recommendation",
    summary = "List selectable options",
    description = "Returns the values offered for every preference input",
    responses(
        (status = 200, body = OptionCatalog)
    )
)]
pub async fn get_options() -> Response<OptionCatalog> {
    Response::OK(OptionCatalog::new())
}
