use std::str::FromStr;

use dinstein_core::domain::selection::{
    entities::Selection,
    value_objects::{Budget, GroupSize, OrderType, TimeOfDay, UnknownOptionError},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const MAX_TAG_LEN: usize = 64;

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags
        .iter()
        .any(|tag| tag.trim().is_empty() || tag.chars().count() > MAX_TAG_LEN)
    {
        return Err(ValidationError::new("tag")
            .with_message("tags must be between 1 and 64 characters".into()));
    }
    Ok(())
}

/// Selection as sent by the form. Single-select fields hold the option
/// label, or an empty string when nothing was picked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRestaurantsRequest {
    #[validate(length(max = 16, message = "zipCode must be at most 16 characters"))]
    #[schema(example = "78704")]
    pub zip_code: String,

    #[serde(default)]
    #[validate(
        length(max = 16, message = "mood accepts at most 16 tags"),
        custom(function = "validate_tags")
    )]
    #[schema(example = json!(["Comfort Food"]))]
    pub mood: Vec<String>,

    #[serde(default)]
    #[validate(
        length(max = 16, message = "cuisine accepts at most 16 tags"),
        custom(function = "validate_tags")
    )]
    pub cuisine: Vec<String>,

    #[serde(default)]
    #[validate(
        length(max = 16, message = "dietary accepts at most 16 tags"),
        custom(function = "validate_tags")
    )]
    #[schema(example = json!(["Vegan"]))]
    pub dietary: Vec<String>,

    #[serde(default)]
    #[schema(example = "Dinner")]
    pub time: String,

    #[serde(default)]
    #[schema(example = "$$ ($10–20)")]
    pub budget: String,

    #[serde(default)]
    #[schema(example = "Just me")]
    pub group: String,

    #[serde(default)]
    #[schema(example = "Delivery")]
    pub order_type: String,
}

fn parse_option<T>(value: &str) -> Result<Option<T>, UnknownOptionError>
where
    T: FromStr<Err = UnknownOptionError>,
{
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

impl TryFrom<RecommendRestaurantsRequest> for Selection {
    type Error = UnknownOptionError;

    fn try_from(request: RecommendRestaurantsRequest) -> Result<Self, Self::Error> {
        Ok(Selection {
            zip_code: request.zip_code.trim().to_string(),
            mood: request.mood.into_iter().collect(),
            cuisine: request.cuisine.into_iter().collect(),
            dietary: request.dietary.into_iter().collect(),
            time: parse_option::<TimeOfDay>(&request.time)?,
            budget: parse_option::<Budget>(&request.budget)?,
            group: parse_option::<GroupSize>(&request.group)?,
            order_type: parse_option::<OrderType>(&request.order_type)?,
        })
    }
}
