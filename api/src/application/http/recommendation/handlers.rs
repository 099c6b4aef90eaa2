pub mod get_options;
pub mod recommend_restaurants;
