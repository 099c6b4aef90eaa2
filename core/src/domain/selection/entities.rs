use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::selection::value_objects::{Budget, GroupSize, OrderType, TimeOfDay};

/// Meal preferences gathered from the user before asking for suggestions.
///
/// Tag groups are sets kept in sorted order so that the same choices always
/// produce the same prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub zip_code: String,
    #[serde(default)]
    pub mood: BTreeSet<String>,
    #[serde(default)]
    pub cuisine: BTreeSet<String>,
    #[serde(default)]
    pub dietary: BTreeSet<String>,
    pub time: Option<TimeOfDay>,
    pub budget: Option<Budget>,
    pub group: Option<GroupSize>,
    pub order_type: Option<OrderType>,
}

/// Removes `item` from `set` if present, inserts it otherwise.
pub fn toggle(item: &str, mut set: BTreeSet<String>) -> BTreeSet<String> {
    if !set.remove(item) {
        set.insert(item.to_string());
    }
    set
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the selection may be submitted. Dietary tags never matter here.
    pub fn is_complete(&self) -> bool {
        !self.zip_code.trim().is_empty()
            && (!self.mood.is_empty() || !self.cuisine.is_empty())
            && self.time.is_some()
            && self.budget.is_some()
            && self.group.is_some()
            && self.order_type.is_some()
    }

    pub fn set_zip_code(&mut self, zip_code: impl Into<String>) {
        self.zip_code = zip_code.into();
    }

    pub fn toggle_mood(&mut self, item: &str) {
        self.mood = toggle(item, std::mem::take(&mut self.mood));
    }

    pub fn toggle_cuisine(&mut self, item: &str) {
        self.cuisine = toggle(item, std::mem::take(&mut self.cuisine));
    }

    pub fn toggle_dietary(&mut self, item: &str) {
        self.dietary = toggle(item, std::mem::take(&mut self.dietary));
    }

    pub fn select_time(&mut self, time: TimeOfDay) {
        self.time = Some(time);
    }

    pub fn select_budget(&mut self, budget: Budget) {
        self.budget = Some(budget);
    }

    pub fn select_group(&mut self, group: GroupSize) {
        self.group = Some(group);
    }

    pub fn select_order_type(&mut self, order_type: OrderType) {
        self.order_type = Some(order_type);
    }
}
