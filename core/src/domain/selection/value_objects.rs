use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const MOOD_OPTIONS: [&str; 7] = [
    "Comfort Food",
    "Healthy",
    "Quick Bites",
    "Spicy",
    "Something New",
    "Family Style",
    "Light & Fresh",
];

pub const CUISINE_OPTIONS: [&str; 9] = [
    "American",
    "Mexican",
    "Asian",
    "Mediterranean",
    "Italian",
    "Indian",
    "BBQ",
    "Vegan",
    "Dessert",
];

pub const DIETARY_OPTIONS: [&str; 7] = [
    "Gluten-Free",
    "Low Carb",
    "Dairy-Free",
    "Nut-Free",
    "Vegan",
    "Vegetarian",
    "None",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {field} option: {value}")]
pub struct UnknownOptionError {
    pub field: &'static str,
    pub value: String,
}

/// Declares a single-select option enum whose variants serialize, parse and
/// display as their form label.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, [$($variant:ident => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: [$name; [$($label),+].len()] = [$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .into_iter()
                    .find(|option| option.as_str() == s)
                    .ok_or_else(|| UnknownOptionError {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum!(TimeOfDay, "time", [
    Now => "Now",
    Lunch => "Lunch",
    Dinner => "Dinner",
    LateNight => "Late Night",
    Brunch => "Brunch",
    SnackTime => "Snack Time",
]);

option_enum!(
    /// Budget per person. Labels use an en dash in the ranges.
    Budget, "budget", [
        Low => "$ (< $10)",
        Moderate => "$$ ($10–20)",
        High => "$$$ ($20–30)",
        Premium => "$$$$ ($30+)",
    ]
);

option_enum!(GroupSize, "group", [
    JustMe => "Just me",
    Couple => "Couple",
    FamilyOrGroup => "Family or group",
    OfficeOrTeam => "Office or team meal",
]);

option_enum!(OrderType, "orderType", [
    Delivery => "Delivery",
    Pickup => "Pickup",
    DineIn => "Dine In",
    Any => "Any",
]);

/// Every value the selection form offers, grouped by input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    pub mood: Vec<String>,
    pub cuisine: Vec<String>,
    pub dietary: Vec<String>,
    pub time: Vec<String>,
    pub budget: Vec<String>,
    pub group: Vec<String>,
    pub order_type: Vec<String>,
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self {
            mood: MOOD_OPTIONS.iter().map(|s| s.to_string()).collect(),
            cuisine: CUISINE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            dietary: DIETARY_OPTIONS.iter().map(|s| s.to_string()).collect(),
            time: TimeOfDay::ALL.iter().map(|o| o.to_string()).collect(),
            budget: Budget::ALL.iter().map(|o| o.to_string()).collect(),
            group: GroupSize::ALL.iter().map(|o| o.to_string()).collect(),
            order_type: OrderType::ALL.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for option in TimeOfDay::ALL {
            assert_eq!(option.as_str().parse::<TimeOfDay>(), Ok(option));
        }
        for option in Budget::ALL {
            assert_eq!(option.as_str().parse::<Budget>(), Ok(option));
        }
        for option in GroupSize::ALL {
            assert_eq!(option.as_str().parse::<GroupSize>(), Ok(option));
        }
        for option in OrderType::ALL {
            assert_eq!(option.as_str().parse::<OrderType>(), Ok(option));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Midnight".parse::<TimeOfDay>().unwrap_err();
        assert_eq!(err.field, "time");
        assert_eq!(err.value, "Midnight");

        // hyphen instead of en dash
        assert!("$$ ($10-20)".parse::<Budget>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Budget::Moderate).unwrap();
        assert_eq!(json, "\"$$ ($10–20)\"");

        let parsed: OrderType = serde_json::from_str("\"Dine In\"").unwrap();
        assert_eq!(parsed, OrderType::DineIn);
    }

    #[test]
    fn test_display_matches_serialized_label() {
        for option in TimeOfDay::ALL {
            let json = serde_json::to_value(option).unwrap();
            assert_eq!(json, option.to_string());
        }
        for option in GroupSize::ALL {
            let json = serde_json::to_value(option).unwrap();
            assert_eq!(json, option.to_string());
        }
        assert_eq!(Budget::ALL.len(), 4);
        assert_eq!(OrderType::ALL.len(), 4);
    }

    #[test]
    fn test_catalog_sizes() {
        let catalog = OptionCatalog::new();
        assert_eq!(catalog.mood.len(), 7);
        assert_eq!(catalog.cuisine.len(), 9);
        assert_eq!(catalog.dietary.len(), 7);
        assert_eq!(catalog.time.len(), 6);
        assert_eq!(catalog.budget.len(), 4);
        assert_eq!(catalog.group.len(), 4);
        assert_eq!(catalog.order_type.len(), 4);
    }
}
