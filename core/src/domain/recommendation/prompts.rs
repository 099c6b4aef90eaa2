use std::collections::BTreeSet;

use crate::domain::{
    recommendation::value_objects::{ChatMessage, CompletionRequest},
    selection::entities::Selection,
};

pub const SYSTEM_PROMPT: &str = r#"You are a food-savvy assistant helping someone pick what to order for delivery or takeout from restaurants near them.

Reply with a single JSON object and nothing else. The object has exactly one key, "suggestions", holding an array. Every element of the array is an object with exactly these string fields:
- "restaurant": the name of a real, well-known restaurant chain (for example Chipotle, Chick-fil-A, Shake Shack)
- "menuItem": an item that appears on that chain's actual menu (for example "Steak Burrito" or "Spicy Deluxe Chicken Sandwich")
- "description": one short, upbeat sentence on why it fits the request

Only recommend popular national or regional chains that are likely to be reachable from the given zip code through DoorDash or a similar app. Never invent restaurant names or menu items.

Expected shape:
{
  "suggestions": [
    {
      "restaurant": "string",
      "menuItem": "string",
      "description": "string"
    }
  ]
}"#;

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Interpolates every field of the selection into the user turn.
/// Unset single-select fields render as empty strings.
pub fn build_user_prompt(selection: &Selection) -> String {
    format!(
        "Zip Code: {}\n\
         Mood: {}\n\
         Cuisine Cravings: {}\n\
         Dietary Restrictions: {}\n\
         When: {}\n\
         Budget per person: {}\n\
         Group: {}\n\
         Order type: {}\n\
         \n\
         What are 2–3 great menu items I can order right now for delivery or pickup?",
        selection.zip_code,
        join_tags(&selection.mood),
        join_tags(&selection.cuisine),
        join_tags(&selection.dietary),
        selection.time.map(|t| t.as_str()).unwrap_or_default(),
        selection.budget.map(|b| b.as_str()).unwrap_or_default(),
        selection.group.map(|g| g.as_str()).unwrap_or_default(),
        selection.order_type.map(|o| o.as_str()).unwrap_or_default(),
    )
}

pub fn build_completion_request(
    selection: &Selection,
    temperature: f32,
    max_tokens: u32,
) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(selection)),
        ],
        temperature,
        max_tokens,
        json_object: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        recommendation::value_objects::ChatRole,
        selection::value_objects::{Budget, GroupSize, OrderType, TimeOfDay},
    };

    fn austin_selection() -> Selection {
        Selection {
            zip_code: "78704".to_string(),
            mood: ["Comfort Food".to_string()].into(),
            cuisine: BTreeSet::new(),
            dietary: ["Vegan".to_string()].into(),
            time: Some(TimeOfDay::Dinner),
            budget: Some(Budget::Moderate),
            group: Some(GroupSize::JustMe),
            order_type: Some(OrderType::Delivery),
        }
    }

    #[test]
    fn test_user_prompt_contains_every_field() {
        let prompt = build_user_prompt(&austin_selection());

        for expected in [
            "Zip Code: 78704",
            "Mood: Comfort Food",
            "Cuisine Cravings: ",
            "Dietary Restrictions: Vegan",
            "When: Dinner",
            "Budget per person: $$ ($10–20)",
            "Group: Just me",
            "Order type: Delivery",
        ] {
            assert!(prompt.contains(expected), "missing {expected:?} in {prompt}");
        }
        assert!(prompt.contains("Cuisine Cravings: \nDietary Restrictions: Vegan"));
        assert!(prompt.ends_with("for delivery or pickup?"));
    }

    #[test]
    fn test_user_prompt_joins_tags_with_comma() {
        let mut selection = austin_selection();
        selection.toggle_cuisine("Mexican");
        selection.toggle_cuisine("BBQ");

        let prompt = build_user_prompt(&selection);
        assert!(prompt.contains("Cuisine Cravings: BBQ, Mexican\n"));
    }

    #[test]
    fn test_system_prompt_fixes_output_contract() {
        for expected in ["\"suggestions\"", "\"restaurant\"", "\"menuItem\"", "\"description\""] {
            assert!(SYSTEM_PROMPT.contains(expected));
        }
        assert!(SYSTEM_PROMPT.contains("Never invent restaurant names or menu items"));
    }

    #[test]
    fn test_completion_request_shape() {
        let request = build_completion_request(&austin_selection(), 0.8, 400);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert_eq!(request.max_tokens, 400);
        assert!(request.json_object);
    }
}
