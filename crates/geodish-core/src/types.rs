//! Domain types shared across the client

use serde::{Deserialize, Serialize};

/// A dish belonging to a country, as returned by the dish endpoint.
///
/// Immutable once fetched. The backend stores Mongo-style ids, so `_id`
/// is accepted as an alias for `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    pub country: String,

    /// Ordered ingredient list; order is preserved when rendering.
    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: String,
}

/// A user's saved copy of a dish, independently deletable.
///
/// Title resolution prefers `custom_name`, then the dish's own name
/// (`dish_name`, with `name` accepted as an alias), then a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(alias = "_id")]
    pub id: String,

    /// Reference to the dish this recipe was saved from.
    #[serde(default)]
    pub dish_id: Option<String>,

    /// Optional user-provided override of the display name.
    #[serde(default)]
    pub custom_name: Option<String>,

    #[serde(default, alias = "name")]
    pub dish_name: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: String,
}

/// Fallback title for a recipe with neither a custom nor a dish name.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

impl SavedRecipe {
    /// Resolve the display title: `custom_name`, else `dish_name`, else
    /// [`UNTITLED_RECIPE`].
    pub fn title(&self) -> &str {
        self.custom_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.dish_name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(UNTITLED_RECIPE)
    }

    /// Country badge text, defaulting to "Unknown" like the dish card.
    pub fn country_label(&self) -> &str {
        self.country
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_deserialize_with_mongo_id() {
        let json = r#"{
            "_id": "abc123",
            "name": "Sushi",
            "country": "Japan",
            "ingredients": ["rice", "fish"],
            "instructions": "Roll it."
        }"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.id, "abc123");
        assert_eq!(dish.name, "Sushi");
        assert_eq!(dish.ingredients, vec!["rice", "fish"]);
    }

    #[test]
    fn test_dish_deserialize_plain_id() {
        let json = r#"{"id":"1","name":"Pizza","country":"Italy"}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.id, "1");
        assert!(dish.ingredients.is_empty());
        assert!(dish.instructions.is_empty());
    }

    #[test]
    fn test_recipe_title_prefers_custom_name() {
        let recipe = SavedRecipe {
            id: "r1".to_string(),
            dish_id: Some("d1".to_string()),
            custom_name: Some("Nonna's Pizza".to_string()),
            dish_name: Some("Pizza Margherita".to_string()),
            country: Some("Italy".to_string()),
            ingredients: vec![],
            instructions: String::new(),
        };
        assert_eq!(recipe.title(), "Nonna's Pizza");
    }

    #[test]
    fn test_recipe_title_falls_back_to_dish_name() {
        let json = r#"{"_id":"r2","name":"Pad Thai","country":"Thailand"}"#;
        let recipe: SavedRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title(), "Pad Thai");
    }

    #[test]
    fn test_recipe_title_placeholder() {
        let json = r#"{"_id":"r3"}"#;
        let recipe: SavedRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title(), UNTITLED_RECIPE);
        assert_eq!(recipe.country_label(), "Unknown");
    }

    #[test]
    fn test_recipe_empty_custom_name_ignored() {
        let json = r#"{"_id":"r4","custom_name":"","dish_name":"Tacos"}"#;
        let recipe: SavedRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title(), "Tacos");
    }
}
