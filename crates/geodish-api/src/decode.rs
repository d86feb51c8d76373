//! Tolerant payload normalization
//!
//! The backend has shipped two shapes for its list endpoints: a bare JSON
//! array, and an object wrapping the array under a key. Both are accepted
//! here so the rest of the client only ever sees canonical `Vec<T>`.

use serde::Deserialize;

use geodish_core::SavedRecipe;

use crate::error::{ApiError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum CountriesPayload {
    Bare(Vec<String>),
    Wrapped { countries: Vec<String> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipesPayload {
    Bare(Vec<SavedRecipe>),
    Wrapped { recipes: Vec<SavedRecipe> },
}

/// Decode the countries listing from either accepted shape.
pub fn decode_countries(body: &str) -> Result<Vec<String>> {
    match serde_json::from_str::<CountriesPayload>(body) {
        Ok(CountriesPayload::Bare(countries))
        | Ok(CountriesPayload::Wrapped { countries }) => Ok(countries),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Decode the saved-recipes listing from either accepted shape.
pub fn decode_recipes(body: &str) -> Result<Vec<SavedRecipe>> {
    match serde_json::from_str::<RecipesPayload>(body) {
        Ok(RecipesPayload::Bare(recipes)) | Ok(RecipesPayload::Wrapped { recipes }) => Ok(recipes),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_bare_array() {
        let body = r#"["Italy","Japan","Mexico"]"#;
        let countries = decode_countries(body).unwrap();
        assert_eq!(countries, vec!["Italy", "Japan", "Mexico"]);
    }

    #[test]
    fn test_countries_wrapped_object() {
        let body = r#"{"countries":["Italy","Japan"]}"#;
        let countries = decode_countries(body).unwrap();
        assert_eq!(countries, vec!["Italy", "Japan"]);
    }

    #[test]
    fn test_countries_empty_list() {
        assert!(decode_countries("[]").unwrap().is_empty());
        assert!(decode_countries(r#"{"countries":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_countries_malformed_is_decode_error() {
        let err = decode_countries(r#"{"total":3}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = decode_countries("not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_recipes_bare_array() {
        let body = r#"[{"_id":"r1","dish_name":"Sushi","country":"Japan"}]"#;
        let recipes = decode_recipes(body).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "r1");
        assert_eq!(recipes[0].title(), "Sushi");
    }

    #[test]
    fn test_recipes_wrapped_object() {
        let body = r#"{"recipes":[{"_id":"r1"},{"_id":"r2","custom_name":"Mine"}]}"#;
        let recipes = decode_recipes(body).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1].title(), "Mine");
    }

    #[test]
    fn test_recipes_malformed_is_decode_error() {
        let err = decode_recipes(r#"{"recipes":"nope"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
