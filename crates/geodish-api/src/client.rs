//! HTTP client for the GeoDish backend
//!
//! One method per remote operation. Every method returns the canonical
//! decoded type; payload-shape tolerance lives in [`crate::decode`].

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use geodish_core::{Dish, SavedRecipe};

use crate::decode;
use crate::error::{ApiError, Result};

/// Default backend address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Health check response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

/// Request body for saving the currently shown dish
#[derive(Debug, Serialize)]
struct SaveRecipeRequest<'a> {
    dish_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_name: Option<&'a str>,
}

/// HTTP client for the GeoDish backend
#[derive(Debug, Clone)]
pub struct GeoDishClient {
    client: Client,
    base_url: String,
}

impl GeoDishClient {
    /// Create a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (e.g. TLS backend failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        let base_url = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request for the given method and path.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Percent-encode a single path segment (country names contain spaces).
    fn segment(value: &str) -> String {
        utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
    }

    // ─────────────────────────────────────────────────────────────
    // Countries
    // ─────────────────────────────────────────────────────────────

    /// List the available countries.
    ///
    /// Calls `GET /countries`. Accepts both the bare-array and the
    /// `{"countries": [...]}` response shapes.
    pub async fn list_countries(&self) -> Result<Vec<String>> {
        let response = self.request(reqwest::Method::GET, "/countries").send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        let countries = decode::decode_countries(&body)?;
        debug!(count = countries.len(), "loaded country catalog");
        Ok(countries)
    }

    // ─────────────────────────────────────────────────────────────
    // Dishes
    // ─────────────────────────────────────────────────────────────

    /// Fetch a random dish for a country.
    ///
    /// Calls `GET /dish/{country}`; repeated calls for the same country
    /// may return different dishes.
    pub async fn random_dish(&self, country: &str) -> Result<Dish> {
        let path = format!("/dish/{}", Self::segment(country));
        let response = self.request(reqwest::Method::GET, &path).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str::<Dish>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ─────────────────────────────────────────────────────────────
    // Saved recipes
    // ─────────────────────────────────────────────────────────────

    /// Save a dish into the user's collection.
    ///
    /// Calls `POST /user/{user}/recipes` with `{dish_id, custom_name?}`.
    /// A 400 whose error text mentions "already saved" surfaces as
    /// [`ApiError::AlreadySaved`].
    pub async fn save_recipe(
        &self,
        user: &str,
        dish_id: &str,
        custom_name: Option<&str>,
    ) -> Result<()> {
        let path = format!("/user/{}/recipes", Self::segment(user));
        let body = SaveRecipeRequest {
            dish_id,
            custom_name,
        };
        let response = self
            .request(reqwest::Method::POST, &path)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            debug!(dish_id, "saved recipe");
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_save_failure(status.as_u16(), &text))
        }
    }

    /// List the user's saved recipes with full dish details.
    ///
    /// Calls `GET /user/{user}/recipes/full`. Accepts both the bare-array
    /// and the `{"recipes": [...]}` response shapes.
    pub async fn list_recipes(&self, user: &str) -> Result<Vec<SavedRecipe>> {
        let path = format!("/user/{}/recipes/full", Self::segment(user));
        let response = self.request(reqwest::Method::GET, &path).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        decode::decode_recipes(&body)
    }

    /// Delete a saved recipe.
    ///
    /// Calls `DELETE /user/{user}/recipes/{recipe}`.
    pub async fn delete_recipe(&self, user: &str, recipe_id: &str) -> Result<()> {
        let path = format!(
            "/user/{}/recipes/{}",
            Self::segment(user),
            Self::segment(recipe_id)
        );
        let response = self.request(reqwest::Method::DELETE, &path).send().await?;

        let status = response.status();

        if status.is_success() {
            debug!(recipe_id, "deleted recipe");
            Ok(())
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &text))
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Health
    // ─────────────────────────────────────────────────────────────

    /// Check backend health.
    ///
    /// Calls `GET /health`.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.request(reqwest::Method::GET, "/health").send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
