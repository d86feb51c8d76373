//! Dish image asset resolution
//!
//! Dish photos are published as static files named after the dish slug,
//! with either a `.jpg` or `.png` extension. Availability is checked with
//! cheap HEAD probes; a miss on every candidate means the dish simply has
//! no photo and the UI shows its placeholder.

use tracing::debug;

use geodish_core::slug::dish_slug;

use crate::client::GeoDishClient;

/// Extensions tried, in order, when probing for a dish image.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Candidate asset paths for a dish name, in probe order.
pub fn dish_image_paths(name: &str) -> Vec<String> {
    let slug = dish_slug(name);
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!("/static/images/dishes/{slug}.{ext}"))
        .collect()
}

impl GeoDishClient {
    /// Probe for a dish image, returning the first URL that exists.
    ///
    /// Never fails: probe errors are treated the same as a missing image.
    pub async fn probe_dish_image(&self, name: &str) -> Option<String> {
        for path in dish_image_paths(name) {
            let url = self.url(&path);
            match self.http().head(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(%url, "dish image found");
                    return Some(url);
                }
                Ok(_) => {}
                Err(e) => {
                    debug!(%url, error = %e, "dish image probe failed");
                }
            }
        }
        None
    }
}
