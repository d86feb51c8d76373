//! # geodish-core - Core Domain Types
//!
//! Foundation crate for the GeoDish terminal client. Provides domain types,
//! error handling, asset slug derivation, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Dish`] - A dish fetched for a country, with ingredients and instructions
//! - [`SavedRecipe`] - A user's saved copy/reference to a dish
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for client-side plumbing failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Slugs (`slug`)
//! - [`dish_slug()`] - Deterministic asset-filename derivation from a dish name
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use geodish_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod slug;
pub mod types;

/// Prelude for common imports used throughout all GeoDish crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use slug::dish_slug;
pub use types::{Dish, SavedRecipe};
