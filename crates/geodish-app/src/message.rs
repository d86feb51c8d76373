//! Messages driving the update loop
//!
//! Everything that can happen (key presses, timer ticks, completions of
//! background gateway calls) arrives as a `Message`.

use geodish_core::{Dish, SavedRecipe};

use crate::input_key::InputKey;

/// All events that can drive a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────
    // Input & lifecycle
    // ─────────────────────────────────────────────────────────────
    /// Raw key press from the terminal
    Key(InputKey),

    /// Periodic timer tick (alert expiry, spinners)
    Tick,

    /// Dismiss the newest alert
    DismissAlert,

    /// Request application exit
    Quit,

    // ─────────────────────────────────────────────────────────────
    // Country catalog
    // ─────────────────────────────────────────────────────────────
    /// Catalog fetch completed
    CountriesLoaded(Vec<String>),

    /// Catalog fetch failed
    CountriesLoadFailed(String),

    /// Retry the catalog fetch
    ReloadCountries,

    /// A country tile was activated
    SelectCountry(usize),

    // ─────────────────────────────────────────────────────────────
    // Dish view
    // ─────────────────────────────────────────────────────────────
    /// Random-dish fetch completed
    DishLoaded { country: String, dish: Dish },

    /// Random-dish fetch failed
    DishLoadFailed { country: String, error: String },

    /// Fetch another random dish for the selected country
    GetAnotherDish,

    /// Image probe finished for a dish (None when no image exists)
    DishImageResolved {
        dish_id: String,
        url: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────────
    /// Save the currently shown dish to the collection
    SaveCurrentDish,

    /// Save completed
    RecipeSaved { dish_name: String },

    /// Save failed; `conflict` marks the already-saved case
    RecipeSaveFailed { conflict: bool, message: String },

    // ─────────────────────────────────────────────────────────────
    // Recipe collection
    // ─────────────────────────────────────────────────────────────
    /// Collection fetch completed
    RecipesLoaded(Vec<SavedRecipe>),

    /// Collection fetch failed
    RecipesLoadFailed(String),

    /// Retry the collection fetch
    ReloadRecipes,

    /// Ask to delete the highlighted recipe (opens the confirm dialog)
    RequestDeleteRecipe,

    /// Deletion confirmed by the user
    ConfirmDeleteRecipe { recipe_id: String },

    /// Confirm dialog dismissed without action
    DialogDismissed,

    /// Deletion completed
    RecipeDeleted { recipe_id: String },

    /// Deletion failed
    RecipeDeleteFailed { recipe_id: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────
    /// Flip between light and dark theme
    ToggleTheme,
}
