//! Handler module - update function and per-view handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key handling for normal mode and the confirm dialog
//! - `catalog`: Country catalog handlers
//! - `dish`: Dish view and save handlers
//! - `recipes`: Recipe collection handlers

pub(crate) mod catalog;
pub(crate) mod dish;
pub(crate) mod keys;
pub(crate) mod recipes;
pub(crate) mod update;


use crate::message::Message;
use crate::theme::Theme;

// Re-export main entry point
pub use update::update;

/// Actions the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the country catalog
    LoadCountries,

    /// Fetch a random dish for a country
    LoadRandomDish { country: String },

    /// Save a dish into the user's collection
    SaveRecipe {
        dish_id: String,
        dish_name: String,
        custom_name: Option<String>,
    },

    /// Fetch the user's saved recipes
    LoadRecipes,

    /// Delete a saved recipe
    DeleteRecipe { recipe_id: String },

    /// Probe for the dish's image asset in the background
    ProbeDishImage { dish_id: String, dish_name: String },

    /// Write the theme preference back to the settings file
    PersistTheme(Theme),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
