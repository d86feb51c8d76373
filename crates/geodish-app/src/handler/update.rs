//! Main update function - the heart of the state machine
//!
//! Every message funnels through [`update`]; it mutates state and returns
//! an optional follow-up message plus an optional side-effect action for
//! the event loop to perform.

use std::time::Instant;

use geodish_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{catalog, dish, keys, recipes, UpdateResult};

/// Process a message, mutating state and returning follow-up work.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Input & lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            state.alerts.prune(Instant::now());
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.alerts.dismiss_newest();
            UpdateResult::none()
        }

        Message::Quit => {
            info!("quit requested");
            state.should_quit = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Country catalog
        // ─────────────────────────────────────────────────────────
        Message::CountriesLoaded(countries) => catalog::handle_loaded(state, countries),
        Message::CountriesLoadFailed(error) => catalog::handle_load_failed(state, error),
        Message::ReloadCountries => catalog::handle_reload(state),
        Message::SelectCountry(index) => catalog::handle_select(state, index),

        // ─────────────────────────────────────────────────────────
        // Dish view
        // ─────────────────────────────────────────────────────────
        Message::DishLoaded { country, dish } => dish::handle_loaded(state, country, dish),
        Message::DishLoadFailed { country, error } => {
            dish::handle_load_failed(state, country, error)
        }
        Message::GetAnotherDish => dish::handle_get_another(state),
        Message::DishImageResolved { dish_id, url } => {
            dish::handle_image_resolved(state, dish_id, url)
        }

        // ─────────────────────────────────────────────────────────
        // Saving
        // ─────────────────────────────────────────────────────────
        Message::SaveCurrentDish => dish::handle_save(state),
        Message::RecipeSaved { dish_name } => dish::handle_saved(state, dish_name),
        Message::RecipeSaveFailed { conflict, message } => {
            dish::handle_save_failed(state, conflict, message)
        }

        // ─────────────────────────────────────────────────────────
        // Recipe collection
        // ─────────────────────────────────────────────────────────
        Message::RecipesLoaded(entries) => recipes::handle_loaded(state, entries),
        Message::RecipesLoadFailed(error) => recipes::handle_load_failed(state, error),
        Message::ReloadRecipes => recipes::handle_reload(state),
        Message::RequestDeleteRecipe => recipes::handle_request_delete(state),
        Message::ConfirmDeleteRecipe { recipe_id } => {
            recipes::handle_confirm_delete(state, recipe_id)
        }
        Message::DialogDismissed => {
            state.close_dialog();
            UpdateResult::none()
        }
        Message::RecipeDeleted { recipe_id } => recipes::handle_deleted(state, recipe_id),
        Message::RecipeDeleteFailed { recipe_id, message } => {
            recipes::handle_delete_failed(state, recipe_id, message)
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            state.settings.ui.theme = state.theme;
            debug!(theme = %state.theme, "theme toggled");
            UpdateResult::action(super::UpdateAction::PersistTheme(state.theme))
        }
    }
}
