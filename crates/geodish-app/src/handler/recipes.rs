//! Recipe collection handlers

use geodish_core::prelude::*;
use geodish_core::SavedRecipe;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::{AppState, LoadPhase};

use super::{UpdateAction, UpdateResult};

pub fn handle_loaded(state: &mut AppState, entries: Vec<SavedRecipe>) -> UpdateResult {
    debug!(count = entries.len(), "recipe collection loaded");
    state.recipes.loaded(entries);
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!(%error, "recipe collection load failed");
    state.recipes.failed();
    state
        .alerts
        .danger(format!("Could not load saved recipes: {error}"));
    UpdateResult::none()
}

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.recipes.phase = LoadPhase::Loading;
    UpdateResult::action(UpdateAction::LoadRecipes)
}

/// Open the confirm dialog for the highlighted recipe. Deletion never
/// starts without explicit confirmation.
pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    if state.recipes.delete_in_flight.is_some() {
        return UpdateResult::none();
    }

    let Some(recipe) = state.recipes.selected() else {
        return UpdateResult::none();
    };

    let title = format!("Delete \"{}\"?", recipe.title());
    let dialog = ConfirmDialogState::new(
        title,
        "This removes the recipe from your collection.",
        Message::ConfirmDeleteRecipe {
            recipe_id: recipe.id.clone(),
        },
    );
    state.open_dialog(dialog);
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState, recipe_id: String) -> UpdateResult {
    state.close_dialog();
    state.recipes.delete_in_flight = Some(recipe_id.clone());
    UpdateResult::action(UpdateAction::DeleteRecipe { recipe_id })
}

pub fn handle_deleted(state: &mut AppState, recipe_id: String) -> UpdateResult {
    info!(%recipe_id, "recipe deleted");
    state.recipes.delete_in_flight = None;
    // Drop the entry locally for immediate feedback, then refresh from
    // the backend as the authoritative list
    state.recipes.remove(&recipe_id);
    state.alerts.success("Recipe removed");
    UpdateResult::action(UpdateAction::LoadRecipes)
}

pub fn handle_delete_failed(
    state: &mut AppState,
    recipe_id: String,
    message: String,
) -> UpdateResult {
    warn!(%recipe_id, %message, "recipe delete failed");
    state.recipes.delete_in_flight = None;
    state
        .alerts
        .danger(format!("Could not delete recipe: {message}"));
    UpdateResult::none()
}
