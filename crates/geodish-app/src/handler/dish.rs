//! Dish view and save handlers

use geodish_core::prelude::*;
use geodish_core::Dish;

use crate::state::{AppState, DishPhase};

use super::{UpdateAction, UpdateResult};

pub fn handle_loaded(state: &mut AppState, country: String, dish: Dish) -> UpdateResult {
    debug!(%country, dish = %dish.name, "dish loaded");
    let dish_id = dish.id.clone();
    let dish_name = dish.name.clone();
    state.dish.show(dish);
    UpdateResult::action(UpdateAction::ProbeDishImage { dish_id, dish_name })
}

/// A failed fetch reverts the panel to its empty placeholder rather than
/// leaving stale content on screen.
pub fn handle_load_failed(state: &mut AppState, country: String, error: String) -> UpdateResult {
    warn!(%country, %error, "dish load failed");
    state.dish.reset_to_empty();
    state
        .alerts
        .danger(format!("Could not fetch a dish for {country}: {error}"));
    UpdateResult::none()
}

pub fn handle_get_another(state: &mut AppState) -> UpdateResult {
    let Some(country) = state.catalog.selected_country().map(str::to_string) else {
        state.alerts.warning("Select a country first");
        return UpdateResult::none();
    };

    if !state.dish.controls_enabled() {
        return UpdateResult::none();
    }

    state.dish.begin_loading();
    UpdateResult::action(UpdateAction::LoadRandomDish { country })
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if state.dish.phase != DishPhase::Shown {
        state.alerts.warning("Fetch a dish before saving");
        return UpdateResult::none();
    }
    if state.dish.save_in_flight {
        return UpdateResult::none();
    }

    let Some((dish_id, dish_name)) = state
        .dish
        .current
        .as_ref()
        .map(|d| (d.id.clone(), d.name.clone()))
    else {
        state.alerts.warning("Fetch a dish before saving");
        return UpdateResult::none();
    };

    state.dish.save_in_flight = true;
    UpdateResult::action(UpdateAction::SaveRecipe {
        dish_id,
        dish_name,
        custom_name: None,
    })
}

pub fn handle_saved(state: &mut AppState, dish_name: String) -> UpdateResult {
    info!(%dish_name, "recipe saved");
    state.dish.save_in_flight = false;
    state.alerts.success(format!("Saved {dish_name}"));
    // Refresh the shelf so the new recipe appears immediately
    UpdateResult::action(UpdateAction::LoadRecipes)
}

pub fn handle_save_failed(state: &mut AppState, conflict: bool, message: String) -> UpdateResult {
    state.dish.save_in_flight = false;
    if conflict {
        state.alerts.warning("Dish is already in your collection");
    } else {
        warn!(%message, "recipe save failed");
        state.alerts.danger(format!("Could not save recipe: {message}"));
    }
    UpdateResult::none()
}

/// Apply an image probe result only if the dish is still on screen;
/// a stale probe for a superseded dish is dropped.
pub fn handle_image_resolved(
    state: &mut AppState,
    dish_id: String,
    url: Option<String>,
) -> UpdateResult {
    if state.dish.current_dish_id() == Some(dish_id.as_str()) {
        state.dish.image_url = url;
    } else {
        debug!(%dish_id, "ignoring stale image probe result");
    }
    UpdateResult::none()
}
