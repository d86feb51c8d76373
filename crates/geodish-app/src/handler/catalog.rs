//! Country catalog handlers

use geodish_core::prelude::*;

use crate::state::{AppState, DishPhase, LoadPhase};

use super::{UpdateAction, UpdateResult};

pub fn handle_loaded(state: &mut AppState, countries: Vec<String>) -> UpdateResult {
    info!(count = countries.len(), "country catalog loaded");
    state.catalog.loaded(countries);
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!(%error, "country catalog load failed");
    state.catalog.failed();
    state
        .alerts
        .danger(format!("Could not load countries: {error}"));
    UpdateResult::none()
}

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.catalog.phase = LoadPhase::Loading;
    UpdateResult::action(UpdateAction::LoadCountries)
}

/// Activate a country tile: mark it selected and fetch a dish for it.
///
/// Selecting while a fetch is in flight is allowed; the last response to
/// arrive wins.
pub fn handle_select(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(country) = state.catalog.countries.get(index).cloned() else {
        return UpdateResult::none();
    };

    state.catalog.selected = Some(index);
    state.dish.phase = DishPhase::Loading;
    debug!(%country, "country selected");
    UpdateResult::action(UpdateAction::LoadRandomDish { country })
}
