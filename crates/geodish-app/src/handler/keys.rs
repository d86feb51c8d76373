//! Key event handlers
//!
//! Translates abstract key presses into messages depending on the active
//! UI mode and focused panel. The confirm dialog swallows all input while
//! it is open.

use crate::confirm_dialog::ConfirmChoice;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, LoadPhase, UiMode};

use super::UpdateResult;

pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_dialog_key(state, key),
        UiMode::Normal => handle_normal_key(state, key),
    }
}

fn handle_dialog_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Some(dialog) = state.confirm_dialog.as_mut() else {
        // Mode/dialog mismatch; recover by leaving dialog mode
        state.close_dialog();
        return UpdateResult::none();
    };

    match key {
        InputKey::Char('y') => UpdateResult::message(dialog.accept.clone()),
        InputKey::Char('n') | InputKey::Esc => UpdateResult::message(Message::DialogDismissed),
        InputKey::Left | InputKey::Right | InputKey::Tab => {
            dialog.toggle_selection();
            UpdateResult::none()
        }
        InputKey::Enter => {
            if dialog.selected == ConfirmChoice::Yes {
                UpdateResult::message(dialog.accept.clone())
            } else {
                UpdateResult::message(Message::DialogDismissed)
            }
        }
        _ => UpdateResult::none(),
    }
}

fn handle_normal_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => UpdateResult::message(Message::Quit),

        InputKey::Tab => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        InputKey::BackTab => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        InputKey::Esc if !state.alerts.is_empty() => {
            UpdateResult::message(Message::DismissAlert)
        }

        InputKey::Char('t') => UpdateResult::message(Message::ToggleTheme),
        InputKey::Char('g') => UpdateResult::message(Message::GetAnotherDish),
        InputKey::Char('s') => UpdateResult::message(Message::SaveCurrentDish),

        InputKey::Char('d') if state.focus == Focus::Recipes => {
            UpdateResult::message(Message::RequestDeleteRecipe)
        }

        InputKey::Char('r') => handle_retry(state),

        InputKey::Up | InputKey::Down | InputKey::Left | InputKey::Right | InputKey::Home
        | InputKey::End => {
            handle_navigation(state, key);
            UpdateResult::none()
        }

        InputKey::Enter => handle_enter(state),

        _ => UpdateResult::none(),
    }
}

/// `r` retries the failed fetch for the focused panel.
fn handle_retry(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Countries if state.catalog.phase == LoadPhase::Failed => {
            UpdateResult::message(Message::ReloadCountries)
        }
        Focus::Recipes if state.recipes.phase == LoadPhase::Failed => {
            UpdateResult::message(Message::ReloadRecipes)
        }
        _ => UpdateResult::none(),
    }
}

fn handle_navigation(state: &mut AppState, key: InputKey) {
    match state.focus {
        Focus::Countries => match key {
            InputKey::Up => state.catalog.move_cursor_up(),
            InputKey::Down => state.catalog.move_cursor_down(),
            InputKey::Left => state.catalog.move_cursor_left(),
            InputKey::Right => state.catalog.move_cursor_right(),
            InputKey::Home => state.catalog.cursor = 0,
            InputKey::End => {
                state.catalog.cursor = state.catalog.countries.len().saturating_sub(1);
            }
            _ => {}
        },
        Focus::Recipes => match key {
            InputKey::Up => state.recipes.move_cursor_up(),
            InputKey::Down => state.recipes.move_cursor_down(),
            InputKey::Home => state.recipes.cursor = 0,
            InputKey::End => {
                state.recipes.cursor = state.recipes.entries.len().saturating_sub(1);
            }
            _ => {}
        },
        Focus::Dish => {}
    }
}

fn handle_enter(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Countries => {
            if state.catalog.cursor_country().is_some() {
                UpdateResult::message(Message::SelectCountry(state.catalog.cursor))
            } else {
                UpdateResult::none()
            }
        }
        Focus::Dish => UpdateResult::message(Message::GetAnotherDish),
        Focus::Recipes => UpdateResult::none(),
    }
}
