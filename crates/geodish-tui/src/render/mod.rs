//! Main render/view function

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use geodish_app::{AppState, Focus, UiMode};

use crate::layout;
use crate::theme::Palette;
use crate::widgets;

/// Render the complete UI.
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.theme);

    // Fill the terminal with the theme background
    let bg = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state.theme, palette), areas.header);
    frame.render_widget(
        widgets::CountryGrid::new(
            &state.catalog,
            palette,
            state.focus == Focus::Countries,
            !state.settings.ui.ascii_icons,
        ),
        areas.countries,
    );
    frame.render_widget(
        widgets::DishPanel::new(&state.dish, palette, state.focus == Focus::Dish),
        areas.dish,
    );
    frame.render_widget(
        widgets::RecipeShelf::new(&state.recipes, palette, state.focus == Focus::Recipes),
        areas.recipes,
    );
    frame.render_widget(widgets::StatusBar::new(state.focus, palette), areas.status);

    // Floating layers
    frame.render_widget(widgets::AlertOverlay::new(&state.alerts, palette), area);

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(ref dialog) = state.confirm_dialog {
            frame.render_widget(widgets::ConfirmDialog::new(dialog, palette), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodish_app::config::Settings;
    use geodish_app::message::Message;
    use geodish_app::update;
    use geodish_core::Dish;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(160, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_view_initial_loading_state() {
        let state = AppState::new(Settings::default());
        let text = draw(&state);
        assert!(text.contains("GeoDish"));
        assert!(text.contains("Loading countries"));
        assert!(text.contains("Pick a country"));
    }

    #[test]
    fn test_view_renders_countries_and_dish() {
        let mut state = AppState::new(Settings::default());
        update(
            &mut state,
            Message::CountriesLoaded(vec!["Italy".to_string(), "Japan".to_string()]),
        );
        update(&mut state, Message::SelectCountry(1));
        update(
            &mut state,
            Message::DishLoaded {
                country: "Japan".to_string(),
                dish: Dish {
                    id: "d1".to_string(),
                    name: "Sushi".to_string(),
                    country: "Japan".to_string(),
                    ingredients: vec!["rice".to_string()],
                    instructions: "Roll it.".to_string(),
                },
            },
        );

        let text = draw(&state);
        assert!(text.contains("Italy"));
        assert!(text.contains("Sushi"));
        assert!(text.contains("rice"));
        assert!(text.contains("My Recipes"));
    }

    #[test]
    fn test_view_renders_confirm_dialog_over_content() {
        let mut state = AppState::new(Settings::default());
        update(
            &mut state,
            Message::RecipesLoaded(vec![geodish_core::SavedRecipe {
                id: "r1".to_string(),
                dish_id: None,
                custom_name: Some("My Pad Thai".to_string()),
                dish_name: None,
                country: Some("Thailand".to_string()),
                ingredients: vec![],
                instructions: String::new(),
            }]),
        );
        state.focus = Focus::Recipes;
        update(&mut state, Message::RequestDeleteRecipe);

        let text = draw(&state);
        assert!(text.contains("My Pad Thai"));
        assert!(text.contains("Yes"));
        assert!(text.contains("No"));
    }

    #[test]
    fn test_view_renders_alerts() {
        let mut state = AppState::new(Settings::default());
        state.alerts.warning("Select a country first");
        let text = draw(&state);
        assert!(text.contains("Select a country first"));
    }
}
