//! Application state
//!
//! Single-owner state for the whole client, mutated only by the update
//! handlers on the main loop. Each view keeps its own small state struct
//! with the helpers its handlers need.

use geodish_core::{Dish, SavedRecipe};

use crate::alerts::AlertStack;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::theme::Theme;

/// Columns in the country grid; vertical movement jumps a full row.
pub const GRID_COLUMNS: usize = 4;

/// Which modal layer owns key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    ConfirmDialog,
}

/// Which panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Countries,
    Dish,
    Recipes,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Countries => Focus::Dish,
            Focus::Dish => Focus::Recipes,
            Focus::Recipes => Focus::Countries,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Countries => Focus::Recipes,
            Focus::Dish => Focus::Countries,
            Focus::Recipes => Focus::Dish,
        }
    }
}

/// Fetch lifecycle for list-backed views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed,
}

// ─────────────────────────────────────────────────────────────────
// Country catalog
// ─────────────────────────────────────────────────────────────────

/// State of the country grid
#[derive(Debug, Default)]
pub struct CatalogState {
    pub phase: LoadPhase,
    pub countries: Vec<String>,
    /// Grid cursor (index into `countries`)
    pub cursor: usize,
    /// Index of the currently selected country, if any
    pub selected: Option<usize>,
}

impl CatalogState {
    pub fn loaded(&mut self, countries: Vec<String>) {
        self.countries = countries;
        self.phase = LoadPhase::Ready;
        self.cursor = 0;
        self.selected = None;
    }

    pub fn failed(&mut self) {
        self.phase = LoadPhase::Failed;
        self.countries.clear();
        self.selected = None;
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.countries.get(i))
            .map(String::as_str)
    }

    pub fn cursor_country(&self) -> Option<&str> {
        self.countries.get(self.cursor).map(String::as_str)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor + 1 < self.countries.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(GRID_COLUMNS);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + GRID_COLUMNS < self.countries.len() {
            self.cursor += GRID_COLUMNS;
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Dish view
// ─────────────────────────────────────────────────────────────────

/// Lifecycle of the dish panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DishPhase {
    /// Nothing fetched yet (or last fetch failed)
    #[default]
    Empty,
    /// A fetch is in flight
    Loading,
    /// A dish is on screen
    Shown,
}

/// State of the dish panel
#[derive(Debug, Default)]
pub struct DishViewState {
    pub phase: DishPhase,
    pub current: Option<Dish>,
    /// Resolved image URL for the current dish, if one exists
    pub image_url: Option<String>,
    /// A save request for the current dish is in flight
    pub save_in_flight: bool,
}

impl DishViewState {
    pub fn begin_loading(&mut self) {
        self.phase = DishPhase::Loading;
    }

    /// Show a freshly fetched dish. Clears any previous image; the probe
    /// for the new dish fills it back in.
    pub fn show(&mut self, dish: Dish) {
        self.current = Some(dish);
        self.image_url = None;
        self.phase = DishPhase::Shown;
        self.save_in_flight = false;
    }

    /// Revert to the empty placeholder after a failed fetch.
    pub fn reset_to_empty(&mut self) {
        self.phase = DishPhase::Empty;
        self.current = None;
        self.image_url = None;
        self.save_in_flight = false;
    }

    /// Whether fetch/save controls accept input right now.
    pub fn controls_enabled(&self) -> bool {
        self.phase != DishPhase::Loading
    }

    pub fn current_dish_id(&self) -> Option<&str> {
        self.current.as_ref().map(|d| d.id.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// Recipe collection
// ─────────────────────────────────────────────────────────────────

/// State of the saved-recipes shelf
#[derive(Debug, Default)]
pub struct RecipesState {
    pub phase: LoadPhase,
    pub entries: Vec<SavedRecipe>,
    pub cursor: usize,
    /// Recipe id with a delete in flight, if any
    pub delete_in_flight: Option<String>,
}

impl RecipesState {
    pub fn loaded(&mut self, entries: Vec<SavedRecipe>) {
        self.entries = entries;
        self.phase = LoadPhase::Ready;
        self.clamp_cursor();
    }

    pub fn failed(&mut self) {
        self.phase = LoadPhase::Failed;
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn selected(&self) -> Option<&SavedRecipe> {
        self.entries.get(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Remove a recipe by id, keeping the cursor on a valid entry.
    pub fn remove(&mut self, recipe_id: &str) {
        self.entries.retain(|r| r.id != recipe_id);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len().saturating_sub(1);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Root state
// ─────────────────────────────────────────────────────────────────

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub focus: Focus,
    pub catalog: CatalogState,
    pub dish: DishViewState,
    pub recipes: RecipesState,
    pub alerts: AlertStack,
    pub theme: Theme,
    pub settings: Settings,
    pub confirm_dialog: Option<ConfirmDialogState>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let theme = settings.ui.theme;
        Self {
            ui_mode: UiMode::default(),
            focus: Focus::default(),
            catalog: CatalogState::default(),
            dish: DishViewState::default(),
            recipes: RecipesState::default(),
            alerts: AlertStack::default(),
            theme,
            settings,
            confirm_dialog: None,
            should_quit: false,
        }
    }

    pub fn open_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn close_dialog(&mut self) {
        self.confirm_dialog = None;
        self.ui_mode = UiMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, name: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: name.to_string(),
            country: "Japan".to_string(),
            ingredients: vec![],
            instructions: String::new(),
        }
    }

    fn recipe(id: &str) -> SavedRecipe {
        SavedRecipe {
            id: id.to_string(),
            dish_id: None,
            custom_name: None,
            dish_name: Some(format!("dish {id}")),
            country: None,
            ingredients: vec![],
            instructions: String::new(),
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut f = Focus::Countries;
        f = f.next();
        assert_eq!(f, Focus::Dish);
        f = f.next();
        assert_eq!(f, Focus::Recipes);
        f = f.next();
        assert_eq!(f, Focus::Countries);
        assert_eq!(Focus::Countries.prev(), Focus::Recipes);
    }

    #[test]
    fn test_catalog_grid_cursor_movement() {
        let mut catalog = CatalogState::default();
        catalog.loaded((0..10).map(|i| format!("Country {i}")).collect());

        catalog.move_cursor_right();
        catalog.move_cursor_right();
        assert_eq!(catalog.cursor, 2);

        catalog.move_cursor_down();
        assert_eq!(catalog.cursor, 2 + GRID_COLUMNS);

        catalog.move_cursor_down(); // would pass the end
        assert_eq!(catalog.cursor, 2 + GRID_COLUMNS);

        catalog.move_cursor_up();
        assert_eq!(catalog.cursor, 2);

        catalog.move_cursor_left();
        catalog.move_cursor_left();
        catalog.move_cursor_left(); // clamps at 0
        assert_eq!(catalog.cursor, 0);
    }

    #[test]
    fn test_catalog_selected_country() {
        let mut catalog = CatalogState::default();
        catalog.loaded(vec!["Italy".to_string(), "Japan".to_string()]);
        assert_eq!(catalog.selected_country(), None);

        catalog.selected = Some(1);
        assert_eq!(catalog.selected_country(), Some("Japan"));
    }

    #[test]
    fn test_catalog_failed_clears_selection() {
        let mut catalog = CatalogState::default();
        catalog.loaded(vec!["Italy".to_string()]);
        catalog.selected = Some(0);
        catalog.failed();
        assert_eq!(catalog.phase, LoadPhase::Failed);
        assert_eq!(catalog.selected_country(), None);
    }

    #[test]
    fn test_dish_show_clears_previous_image() {
        let mut view = DishViewState::default();
        view.show(dish("d1", "Sushi"));
        view.image_url = Some("http://x/sushi.jpg".to_string());

        view.begin_loading();
        assert!(!view.controls_enabled());

        view.show(dish("d2", "Ramen"));
        assert_eq!(view.phase, DishPhase::Shown);
        assert!(view.image_url.is_none());
        assert!(view.controls_enabled());
    }

    #[test]
    fn test_dish_reset_to_empty() {
        let mut view = DishViewState::default();
        view.show(dish("d1", "Sushi"));
        view.save_in_flight = true;

        view.reset_to_empty();
        assert_eq!(view.phase, DishPhase::Empty);
        assert!(view.current.is_none());
        assert!(!view.save_in_flight);
    }

    #[test]
    fn test_recipes_remove_keeps_cursor_valid() {
        let mut recipes = RecipesState::default();
        recipes.loaded(vec![recipe("a"), recipe("b"), recipe("c")]);
        recipes.cursor = 2;

        recipes.remove("c");
        assert_eq!(recipes.entries.len(), 2);
        assert_eq!(recipes.cursor, 1);

        recipes.remove("a");
        recipes.remove("b");
        assert_eq!(recipes.cursor, 0);
        assert!(recipes.selected().is_none());
    }

    #[test]
    fn test_recipes_cursor_bounds() {
        let mut recipes = RecipesState::default();
        recipes.loaded(vec![recipe("a"), recipe("b")]);

        recipes.move_cursor_down();
        recipes.move_cursor_down();
        assert_eq!(recipes.cursor, 1);

        recipes.move_cursor_up();
        recipes.move_cursor_up();
        assert_eq!(recipes.cursor, 0);
    }

    #[test]
    fn test_app_state_dialog_mode() {
        let mut state = AppState::new(Settings::default());
        assert_eq!(state.ui_mode, UiMode::Normal);

        state.open_dialog(ConfirmDialogState::new(
            "t",
            "b",
            crate::message::Message::DialogDismissed,
        ));
        assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

        state.close_dialog();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.confirm_dialog.is_none());
    }

    #[test]
    fn test_app_state_theme_from_settings() {
        let mut settings = Settings::default();
        settings.ui.theme = Theme::Dark;
        let state = AppState::new(settings);
        assert_eq!(state.theme, Theme::Dark);
    }
}
