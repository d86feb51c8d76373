//! Widget library for the GeoDish TUI

mod alerts;
mod confirm_dialog;
mod country_grid;
mod dish_panel;
mod header;
mod recipe_shelf;
mod status_bar;

pub use alerts::AlertOverlay;
pub use confirm_dialog::ConfirmDialog;
pub use country_grid::CountryGrid;
pub use dish_panel::DishPanel;
pub use header::Header;
pub use recipe_shelf::RecipeShelf;
pub use status_bar::StatusBar;
