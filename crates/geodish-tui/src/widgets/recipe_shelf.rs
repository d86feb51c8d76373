//! Recipe shelf widget
//!
//! Lists the user's saved recipes with the cursor row highlighted while
//! the panel has focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use geodish_app::state::RecipesState;
use geodish_app::LoadPhase;

use crate::theme::{icons, styles, Palette};

pub struct RecipeShelf<'a> {
    state: &'a RecipesState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> RecipeShelf<'a> {
    pub fn new(state: &'a RecipesState, palette: &'a Palette, focused: bool) -> Self {
        Self {
            state,
            palette,
            focused,
        }
    }

    fn recipe_lines(&self, height: usize) -> Vec<Line<'static>> {
        let p = self.palette;

        // Keep the cursor row in view on short panels; the highlighted
        // entry expands to show its detail lines below
        let first = self
            .state
            .cursor
            .saturating_sub(height.saturating_sub(3).max(1));

        let mut lines = Vec::new();
        for (idx, recipe) in self.state.entries.iter().enumerate().skip(first) {
            if lines.len() >= height {
                break;
            }

            let deleting = self.state.delete_in_flight.as_deref() == Some(recipe.id.as_str());
            let highlighted = idx == self.state.cursor;
            let text = if deleting {
                format!("{} {} (deleting...)", icons::SPINNER, recipe.title())
            } else {
                format!("{} ({})", recipe.title(), recipe.country_label())
            };

            let style = if self.focused && highlighted {
                styles::focused_selected(p)
            } else if deleting {
                styles::text_muted(p)
            } else {
                styles::text_primary(p)
            };
            lines.push(Line::from(Span::styled(text, style)));

            if highlighted && !deleting {
                if !recipe.ingredients.is_empty() {
                    lines.push(Line::styled(
                        format!("  {}", recipe.ingredients.join(", ")),
                        styles::text_secondary(p),
                    ));
                }
                if !recipe.instructions.is_empty() {
                    lines.push(Line::styled(
                        format!("  {}", recipe.instructions),
                        styles::text_muted(p),
                    ));
                }
            }
        }

        lines
    }
}

impl Widget for RecipeShelf<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" My Recipes ({}) ", self.state.entries.len());
        let block = styles::panel_block(self.palette, self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.state.phase {
            LoadPhase::Loading => vec![Line::styled(
                format!("{} Loading recipes...", icons::SPINNER),
                styles::text_secondary(self.palette),
            )],
            LoadPhase::Failed => vec![
                Line::styled("Could not load recipes.", styles::danger(self.palette)),
                Line::styled("Press r to retry.", styles::text_secondary(self.palette)),
            ],
            LoadPhase::Ready if self.state.entries.is_empty() => vec![Line::styled(
                "No saved recipes yet. Press s on a dish to save it.",
                styles::text_muted(self.palette),
            )],
            LoadPhase::Ready => self.recipe_lines(inner.height as usize),
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
