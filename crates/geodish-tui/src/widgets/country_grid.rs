//! Country grid widget
//!
//! Renders the catalog as a fixed-column grid of tiles. The cursor tile
//! is highlighted when the panel has focus; the selected country keeps a
//! pin marker regardless of focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use geodish_app::state::{CatalogState, GRID_COLUMNS};
use geodish_app::LoadPhase;

use crate::theme::{icons, styles, Palette};

pub struct CountryGrid<'a> {
    state: &'a CatalogState,
    palette: &'a Palette,
    focused: bool,
    show_flags: bool,
}

impl<'a> CountryGrid<'a> {
    pub fn new(
        state: &'a CatalogState,
        palette: &'a Palette,
        focused: bool,
        show_flags: bool,
    ) -> Self {
        Self {
            state,
            palette,
            focused,
            show_flags,
        }
    }

    fn grid_lines(&self, width: u16) -> Vec<Line<'static>> {
        let cell_width = (width as usize / GRID_COLUMNS).max(8);
        let mut lines = Vec::new();

        for (row_idx, row) in self.state.countries.chunks(GRID_COLUMNS).enumerate() {
            let mut spans = Vec::with_capacity(row.len());
            for (col_idx, country) in row.iter().enumerate() {
                let idx = row_idx * GRID_COLUMNS + col_idx;
                let is_cursor = self.focused && idx == self.state.cursor;
                let is_selected = self.state.selected == Some(idx);

                let marker = if is_selected { icons::PIN } else { icons::DOT };
                let label = if self.show_flags {
                    format!("{marker} {} {country}", icons::country_flag(country))
                } else {
                    format!("{marker} {country}")
                };
                // Truncate by chars; country names are not always ASCII
                let cell: String = label.chars().take(cell_width.saturating_sub(1)).collect();
                let cell = format!("{cell:<cell_width$}");

                let style = if is_cursor {
                    styles::focused_selected(self.palette)
                } else if is_selected {
                    styles::accent_bold(self.palette)
                } else {
                    styles::text_primary(self.palette)
                };
                spans.push(Span::styled(cell, style));
            }
            lines.push(Line::from(spans));
            // Breathing row between tile rows
            lines.push(Line::default());
        }

        lines
    }
}

impl Widget for CountryGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, self.focused).title(" Countries ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.state.phase {
            LoadPhase::Loading => vec![Line::styled(
                format!("{} Loading countries...", icons::SPINNER),
                styles::text_secondary(self.palette),
            )],
            LoadPhase::Failed => vec![
                Line::styled(
                    "Could not load countries.",
                    styles::danger(self.palette),
                ),
                Line::styled(
                    "Press r to retry.",
                    styles::text_secondary(self.palette),
                ),
            ],
            LoadPhase::Ready if self.state.countries.is_empty() => vec![Line::styled(
                "No countries available.",
                styles::text_muted(self.palette),
            )],
            LoadPhase::Ready => self.grid_lines(inner.width),
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
