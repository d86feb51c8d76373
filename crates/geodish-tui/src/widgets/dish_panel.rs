//! Dish panel widget
//!
//! Shows the current dish card: name, country badge, ingredients in
//! order, preparation instructions, and a photo link when the image
//! probe found one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use geodish_app::state::DishViewState;
use geodish_app::DishPhase;
use geodish_core::Dish;

use crate::theme::{icons, styles, Palette};

pub struct DishPanel<'a> {
    state: &'a DishViewState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> DishPanel<'a> {
    pub fn new(state: &'a DishViewState, palette: &'a Palette, focused: bool) -> Self {
        Self {
            state,
            palette,
            focused,
        }
    }

    fn dish_lines(&self, dish: &Dish) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(dish.name.clone(), styles::accent_bold(p)),
            Span::raw("  "),
            Span::styled(format!("[{}]", dish.country), styles::text_secondary(p)),
        ]));

        match &self.state.image_url {
            Some(url) => lines.push(Line::styled(
                format!("photo: {url}"),
                styles::text_muted(p),
            )),
            None => lines.push(Line::styled("no photo", styles::text_muted(p))),
        }
        lines.push(Line::default());

        lines.push(Line::styled("Ingredients", styles::text_secondary(p)));
        if dish.ingredients.is_empty() {
            lines.push(Line::styled("  (none listed)", styles::text_muted(p)));
        } else {
            for ingredient in &dish.ingredients {
                lines.push(Line::styled(
                    format!("  - {ingredient}"),
                    styles::text_primary(p),
                ));
            }
        }
        lines.push(Line::default());

        lines.push(Line::styled("Instructions", styles::text_secondary(p)));
        lines.push(Line::styled(
            dish.instructions.clone(),
            styles::text_primary(p),
        ));
        lines.push(Line::default());

        if self.state.save_in_flight {
            lines.push(Line::styled(
                format!("{} Saving...", icons::SPINNER),
                styles::text_secondary(p),
            ));
        } else {
            lines.push(Line::styled(
                "g: another dish   s: save to my recipes",
                styles::text_muted(p),
            ));
        }

        lines
    }
}

impl Widget for DishPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, self.focused).title(" Dish ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.state.phase {
            DishPhase::Empty => vec![
                Line::default(),
                Line::styled(
                    "Pick a country to discover a dish.",
                    styles::text_secondary(self.palette),
                ),
            ],
            DishPhase::Loading => vec![
                Line::default(),
                Line::styled(
                    format!("{} Finding a dish...", icons::SPINNER),
                    styles::text_secondary(self.palette),
                ),
            ],
            DishPhase::Shown => match &self.state.current {
                Some(dish) => self.dish_lines(dish),
                None => vec![Line::styled(
                    "Pick a country to discover a dish.",
                    styles::text_secondary(self.palette),
                )],
            },
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
