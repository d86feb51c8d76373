//! Bottom key-hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use geodish_app::Focus;

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    focus: Focus,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(focus: Focus, palette: &'a Palette) -> Self {
        Self { focus, palette }
    }

    fn focus_hints(&self) -> &'static str {
        match self.focus {
            Focus::Countries => "arrows: move  enter: pick country",
            Focus::Dish => "g: another dish  s: save",
            Focus::Recipes => "arrows: move  d: delete",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(self.focus_hints(), styles::text_secondary(self.palette)),
            Span::styled(
                "   tab: switch panel  t: theme  q: quit",
                styles::text_muted(self.palette),
            ),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
