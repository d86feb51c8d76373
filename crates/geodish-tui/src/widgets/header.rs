//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use geodish_app::Theme;

use crate::theme::{styles, Palette};

/// Main header showing the app title and the active theme
pub struct Header<'a> {
    theme: Theme,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(theme: Theme, palette: &'a Palette) -> Self {
        Self { theme, palette }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("GeoDish", styles::accent_bold(self.palette)),
            Span::styled(
                "  discover dishes from around the world",
                styles::text_secondary(self.palette),
            ),
            Span::styled(
                format!("   theme: {}", self.theme),
                styles::text_muted(self.palette),
            ),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}
