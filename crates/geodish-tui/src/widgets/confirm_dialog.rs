//! Confirm dialog widget
//!
//! Centered modal with Yes/No buttons; the highlighted button follows
//! the dialog's selection state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use geodish_app::{ConfirmChoice, ConfirmDialogState};

use crate::theme::{styles, Palette};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 7;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    palette: &'a Palette,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn button(&self, label: &str, choice: ConfirmChoice) -> Span<'static> {
        let style = if self.state.selected == choice {
            styles::focused_selected(self.palette)
        } else {
            styles::text_secondary(self.palette)
        };
        Span::styled(format!("[ {label} ]"), style)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = DIALOG_WIDTH.min(area.width);
        let height = DIALOG_HEIGHT.min(area.height);
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(dialog_area, buf);

        let block = styles::modal_block(self.palette, &self.state.title);
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::styled(self.state.body.clone(), styles::text_primary(self.palette)),
            Line::default(),
            Line::from(vec![
                self.button("Yes", ConfirmChoice::Yes),
                Span::raw("   "),
                self.button("No", ConfirmChoice::No),
            ]),
            Line::styled(
                "y/n to answer, Esc to cancel",
                styles::text_muted(self.palette),
            ),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
