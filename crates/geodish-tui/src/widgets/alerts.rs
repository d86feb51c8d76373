//! Alert stack overlay
//!
//! Draws the live alerts in the top-right corner, newest on top. The
//! stack floats over whatever panel is underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use geodish_app::AlertStack;

use crate::theme::{icons, styles, Palette};

const ALERT_WIDTH: u16 = 44;

pub struct AlertOverlay<'a> {
    alerts: &'a AlertStack,
    palette: &'a Palette,
}

impl<'a> AlertOverlay<'a> {
    pub fn new(alerts: &'a AlertStack, palette: &'a Palette) -> Self {
        Self { alerts, palette }
    }
}

impl Widget for AlertOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.alerts.is_empty() {
            return;
        }

        let lines: Vec<Line> = self
            .alerts
            .visible()
            .map(|alert| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", icons::alert_glyph(alert.severity)),
                        styles::alert(self.palette, alert.severity),
                    ),
                    Span::styled(alert.text.clone(), styles::text_primary(self.palette)),
                ])
            })
            .collect();

        let width = ALERT_WIDTH.min(area.width);
        let height = (lines.len() as u16).min(area.height);
        let overlay = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height,
        };

        Clear.render(overlay, buf);
        Paragraph::new(lines).render(overlay, buf);
    }
}
