//! Semantic style builders, resolved against the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use geodish_app::AlertSeverity;

use super::palette::Palette;

// --- Text styles ---

pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Selection styles ---

/// Used for the cursor tile/row in the focused panel
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Alert styles ---

pub fn alert(p: &Palette, severity: AlertSeverity) -> Style {
    let color = match severity {
        AlertSeverity::Info => p.info,
        AlertSeverity::Success => p.success,
        AlertSeverity::Warning => p.warning,
        AlertSeverity::Danger => p.danger,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.danger)
}

// --- Block builders ---

pub fn panel_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(p.border_active)
        } else {
            Style::default().fg(p.border_dim)
        })
}

pub fn modal_block(p: &Palette, title: &str) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}
