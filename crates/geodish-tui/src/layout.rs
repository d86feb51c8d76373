//! Screen layout definitions for the TUI
//!
//! Three panels under a fixed header: the country grid on the left, the
//! dish panel and recipe shelf stacked on the right, and a one-row key
//! hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (app name + theme)
    pub header: Rect,

    /// Country grid (left column)
    pub countries: Rect,

    /// Dish panel (right column, top)
    pub dish: Rect,

    /// Recipe shelf (right column, bottom)
    pub recipes: Rect,

    /// Key hint bar (bottom row)
    pub status: Rect,
}

/// Compute the main screen layout.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(6),    // Main content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)]).split(rows[1]);

    let right = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    ScreenAreas {
        header: rows[0],
        countries: columns[0],
        dish: right[0],
        recipes: right[1],
        status: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_full_height() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(
            areas.header.height + areas.countries.height + areas.status.height,
            area.height
        );
    }

    #[test]
    fn test_right_column_stacks_dish_over_recipes() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);

        assert_eq!(areas.dish.x, areas.recipes.x);
        assert!(areas.dish.y < areas.recipes.y);
        assert_eq!(
            areas.dish.height + areas.recipes.height,
            areas.countries.height
        );
    }

    #[test]
    fn test_columns_span_full_width() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);
        assert_eq!(areas.countries.width + areas.dish.width, area.width);
    }
}
