//! Layout calculations for the UI

use crate::model::section::NAV_BAR_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: fixed navbar, scrolling page, key hint bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        navbar: chunks[0],
        content: chunks[1],
        help: chunks[2],
    }
}
