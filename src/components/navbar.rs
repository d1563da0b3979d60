//! Fixed navigation bar and overlay menu
//!
//! The navbar renders from shared state each frame: brand, the nav entries
//! with the active section highlighted, and the theme indicator glyph. When
//! the overlay menu is open the entries render as a vertical list under the
//! bar instead.

use crate::model::section::{SectionId, NAV_BAR_HEIGHT};
use crate::model::theme::Theme;
use crate::model::ui::{MenuState, MENU_INLINE_MIN_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct NavbarContext<'a> {
    pub theme: &'a Theme,
    pub active_section: Option<usize>,
    pub indicator: &'static str,
    pub menu: MenuState,
}

/// Draw the navigation bar into its fixed area
pub fn draw_navbar(frame: &mut Frame, area: Rect, ctx: &NavbarContext) {
    let theme = ctx.theme;

    let mut spans = vec![
        Span::styled(
            " Arjun Sharma ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· Product Leader ", Style::default().fg(theme.muted)),
    ];

    if area.width >= MENU_INLINE_MIN_WIDTH {
        spans.push(Span::raw("  "));
        for (i, section) in SectionId::ALL.iter().enumerate() {
            spans.push(entry_span(section.label(), ctx.active_section == Some(i), theme));
            spans.push(Span::raw("  "));
        }
    } else {
        let hint = if ctx.menu.is_open() { "[m] close " } else { "[m] menu " };
        spans.push(Span::styled(hint, Style::default().fg(theme.muted)));
    }

    spans.push(Span::styled(
        format!(" {} ", ctx.indicator),
        Style::default().fg(theme.accent),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(bar, area);
}

/// Draw the vertical overlay menu under the navbar when it is open
pub fn draw_menu_overlay(frame: &mut Frame, full_area: Rect, ctx: &NavbarContext) {
    if !ctx.menu.is_open() {
        return;
    }
    let theme = ctx.theme;

    let height = SectionId::ALL.len() as u16 + 2;
    let overlay = Rect::new(
        full_area.x,
        full_area.y + NAV_BAR_HEIGHT,
        full_area.width.min(24),
        height.min(full_area.height.saturating_sub(NAV_BAR_HEIGHT)),
    );

    let lines: Vec<Line> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let active = ctx.active_section == Some(i);
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.muted)),
                entry_span(section.label(), active, theme),
            ])
        })
        .collect();

    frame.render_widget(Clear, overlay);
    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(menu, overlay);
}

fn entry_span(label: &'static str, active: bool, theme: &Theme) -> Span<'static> {
    if active {
        Span::styled(
            label,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        Span::styled(label, Style::default().fg(theme.text))
    }
}
