//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::model::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content(theme);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        frame.render_widget(Clear, dialog_area);
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(theme.border))
                    .style(Style::default().bg(theme.surface)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(theme.text)),
        ]));
    };

    add_section(&mut lines, "Scrolling");
    add_shortcut(&mut lines, "j / ↓", "Scroll down");
    add_shortcut(&mut lines, "k / ↑", "Scroll up");
    add_shortcut(&mut lines, "Ctrl+d", "Half page down");
    add_shortcut(&mut lines, "Ctrl+u", "Half page up");
    add_shortcut(&mut lines, "g / G", "Top / bottom of page");

    add_section(&mut lines, "Sections");
    add_shortcut(&mut lines, "1-5", "Jump to section");
    add_shortcut(&mut lines, "Tab", "Next section");
    add_shortcut(&mut lines, "Shift+Tab", "Previous section");
    add_shortcut(&mut lines, "m", "Open/close the nav menu");

    add_section(&mut lines, "Projects");
    add_shortcut(&mut lines, "h / ←", "Previous project card");
    add_shortcut(&mut lines, "l / →", "Next project card");
    add_shortcut(&mut lines, "Enter", "Open the selected case study");

    add_section(&mut lines, "Contact Form");
    add_shortcut(&mut lines, "c", "Start typing a message");
    add_shortcut(&mut lines, "Tab", "Next field (validates on leave)");
    add_shortcut(&mut lines, "Enter", "Send");
    add_shortcut(&mut lines, "Esc", "Leave the form");

    add_section(&mut lines, "Appearance");
    add_shortcut(&mut lines, "t", "Toggle light/dark theme");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / close dialog");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(theme.muted),
    )));

    lines
}
