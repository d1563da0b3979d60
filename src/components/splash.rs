//! Splash screen component
//!
//! Shows the wordmark briefly before the page appears. Any key skips it.

use crate::action::Action;
use crate::component::Component;
use crate::model::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const LOGO: [&str; 5] = [
    r"  __       _ _        ",
    r" / _| ___ | (_) ___   ",
    r"| |_ / _ \| | |/ _ \  ",
    r"|  _| (_) | | | (_) | ",
    r"|_|  \___/|_|_|\___/  ",
];

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg)),
            area,
        );

        let logo_height = LOGO.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 4)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo_width = LOGO[0].len() as u16;
        let centered_x = area.x + (area.width.saturating_sub(logo_width)) / 2;
        let logo_rect = Rect::new(centered_x, chunks[1].y, logo_width.min(area.width), logo_height);

        let logo_lines: Vec<Line> = LOGO
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    *l,
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(logo_lines), logo_rect);

        let subtitle = "Arjun Sharma · Product Manager";
        let subtitle_width = subtitle.chars().count() as u16;
        let subtitle_x = area.x + (area.width.saturating_sub(subtitle_width)) / 2;
        let subtitle_rect = Rect::new(subtitle_x, chunks[3].y, subtitle_width.min(area.width), 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                subtitle,
                Style::default().fg(theme.muted),
            ))),
            subtitle_rect,
        );

        Ok(())
    }
}
