//! Home component - the scrollable portfolio page
//!
//! Owns the scroll position, the smooth-scroll animation, the active-section
//! probe, section reveal state, project card selection, and contact form
//! focus. The page is rebuilt from live state every frame, so section
//! extents always reflect the current width and content.

use crate::action::Action;
use crate::component::Component;
use crate::model::form::{ContactField, ContactForm, SUCCESS_MESSAGE};
use crate::model::project::CATALOG;
use crate::model::section::{active_section, jump_target, SectionExtent, SectionId};
use crate::model::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::collections::HashSet;
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Rows inside the viewport edge a section must reach before it counts as
/// seen (and animates in)
const REVEAL_MARGIN: usize = 2;

/// Home component for the main portfolio view
pub struct HomeComponent {
    /// Current scroll offset in document rows
    pub scroll_offset: usize,
    /// Smooth-scroll destination, stepped toward on each tick
    scroll_target: Option<usize>,
    /// Section held active while a jump animation is in flight
    pinned_section: Option<usize>,
    /// Coalesces scroll bursts into one probe per drawn frame
    probe_pending: bool,
    active: Option<usize>,
    /// Sections that have entered the viewport at least once
    revealed: HashSet<usize>,
    /// Selected card in the projects section
    pub selected_project: usize,
    pub form: ContactForm,
    last_extents: Vec<SectionExtent>,
    doc_height: usize,
    viewport_height: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            scroll_target: None,
            pinned_section: None,
            probe_pending: true,
            active: None,
            revealed: HashSet::new(),
            selected_project: 0,
            form: ContactForm::new(),
            last_extents: Vec::new(),
            doc_height: 0,
            viewport_height: 0,
        }
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active
    }

    fn max_scroll(&self) -> usize {
        self.doc_height.saturating_sub(self.viewport_height)
    }

    /// Apply a user scroll: interrupts any jump animation and schedules one
    /// probe for the next frame
    fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        self.scroll_offset = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize).min(max)
        };
        self.scroll_target = None;
        self.pinned_section = None;
        self.probe_pending = true;
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll());
        self.scroll_target = None;
        self.pinned_section = None;
        self.probe_pending = true;
    }

    /// Begin a smooth scroll to a section; the tracker is bypassed (the
    /// target stays active) until the animation settles
    fn jump_to(&mut self, index: usize) {
        if let Some(extent) = self.last_extents.get(index) {
            self.scroll_target = Some(jump_target(extent).min(self.max_scroll()));
            self.pinned_section = Some(index);
            self.active = Some(index);
        }
    }

    /// Advance one animation/expiry step
    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);

        if let Some(target) = self.scroll_target {
            if target == self.scroll_offset {
                self.scroll_target = None;
                self.pinned_section = None;
                self.probe_pending = true;
            } else {
                let dist = target.abs_diff(self.scroll_offset);
                let step = (dist / 4).max(1);
                if target > self.scroll_offset {
                    self.scroll_offset += step;
                } else {
                    self.scroll_offset -= step;
                }
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::LeaveForm),
            KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::FormInput(c))
            }
            _ => None,
        }
    }

    fn section_index(id: SectionId) -> usize {
        SectionId::ALL.iter().position(|s| *s == id).unwrap_or(0)
    }

    /// Context-sensitive Enter: open the selected case study from the
    /// projects section, start typing from the contact section
    fn handle_enter(&self) -> Option<Action> {
        match self.active.map(|i| SectionId::ALL[i]) {
            Some(SectionId::Projects) => Some(Action::OpenProject(self.selected_project)),
            Some(SectionId::Contact) => Some(Action::EnterForm),
            _ => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.form.is_focused() {
            return Ok(self.handle_form_key(key));
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('m') => Some(Action::ToggleMenu),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollToBottom),
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::BackTab => Some(Action::PrevSection),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevProject),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextProject),
            KeyCode::Char('c') => Some(Action::EnterForm),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|d| d as usize)
                .filter(|d| (1..=SectionId::ALL.len()).contains(d))
                .map(|d| Action::JumpToSection(d - 1)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-((self.viewport_height / 2).max(1) as isize)),
            Action::PageDown => self.scroll_by((self.viewport_height / 2).max(1) as isize),
            Action::ScrollToTop => self.scroll_to(0),
            Action::ScrollToBottom => self.scroll_to(usize::MAX),
            Action::JumpToSection(i) => self.jump_to(i),
            Action::NextSection => {
                let next = self.active.map(|i| i + 1).unwrap_or(0);
                if next < SectionId::ALL.len() {
                    return Ok(Some(Action::JumpToSection(next)));
                }
            }
            Action::PrevSection => {
                let prev = self.active.map(|i| i.saturating_sub(1)).unwrap_or(0);
                return Ok(Some(Action::JumpToSection(prev)));
            }
            Action::NextProject => {
                if self.selected_project + 1 < CATALOG.len() {
                    self.selected_project += 1;
                }
            }
            Action::PrevProject => {
                self.selected_project = self.selected_project.saturating_sub(1);
            }
            Action::EnterForm => {
                self.form.focus_first();
                return Ok(Some(Action::JumpToSection(Self::section_index(
                    SectionId::Contact,
                ))));
            }
            Action::LeaveForm => self.form.blur(),
            Action::FormNextField => self.form.focus_next(),
            Action::FormPrevField => self.form.focus_prev(),
            Action::FormInput(c) => self.form.input(c),
            Action::FormBackspace => self.form.backspace(),
            Action::SubmitForm => {
                self.form.submit(Instant::now());
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) -> Result<()> {
        self.viewport_height = area.height as usize;

        // Reveal sections that intersect the viewport (previous frame's
        // extents; the one-frame lag is the fade-in)
        let view_top = self.scroll_offset + REVEAL_MARGIN;
        let view_bottom = (self.scroll_offset + self.viewport_height).saturating_sub(REVEAL_MARGIN);
        for (i, extent) in self.last_extents.iter().enumerate() {
            if extent.top < view_bottom && extent.top + extent.height > view_top {
                self.revealed.insert(i);
            }
        }

        let (lines, extents) = self.build_document(area.width, theme);
        self.doc_height = lines.len();
        self.last_extents = extents;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());

        // One probe per frame; a jump in flight pins the target instead
        if let Some(pinned) = self.pinned_section {
            self.active = Some(pinned);
            self.probe_pending = false;
        } else if self.probe_pending {
            self.active = active_section(&self.last_extents, self.scroll_offset);
            self.probe_pending = false;
        }

        let page = Paragraph::new(lines)
            .block(Block::default().style(Style::default().bg(theme.bg)))
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(page, area);

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Document building
// ─────────────────────────────────────────────────────────────────────────────

impl HomeComponent {
    /// Build the full page and the per-section extents in one pass
    fn build_document(
        &self,
        width: u16,
        theme: &Theme,
    ) -> (Vec<Line<'static>>, Vec<SectionExtent>) {
        let text_width = (width as usize).saturating_sub(6).max(20);
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut extents = Vec::new();

        for (i, id) in SectionId::ALL.iter().enumerate() {
            let top = lines.len();
            let mut section = match id {
                SectionId::Home => self.build_hero(text_width, theme),
                SectionId::About => self.build_about(text_width, theme),
                SectionId::Projects => self.build_projects(text_width, theme),
                SectionId::Skills => self.build_skills(theme),
                SectionId::Contact => self.build_contact(text_width, theme),
            };
            if !self.revealed.contains(&i) {
                for line in &mut section {
                    line.style = line.style.add_modifier(Modifier::DIM);
                }
            }
            let height = section.len();
            lines.append(&mut section);
            extents.push(SectionExtent { id: *id, top, height });
        }

        // Trailing padding so the contact section can scroll clear of the
        // bottom edge
        for _ in 0..4 {
            lines.push(Line::from(""));
        }

        (lines, extents)
    }

    fn heading(&self, title: &str, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  ── {} ──", title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ]
    }

    fn body(&self, text: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        wrap(text, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(format!("  {}", l), Style::default().fg(theme.text))))
            .collect()
    }

    fn build_hero(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "  ARJUN SHARMA",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Product Manager & Strategy Leader",
                Style::default().fg(theme.text),
            )),
            Line::from(""),
        ];
        for l in wrap(
            "I turn ambiguous problems into shipped products. Eight years leading \
             cross-functional teams across fintech, e-commerce, and B2B platforms.",
            width,
        ) {
            lines.push(Line::from(Span::styled(
                format!("  {}", l),
                Style::default().fg(theme.muted),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? for keyboard shortcuts",
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));
        lines
    }

    fn build_about(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = self.heading("About", theme);
        lines.extend(self.body(
            "I'm a product manager who started out writing code and never stopped \
             thinking like a builder. I care about the distance between what users \
             say and what they do, and about shipping the smallest thing that \
             closes it.",
            width,
            theme,
        ));
        lines.push(Line::from(""));
        lines.extend(self.body(
            "Most recently I've led product for a digital bank's consumer app, an \
             e-commerce recommendation platform, and a B2B supply chain network. \
             The case studies below walk through four of those projects end to end.",
            width,
            theme,
        ));
        lines.push(Line::from(""));
        lines
    }

    fn build_projects(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = self.heading("Projects", theme);
        lines.extend(self.body(
            "Selected case studies. Move with ←/→ and press Enter to read one.",
            width,
            theme,
        ));

        for (i, record) in CATALOG.iter().enumerate() {
            let selected = i == self.selected_project;
            lines.push(Line::from(""));

            let marker = if selected { "▸ " } else { "  " };
            let title_style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(
                format!("  {}{}", marker, record.title),
                title_style,
            )));

            let summary = record.problem.split('.').next().unwrap_or(record.problem);
            for l in wrap(summary, width.saturating_sub(4)) {
                lines.push(Line::from(Span::styled(
                    format!("      {}", l),
                    Style::default().fg(theme.muted),
                )));
            }
        }
        lines.push(Line::from(""));
        lines
    }

    fn build_skills(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = self.heading("Skills", theme);
        let categories = [
            ("Product Strategy", "roadmapping, discovery, OKRs, pricing, go-to-market"),
            ("Research", "user interviews, journey mapping, competitive analysis, A/B testing"),
            ("Data", "SQL, analytics instrumentation, funnel analysis, experiment design"),
            ("Collaboration", "design sprints, stakeholder alignment, agile delivery"),
        ];
        for (name, items) in categories {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  • {}: ", name),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(items.to_string(), Style::default().fg(theme.muted)),
            ]));
        }
        lines.push(Line::from(""));
        lines
    }

    fn build_contact(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = self.heading("Contact", theme);
        lines.extend(self.body(
            "Have a project in mind? Send a note below - press c (or Enter from \
             here) to start typing.",
            width,
            theme,
        ));
        lines.push(Line::from(""));

        for field in ContactField::ALL {
            let focused = self.form.focus() == Some(field);
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            let marker = if focused { "▸ " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("  {}{}", marker, field.label()),
                label_style,
            )));

            let mut input_spans = vec![Span::styled(
                format!("    {}", self.form.value(field)),
                Style::default().fg(theme.text).bg(theme.surface),
            )];
            if focused {
                input_spans.push(Span::styled("█", Style::default().fg(theme.accent)));
            }
            lines.push(Line::from(input_spans));

            if let Some(message) = self.form.error(field) {
                lines.push(Line::from(Span::styled(
                    format!("    ✗ {}", message),
                    Style::default().fg(theme.error),
                )));
            }
            lines.push(Line::from(""));
        }

        if self.form.success_visible() {
            lines.push(Line::from(Span::styled(
                format!("  ✓ {}", SUCCESS_MESSAGE),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )));
        } else if self.form.is_focused() {
            lines.push(Line::from(Span::styled(
                "  Tab next field · Enter send · Esc leave form",
                Style::default().fg(theme.muted),
            )));
        }
        lines.push(Line::from(""));
        lines
    }
}

/// Greedy word wrap measured in display columns
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current_width == 0 {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::theme::ThemeMode;

    fn measured_home() -> HomeComponent {
        let mut home = HomeComponent::new();
        let theme = ThemeMode::Light.palette();
        let (lines, extents) = home.build_document(80, &theme);
        home.doc_height = lines.len();
        home.last_extents = extents;
        home.viewport_height = 24;
        home
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six seven eight nine ten", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 12);
        }
    }

    #[test]
    fn test_wrap_never_returns_empty() {
        assert_eq!(wrap("", 40), vec![String::new()]);
        // A word wider than the limit still lands on its own line
        assert_eq!(wrap("antidisestablishmentarianism", 10).len(), 1);
    }

    #[test]
    fn test_document_has_contiguous_extents_in_order() {
        let home = measured_home();
        let extents = &home.last_extents;
        assert_eq!(extents.len(), SectionId::ALL.len());
        assert_eq!(extents[0].top, 0);
        for pair in extents.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
            assert!(pair[0].height > 0);
        }
    }

    #[test]
    fn test_scroll_interrupts_jump_animation() {
        let mut home = measured_home();
        home.update(Action::JumpToSection(2)).unwrap();
        assert_eq!(home.active_section(), Some(2));
        assert!(home.scroll_target.is_some());

        home.update(Action::ScrollDown).unwrap();
        assert!(home.scroll_target.is_none());
        assert!(home.probe_pending);
    }

    #[test]
    fn test_jump_pins_target_until_settled() {
        let mut home = measured_home();
        home.update(Action::JumpToSection(3)).unwrap();
        let target = home.scroll_target.unwrap();

        // Step the animation until it lands; the target stays pinned active
        for _ in 0..200 {
            home.tick(Instant::now());
            if home.scroll_target.is_none() {
                break;
            }
            assert_eq!(home.pinned_section, Some(3));
        }
        assert_eq!(home.scroll_offset, target);
        assert!(home.scroll_target.is_none());
        assert!(home.pinned_section.is_none());
        assert!(home.probe_pending);
    }

    #[test]
    fn test_project_selection_clamps_to_catalog() {
        let mut home = measured_home();
        for _ in 0..10 {
            home.update(Action::NextProject).unwrap();
        }
        assert_eq!(home.selected_project, CATALOG.len() - 1);
        for _ in 0..10 {
            home.update(Action::PrevProject).unwrap();
        }
        assert_eq!(home.selected_project, 0);
    }

    #[test]
    fn test_enter_form_jumps_to_contact() {
        let mut home = measured_home();
        let follow_up = home.update(Action::EnterForm).unwrap();
        assert!(home.form.is_focused());
        assert_eq!(follow_up, Some(Action::JumpToSection(4)));
    }

    #[test]
    fn test_scroll_bursts_coalesce_into_one_pending_probe() {
        let mut home = measured_home();
        for _ in 0..20 {
            home.update(Action::ScrollDown).unwrap();
        }
        // Many scroll events, a single pending evaluation
        assert!(home.probe_pending);
        assert_eq!(home.scroll_offset, 20);
    }
}
