//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. Every component is constructed once here and reached through
//! explicit references - no ambient globals.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_menu_overlay, draw_navbar, HelpDialog, HomeComponent,
    NavbarContext, ProjectDetailDialog, QuitDialog, SplashComponent,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::project;
use crate::model::section::SectionId;
use crate::model::theme::{PreferenceStore, Theme};
use crate::model::ui::{AppMode, MenuState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Theme preference store
    pub preferences: PreferenceStore,

    /// Nav menu state machine
    pub menu: MenuState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub project_detail: ProjectDetailDialog,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance, resolving the persisted theme preference
    pub fn new() -> App {
        Self::with_preferences(PreferenceStore::new())
    }

    /// Create an App around an existing preference store
    pub fn with_preferences(preferences: PreferenceStore) -> App {
        App {
            mode: AppMode::Splash,
            preferences,
            menu: MenuState::Closed,
            modals: ModalStack::new(),
            should_quit: false,
            splash: SplashComponent::new(),
            home: HomeComponent::new(),
            project_detail: ProjectDetailDialog::default(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::ProjectDetail { .. } => self.project_detail.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
        }
    }

    /// Keys while the overlay menu is open: pick an entry or dismiss
    fn handle_menu_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::ToggleMenu),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|d| d as usize)
                .filter(|d| (1..=SectionId::ALL.len()).contains(d))
                .map(|d| Action::JumpToSection(d - 1)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal, theme: &Theme) -> Result<()> {
        match modal {
            Modal::ProjectDetail { index } => {
                // A record that vanished from under the stack is a no-op
                if let Some(record) = project::get(*index) {
                    self.project_detail.draw_record(frame, area, theme, record)?;
                }
                Ok(())
            }
            Modal::Help => self.help_dialog.draw(frame, area, theme),
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area, theme),
        }
    }

    fn draw_hint_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let hint = if self.home.form.is_focused() {
            " Tab next field · Enter send · Esc leave form "
        } else {
            " j/k scroll · 1-5 sections · Enter open · t theme · ? help · q quit "
        };
        let bar = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.muted),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .style(Style::default().bg(theme.surface)),
        );
        frame.render_widget(bar, area);
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits, regardless of mode or focus
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.menu.is_open() {
                    self.handle_menu_key_event(key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Only the detail dialog listens for clicks (outside-click dismissal)
        if matches!(self.modals.top(), Some(Modal::ProjectDetail { .. })) {
            return self.project_detail.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                self.home.tick(Instant::now());
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(width, _) => {
                self.menu.on_resize(width);
            }

            // ─────────────────────────────────────────────────────────────────
            // View Toggles
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleTheme => {
                self.preferences.toggle();
            }
            Action::ToggleMenu => {
                self.menu = self.menu.toggled();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenProject(index) => {
                // Out-of-bounds index: silent no-op, stack unchanged
                if project::get(index).is_some() {
                    self.project_detail.open();
                    self.modals.push(Modal::ProjectDetail { index });
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Page (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::JumpToSection(_) => {
                // Activating a nav entry closes the overlay menu
                self.menu.close();
                return self.home.update(action);
            }
            _ => return self.home.update(action),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area, theme)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area);

                // The page draw runs the (at most once per frame) section
                // probe, so the navbar below reads a fresh active section
                self.home.draw(frame, layout.content, theme)?;

                let ctx = NavbarContext {
                    theme,
                    active_section: self.home.active_section(),
                    indicator: self.preferences.get().indicator(),
                    menu: self.menu,
                };
                draw_navbar(frame, layout.navbar, &ctx);
                self.draw_hint_bar(frame, layout.help, theme);
                draw_menu_overlay(frame, area, &ctx);

                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal, theme)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::CATALOG;
    use crate::model::theme::ThemeMode;

    fn running_app() -> App {
        let mut app = App::with_preferences(PreferenceStore::in_memory(ThemeMode::Light, false));
        app.mode = AppMode::Running;
        app
    }

    #[test]
    fn test_open_project_within_bounds_pushes_modal() {
        let mut app = running_app();
        app.update(Action::OpenProject(0)).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::ProjectDetail { index: 0 }));
    }

    #[test]
    fn test_open_project_out_of_bounds_is_noop() {
        let mut app = running_app();
        app.update(Action::OpenProject(CATALOG.len())).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_close_modal_is_idempotent() {
        let mut app = running_app();
        app.update(Action::OpenProject(1)).unwrap();
        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());

        // Closing again has no observable effect
        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_toggle_theme_flips_preference() {
        let mut app = running_app();
        app.update(Action::ToggleTheme).unwrap();
        assert_eq!(app.preferences.get(), ThemeMode::Dark);
        app.update(Action::ToggleTheme).unwrap();
        assert_eq!(app.preferences.get(), ThemeMode::Light);
    }

    #[test]
    fn test_jump_to_section_closes_menu() {
        let mut app = running_app();
        app.update(Action::ToggleMenu).unwrap();
        assert!(app.menu.is_open());
        app.update(Action::JumpToSection(2)).unwrap();
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_force_quit_sets_flag() {
        let mut app = running_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_splash_complete_starts_running_mode() {
        let mut app = App::with_preferences(PreferenceStore::in_memory(ThemeMode::Dark, true));
        assert_eq!(app.mode, AppMode::Splash);
        app.update(Action::SplashComplete).unwrap();
        assert_eq!(app.mode, AppMode::Running);
    }
}
