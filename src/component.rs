//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components never mutate each other directly; they communicate by
//! returning Actions for the App to dispatch.

use crate::action::Action;
use crate::model::theme::Theme;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component with the current theme
pub trait Component {
    /// Initialize the component
    ///
    /// Called once at startup for state that depends on runtime information.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// Converts key events into semantic Actions. State that belongs to the
    /// component itself (e.g. a scroll offset) may change here; shared state
    /// changes go through the returned Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// Can return a follow-up Action (e.g. submitting a form may return
    /// a validation failure no-op or an acknowledgment).
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame using the active theme palette
    fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) -> Result<()>;
}
