//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the page up one row
    ScrollUp,
    /// Scroll the page down one row
    ScrollDown,
    /// Scroll the page up half a screen
    PageUp,
    /// Scroll the page down half a screen
    PageDown,
    /// Jump to the top of the page
    ScrollToTop,
    /// Jump to the bottom of the page
    ScrollToBottom,
    /// Smooth-scroll to the section at the given index
    JumpToSection(usize),
    /// Smooth-scroll to the section after the active one
    NextSection,
    /// Smooth-scroll to the section before the active one
    PrevSection,

    // ─────────────────────────────────────────────────────────────────────────
    // View Toggles
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip the light/dark theme preference
    ToggleTheme,
    /// Open or close the nav menu
    ToggleMenu,

    // ─────────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the next project card
    NextProject,
    /// Select the previous project card
    PrevProject,
    /// Open the detail view for the project at the given catalog index
    OpenProject(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the help dialog
    OpenHelp,
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Close the top modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus into the contact form
    EnterForm,
    /// Move focus out of the contact form, validating the departed field
    LeaveForm,
    /// Move focus to the next field, validating the departed field
    FormNextField,
    /// Move focus to the previous field, validating the departed field
    FormPrevField,
    /// Insert a character into the focused field
    FormInput(char),
    /// Delete the character before the cursor in the focused field
    FormBackspace,
    /// Validate every field and submit if all pass
    SubmitForm,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ScrollToTop => write!(f, "ScrollToTop"),
            Action::ScrollToBottom => write!(f, "ScrollToBottom"),
            Action::JumpToSection(i) => write!(f, "JumpToSection({})", i),
            Action::NextSection => write!(f, "NextSection"),
            Action::PrevSection => write!(f, "PrevSection"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::ToggleMenu => write!(f, "ToggleMenu"),
            Action::NextProject => write!(f, "NextProject"),
            Action::PrevProject => write!(f, "PrevProject"),
            Action::OpenProject(i) => write!(f, "OpenProject({})", i),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::EnterForm => write!(f, "EnterForm"),
            Action::LeaveForm => write!(f, "LeaveForm"),
            Action::FormNextField => write!(f, "FormNextField"),
            Action::FormPrevField => write!(f, "FormPrevField"),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::SubmitForm => write!(f, "SubmitForm"),
        }
    }
}
