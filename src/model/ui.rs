//! UI state - presentation state separate from portfolio content

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Terminal width at or above which the nav entries fit inline and the
/// overlay menu closes itself
pub const MENU_INLINE_MIN_WIDTH: u16 = 76;

/// Nav menu state machine
///
/// Two states driving a declarative rendering choice: Closed renders the
/// inline entries (width permitting), Open renders the vertical overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Close if open; already-closed is a no-op
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// A resize past the inline threshold closes the overlay
    pub fn on_resize(&mut self, width: u16) {
        if width >= MENU_INLINE_MIN_WIDTH {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggles_between_two_states() {
        let menu = MenuState::Closed;
        assert_eq!(menu.toggled(), MenuState::Open);
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::Closed;
        menu.close();
        assert_eq!(menu, MenuState::Closed);

        let mut menu = MenuState::Open;
        menu.close();
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_wide_resize_closes_overlay() {
        let mut menu = MenuState::Open;
        menu.on_resize(MENU_INLINE_MIN_WIDTH - 1);
        assert!(menu.is_open());
        menu.on_resize(MENU_INLINE_MIN_WIDTH);
        assert!(!menu.is_open());
    }
}
