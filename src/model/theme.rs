//! Theme preference and palettes
//!
//! Resolution order: explicit persisted choice > terminal background
//! heuristic > light default. The persisted flag is written on every toggle
//! and never deleted; once it exists, system changes no longer apply.

use crate::config::Config;
use ratatui::style::Color;
use std::env;

/// The two-valued display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<ThemeMode> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Indicator glyph shown in the navbar: the action the toggle performs,
    /// matching the original sun-in-dark / moon-in-light convention.
    pub fn indicator(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }
}

/// Color palette resolved from the active mode
///
/// Components draw exclusively from these slots so a toggle restyles
/// everything on the next frame.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn light() -> Theme {
        Theme {
            bg: Color::Rgb(252, 252, 249),
            surface: Color::Rgb(238, 238, 233),
            text: Color::Rgb(19, 52, 59),
            muted: Color::Rgb(98, 108, 113),
            accent: Color::Rgb(33, 128, 141),
            border: Color::Rgb(190, 197, 200),
            error: Color::Rgb(192, 21, 47),
            success: Color::Rgb(33, 128, 141),
        }
    }

    pub fn dark() -> Theme {
        Theme {
            bg: Color::Rgb(31, 33, 33),
            surface: Color::Rgb(38, 40, 40),
            text: Color::Rgb(245, 245, 245),
            muted: Color::Rgb(167, 169, 169),
            accent: Color::Rgb(50, 184, 198),
            border: Color::Rgb(82, 87, 87),
            error: Color::Rgb(255, 84, 89),
            success: Color::Rgb(50, 184, 198),
        }
    }
}

/// Resolves and persists the theme preference
pub struct PreferenceStore {
    mode: ThemeMode,
    /// True once the user has made (or previously persisted) an explicit
    /// choice; suppresses external-change updates.
    explicit: bool,
    /// Disabled in tests; persistence failures are swallowed regardless.
    persist: bool,
}

impl PreferenceStore {
    /// Resolve the startup preference: persisted flag first, then the
    /// terminal background heuristic, then light.
    pub fn new() -> PreferenceStore {
        let persisted = Config::load()
            .and_then(|c| c.theme)
            .and_then(|t| ThemeMode::from_str(&t));

        match persisted {
            Some(mode) => PreferenceStore {
                mode,
                explicit: true,
                persist: true,
            },
            None => PreferenceStore {
                mode: if system_prefers_dark() {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                },
                explicit: false,
                persist: true,
            },
        }
    }

    /// Construct without touching storage
    pub fn in_memory(mode: ThemeMode, explicit: bool) -> PreferenceStore {
        PreferenceStore {
            mode,
            explicit,
            persist: false,
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.mode.palette()
    }

    /// Flip the preference, mark it explicit, and persist best-effort
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.explicit = true;
        if self.persist {
            let config = Config {
                theme: Some(self.mode.as_str().to_string()),
            };
            let _ = config.save();
        }
        self.mode
    }

    /// Apply a system-level preference change
    ///
    /// Ignored once an explicit choice exists; explicit choice always wins.
    pub fn on_external_change(&mut self, mode: ThemeMode) {
        if !self.explicit {
            self.mode = mode;
        }
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal background heuristic from the COLORFGBG convention
///
/// The variable carries "<fg>;<bg>" (some terminals insert a middle field);
/// background color indexes 0-6 and 8 are the dark half of the ANSI palette.
fn system_prefers_dark() -> bool {
    colorfgbg_is_dark(env::var("COLORFGBG").ok().as_deref())
}

fn colorfgbg_is_dark(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let Some(bg) = value.rsplit(';').next() else {
        return false;
    };
    match bg.parse::<u8>() {
        Ok(n) => n <= 6 || n == 8,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let mut store = PreferenceStore::in_memory(ThemeMode::Light, false);
        let original = store.get();

        store.toggle();
        assert_ne!(store.get(), original);

        store.toggle();
        assert_eq!(store.get(), original);
    }

    #[test]
    fn test_toggle_marks_choice_explicit() {
        let mut store = PreferenceStore::in_memory(ThemeMode::Light, false);
        store.toggle();
        assert_eq!(store.get(), ThemeMode::Dark);

        // System flips back to light; explicit choice wins
        store.on_external_change(ThemeMode::Light);
        assert_eq!(store.get(), ThemeMode::Dark);
    }

    #[test]
    fn test_external_change_applies_without_explicit_choice() {
        let mut store = PreferenceStore::in_memory(ThemeMode::Light, false);
        store.on_external_change(ThemeMode::Dark);
        assert_eq!(store.get(), ThemeMode::Dark);
    }

    #[test]
    fn test_external_change_suppressed_by_persisted_choice() {
        let mut store = PreferenceStore::in_memory(ThemeMode::Light, true);
        store.on_external_change(ThemeMode::Dark);
        assert_eq!(store.get(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_str("blue"), None);
    }

    #[test]
    fn test_indicator_shows_opposite_mode_glyph() {
        assert_eq!(ThemeMode::Dark.indicator(), "☀");
        assert_eq!(ThemeMode::Light.indicator(), "☾");
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert!(colorfgbg_is_dark(Some("15;0")));
        assert!(colorfgbg_is_dark(Some("12;8")));
        assert!(colorfgbg_is_dark(Some("15;default;0")));
        assert!(!colorfgbg_is_dark(Some("0;15")));
        assert!(!colorfgbg_is_dark(Some("garbage")));
        assert!(!colorfgbg_is_dark(None));
    }
}
