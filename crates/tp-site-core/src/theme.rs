//! Light/dark theme preference.
//!
//! A stored value is an explicit visitor choice and always wins over the
//! system `prefers-color-scheme` setting.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Decode the raw value kept under the storage key. Missing or
    /// unrecognised values count as no stored choice.
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Theme::parse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    applied: Theme,
    explicit: bool,
}

impl ThemeState {
    /// Startup resolution: stored preference, else the system preference.
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => Self {
                applied: theme,
                explicit: true,
            },
            None => Self {
                applied: Theme::from_system(prefers_dark),
                explicit: false,
            },
        }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// System preference changed. `stored` is re-read from storage so a
    /// choice made in another tab is honoured too.
    pub fn on_system_change(&mut self, prefers_dark: bool, stored: Option<Theme>) -> Option<Theme> {
        if self.explicit || stored.is_some() {
            self.explicit = true;
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        if next == self.applied {
            return None;
        }
        self.applied = next;
        Some(next)
    }

    /// Explicit visitor toggle; the result must be persisted.
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.toggled();
        self.explicit = true;
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_preference_used_without_stored_value() {
        let state = ThemeState::resolve(None, true);
        assert_eq!(state.applied(), Theme::Dark);
        assert!(!state.is_explicit());
        assert_eq!(ThemeState::resolve(None, false).applied(), Theme::Light);
    }

    #[test]
    fn stored_value_beats_system_preference() {
        let state = ThemeState::resolve(Some(Theme::Light), true);
        assert_eq!(state.applied(), Theme::Light);
        assert!(state.is_explicit());
    }

    #[test]
    fn parse_accepts_only_known_names() {
        assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn system_change_follows_when_no_choice_made() {
        let mut state = ThemeState::resolve(None, false);
        assert_eq!(state.on_system_change(true, None), Some(Theme::Dark));
        assert_eq!(state.on_system_change(true, None), None);
        assert_eq!(state.applied(), Theme::Dark);
    }

    #[test]
    fn system_change_ignored_after_explicit_choice() {
        let mut state = ThemeState::resolve(None, true);
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.on_system_change(true, Some(Theme::Light)), None);
        assert_eq!(state.on_system_change(false, Some(Theme::Light)), None);
        assert_eq!(state.applied(), Theme::Light);
    }

    #[test]
    fn choice_stored_elsewhere_blocks_system_change() {
        let mut state = ThemeState::resolve(None, false);
        assert_eq!(state.on_system_change(true, Some(Theme::Light)), None);
        assert_eq!(state.applied(), Theme::Light);
        assert!(state.is_explicit());
    }

    #[test]
    fn raw_stored_name_is_an_explicit_choice() {
        let stored = Theme::from_stored(Some("dark"));
        assert_eq!(stored, Some(Theme::Dark));

        let mut state = ThemeState::resolve(stored, false);
        assert_eq!(state.applied(), Theme::Dark);
        assert!(state.is_explicit());
        assert_eq!(state.on_system_change(false, stored), None);
        assert_eq!(state.applied(), Theme::Dark);
    }

    #[test]
    fn unreadable_stored_value_defers_to_system() {
        assert_eq!(Theme::from_stored(Some("\"dark\"")), None);
        assert_eq!(Theme::from_stored(Some("sepia")), None);
        assert_eq!(Theme::from_stored(None), None);
        let state = ThemeState::resolve(Theme::from_stored(Some("sepia")), true);
        assert_eq!(state.applied(), Theme::Dark);
        assert!(!state.is_explicit());
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
