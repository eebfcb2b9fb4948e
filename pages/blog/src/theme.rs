//! Light/dark theme with an explicit user choice that outranks the OS setting.

/// Storage key holding the explicit choice.
pub const THEME_KEY: &str = "theme";
/// Attribute on `<html>` the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
/// Duration of the toggle button's spin.
pub const SPIN_MS: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_os(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Key-value persistence, `localStorage` in the browser.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
    explicit: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Stored choice if there is a valid one, otherwise the OS preference.
    pub fn new(store: S, os_prefers_dark: bool) -> Self {
        let stored = Self::stored(&store);
        let current = stored.unwrap_or_else(|| Theme::from_os(os_prefers_dark));
        Self { store, current, explicit: stored.is_some() }
    }

    fn stored(store: &S) -> Option<Theme> {
        store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// A valid stored value, or a toggle this session even if the store dropped it.
    pub fn has_explicit_choice(&self) -> bool {
        self.explicit
    }

    /// Flip the theme and record it as the user's choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.explicit = true;
        self.store.set(THEME_KEY, self.current.as_str());
        self.current
    }

    /// Follow an OS scheme change unless the user has chosen explicitly.
    /// Returns the new theme when it was applied.
    pub fn os_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        self.current = Theme::from_os(prefers_dark);
        Some(self.current)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Ctrl or Cmd, plus Shift, plus `T`.
pub fn is_theme_shortcut(ctrl: bool, meta: bool, shift: bool, key: &str) -> bool {
    (ctrl || meta) && shift && key == "T"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn stored(theme: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, theme);
        store
    }

    #[test]
    fn no_stored_value_follows_os() {
        assert_eq!(ThemeController::new(MemoryStore::default(), true).current(), Theme::Dark);
        assert_eq!(ThemeController::new(MemoryStore::default(), false).current(), Theme::Light);
    }

    #[test]
    fn stored_value_beats_os() {
        assert_eq!(ThemeController::new(stored("light"), true).current(), Theme::Light);
        assert_eq!(ThemeController::new(stored("dark"), false).current(), Theme::Dark);
    }

    #[test]
    fn garbage_in_storage_is_ignored() {
        let theme = ThemeController::new(stored("sepia"), true);
        assert_eq!(theme.current(), Theme::Dark);
        assert!(!theme.has_explicit_choice());
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start in [Theme::Light, Theme::Dark] {
            let mut theme = ThemeController::new(stored(start.as_str()), false);
            theme.toggle();
            theme.toggle();
            assert_eq!(theme.current(), start);
            assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some(start.as_str()));
        }
    }

    #[test]
    fn toggle_persists() {
        let mut theme = ThemeController::new(MemoryStore::default(), false);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn os_changes_apply_until_user_toggles() {
        let mut theme = ThemeController::new(MemoryStore::default(), false);
        assert_eq!(theme.os_changed(true), Some(Theme::Dark));
        assert_eq!(theme.current(), Theme::Dark);

        theme.toggle();
        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(theme.os_changed(true), None);
        assert_eq!(theme.os_changed(false), None);
        assert_eq!(theme.current(), Theme::Light);
    }

    /// Reads nothing and drops writes, like a browser without localStorage.
    struct NullStore;

    impl PreferenceStore for NullStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) {}
    }

    #[test]
    fn toggle_outranks_os_without_storage() {
        let mut theme = ThemeController::new(NullStore, false);
        assert!(!theme.has_explicit_choice());
        assert_eq!(theme.toggle(), Theme::Dark);
        assert!(theme.has_explicit_choice());
        assert_eq!(theme.os_changed(false), None);
        assert_eq!(theme.current(), Theme::Dark);
    }

    #[test]
    fn shortcut_needs_modifier_and_shift() {
        assert!(is_theme_shortcut(true, false, true, "T"));
        assert!(is_theme_shortcut(false, true, true, "T"));
        assert!(!is_theme_shortcut(true, false, false, "T"));
        assert!(!is_theme_shortcut(false, false, true, "T"));
        assert!(!is_theme_shortcut(true, false, true, "t"));
    }
}
