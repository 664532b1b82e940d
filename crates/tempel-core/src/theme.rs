use std::sync::Arc;

use tempel_types::ThemePreference;

use crate::ports::PreferenceStore;
use crate::view::View;

/// Storage key of the light/dark choice
pub const THEME_KEY: &str = "theme";

/// Persists the display preference; the view holds the applied one
pub struct ThemeManager {
    store: Arc<dyn PreferenceStore>,
}

impl ThemeManager {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Stored preference, `Light` when absent or unreadable
    pub fn load_preference(&self) -> ThemePreference {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown theme {:?} in preferences, using light", value);
                ThemePreference::Light
            }),
            Ok(None) => ThemePreference::Light,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {:#}", e);
                ThemePreference::Light
            }
        }
    }

    pub fn apply_preference(&self, view: &View, preference: ThemePreference) {
        view.update(|state| state.theme = preference);
        tracing::debug!("Theme applied: {}", preference.as_str());
    }

    /// Flip the applied theme, persist it and apply it
    pub fn toggle_preference(&self, view: &View) -> ThemePreference {
        let next = view.read(|state| state.theme).toggled();
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            tracing::warn!("Failed to persist theme preference: {:#}", e);
        }
        self.apply_preference(view, next);
        next
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use tempel_types::{ThemeIcon, ViewState};

    use super::*;
    use crate::ports::MemoryPreferenceStore;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("disk on fire"))
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("disk on fire"))
        }
    }

    #[test]
    fn defaults_to_light() {
        let manager = ThemeManager::new(Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(manager.load_preference(), ThemePreference::Light);
    }

    #[test]
    fn unknown_value_falls_back_to_light() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(THEME_KEY, "sepia").unwrap();
        let manager = ThemeManager::new(store);
        assert_eq!(manager.load_preference(), ThemePreference::Light);
    }

    #[test]
    fn loads_persisted_dark() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(THEME_KEY, "dark").unwrap();
        let manager = ThemeManager::new(store);
        assert_eq!(manager.load_preference(), ThemePreference::Dark);
    }

    #[test]
    fn double_toggle_restores_and_persists_latest() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let manager = ThemeManager::new(store.clone());
        let view = View::new(ViewState::new(ThemePreference::Light));

        assert_eq!(manager.toggle_preference(&view), ThemePreference::Dark);
        assert!(view.read(|s| s.dark_mode()));
        assert_eq!(view.read(|s| s.theme.icon()), ThemeIcon::Moon);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(manager.toggle_preference(&view), ThemePreference::Light);
        assert!(!view.read(|s| s.dark_mode()));
        assert_eq!(view.read(|s| s.theme.icon()), ThemeIcon::Sun);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_still_applies_when_store_fails() {
        let manager = ThemeManager::new(Arc::new(BrokenStore));
        assert_eq!(manager.load_preference(), ThemePreference::Light);

        let view = View::new(ViewState::new(ThemePreference::Light));
        manager.toggle_preference(&view);
        assert!(view.read(|s| s.dark_mode()));
    }
}
