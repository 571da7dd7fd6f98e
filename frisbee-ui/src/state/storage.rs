//! Client-local storage

use frisbee_live::ui::{dom::THEME_STORAGE_KEY, ThemeError, ThemeStore};

/// Theme persisted in `window.localStorage` under `theme`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeError> {
        let storage = local_storage()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| ThemeError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frisbee_live::ui::{Theme, ThemeState};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_theme_round_trips_through_local_storage() {
        let mut store = LocalThemeStore;
        store.save("light").unwrap();

        let mut state = ThemeState::load(LocalThemeStore);
        assert_eq!(state.current(), Theme::Light);
        assert_eq!(state.toggle().unwrap(), Theme::Dark);
        assert_eq!(LocalThemeStore.load().as_deref(), Some("dark"));
    }
}
