//! Theme toggle
//!
//! Light/dark flag persisted under the `theme` key. Missing or unknown
//! stored values mean light.

use std::fmt;
use thiserror::Error;

/// Colour theme applied as `data-theme` on the document root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `dark` is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
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

/// Theme persistence errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

/// Client-local key/value storage holding the theme
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), ThemeError>;
}

/// Theme state bound to a store
#[derive(Debug)]
pub struct ThemeState<S: ThemeStore> {
    current: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Read the saved theme (default light)
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.load().as_deref());
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. The in-memory theme flips even if
    /// persisting fails.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str())?;
        Ok(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Store kept in memory, for tests and hosts without persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    pub value: Option<String>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file_store::FileThemeStore;

#[cfg(feature = "native")]
mod file_store {
    use super::{ThemeError, ThemeStore};
    use std::path::{Path, PathBuf};

    /// Theme persisted as a one-line file
    #[derive(Debug, Clone)]
    pub struct FileThemeStore {
        path: PathBuf,
    }

    impl FileThemeStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/frisbee-live/theme`
        pub fn default_location() -> Self {
            let path = dirs::data_local_dir()
                .map(|p| p.join("frisbee-live").join("theme"))
                .unwrap_or_else(|| PathBuf::from("./frisbee_theme"));
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl ThemeStore for FileThemeStore {
        fn load(&self) -> Option<String> {
            std::fs::read_to_string(&self.path).ok()
        }

        fn save(&mut self, value: &str) -> Result<(), ThemeError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, value)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_light() {
        let state = ThemeState::load(MemoryThemeStore::default());
        assert_eq!(state.current(), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut state = ThemeState::load(MemoryThemeStore::default());
        assert_eq!(state.toggle().unwrap(), Theme::Dark);
        assert_eq!(state.store().value.as_deref(), Some("dark"));

        let reloaded = ThemeState::load(state.store().clone());
        assert_eq!(reloaded.current(), Theme::Dark);

        assert_eq!(state.toggle().unwrap(), Theme::Light);
        assert_eq!(state.store().value.as_deref(), Some("light"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("nested").join("theme"));

        let mut state = ThemeState::load(store);
        assert_eq!(state.current(), Theme::Light);
        state.toggle().unwrap();

        let path = dir.path().join("nested").join("theme");
        let reloaded = ThemeState::load(FileThemeStore::new(path));
        assert_eq!(reloaded.current(), Theme::Dark);
    }
}
