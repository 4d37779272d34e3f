//! Theme preference - a light/dark flag persisted between runs

use anyhow::Result;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Reads and writes the persisted theme flag.
///
/// A missing or garbled state file degrades to the default; reading never
/// fails.
pub struct ThemeStore {
    path: PathBuf,
    default: Theme,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>, default: Theme) -> Self {
        Self {
            path: path.into(),
            default,
        }
    }

    pub fn load(&self) -> Theme {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.default)
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        fs::write(&self.path, theme.to_string())?;
        Ok(())
    }

    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> ThemeStore {
        ThemeStore::new(dir.path().join(".theme"), Theme::Light)
    }

    #[test]
    fn test_missing_state_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store(&dir).load(), Theme::Light);
    }

    #[test]
    fn test_garbled_state_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".theme"), "solarized??").unwrap();
        assert_eq!(store(&dir).load(), Theme::Light);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
    }
}
