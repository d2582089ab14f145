//! Session settings loaded from TOML and command-line flags.

use checkers_core::{BoardSize, Players, Storage};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Choices that would otherwise be prompted for at the start of each game.
///
/// Every field is optional; whatever is missing is asked interactively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameSettings {
    /// Player one's piece letter.
    player_one: Option<char>,

    /// Player two's piece letter.
    player_two: Option<char>,

    /// Board side length.
    size: Option<BoardSize>,

    /// Board storage strategy.
    storage: Option<Storage>,
}

impl GameSettings {
    /// Creates settings from individual choices.
    #[instrument]
    pub fn new(
        player_one: Option<char>,
        player_two: Option<char>,
        size: Option<BoardSize>,
        storage: Option<Storage>,
    ) -> Self {
        Self {
            player_one,
            player_two,
            size,
            storage,
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Fills any choice missing here from `fallback`.
    #[instrument]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            player_one: self.player_one.or(fallback.player_one),
            player_two: self.player_two.or(fallback.player_two),
            size: self.size.or(fallback.size),
            storage: self.storage.or(fallback.storage),
        }
    }

    /// Checks the piece letters that are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |symbol: Option<char>| match symbol {
            Some(symbol) => Players::validate(symbol)
                .map_err(|e| ConfigError::new(format!("Invalid piece: {}", e))),
            None => Ok(()),
        };
        check(self.player_one)?;
        check(self.player_two)?;

        if let (Some(one), Some(two)) = (self.player_one, self.player_two) {
            Players::new(one, two)
                .map_err(|e| ConfigError::new(format!("Invalid pieces: {}", e)))?;
        }
        Ok(())
    }
}

/// A settings file that could not be read, parsed or accepted.
///
/// Records where in this crate the problem was detected.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} (detected at {}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong with the settings.
    pub message: String,
    /// Line that rejected the settings.
    pub line: u32,
    /// Source file that rejected the settings.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        debug!(%message, file = loc.file(), line = loc.line(), "Rejecting settings");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let file = GameSettings::new(Some('a'), Some('b'), BoardSize::new(10).ok(), None);
        let flags = GameSettings::new(Some('c'), None, None, Some(Storage::Sparse));
        let merged = flags.or(file);

        assert_eq!(*merged.player_one(), Some('c'));
        assert_eq!(*merged.player_two(), Some('b'));
        assert_eq!(merged.size().map(BoardSize::get), Some(10));
        assert_eq!(*merged.storage(), Some(Storage::Sparse));
    }

    #[test]
    fn test_validate_rejects_duplicate_letters() {
        let settings = GameSettings::new(Some('x'), Some('x'), None, None);
        let err = settings.validate().unwrap_err();
        assert!(err.message.contains("both players"));
    }

    #[test]
    fn test_validate_allows_partial_settings() {
        assert!(GameSettings::default().validate().is_ok());
        assert!(GameSettings::new(None, Some('q'), None, None).validate().is_ok());
    }

    #[test]
    fn test_error_names_where_settings_were_rejected() {
        let err = GameSettings::new(Some('7'), None, None, None)
            .validate()
            .unwrap_err();

        assert!(err.file.ends_with("settings.rs"), "{}", err.file);
        assert!(err.to_string().starts_with("Settings error: Invalid piece"));
    }
}
