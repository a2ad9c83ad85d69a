//! Front-end configuration: player names and pacing.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::{Mark, Opponent};
use tracing::{debug, info, instrument};

/// Longest accepted player name, in characters.
pub const MAX_NAME_LENGTH: usize = 10;

/// Settings read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Name for the X player.
    player_x: Option<String>,

    /// Name for the O player.
    player_o: Option<String>,

    /// Display name of the computer opponent.
    computer_name: String,

    /// Pause before the computer moves, in milliseconds.
    think_delay_ms: u64,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            computer_name: "Computer".to_string(),
            think_delay_ms: 500,
        }
    }
}

impl FrontendConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(think_delay_ms = config.think_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Applies command-line name overrides.
    pub fn with_overrides(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        self
    }

    /// Sets the computer's thinking pause.
    pub fn with_think_delay_ms(mut self, think_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self
    }

    /// The computer's thinking pause.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Resolves display names for both marks.
    ///
    /// Blank names fall back to defaults; the computer always uses
    /// `computer_name`.
    #[instrument(skip(self))]
    pub fn names(&self, opponent: Opponent) -> Result<PlayerNames, ConfigError> {
        let (x_default, o_default) = match opponent {
            Opponent::Human => ("Player X", "Player O"),
            Opponent::Computer(_) => ("Player", "Player"),
        };
        let mut x = validate_name(self.player_x.as_deref(), x_default)?;
        let mut o = validate_name(self.player_o.as_deref(), o_default)?;

        match opponent.computer_mark() {
            Some(Mark::X) => x = validate_name(Some(&self.computer_name), "Computer")?,
            Some(Mark::O) => o = validate_name(Some(&self.computer_name), "Computer")?,
            None => {}
        }
        Ok(PlayerNames { x, o })
    }
}

fn validate_name(raw: Option<&str>, fallback: &str) -> Result<String, ConfigError> {
    let name = raw.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Ok(fallback.to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ConfigError::new(format!(
            "Name '{}' is too long: maximum {} characters allowed",
            name, MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

/// Display names for X and O.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerNames {
    /// Name shown for X.
    x: String,
    /// Name shown for O.
    o: String,
}

impl PlayerNames {
    /// Name shown for `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
