#![cfg(feature = "std")]
//! Persisted user settings, stored as a small JSON file.
//!
//! This is the only place that touches storage. The engine receives a
//! validated [`Configuration`] built from these values.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::config::{
    Configuration, Difficulty, GameMode, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH,
};

/// Default settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "caro_settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Colorful,
}

/// Settings record. Fields missing from the file keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_size: usize,
    pub win_condition: usize,
    pub game_mode: GameMode,
    pub ai_difficulty: Difficulty,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_condition: DEFAULT_WIN_LENGTH,
            game_mode: GameMode::default(),
            ai_difficulty: Difficulty::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`Settings::load`], but falls back to the defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable settings: {:#}", e);
            Self::default()
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Validate into an engine configuration.
    pub fn to_configuration(&self) -> anyhow::Result<Configuration> {
        let config = Configuration::new(
            self.board_size,
            self.win_condition,
            self.ai_difficulty,
            self.game_mode,
        )?;
        Ok(config)
    }

    /// Change the board size and clamp the win condition to fit it.
    pub fn set_board_size(&mut self, board_size: usize) -> anyhow::Result<()> {
        let current = self.to_configuration().unwrap_or_else(|_| {
            Configuration::default()
                .with_difficulty(self.ai_difficulty)
                .with_mode(self.game_mode)
        });
        let config = current.with_board_size(board_size)?;
        self.board_size = config.board_size();
        self.win_condition = config.win_length();
        Ok(())
    }
}

impl From<&Configuration> for Settings {
    fn from(config: &Configuration) -> Self {
        Self {
            board_size: config.board_size(),
            win_condition: config.win_length(),
            game_mode: config.mode(),
            ai_difficulty: config.difficulty(),
            theme: Theme::default(),
        }
    }
}
