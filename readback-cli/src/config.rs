//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use readback_transcribe::Language;

/// Shortest and longest permitted recording, in seconds.
pub const MIN_DURATION: u32 = 1;
pub const MAX_DURATION: u32 = 300;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Recording duration in seconds (1-300)
    pub duration: u32,

    /// Spoken language for transcription
    pub language: Language,

    /// Interface language ("en" or "es")
    pub ui_language: String,

    /// ALSA capture device (None = auto-detect)
    pub device: Option<String>,

    /// Transcription engine binary
    pub transcriber_command: String,

    /// Speech model passed to the engine
    pub model_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            duration: 15,
            language: Language::En,
            ui_language: "es".to_string(),
            device: None,
            transcriber_command: "whisper-cli".to_string(),
            model_path: "models/ggml-base.bin".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let mut config: AppConfig = toml::from_str(&contents)
                .context("Failed to parse config file")?;

            config.config_path = config_path;
            config.duration = clamp_duration(config.duration);
            Ok(config)
        } else {
            let config = Self::default();
            config.save().context("Failed to save default config")?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Set duration, clamping into the valid range.
    pub fn set_duration(&mut self, seconds: u32) {
        self.duration = clamp_duration(seconds);
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("readback")
            .join("config.toml")
    }
}

pub fn clamp_duration(seconds: u32) -> u32 {
    seconds.clamp(MIN_DURATION, MAX_DURATION)
}
