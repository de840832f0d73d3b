//! Configuration file management for wavetrail.
//!
//! This module handles loading and saving application configuration from TOML files.
//! Configuration is stored in the user's config directory.

use anyhow::anyhow;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::waveform::BarStyle;

/// Waveform geometry and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Width of each bar in canvas pixels (one terminal column per pixel)
    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
    /// Scroll-unit threshold at which the unit counter wraps
    #[serde(default = "default_unit")]
    pub unit: u32,
    /// Round bar corners
    #[serde(default = "default_true")]
    pub rounded: bool,
    /// Draw a live bar for the current, not yet committed peak
    #[serde(default = "default_true")]
    pub animate_current_pick: bool,
    /// Scroll across the whole canvas instead of the left half
    #[serde(default)]
    pub fullscreen: bool,
    /// Canvas background: a color name ("black") or hex value ("#000000")
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    /// Bar color while recording
    #[serde(default = "default_main_bar_color")]
    pub main_bar_color: Color,
    /// Bar color while paused, also used for the idle baseline
    #[serde(default = "default_secondary_bar_color")]
    pub secondary_bar_color: Color,
}

fn default_bar_width() -> u32 {
    2
}

fn default_unit() -> u32 {
    4
}

fn default_true() -> bool {
    true
}

fn default_background_color() -> Color {
    Color::Rgb(0, 0, 0)
}

fn default_main_bar_color() -> Color {
    Color::Rgb(206, 224, 220)
}

fn default_secondary_bar_color() -> Color {
    Color::Rgb(94, 94, 94)
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            unit: default_unit(),
            rounded: true,
            animate_current_pick: true,
            fullscreen: false,
            background_color: default_background_color(),
            main_bar_color: default_main_bar_color(),
            secondary_bar_color: default_secondary_bar_color(),
        }
    }
}

impl RenderConfig {
    /// Colors and shape handed to the renderer each tick.
    pub fn style(&self) -> BarStyle {
        BarStyle {
            background: self.background_color,
            main_bar_color: self.main_bar_color,
            secondary_bar_color: self.secondary_bar_color,
            rounded: self.rounded,
        }
    }
}

/// Live view timing and the synthetic signal feeding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Delay between animation ticks in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Samples delivered per tick
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Sample rate of the generated signal in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Carrier frequency of the generated signal in Hz
    #[serde(default = "default_signal_frequency_hz")]
    pub signal_frequency_hz: f32,
}

fn default_frame_interval_ms() -> u64 {
    30
}

fn default_block_size() -> usize {
    512
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_signal_frequency_hz() -> f32 {
    220.0
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            block_size: default_block_size(),
            sample_rate: default_sample_rate(),
            signal_frequency_hz: default_signal_frequency_hz(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WavetrailConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub live: LiveConfig,
}

impl WavetrailConfig {
    /// Loads configuration from the user's config directory.
    ///
    /// Falls back to defaults when no config file exists yet.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file cannot be read
    /// - If the TOML is malformed or contains invalid values
    pub fn load() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            tracing::info!(
                "No config file at {}; using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    /// - If the file cannot be read
    /// - If the TOML is malformed or contains invalid values
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config_content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
        Self::from_toml_str(&config_content)
            .map_err(|e| anyhow!("Invalid config in {}: {e}", path.display()))
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// - If the TOML is malformed
    /// - If a value fails validation
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: WavetrailConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the renderer cannot work with.
    ///
    /// # Errors
    /// - If `bar_width`, `unit` or `block_size` is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.render.bar_width == 0 {
            return Err(anyhow!("render.bar_width must be at least 1"));
        }
        if self.render.unit == 0 {
            return Err(anyhow!("render.unit must be at least 1"));
        }
        if self.live.block_size == 0 {
            return Err(anyhow!("live.block_size must be at least 1"));
        }
        Ok(())
    }

    /// Saves configuration to the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the file cannot be written
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = get_config_path()?;
        let config_content = toml::to_string_pretty(self)?;
        fs::write(&config_path, config_content)?;
        tracing::info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

/// Retrieves the path to the config file, creating its directory if needed.
///
/// # Errors
/// - If the home directory cannot be determined
/// - If the config directory cannot be created
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?
        .join(".config")
        .join("wavetrail");

    fs::create_dir_all(&config_dir)
        .map_err(|e| anyhow!("Failed to create config directory: {e}"))?;

    Ok(config_dir.join("wavetrail.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let config = WavetrailConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = WavetrailConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = WavetrailConfig::from_toml_str(
            r##"
            [render]
            bar_width = 3
            fullscreen = true
            main_bar_color = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.render.bar_width, 3);
        assert!(config.render.fullscreen);
        assert_eq!(config.render.main_bar_color, Color::Rgb(255, 0, 0));
        assert_eq!(config.render.unit, default_unit());
        assert_eq!(config.live, LiveConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = WavetrailConfig::from_toml_str("").unwrap();
        assert_eq!(config, WavetrailConfig::default());
    }

    #[test]
    fn test_zero_bar_width_rejected() {
        let err = WavetrailConfig::from_toml_str("[render]\nbar_width = 0\n").unwrap_err();
        assert!(err.to_string().contains("bar_width"));
    }

    #[test]
    fn test_zero_block_size_rejected() {
        assert!(WavetrailConfig::from_toml_str("[live]\nblock_size = 0\n").is_err());
    }

    #[test]
    fn test_style_follows_render_config() {
        let render = RenderConfig {
            rounded: false,
            ..RenderConfig::default()
        };
        let style = render.style();
        assert!(!style.rounded);
        assert_eq!(style.main_bar_color, default_main_bar_color());
        assert_eq!(style.background, default_background_color());
    }
}
