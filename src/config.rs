// src/config.rs

//! Runtime settings for the frame loop and the demo binary.
//!
//! Settings start from `Config::default()`. A JSON document in
//! `BRAILLE_CANVAS_CONFIG` may override any subset of fields, and the
//! `BRAILLE_CANVAS_MAX_FRAMES` / `BRAILLE_CANVAS_FRAME_MS` variables
//! override single values on top of that.

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::NamedColor;

pub const CONFIG_ENV: &str = "BRAILLE_CANVAS_CONFIG";
pub const MAX_FRAMES_ENV: &str = "BRAILLE_CANVAS_MAX_FRAMES";
pub const FRAME_MS_ENV: &str = "BRAILLE_CANVAS_FRAME_MS";

/// Global configuration, loaded from the environment on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::load().unwrap_or_else(|e| {
        warn!("Invalid configuration: {:#}. Using defaults.", e);
        Config::default()
    })
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause between two frames, in milliseconds.
    pub frame_interval_ms: u64,
    /// Stop after this many frames. `None` runs until interrupted.
    pub max_frames: Option<u64>,
    /// Clear the screen and home the cursor before every frame.
    pub clear_screen: bool,
    /// Keep cell (0, 0) inside the displayed area.
    pub anchor_origin: bool,
    /// Palette index used by the demo drawing.
    pub color: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frame_interval_ms: 100,
            max_frames: None,
            clear_screen: true,
            anchor_origin: true,
            color: NamedColor::BrightWhite.index(),
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(json) => Self::from_json(&json)
                .with_context(|| format!("Failed to parse {}", CONFIG_ENV))?,
            None => Config::default(),
        };

        if let Some(value) = lookup(MAX_FRAMES_ENV) {
            let frames = value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a frame count, got '{}'", MAX_FRAMES_ENV, value))?;
            config.max_frames = Some(frames);
        }
        if let Some(value) = lookup(FRAME_MS_ENV) {
            config.frame_interval_ms = value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be milliseconds, got '{}'", FRAME_MS_ENV, value))?;
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid configuration JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_log::test;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_interval_ms, 100);
        assert_eq!(config.max_frames, None);
    }

    #[test]
    fn json_overrides_only_given_fields() {
        let config =
            Config::from_lookup(lookup_from(&[(CONFIG_ENV, r#"{"color": 196, "clear_screen": false}"#)]))
                .unwrap();
        assert_eq!(config.color, 196);
        assert!(!config.clear_screen);
        assert_eq!(config.frame_interval_ms, 100);
    }

    #[test]
    fn single_value_variables_win_over_json() {
        let config = Config::from_lookup(lookup_from(&[
            (CONFIG_ENV, r#"{"max_frames": 10, "frame_interval_ms": 5}"#),
            (MAX_FRAMES_ENV, " 3 "),
            (FRAME_MS_ENV, "0"),
        ]))
        .unwrap();
        assert_eq!(config.max_frames, Some(3));
        assert_eq!(config.frame_interval_ms, 0);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup_from(&[(MAX_FRAMES_ENV, "many")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(FRAME_MS_ENV, "-1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(CONFIG_ENV, "{not json")])).is_err());
    }
}
