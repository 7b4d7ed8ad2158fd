use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TransitionEffect;

pub const DEFAULT_SENSITIVITY: f64 = 100.0;
pub const DEFAULT_SETTLE_TIMEOUT_MS: u32 = 150;
pub const DEFAULT_STACK_DEPTH: usize = 3;
pub const DEFAULT_KEY_COOLDOWN_MS: u32 = 150;
pub const DEFAULT_TRANSITION_MS: u32 = 300;
pub const DEFAULT_AUTOPLAY_MS: u32 = 3000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown transition effect: {0}")]
pub struct ParseEffectError(pub String);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't parse deck config")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Effect(#[from] ParseEffectError),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("unknown deck option: {0}")]
    UnknownKey(String),
}

/// Behaviour of a single slide deck. Every field has a default so partial
/// JSON or query overrides fill in the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub effect: TransitionEffect,
    /// scroll distance needed to complete one transition
    pub sensitivity: f64,
    /// inactivity after which a partial scroll snaps back
    pub settle_timeout_ms: u32,
    pub max_stack_depth: usize,
    pub initial_index: usize,
    pub enable_scroll: bool,
    pub key_cooldown_ms: u32,
    pub transition_duration_ms: u32,
    /// advance automatically every N milliseconds
    pub autoplay_ms: Option<u32>,
    pub show_indicators: bool,
    /// scrolling past the last slide opens the overview panel
    pub overview_enabled: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            effect: TransitionEffect::default(),
            sensitivity: DEFAULT_SENSITIVITY,
            settle_timeout_ms: DEFAULT_SETTLE_TIMEOUT_MS,
            max_stack_depth: DEFAULT_STACK_DEPTH,
            initial_index: 0,
            enable_scroll: true,
            key_cooldown_ms: DEFAULT_KEY_COOLDOWN_MS,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            autoplay_ms: None,
            show_indicators: false,
            overview_enabled: false,
        }
    }
}

impl DeckConfig {
    pub fn with_effect(mut self, effect: TransitionEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_settle_timeout(mut self, ms: u32) -> Self {
        self.settle_timeout_ms = ms;
        self
    }

    pub fn with_indicators(mut self) -> Self {
        self.show_indicators = true;
        self
    }

    pub fn with_overview(mut self) -> Self {
        self.overview_enabled = true;
        self
    }

    pub fn with_autoplay(mut self, ms: u32) -> Self {
        self.autoplay_ms = Some(ms);
        self
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        Ok(config.sanitized())
    }

    /// Replace values that would break the controller with their defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            log::warn!(
                "deck sensitivity {} is not usable, falling back to {DEFAULT_SENSITIVITY}",
                self.sensitivity
            );
            self.sensitivity = DEFAULT_SENSITIVITY;
        }
        if self.settle_timeout_ms == 0 {
            log::warn!("deck settle timeout of 0ms, falling back to {DEFAULT_SETTLE_TIMEOUT_MS}ms");
            self.settle_timeout_ms = DEFAULT_SETTLE_TIMEOUT_MS;
        }
        if self.autoplay_ms == Some(0) {
            log::warn!("deck autoplay interval of 0ms, falling back to {DEFAULT_AUTOPLAY_MS}ms");
            self.autoplay_ms = Some(DEFAULT_AUTOPLAY_MS);
        }
        self
    }

    /// Apply a single `key=value` override, e.g. from a URL query string.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "effect" => self.effect = value.parse()?,
            "sensitivity" => {
                let sensitivity = value.parse::<f64>().map_err(|_| invalid())?;
                if !sensitivity.is_finite() || sensitivity <= 0.0 {
                    return Err(invalid());
                }
                self.sensitivity = sensitivity;
            }
            "settle" => self.settle_timeout_ms = value.parse().map_err(|_| invalid())?,
            "depth" => self.max_stack_depth = value.parse().map_err(|_| invalid())?,
            "start" => self.initial_index = value.parse().map_err(|_| invalid())?,
            "indicators" => self.show_indicators = parse_flag(value).ok_or_else(invalid)?,
            "overview" => self.overview_enabled = parse_flag(value).ok_or_else(invalid)?,
            "autoplay" => {
                self.autoplay_ms = match value {
                    "off" | "false" => None,
                    ms => Some(ms.parse().map_err(|_| invalid())?),
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every override, logging and skipping the ones that don't parse.
    pub fn with_overrides<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (key, value) in pairs {
            if let Err(e) = self.apply_override(key, value) {
                log::warn!("ignoring deck override {key}={value}: {e}");
            }
        }
        self.sanitized()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
