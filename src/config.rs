//! Engine configuration: carrier names, resize tunables, and commit policy.
//!
//! Defaults suit a browser host. Hosts may override them from a JSON blob
//! ([`EngineConfig::from_json`]) or from `SCREENSTACK_*` environment
//! variables ([`EngineConfig::from_env`]).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;
use std::env::VarError;

use serde::Deserialize;

use crate::consts::{MIN_PANEL_SIZE_PX, SHARE_PARAM, SNAP_THRESHOLD_PX, STORAGE_KEY};
use crate::resize::ResizeParams;

/// What a finished resize drag does to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCommit {
    /// The pixel rectangle is a view-only overlay, dropped on the next re-render.
    #[default]
    Ephemeral,
    /// The pixel rectangle is rounded to grid lines and stored as the panel's area.
    Grid,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Persistence slot name.
    pub storage_key: String,
    /// Fragment key carrying a shared layout.
    pub share_param: String,
    /// Snap distance in pixels.
    pub snap_threshold: f64,
    /// Minimum panel width/height in pixels while resizing.
    pub min_size: f64,
    pub commit: ResizeCommit,
    /// Emit a "Layout saved" notice after every automatic persist, not only
    /// after an explicit save.
    pub autosave_notice: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            share_param: SHARE_PARAM.to_string(),
            snap_threshold: SNAP_THRESHOLD_PX,
            min_size: MIN_PANEL_SIZE_PX,
            commit: ResizeCommit::Ephemeral,
            autosave_notice: false,
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, defaulting anything unset.
    ///
    /// Optional:
    /// - `SCREENSTACK_STORAGE_KEY`: default `screenstack_layout`
    /// - `SCREENSTACK_SHARE_PARAM`: default `data`
    /// - `SCREENSTACK_SNAP_THRESHOLD`: default 10
    /// - `SCREENSTACK_MIN_SIZE`: default 200
    /// - `SCREENSTACK_RESIZE_COMMIT`: `ephemeral` (default) or `grid`
    /// - `SCREENSTACK_AUTOSAVE_NOTICE`: `true`/`false`/`1`/`0`, default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for an unparsable or non-UTF-8 value
    /// and [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let values = read_vars(|var| std::env::var(var))?;
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Build config from an arbitrary key lookup using the `SCREENSTACK_*` names.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            storage_key: lookup("SCREENSTACK_STORAGE_KEY").unwrap_or(defaults.storage_key),
            share_param: lookup("SCREENSTACK_SHARE_PARAM").unwrap_or(defaults.share_param),
            snap_threshold: parse_f64("SCREENSTACK_SNAP_THRESHOLD", lookup("SCREENSTACK_SNAP_THRESHOLD"), defaults.snap_threshold)?,
            min_size: parse_f64("SCREENSTACK_MIN_SIZE", lookup("SCREENSTACK_MIN_SIZE"), defaults.min_size)?,
            commit: parse_commit(lookup("SCREENSTACK_RESIZE_COMMIT").as_deref())?,
            autosave_notice: parse_bool("SCREENSTACK_AUTOSAVE_NOTICE", lookup("SCREENSTACK_AUTOSAVE_NOTICE"))?,
        };
        config.validate()
    }

    /// Parse a JSON object; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    /// Resize tunables for the gesture state machine.
    #[must_use]
    pub fn resize_params(&self) -> ResizeParams {
        ResizeParams { min_size: self.min_size, snap_threshold: self.snap_threshold }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if self.share_param.is_empty() || self.share_param.contains(['&', '=', '#']) {
            return Err(ConfigError::Invalid(format!("share_param {:?} is not a usable fragment key", self.share_param)));
        }
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!("snap_threshold must be >= 0 (got {})", self.snap_threshold)));
        }
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(ConfigError::Invalid(format!("min_size must be > 0 (got {})", self.min_size)));
        }
        Ok(self)
    }
}

/// Every variable [`EngineConfig::from_env`] reads.
const ENV_VARS: [&str; 6] = [
    "SCREENSTACK_STORAGE_KEY",
    "SCREENSTACK_SHARE_PARAM",
    "SCREENSTACK_SNAP_THRESHOLD",
    "SCREENSTACK_MIN_SIZE",
    "SCREENSTACK_RESIZE_COMMIT",
    "SCREENSTACK_AUTOSAVE_NOTICE",
];

/// Collect the set variables. A value that is not UTF-8 is an error, not unset.
fn read_vars(read: impl Fn(&str) -> Result<String, VarError>) -> Result<HashMap<&'static str, String>, ConfigError> {
    let mut values = HashMap::new();
    for var in ENV_VARS {
        match read(var) {
            Ok(value) => {
                values.insert(var, value);
            }
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(raw)) => {
                return Err(ConfigError::Parse { var, value: raw.to_string_lossy().into_owned() });
            }
        }
    }
    Ok(values)
}

fn parse_f64(var: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    value.trim().parse::<f64>().map_err(|_| ConfigError::Parse { var, value })
}

fn parse_bool(var: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::Parse { var, value }),
    }
}

fn parse_commit(raw: Option<&str>) -> Result<ResizeCommit, ConfigError> {
    match raw.map(str::trim).unwrap_or("ephemeral") {
        "ephemeral" => Ok(ResizeCommit::Ephemeral),
        "grid" => Ok(ResizeCommit::Grid),
        other => Err(ConfigError::Parse { var: "SCREENSTACK_RESIZE_COMMIT", value: other.to_string() }),
    }
}
