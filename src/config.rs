//! Library-level Gravatar defaults.
//!
//! [`Configuration`] holds the defaults every URL and tag falls back to when a
//! call does not override them. It can be built in code, or loaded from a
//! `gravatar.toml` file layered over the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # default_image = "http://example.com/images/default_gravatar.png"
//! # filetype = "gif"
//! # rating = "pg"
//! # size = 50
//! secure = false
//! include_size_attributes = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILENAME: &str = "gravatar.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Gravatar defaults shared by every call.
///
/// `None` means "not set": the option is left out of the URL unless a call
/// supplies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Image Gravatar serves when the email has no avatar (`default=`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_image: Option<String>,
    /// Extension appended to the hash in the URL path, e.g. `gif`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// Maximum content rating (`g`, `pg`, `r`, `x`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Requested avatar size in pixels. Not validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    /// Use `https://secure.gravatar.com` instead of `http://gravatar.com`.
    pub secure: bool,
    /// Emit `width`/`height` on image tags.
    pub include_size_attributes: bool,
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Unset optional fields are absent from the table, so overlays only ever
/// add keys.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Configuration::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gravatar.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value and deserialize the result.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Configuration, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Configuration = merged.try_into()?;
    Ok(config)
}

/// Load configuration from `gravatar.toml` in the given directory, layered
/// over the stock defaults.
pub fn load_config(dir: &Path) -> Result<Configuration, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `gravatar.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gravatar Configuration
# ======================
# All settings are optional. Values shown below are the defaults; commented
# keys are unset and left out of generated URLs.
# Unknown keys will cause an error.

# Image served when the email has no Gravatar. Either a full URL or one of
# the provider keywords (404, mp, identicon, monsterid, wavatar, retro, blank).
# default_image = "http://example.com/images/default_gravatar.png"

# Extension appended to the hash in the URL path (jpg, png, gif).
# filetype = "gif"

# Highest content rating to serve (g, pg, r, x).
# rating = "pg"

# Avatar size in pixels. Gravatar serves 80px when unset.
# size = 80

# Request avatars from https://secure.gravatar.com.
secure = false

# Add width/height attributes to image tags to avoid layout shifts.
include_size_attributes = false
"##
}
