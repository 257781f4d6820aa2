//! Legacy configuration setters.
//!
//! Older releases configured the helper through five standalone settings
//! (`default_gravatar_image`, `secure_gravatar`, ...). Each still works: the
//! name is looked up in [`LEGACY_SETTERS`], a deprecation warning is logged,
//! and the call is forwarded to the matching [`Configuration`] field. The
//! resulting configuration is identical to setting the field directly.

use crate::config::Configuration;
use crate::store;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeprecatedError {
    #[error("unknown legacy setter: {0}")]
    UnknownSetter(String),
    #[error("{setting} expects {expected}")]
    TypeMismatch {
        setting: Setting,
        expected: &'static str,
    },
}

/// A configuration field that can be set by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    DefaultImage,
    Filetype,
    Rating,
    Size,
    Secure,
}

impl Setting {
    /// Field name on [`Configuration`].
    pub fn field_name(self) -> &'static str {
        match self {
            Setting::DefaultImage => "default_image",
            Setting::Filetype => "filetype",
            Setting::Rating => "rating",
            Setting::Size => "size",
            Setting::Secure => "secure",
        }
    }

    /// Write `value` into the matching field.
    pub fn apply(self, config: &mut Configuration, value: SettingValue) -> Result<(), DeprecatedError> {
        match (self, value) {
            (Setting::DefaultImage, SettingValue::Text(v)) => config.default_image = v,
            (Setting::Filetype, SettingValue::Text(v)) => config.filetype = v,
            (Setting::Rating, SettingValue::Text(v)) => config.rating = v,
            (Setting::Size, SettingValue::Integer(v)) => config.size = v,
            (Setting::Secure, SettingValue::Flag(v)) => config.secure = v,
            (setting, _) => {
                return Err(DeprecatedError::TypeMismatch {
                    setting,
                    expected: setting.expected_kind(),
                });
            }
        }
        Ok(())
    }

    fn expected_kind(self) -> &'static str {
        match self {
            Setting::DefaultImage | Setting::Filetype | Setting::Rating => "text",
            Setting::Size => "an integer",
            Setting::Secure => "a boolean",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Value handed to a setter. `None` clears an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(Option<String>),
    Integer(Option<i64>),
    Flag(bool),
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(Some(v.to_string()))
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Text(Some(v))
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Integer(Some(v))
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Flag(v)
    }
}

/// Legacy setter name → configuration field.
pub const LEGACY_SETTERS: [(&str, Setting); 5] = [
    ("default_gravatar_image", Setting::DefaultImage),
    ("default_gravatar_filetype", Setting::Filetype),
    ("default_gravatar_rating", Setting::Rating),
    ("default_gravatar_size", Setting::Size),
    ("secure_gravatar", Setting::Secure),
];

pub fn lookup(name: &str) -> Option<Setting> {
    LEGACY_SETTERS
        .iter()
        .find(|(legacy, _)| *legacy == name)
        .map(|(_, setting)| *setting)
}

/// Apply a legacy setter to an explicit configuration.
///
/// Logs one deprecation warning per call, then delegates to
/// [`Setting::apply`].
pub fn apply_legacy(
    config: &mut Configuration,
    name: &str,
    value: impl Into<SettingValue>,
) -> Result<(), DeprecatedError> {
    let setting = lookup(name).ok_or_else(|| DeprecatedError::UnknownSetter(name.to_string()))?;
    tracing::warn!(
        legacy = name,
        replacement = setting.field_name(),
        "{name} is deprecated, set `{}` through configure instead",
        setting.field_name()
    );
    setting.apply(config, value.into())
}

/// Apply a legacy setter to the process-wide configuration.
pub fn set_legacy(name: &str, value: impl Into<SettingValue>) -> Result<(), DeprecatedError> {
    let value = value.into();
    let mut result = Ok(());
    store::configure(|c| result = apply_legacy(c, name, value));
    result
}
