//! Option resolution: per-call overrides over configured defaults.
//!
//! Each option is taken from the first tier that sets it:
//!
//! ```text
//! CallOptions  →  Configuration  →  built-in default
//! ```
//!
//! Built-in defaults leave every option unset except `secure`, which is
//! `false`. `include_size_attributes` has no per-call override and always
//! comes from the configuration.

use crate::config::Configuration;
use serde::{Deserialize, Serialize};

/// Per-call overrides. `None` defers to the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallOptions {
    /// Accepts `default` as well, the provider's own parameter name.
    #[serde(alias = "default")]
    pub default_image: Option<String>,
    pub filetype: Option<String>,
    pub rating: Option<String>,
    pub size: Option<i64>,
    pub secure: Option<bool>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_image(mut self, default_image: impl Into<String>) -> Self {
        self.default_image = Some(default_image.into());
        self
    }

    pub fn with_filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = Some(filetype.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }
}

/// The merged options one URL or tag is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub default_image: Option<String>,
    pub filetype: Option<String>,
    pub rating: Option<String>,
    pub size: Option<i64>,
    pub secure: bool,
    pub include_size_attributes: bool,
}

/// Merge call options over the configuration. No validation: a size of `0`
/// or below is passed through as given.
pub fn resolve(call: &CallOptions, config: &Configuration) -> ResolvedOptions {
    ResolvedOptions {
        default_image: call
            .default_image
            .clone()
            .or_else(|| config.default_image.clone()),
        filetype: call.filetype.clone().or_else(|| config.filetype.clone()),
        rating: call.rating.clone().or_else(|| config.rating.clone()),
        size: call.size.or(config.size),
        secure: call.secure.unwrap_or(config.secure),
        include_size_attributes: config.include_size_attributes,
    }
}
