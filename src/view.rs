//! View-layer entry points.
//!
//! These are the two helpers templates call: one for the bare URL and one for
//! image tag attributes. The plain versions read the process-wide
//! [`store`](crate::store); the `_with` versions take the configuration
//! explicitly.
//!
//! ```
//! use gravatar_tag::options::CallOptions;
//! use gravatar_tag::view::{TagOptions, gravatar_image_tag};
//!
//! let options = TagOptions::new()
//!     .gravatar(CallOptions::new().with_size(30))
//!     .attr("class", "avatar");
//! let attrs = gravatar_image_tag(Some("mdeering@mdeering.com"), &options);
//! assert!(attrs.src().contains("size=30"));
//! assert_eq!(attrs.get("class"), Some("avatar"));
//! ```

use crate::config::Configuration;
use crate::identity::Identity;
use crate::options::{CallOptions, resolve};
use crate::store;
use crate::tag::{TagAttributes, build_tag_attributes};
use crate::url::build_url;

/// Alt text used when the caller does not provide one.
pub const DEFAULT_ALT: &str = "Gravatar";

/// Options for [`gravatar_image_tag`]: Gravatar overrides plus HTML attributes.
#[derive(Debug, Clone, Default)]
pub struct TagOptions {
    pub gravatar: CallOptions,
    pub html: Vec<(String, String)>,
}

impl TagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravatar(mut self, gravatar: CallOptions) -> Self {
        self.gravatar = gravatar;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.push((name.into(), value.into()));
        self
    }
}

pub fn gravatar_image_url(email: Option<&str>, options: &CallOptions) -> String {
    gravatar_image_url_with(&store::configuration(), email, options)
}

pub fn gravatar_image_url_with(
    config: &Configuration,
    email: Option<&str>,
    options: &CallOptions,
) -> String {
    let identity = Identity::new(email);
    build_url(&identity.hash, &resolve(options, config))
}

pub fn gravatar_image_tag(email: Option<&str>, options: &TagOptions) -> TagAttributes {
    gravatar_image_tag_with(&store::configuration(), email, options)
}

pub fn gravatar_image_tag_with(
    config: &Configuration,
    email: Option<&str>,
    options: &TagOptions,
) -> TagAttributes {
    let identity = Identity::new(email);
    let resolved = resolve(&options.gravatar, config);
    let url = build_url(&identity.hash, &resolved);
    let mut attrs = build_tag_attributes(&url, &resolved, options.html.iter().cloned());
    attrs.insert_missing("alt", DEFAULT_ALT);
    attrs
}
