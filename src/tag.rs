//! Image tag attributes.
//!
//! This module does not render markup. It produces the attribute set an
//! `<img>` element should carry and leaves rendering to the host view layer.
//!
//! ## Size attributes
//!
//! With `include_size_attributes` enabled, `width` and `height` are set to the
//! resolved size so the page does not reflow while avatars load. When no size
//! was requested Gravatar serves 80px images, and the attributes say 80.

use crate::options::ResolvedOptions;
use serde::Serialize;
use std::collections::BTreeMap;

/// Edge length Gravatar serves when the URL carries no `size`.
pub const DEFAULT_AVATAR_SIZE: i64 = 80;

/// Attributes owned by the builder; caller-supplied values for these are ignored.
const RESERVED: [&str; 3] = ["src", "width", "height"];

/// Attribute name → value for one image element, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagAttributes(BTreeMap<String, String>);

impl TagAttributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn src(&self) -> &str {
        self.get("src").unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set an attribute unless it is already present.
    pub(crate) fn insert_missing(&mut self, name: &str, value: &str) {
        self.0
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
    }
}

/// Build the attribute set for an avatar image.
///
/// `extra` carries caller attributes (`class`, `alt`, ...) through unchanged.
pub fn build_tag_attributes<K, V>(
    url: &str,
    options: &ResolvedOptions,
    extra: impl IntoIterator<Item = (K, V)>,
) -> TagAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    let mut attrs: BTreeMap<String, String> = extra
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(k, _)| !RESERVED.contains(&k.as_str()))
        .collect();

    attrs.insert("src".to_string(), url.to_string());
    if options.include_size_attributes {
        let size = options.size.unwrap_or(DEFAULT_AVATAR_SIZE).to_string();
        attrs.insert("width".to_string(), size.clone());
        attrs.insert("height".to_string(), size);
    }
    TagAttributes(attrs)
}
