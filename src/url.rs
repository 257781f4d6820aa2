//! Avatar URL construction.
//!
//! ```text
//! {host}/avatar/{hash}[.{filetype}][?default=..&rating=..&size=..]
//! ```
//!
//! Gravatar serves secure and insecure requests from different hostnames.
//! Query parameters are emitted in a fixed order (`default`, `rating`,
//! `size`) so the same inputs always produce the same string; unset options
//! are left out entirely, never emitted empty.

use crate::identity::path_segment;
use crate::options::ResolvedOptions;

pub const SECURE_HOST: &str = "https://secure.gravatar.com";
pub const INSECURE_HOST: &str = "http://gravatar.com";

pub fn host(secure: bool) -> &'static str {
    if secure { SECURE_HOST } else { INSECURE_HOST }
}

/// Build the avatar URL for an identity hash.
pub fn build_url(hash: &str, options: &ResolvedOptions) -> String {
    let mut url = format!(
        "{}/avatar/{}",
        host(options.secure),
        path_segment(hash, options.filetype.as_deref())
    );
    let params = query_params(options);
    if !params.is_empty() {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

/// Ordered `(name, encoded value)` pairs for the set options.
///
/// `default` is percent-encoded as a full URL component: `:` `/` and spaces
/// are all escaped. Rating and size are emitted as given.
pub fn query_params(options: &ResolvedOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(default_image) = &options.default_image {
        params.push(("default", urlencoding::encode(default_image).into_owned()));
    }
    if let Some(rating) = &options.rating {
        params.push(("rating", urlencoding::encode(rating).into_owned()));
    }
    if let Some(size) = options.size {
        params.push(("size", size.to_string()));
    }
    params
}
