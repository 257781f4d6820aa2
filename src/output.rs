//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.
//!
//! ## url
//!
//! ```text
//! http://gravatar.com/avatar/4da9ad2bd4a2d1ce3c428e32c423588a.gif?size=50
//! ```
//!
//! ## url --verbose
//!
//! ```text
//! Email: mdeering@mdeering.com
//! Hash: 4da9ad2bd4a2d1ce3c428e32c423588a
//! URL: http://gravatar.com/avatar/4da9ad2bd4a2d1ce3c428e32c423588a.gif?size=50
//!     default: (unset)
//!     rating: (unset)
//!     size: 50
//! ```

use crate::identity::Identity;
use crate::options::ResolvedOptions;
use crate::tag::TagAttributes;
use crate::url::query_params;

const UNSET: &str = "(unset)";

pub fn format_url_output(
    identity: &Identity,
    options: &ResolvedOptions,
    url: &str,
    verbose: bool,
) -> Vec<String> {
    if !verbose {
        return vec![url.to_string()];
    }
    let mut lines = vec![
        format!("Email: {}", identity.email),
        format!("Hash: {}", identity.hash),
        format!("URL: {}", url),
    ];
    let params = query_params(options);
    for name in ["default", "rating", "size"] {
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or(UNSET);
        lines.push(format!("    {}: {}", name, value));
    }
    lines
}

pub fn print_url_output(identity: &Identity, options: &ResolvedOptions, url: &str, verbose: bool) {
    for line in format_url_output(identity, options, url, verbose) {
        println!("{}", line);
    }
}

/// Tag attributes as pretty JSON, one line per output line.
pub fn format_tag_output(attrs: &TagAttributes) -> Result<Vec<String>, serde_json::Error> {
    let json = serde_json::to_string_pretty(attrs)?;
    Ok(json.lines().map(str::to_string).collect())
}

pub fn print_tag_output(attrs: &TagAttributes) -> Result<(), serde_json::Error> {
    for line in format_tag_output(attrs)? {
        println!("{}", line);
    }
    Ok(())
}
