//! Email normalization and the Gravatar identity hash.
//!
//! Gravatar looks avatars up by the MD5 of the email address after trimming
//! surrounding whitespace and lowercasing it
//! (<http://en.gravatar.com/site/implement/hash/>). A missing email is hashed
//! as the empty string: the provider still serves the default image for it.

use md5::{Digest, Md5};

/// A normalized email and its Gravatar hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Trimmed, lowercased email. Empty when no email was given.
    pub email: String,
    /// 32-character lowercase hex digest of `email`.
    pub hash: String,
}

impl Identity {
    pub fn new(email: Option<&str>) -> Self {
        let email = normalize_email(email);
        let hash = hash_hex(&email);
        Self { email, hash }
    }
}

/// Trim leading/trailing whitespace (spaces, tabs, newlines) and lowercase.
///
/// - `Some(" camelCaseEmail@example.com\t\n")` → `"camelcaseemail@example.com"`
/// - `None` → `""`
pub fn normalize_email(email: Option<&str>) -> String {
    email.unwrap_or_default().trim().to_lowercase()
}

/// Gravatar id for an email: hex MD5 of the normalized address.
pub fn gravatar_id(email: Option<&str>) -> String {
    hash_hex(&normalize_email(email))
}

/// Path segment after `/avatar/`: the id plus `.{filetype}` when one is set.
pub fn gravatar_path(email: Option<&str>, filetype: Option<&str>) -> String {
    path_segment(&gravatar_id(email), filetype)
}

pub(crate) fn path_segment(hash: &str, filetype: Option<&str>) -> String {
    match filetype {
        Some(ext) => format!("{}.{}", hash, ext),
        None => hash.to_string(),
    }
}

fn hash_hex(normalized: &str) -> String {
    format!("{:x}", Md5::digest(normalized.as_bytes()))
}
