//! End-to-end behavior of the view helpers against the global store.
//!
//! Mirrors how a host application uses the crate: configure once, then call
//! `gravatar_image_url` / `gravatar_image_tag` from templates.

use gravatar_tag::config::Configuration;
use gravatar_tag::deprecated::set_legacy;
use gravatar_tag::identity::gravatar_id;
use gravatar_tag::options::CallOptions;
use gravatar_tag::store;
use gravatar_tag::tag::TagAttributes;
use gravatar_tag::view::{TagOptions, gravatar_image_tag, gravatar_image_url};
use std::sync::{Mutex, MutexGuard};

const EMAIL: &str = "mdeering@mdeering.com";
const MD5: &str = "4da9ad2bd4a2d1ce3c428e32c423588a";
const DEFAULT_IMAGE: &str = "http://mdeering.com/images/default_gravatar.png";
const DEFAULT_IMAGE_ESCAPED: &str = "http%3A%2F%2Fmdeering.com%2Fimages%2Fdefault_gravatar.png";
const OTHER_IMAGE: &str = "http://mdeering.com/images/other_gravatar.png";
const OTHER_IMAGE_ESCAPED: &str = "http%3A%2F%2Fmdeering.com%2Fimages%2Fother_gravatar.png";

static STORE_LOCK: Mutex<()> = Mutex::new(());

/// Take the store lock and install the fixture configuration.
fn configured() -> MutexGuard<'static, ()> {
    let guard = STORE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    store::set_configuration(Configuration::default());
    store::configure(|c| {
        c.default_image = Some(DEFAULT_IMAGE.to_string());
        c.filetype = Some("gif".to_string());
        c.rating = Some("x".to_string());
        c.size = Some(50);
        c.secure = false;
        c.include_size_attributes = true;
    });
    guard
}

fn tag(gravatar: CallOptions) -> TagAttributes {
    gravatar_image_tag(Some(EMAIL), &TagOptions::new().gravatar(gravatar))
}

fn query_value<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

// =========================================================================
// gravatar_image_tag
// =========================================================================

#[test]
fn tag_builds_url_with_call_overrides() {
    let _guard = configured();
    let cases: Vec<(CallOptions, Vec<(&str, String)>)> = vec![
        (CallOptions::new(), vec![]),
        (CallOptions::new().with_rating("x"), vec![("rating", "x".into())]),
        (CallOptions::new().with_size(30), vec![("size", "30".into())]),
        (
            CallOptions::new().with_default_image(OTHER_IMAGE),
            vec![("default", OTHER_IMAGE_ESCAPED.into())],
        ),
        (
            CallOptions::new().with_default_image(OTHER_IMAGE).with_size(30),
            vec![("default", OTHER_IMAGE_ESCAPED.into()), ("size", "30".into())],
        ),
    ];

    for (options, expected) in cases {
        let attrs = tag(options);
        assert!(attrs.src().contains(MD5));
        for (key, value) in expected {
            assert_eq!(query_value(attrs.src(), key), Some(value.as_str()), "{key}");
        }
    }
}

#[test]
fn tag_uses_configured_defaults_unless_overridden() {
    let _guard = configured();
    let cases = [
        (CallOptions::new(), "50", DEFAULT_IMAGE_ESCAPED),
        (CallOptions::new().with_size(30), "30", DEFAULT_IMAGE_ESCAPED),
        (
            CallOptions::new().with_default_image(OTHER_IMAGE),
            "50",
            OTHER_IMAGE_ESCAPED,
        ),
        (
            CallOptions::new().with_default_image(OTHER_IMAGE).with_size(30),
            "30",
            OTHER_IMAGE_ESCAPED,
        ),
    ];

    for (options, size, default) in cases {
        let attrs = tag(options);
        assert!(attrs.src().contains(&format!("{MD5}.gif")));
        assert_eq!(query_value(attrs.src(), "size"), Some(size));
        assert_eq!(query_value(attrs.src(), "default"), Some(default));
    }
}

#[test]
fn tag_uses_insecure_host_when_secure_is_false() {
    let _guard = configured();
    let attrs = tag(CallOptions::new().with_secure(false));
    assert!(attrs.src().starts_with("http://gravatar.com/avatar/"));
}

#[test]
fn tag_uses_secure_host_when_secure_is_true() {
    let _guard = configured();
    let attrs = tag(CallOptions::new().with_secure(true));
    assert!(attrs.src().starts_with("https://secure.gravatar.com/avatar/"));
}

#[test]
fn tag_sets_width_and_height_from_configured_size() {
    let _guard = configured();
    store::configure(|c| c.size = Some(30));
    let attrs = tag(CallOptions::new());
    assert_eq!(attrs.get("height"), Some("30"));
    assert_eq!(attrs.get("width"), Some("30"));
}

#[test]
fn tag_size_attributes_default_to_80_without_size() {
    let _guard = configured();
    store::configure(|c| c.size = None);
    let attrs = tag(CallOptions::new());
    assert_eq!(attrs.get("height"), Some("80"));
    assert_eq!(attrs.get("width"), Some("80"));
    assert_eq!(query_value(attrs.src(), "size"), None);
}

#[test]
fn tag_size_attributes_follow_call_override() {
    let _guard = configured();
    store::configure(|c| c.size = Some(120));
    assert_eq!(tag(CallOptions::new().with_size(45)).get("height"), Some("45"));
    assert_eq!(tag(CallOptions::new().with_size(75)).get("width"), Some("75"));
}

#[test]
fn tag_omits_size_attributes_when_disabled() {
    let _guard = configured();
    store::configure(|c| c.include_size_attributes = false);
    let attrs = tag(CallOptions::new());
    assert!(!attrs.contains("height"));
    assert!(!attrs.contains("width"));
}

#[test]
fn missing_email_does_not_fail() {
    assert_eq!(gravatar_id(None), gravatar_id(Some("")));
}

#[test]
fn tag_normalizes_email() {
    let _guard = configured();
    let messy = gravatar_image_tag(Some(" camelCaseEmail@example.com\t\n"), &TagOptions::new());
    let clean = gravatar_image_tag(Some("camelcaseemail@example.com"), &TagOptions::new());
    assert_eq!(messy, clean);
}

#[test]
fn tag_passes_html_attributes_through() {
    let _guard = configured();
    let options = TagOptions::new().attr("class", "avatar").attr("alt", "mdeering");
    let attrs = gravatar_image_tag(Some(EMAIL), &options);
    assert_eq!(attrs.get("class"), Some("avatar"));
    assert_eq!(attrs.get("alt"), Some("mdeering"));
}

// =========================================================================
// Legacy setters
// =========================================================================

#[test]
fn legacy_setters_update_configuration() {
    let _guard = configured();
    store::set_configuration(Configuration::default());

    set_legacy("default_gravatar_image", DEFAULT_IMAGE).unwrap();
    set_legacy("default_gravatar_filetype", "gif").unwrap();
    set_legacy("default_gravatar_rating", "x").unwrap();
    set_legacy("default_gravatar_size", 50_i64).unwrap();
    set_legacy("secure_gravatar", true).unwrap();

    let config = store::configuration();
    assert_eq!(config.default_image.as_deref(), Some(DEFAULT_IMAGE));
    assert_eq!(config.filetype.as_deref(), Some("gif"));
    assert_eq!(config.rating.as_deref(), Some("x"));
    assert_eq!(config.size, Some(50));
    assert!(config.secure);
}

// =========================================================================
// gravatar_image_url
// =========================================================================

#[test]
fn url_full_example() {
    let _guard = configured();
    assert_eq!(
        gravatar_image_url(Some(EMAIL), &CallOptions::new()),
        format!("http://gravatar.com/avatar/{MD5}.gif?default={DEFAULT_IMAGE_ESCAPED}&rating=x&size=50")
    );
}

#[test]
fn url_is_gravatar_url_with_md5() {
    let _guard = configured();
    let url = gravatar_image_url(Some(EMAIL), &CallOptions::new());
    assert!(url.starts_with(&format!("http://gravatar.com/avatar/{MD5}")));
}

#[test]
fn url_sets_default_image() {
    let _guard = configured();
    let url = gravatar_image_url(Some(EMAIL), &CallOptions::new());
    assert!(url.contains(&format!("default={DEFAULT_IMAGE_ESCAPED}")));
}

#[test]
fn url_sets_filetype() {
    let _guard = configured();
    let url = gravatar_image_url(Some(EMAIL), &CallOptions::new().with_filetype("png"));
    assert!(url.starts_with(&format!("http://gravatar.com/avatar/{MD5}.png")));
}

#[test]
fn url_sets_rating() {
    let _guard = configured();
    let url = gravatar_image_url(Some(EMAIL), &CallOptions::new().with_rating("pg"));
    assert_eq!(query_value(&url, "rating"), Some("pg"));
}

#[test]
fn url_sets_size() {
    let _guard = configured();
    let url = gravatar_image_url(Some(EMAIL), &CallOptions::new().with_size(100));
    assert_eq!(query_value(&url, "size"), Some("100"));
}

#[test]
fn url_protocol_follows_secure_option() {
    let _guard = configured();
    assert!(
        gravatar_image_url(Some(EMAIL), &CallOptions::new().with_secure(false))
            .starts_with("http://gravatar.com/avatar/")
    );
    assert!(
        gravatar_image_url(Some(EMAIL), &CallOptions::new().with_secure(true))
            .starts_with("https://secure.gravatar.com/avatar/")
    );
}

#[test]
fn url_with_unset_configuration_has_no_query() {
    let _guard = configured();
    store::set_configuration(Configuration::default());
    let url = gravatar_image_url(Some(EMAIL), &CallOptions::new().with_secure(true));
    assert_eq!(url, format!("https://secure.gravatar.com/avatar/{MD5}"));
}
