//! # Gravatar Tag
//!
//! Builds [Gravatar](https://gravatar.com) avatar URLs and `<img>` attribute
//! sets from an email address. Nothing here touches the network: the URL is
//! constructed, never fetched.
//!
//! # Pipeline
//!
//! ```text
//! email ──────────────► identity ─► hash ─┐
//!                                         ├─► url ─► https://…/avatar/{hash}.gif?…
//! CallOptions ─┐                          │            │
//!              ├─► options::resolve ──────┘            ▼
//! Configuration┘        (ResolvedOptions) ───────► tag ─► { src, width, height, … }
//! ```
//!
//! Every stage is a pure function of its arguments, so the same email, call
//! options and configuration always produce byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`identity`] | Email normalization (trim + lowercase) and the MD5 identity hash |
//! | [`config`] | The [`Configuration`](config::Configuration) record and `gravatar.toml` loading |
//! | [`store`] | Process-wide configuration: `configure`, `set_configuration`, snapshots |
//! | [`deprecated`] | Legacy setter names forwarded onto configuration fields, with warnings |
//! | [`options`] | Per-call options merged over configuration into resolved options |
//! | [`url`] | Host selection, path, and ordered query string |
//! | [`tag`] | Image attribute set with derived `width`/`height` |
//! | [`view`] | Template-facing helpers backed by the global store |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Configuration, Global Store at the Edge
//!
//! [`options::resolve`], [`url::build_url`] and [`tag::build_tag_attributes`]
//! take their configuration as an argument. Only the [`view`] helpers read
//! the process-wide [`store`], which keeps the core testable without
//! global state.
//!
//! ## Precedence
//!
//! ```text
//! per-call option  >  configuration  >  built-in default
//! ```
//!
//! Built-in defaults are all unset except `secure = false`. Whether tags get
//! `width`/`height` is decided by configuration alone.
//!
//! ## Attributes, Not Markup
//!
//! The crate stops at an attribute map. Escaping and rendering belong to the
//! host template engine, which already knows how to do both.

pub mod config;
pub mod deprecated;
pub mod identity;
pub mod options;
pub mod output;
pub mod store;
pub mod tag;
pub mod url;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
