//! Process-wide configuration.
//!
//! The pure builders in [`options`](crate::options), [`url`](crate::url) and
//! [`tag`](crate::tag) take a [`Configuration`] argument. This store is the
//! default instance the [`view`](crate::view) helpers read from, set once at
//! startup and read by every call after.
//!
//! Reads return a snapshot clone, so a `configure` running on another thread
//! never shows a caller a half-applied change.

use crate::config::Configuration;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

// A panicking `configure` closure poisons the lock. The record is plain data,
// so keep serving whatever it holds.
fn read() -> RwLockReadGuard<'static, Configuration> {
    CONFIGURATION.read().unwrap_or_else(|e| e.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Configuration> {
    CONFIGURATION.write().unwrap_or_else(|e| e.into_inner())
}

/// Snapshot of the current configuration.
pub fn configuration() -> Configuration {
    read().clone()
}

/// Replace the whole configuration, returning the previous one.
pub fn set_configuration(config: Configuration) -> Configuration {
    std::mem::replace(&mut *write(), config)
}

/// Mutate the configuration in place.
///
/// ```
/// gravatar_tag::store::configure(|c| {
///     c.size = Some(50);
///     c.secure = true;
/// });
/// ```
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Configuration),
{
    f(&mut write());
}

/// Restore the built-in defaults.
pub fn reset_configuration() -> Configuration {
    set_configuration(Configuration::default())
}
