//! Shared test utilities for the gravatar-tag test suite.
//!
//! The process-wide store is shared by every test in the binary, and the test
//! harness runs tests on parallel threads. Tests that touch the store take an
//! [`isolated_store`] guard first.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let _guard = isolated_store();
//! store::configure(|c| c.size = Some(30));
//! // ... assertions against the store ...
//! // previous configuration restored when `_guard` drops
//! ```

use std::sync::{Mutex, MutexGuard};

use crate::config::Configuration;
use crate::store;

static STORE_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the global store, reset to defaults.
///
/// Restores the configuration that was in place before on drop.
pub struct StoreGuard {
    previous: Option<Configuration>,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for StoreGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            store::set_configuration(previous);
        }
    }
}

pub fn isolated_store() -> StoreGuard {
    let lock = STORE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let previous = store::reset_configuration();
    StoreGuard {
        previous: Some(previous),
        _lock: lock,
    }
}

/// Fully populated defaults for the `mdeering@mdeering.com` fixtures.
pub fn mdeering_configuration() -> Configuration {
    Configuration {
        default_image: Some("http://mdeering.com/images/default_gravatar.png".to_string()),
        filetype: Some("gif".to_string()),
        rating: Some("x".to_string()),
        size: Some(50),
        secure: false,
        include_size_attributes: true,
    }
}

pub const EMAIL: &str = "mdeering@mdeering.com";
pub const MD5: &str = "4da9ad2bd4a2d1ce3c428e32c423588a";
pub const DEFAULT_IMAGE_ESCAPED: &str = "http%3A%2F%2Fmdeering.com%2Fimages%2Fdefault_gravatar.png";
