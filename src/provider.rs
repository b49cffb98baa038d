//! Scoped provisioning of a shared settings store.
//!
//! The store is never a process-wide global: an application constructs one
//! [`SettingsProvider`] for the subtree that needs settings and hands out
//! [`SettingsHandle`]s to consumers. A handle used after its provider has
//! been dropped fails with [`SettingsError::ScopeMisuse`] — the programmer
//! error of reaching for settings outside the provisioned scope.

use crate::error::SettingsError;
use crate::store::SettingsStore;
use std::sync::{Arc, Weak};

/// Owns a shared [`SettingsStore`] for one application subtree.
///
/// Keep the provider alive for as long as consumers hold handles; it is the
/// scope boundary.
pub struct SettingsProvider {
    store: Arc<SettingsStore>,
}

impl SettingsProvider {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Hand out a handle for a consumer inside this provider's scope.
    pub fn handle(&self) -> SettingsHandle {
        SettingsHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Direct access for the owning scope itself.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }
}

/// A consumer's accessor to the provisioned store.
///
/// Cheap to clone and pass around; does not keep the provider alive.
#[derive(Clone)]
pub struct SettingsHandle {
    store: Weak<SettingsStore>,
}

impl SettingsHandle {
    /// Resolve the handle to the store.
    ///
    /// # Errors
    /// [`SettingsError::ScopeMisuse`] if the provider has been dropped.
    pub fn store(&self) -> Result<Arc<SettingsStore>, SettingsError> {
        self.store.upgrade().ok_or(SettingsError::ScopeMisuse)
    }
}
