use thiserror::Error;

/// Errors raised while interacting with the settings store.
///
/// The hydration variants are recovered inside the store (logged, state
/// falls back to defaults) and never reach callers. Only [`ScopeMisuse`]
/// surfaces, from [`SettingsHandle::store`](crate::provider::SettingsHandle::store).
///
/// [`ScopeMisuse`]: SettingsError::ScopeMisuse
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The persisted engine-config list exists but is not valid JSON.
    #[error("failed to parse persisted engine configurations: {source}")]
    HydrationParse {
        #[from]
        source: serde_json::Error,
    },

    /// The persisted engine-config list parsed but is not an array of
    /// engine configurations.
    #[error("persisted engine configurations are not an array (found {found})")]
    HydrationShape { found: &'static str },

    /// A settings handle was used after its provider was dropped.
    #[error("settings handle used outside its provider's scope")]
    ScopeMisuse,
}

/// Errors from the durable key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode storage document: {0}")]
    Encode(#[source] serde_yaml_ng::Error),

    #[error("failed to decode storage document at {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
