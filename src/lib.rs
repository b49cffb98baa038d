// chatprefs - Reactive client-side settings store
//
// Holds the user's display preferences and engine credentials, exposes them
// through a shared read/write interface, and mirrors durable fields to a
// local key-value backend so they survive restarts.

pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod storage;
pub mod store;
pub mod theme;

// Re-export commonly used types for convenience
pub use error::{SettingsError, StorageError};
pub use models::{EngineConfig, SettingsState, TextScale};
pub use provider::{SettingsHandle, SettingsProvider};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{ENGINE_CONFIGS_KEY, FONT_SIZE_KEY, SettingsChange, SettingsStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
