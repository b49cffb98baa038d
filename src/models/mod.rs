//! Data models for the settings store.
//!
//! This module contains the core data structures shared across the crate:
//! - [`TextScale`]: The three-step display size preference
//! - [`EngineConfig`]: A named engine credential (engine identifier + access key)
//! - [`SettingsState`]: The full in-memory snapshot held by the store
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: `TextScale` and `EngineConfig` derive `Serialize`/`Deserialize`
//!   with field names matching the durable key-value encoding
//! - **Cloneable**: `SettingsState` is wrapped in `Arc<RwLock<>>` by
//!   [`SettingsStore`](crate::store::SettingsStore) for shared access
//! - **Immutable from outside**: mutations go through the store's `set_*`
//!   operations so memory and durable storage stay in sync

pub mod settings;

pub use settings::{EngineConfig, SettingsState, TextScale};
