// Settings store module
//
// This module provides the SettingsStore, the single source of truth for
// display and engine configuration. It wraps SettingsState with shared
// access via Arc<RwLock<T>>, mirrors every durable mutation to the
// key-value backend, and emits change events for reactive consumers.

use crate::error::SettingsError;
use crate::models::{EngineConfig, SettingsState, TextScale};
use crate::storage::KeyValueStorage;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Durable key holding the raw text-scale string.
pub const FONT_SIZE_KEY: &str = "fontSize";

/// Durable key holding the JSON-encoded engine-config list.
pub const ENGINE_CONFIGS_KEY: &str = "chatbotConfigurations";

/// Change events emitted when settings are modified
///
/// These events notify interested parties (primarily the UI layer) about
/// settings changes without requiring them to poll the store.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsChange {
    /// The text scale preference changed
    TextScaleChanged { scale: TextScale },

    /// The engine-config list was replaced
    EngineConfigsChanged { count: usize },

    /// The active engine selection changed
    ActiveConfigChanged { engine_name: Option<String> },
}

/// Shared settings store with hydration, write-through persistence, and
/// event emission
///
/// This is the central settings component that:
/// - Hydrates itself from the durable backend exactly once, at construction
/// - Provides shared access to [`SettingsState`] via `Arc<RwLock<T>>`
/// - Mirrors every durable mutation to the backend as part of the same
///   logical operation (no batching or coalescing)
/// - Emits [`SettingsChange`] events via a tokio broadcast channel
///
/// # Usage
///
/// Consumers mutate only through the `set_*` operations; mutating a
/// returned list in place would desynchronize memory from durable storage.
///
/// - [`snapshot()`](Self::snapshot) / [`read()`](Self::read) for reads
/// - [`set_text_scale()`](Self::set_text_scale),
///   [`set_engine_configs()`](Self::set_engine_configs),
///   [`set_active_config()`](Self::set_active_config) for mutations
/// - [`subscribe()`](Self::subscribe) for listening to changes
///
/// # Related Types
///
/// - [`crate::models::SettingsState`]: The underlying state structure
/// - [`crate::storage::KeyValueStorage`]: The pluggable durable backend
/// - [`crate::provider::SettingsProvider`]: Scopes the store for consumers
pub struct SettingsStore {
    /// Settings state protected by RwLock for shared access
    state: Arc<RwLock<SettingsState>>,

    /// Durable key-value backend; every persisted mutation writes through
    backend: Arc<dyn KeyValueStorage>,

    /// Broadcast channel for emitting settings change events
    change_tx: broadcast::Sender<SettingsChange>,
}

impl SettingsStore {
    /// Create a store over `backend` and hydrate it from persisted values.
    ///
    /// Hydration runs exactly once, here. Missing entries leave defaults
    /// (`medium` scale, empty list, no selection). A malformed persisted
    /// list is logged and treated as "no configuration available"; it is
    /// never propagated to the caller.
    pub fn new<B: KeyValueStorage + 'static>(backend: B) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    /// Like [`new`](Self::new), for an already-shared backend.
    pub fn with_backend(backend: Arc<dyn KeyValueStorage>) -> Self {
        let state = hydrate(backend.as_ref());

        tracing::info!(
            scale = %state.text_scale,
            configs = state.engine_configs.len(),
            active = state.active_config.is_some(),
            "Settings hydrated from durable storage"
        );

        let (change_tx, _) = broadcast::channel(64);
        Self {
            state: Arc::new(RwLock::new(state)),
            backend,
            change_tx,
        }
    }

    /// Get a read-only snapshot of the current settings
    ///
    /// This clones the entire state, so it's safe to use without holding
    /// locks. For checking individual fields, prefer `read()` with a closure.
    pub fn snapshot(&self) -> SettingsState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the settings
    ///
    /// # Example
    /// ```ignore
    /// let has_engines = store.read(|s| !s.engine_configs.is_empty());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SettingsState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Current text scale preference.
    pub fn text_scale(&self) -> TextScale {
        self.read(|s| s.text_scale)
    }

    /// Current engine-config list, cloned.
    pub fn engine_configs(&self) -> Vec<EngineConfig> {
        self.read(|s| s.engine_configs.clone())
    }

    /// Current active engine selection, cloned.
    pub fn active_config(&self) -> Option<EngineConfig> {
        self.read(|s| s.active_config.clone())
    }

    /// Subscribe to settings change events
    ///
    /// Returns a receiver that will get notified of all future changes.
    /// Multiple subscribers can listen simultaneously.
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.change_tx.subscribe()
    }

    /// Set the text scale and write it through to durable storage.
    ///
    /// A backend write failure is logged and swallowed; the in-memory
    /// update always takes effect.
    pub fn set_text_scale(&self, scale: TextScale) {
        {
            let mut state = self.state.write().unwrap();
            state.text_scale = scale;
        }

        if let Err(e) = self.backend.set(FONT_SIZE_KEY, scale.as_str()) {
            tracing::error!("Failed to persist text scale: {e}");
        }

        tracing::debug!(%scale, "Text scale updated");
        self.emit(SettingsChange::TextScaleChanged { scale });
    }

    /// Replace the engine-config list wholesale and write it through to
    /// durable storage as JSON.
    ///
    /// The active selection is left untouched; callers own keeping it
    /// consistent after a replacement. A backend write failure is logged
    /// and swallowed.
    pub fn set_engine_configs(&self, configs: Vec<EngineConfig>) {
        let count = configs.len();

        let encoded = match serde_json::to_string(&configs) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                tracing::error!("Failed to encode engine configurations: {e}");
                None
            }
        };

        {
            let mut state = self.state.write().unwrap();
            state.engine_configs = configs;
        }

        if let Some(encoded) = encoded
            && let Err(e) = self.backend.set(ENGINE_CONFIGS_KEY, &encoded)
        {
            tracing::error!("Failed to persist engine configurations: {e}");
        }

        tracing::debug!(count, "Engine configurations replaced");
        self.emit(SettingsChange::EngineConfigsChanged { count });
    }

    /// Set the active engine selection. Session-scoped: never persisted.
    ///
    /// The selection is a detached value copy; replacing the list later
    /// does not revalidate it against the new entries.
    pub fn set_active_config(&self, config: Option<EngineConfig>) {
        let engine_name = config.as_ref().map(|c| c.engine_name.clone());

        {
            let mut state = self.state.write().unwrap();
            state.active_config = config;
        }

        tracing::debug!(?engine_name, "Active engine selection updated");
        self.emit(SettingsChange::ActiveConfigChanged { engine_name });
    }

    fn emit(&self, change: SettingsChange) {
        // Ignore send errors - it's OK if no one is listening
        let _ = self.change_tx.send(change);
    }
}

// Make SettingsStore cloneable for sharing across consumers
impl Clone for SettingsStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
            change_tx: self.change_tx.clone(),
        }
    }
}

/// Load persisted values into a fresh state. Runs once per store.
fn hydrate(backend: &dyn KeyValueStorage) -> SettingsState {
    let mut state = SettingsState::default();

    match backend.get(FONT_SIZE_KEY) {
        Ok(Some(raw)) => {
            // Out-of-enum strings are dropped without comment; the default
            // stands in for them.
            if let Ok(scale) = raw.parse::<TextScale>() {
                state.text_scale = scale;
            }
        }
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to read persisted text scale: {e}"),
    }

    match backend.get(ENGINE_CONFIGS_KEY) {
        Ok(Some(raw)) => match parse_engine_configs(&raw) {
            Ok(configs) => {
                state.active_config = configs.first().cloned();
                state.engine_configs = configs;
            }
            Err(e) => tracing::error!("Failed to hydrate engine configurations: {e}"),
        },
        Ok(None) => {}
        Err(e) => tracing::error!("Failed to read persisted engine configurations: {e}"),
    }

    state
}

/// Decode the persisted engine-config list, distinguishing malformed JSON
/// from valid JSON of the wrong shape.
fn parse_engine_configs(raw: &str) -> Result<Vec<EngineConfig>, SettingsError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    if !value.is_array() {
        return Err(SettingsError::HydrationShape {
            found: json_type_name(&value),
        });
    }

    serde_json::from_value(value).map_err(|_| SettingsError::HydrationShape {
        found: "array with malformed entries",
    })
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
